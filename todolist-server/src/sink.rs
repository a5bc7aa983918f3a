use std::io::{Stdout, Write};
use std::sync::Mutex;

/// Destinazione dello username letto dal body.
/// Ogni richiesta accettata chiama `emit` esattamente una volta.
pub trait UsernameSink: Send + Sync {
    fn emit(&self, username: Option<&str>);
}

/// Scrive una riga per ogni richiesta sul writer interno. Uno username assente viene scritto come `null`.
///
/// Un errore di scrittura (es. stdout chiuso) viene solo loggato: la richiesta risponde comunque 200.
#[derive(Debug, Default)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

/// Il sink di produzione.
pub type StdoutSink = WriterSink<Stdout>;

impl<W> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer: Mutex::new(writer) }
    }

    /// Restituisce il writer, usato nei test per leggere cosa è stato scritto.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl WriterSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> UsernameSink for WriterSink<W> {
    fn emit(&self, username: Option<&str>) {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let written = writeln!(writer, "{}", username.unwrap_or("null")).and_then(|_| writer.flush());
        if let Err(e) = written {
            tracing::warn!(error = %e, "failed to write username to sink");
        }
    }
}

/// Tiene in memoria tutte le chiamate, nell'ordine in cui arrivano.
#[derive(Debug, Default)]
pub struct MemorySink {
    emitted: Mutex<Vec<Option<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copia delle chiamate ricevute finora.
    pub fn emitted(&self) -> Vec<Option<String>> {
        // un panic in un altro thread non rende inutilizzabile il contenuto
        self.emitted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl UsernameSink for MemorySink {
    fn emit(&self, username: Option<&str>) {
        self.emitted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(username.map(str::to_owned));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn memory_sink_records_calls_in_order() {
        let sink = MemorySink::new();
        sink.emit(Some("ana"));
        sink.emit(None);
        sink.emit(Some("bruno"));
        assert_eq!(
            sink.emitted(),
            vec![Some("ana".to_string()), None, Some("bruno".to_string())]
        );
    }

    #[test]
    fn writer_sink_writes_one_line_per_call() {
        let sink = WriterSink::new(Vec::new());
        sink.emit(Some("luiz"));
        sink.emit(None);
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "luiz\nnull\n");
    }

    // Writer che fallisce sempre, come uno stdout collegato a una pipe chiusa
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn writer_sink_survives_write_errors() {
        let sink = WriterSink::new(BrokenPipe);
        sink.emit(Some("luiz"));
        sink.emit(None);
    }

    #[test]
    fn memory_sink_starts_empty() {
        assert!(MemorySink::new().emitted().is_empty());
    }
}
