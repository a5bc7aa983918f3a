use std::sync::Arc;

pub mod config;
pub mod controllers;
pub mod routes;
pub mod sink;
pub mod telemetry;

pub use config::{LogFormat, ServerConfig};
pub use sink::{MemorySink, StdoutSink, UsernameSink, WriterSink};

/// Stato condiviso tra gli handler, passato con `Extension<Arc<AppState>>`.
#[derive(Clone)]
pub struct AppState {
    /// Dove finisce lo username ricevuto da POST /user/.
    pub sink: Arc<dyn UsernameSink>,
}

impl AppState {
    pub fn new(sink: Arc<dyn UsernameSink>) -> Self {
        Self { sink }
    }

    /// Stato di produzione: lo username viene stampato su stdout.
    pub fn stdout() -> Self {
        Self::new(Arc::new(StdoutSink::stdout()))
    }
}
