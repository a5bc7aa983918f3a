use anyhow::{bail, Context};
use std::net::SocketAddr;
use std::str::FromStr;

/// Indirizzo usato se BIND_ADDR non è impostata.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Formato dei log su stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => bail!("unknown LOG_FORMAT {:?} (expected \"pretty\" or \"json\")", s),
        }
    }
}

/// Configurazione del processo letta dalle variabili d'ambiente.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Legge BIND_ADDR e LOG_FORMAT. Le variabili mancanti prendono il valore di default.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Come `from_env`, ma con una funzione di lookup esplicita (usata nei test).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        // converte la stringa in un SocketAddr (host + porta)
        let bind_addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("parse BIND_ADDR {:?}", bind))?;

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse().context("parse LOG_FORMAT")?,
            None => LogFormat::default(),
        };

        Ok(Self { bind_addr, log_format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.log_format, LogFormat::Pretty);
    }

    #[test]
    fn reads_bind_addr_and_log_format() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[
            ("BIND_ADDR", "0.0.0.0:3000"),
            ("LOG_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr.port(), 3000);
        assert!(cfg.bind_addr.ip().is_unspecified());
        assert_eq!(cfg.log_format, LogFormat::Json);
    }

    #[test]
    fn invalid_values_are_errors() {
        let err = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")])).unwrap_err();
        assert!(format!("{:#}", err).contains("BIND_ADDR"));

        let err = ServerConfig::from_lookup(lookup_from(&[("LOG_FORMAT", "xml")])).unwrap_err();
        assert!(format!("{:#}", err).contains("LOG_FORMAT"));

        // il messaggio riporta il valore così come è stato impostato
        let err = ServerConfig::from_lookup(lookup_from(&[("LOG_FORMAT", " XML ")])).unwrap_err();
        assert!(format!("{:#}", err).contains("\" XML \""));
    }
}
