use std::net::SocketAddr;
use std::path::PathBuf;

use cosmic_core::error::{CosmicError, Result};

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_CONTENT_ROOT: &str = "content";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub content_root: PathBuf,
    pub bind: SocketAddr,
}

impl ServerConfig {
    /// `COSMIC_CONTENT_ROOT` and `COSMIC_BIND`, each with a default.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let content_root = PathBuf::from(
            lookup("COSMIC_CONTENT_ROOT")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CONTENT_ROOT.to_string()),
        );
        let bind_raw = lookup("COSMIC_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| CosmicError::Format(format!("COSMIC_BIND {bind_raw:?}: {e}")))?;
        Ok(Self { content_root, bind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults() {
        let c = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(c.content_root, PathBuf::from("content"));
        assert_eq!(c.bind, "127.0.0.1:3000".parse().unwrap());
    }

    #[test]
    fn overrides() {
        let c = ServerConfig::from_lookup(lookup(&[
            ("COSMIC_CONTENT_ROOT", "/srv/study"),
            ("COSMIC_BIND", "0.0.0.0:8080"),
        ]))
        .unwrap();
        assert_eq!(c.content_root, PathBuf::from("/srv/study"));
        assert_eq!(c.bind.port(), 8080);
    }

    #[test]
    fn bad_bind_is_an_error() {
        assert!(ServerConfig::from_lookup(lookup(&[("COSMIC_BIND", "localhost")])).is_err());
    }
}
