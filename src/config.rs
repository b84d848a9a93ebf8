use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Symptom Checker";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variables read by `AppConfig::from_env`.
pub const ENV_ADDR: &str = "SYMPTOM_CHECKER_ADDR";
pub const ENV_KNOWLEDGE_BASE: &str = "SYMPTOM_CHECKER_KNOWLEDGE_BASE";
pub const ENV_MAX_MESSAGE_CHARS: &str = "SYMPTOM_CHECKER_MAX_MESSAGE_CHARS";

const DEFAULT_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 5000);
const DEFAULT_MAX_MESSAGE_CHARS: usize = 2_000;

/// Filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "symptom_checker_lib=info,symptom_checker=info"
}

/// Per-user config directory, e.g. `~/.config/symptom-checker/` on Linux.
pub fn app_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("symptom-checker"))
}

/// Knowledge base picked up without any environment override.
pub fn default_knowledge_base_path() -> Option<PathBuf> {
    app_config_dir().map(|dir| dir.join("knowledge_base.json"))
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {name}: {value:?} ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings for the service.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// `None` means the built-in table.
    pub knowledge_base_path: Option<PathBuf>,
    pub max_message_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_ADDR,
            knowledge_base_path: None,
            max_message_chars: DEFAULT_MAX_MESSAGE_CHARS,
        }
    }
}

impl AppConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup(ENV_ADDR) {
            None => DEFAULT_ADDR,
            Some(addr) => addr
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidValue {
                    name: ENV_ADDR,
                    value: addr.clone(),
                    reason: e.to_string(),
                })?,
        };

        let knowledge_base_path = match lookup(ENV_KNOWLEDGE_BASE) {
            Some(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
            _ => default_knowledge_base_path().filter(|path| path.is_file()),
        };

        let max_message_chars = match lookup(ENV_MAX_MESSAGE_CHARS) {
            None => DEFAULT_MAX_MESSAGE_CHARS,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidValue {
                        name: ENV_MAX_MESSAGE_CHARS,
                        value: raw,
                        reason: "must be greater than zero".into(),
                    })
                }
                Ok(n) => n,
                Err(e) => {
                    return Err(ConfigError::InvalidValue {
                        name: ENV_MAX_MESSAGE_CHARS,
                        value: raw,
                        reason: e.to_string(),
                    })
                }
            },
        };

        Ok(Self {
            bind_addr,
            knowledge_base_path,
            max_message_chars,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:5000".parse().unwrap());
        assert_eq!(config.bind_addr, AppConfig::default().bind_addr);
        assert_eq!(config.max_message_chars, 2_000);
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_ADDR, "127.0.0.1:8080"),
            (ENV_KNOWLEDGE_BASE, "/tmp/kb.json"),
            (ENV_MAX_MESSAGE_CHARS, "500"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.knowledge_base_path, Some(PathBuf::from("/tmp/kb.json")));
        assert_eq!(config.max_message_chars, 500);
    }

    #[test]
    fn rejects_bad_address() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_ADDR, "not-an-addr")])).unwrap_err();
        assert!(err.to_string().contains(ENV_ADDR));
    }

    #[test]
    fn rejects_zero_or_garbage_length() {
        assert!(AppConfig::from_lookup(lookup_from(&[(ENV_MAX_MESSAGE_CHARS, "0")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[(ENV_MAX_MESSAGE_CHARS, "lots")])).is_err());
    }

    #[test]
    fn default_knowledge_base_under_config_dir() {
        if let (Some(path), Some(dir)) = (default_knowledge_base_path(), app_config_dir()) {
            assert!(path.starts_with(dir));
            assert!(path.ends_with("knowledge_base.json"));
        }
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
