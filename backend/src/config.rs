//! Server configuration loaded from the environment.
//!
//! | Env | Default | Description |
//! |-----|---------|-------------|
//! | ROSTER_HOST | 127.0.0.1 | Interface to bind. |
//! | ROSTER_PORT | 8080 | Port to bind. |
//! | ROSTER_DB_PATH | roster.sqlite | SQLite file backing `/api/students`. |
//! | ROSTER_OPEN_BROWSER | true | Open the dashboard in the default browser on start. |

use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_PATH: &str = "roster.sqlite";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable lookup. Unparseable values
    /// fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            host: var("ROSTER_HOST").unwrap_or(defaults.host),
            port: var("ROSTER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            db_path: var("ROSTER_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            open_browser: var("ROSTER_OPEN_BROWSER")
                .map(|v| parse_bool(&v, defaults.open_browser))
                .unwrap_or(defaults.open_browser),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str, default: bool) -> bool {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(config_from(&[]), ServerConfig::default());
        assert_eq!(ServerConfig::default().url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("ROSTER_HOST", "0.0.0.0"),
            ("ROSTER_PORT", "9000"),
            ("ROSTER_DB_PATH", "/tmp/r.sqlite"),
            ("ROSTER_OPEN_BROWSER", "off"),
        ]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.db_path, PathBuf::from("/tmp/r.sqlite"));
        assert!(!config.open_browser);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_from(&[("ROSTER_PORT", "http"), ("ROSTER_OPEN_BROWSER", "maybe")]);
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
    }
}
