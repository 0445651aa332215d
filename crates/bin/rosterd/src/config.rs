//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `roster.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Environment overrides that could not be applied. Reported by the
    /// caller once logging is up.
    #[serde(skip)]
    pub rejected: Vec<RejectedOverride>,
}

/// An environment variable whose value was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOverride {
    pub var: &'static str,
    pub value: String,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `roster.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("roster.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides looked up through `var`, so tests need not touch the
    /// process environment.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("ROSTER_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("ROSTER_PORT") {
            match val.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => self.reject("ROSTER_PORT", val),
            }
        }
        if let Some(val) = var("ROSTER_BIND") {
            let parsed = val
                .rsplit_once(':')
                .and_then(|(host, port)| Some((host.to_string(), port.parse::<u16>().ok()?)));
            match parsed {
                Some((host, port)) => {
                    self.server.host = host;
                    self.server.port = port;
                }
                None => self.reject("ROSTER_BIND", val),
            }
        }
        if let Some(val) = var("ROSTER_DATABASE_URL") {
            self.database.url = val;
        }
        if let Some(val) = var("ROSTER_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn reject(&mut self, var: &'static str, value: String) {
        self.rejected.push(RejectedOverride { var, value });
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:roster.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "rosterd=info,roster=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.url, "sqlite:roster.db?mode=rwc");
        assert_eq!(
            config.logging.filter,
            "rosterd=info,roster=info,tower_http=debug"
        );
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            url = 'sqlite:test.db'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.url, "sqlite:test.db");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 3000
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.url, "sqlite:roster.db?mode=rwc");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_apply_host_port_and_database_overrides() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("ROSTER_HOST", "127.0.0.1"),
            ("ROSTER_PORT", "9000"),
            ("ROSTER_DATABASE_URL", "sqlite::memory:"),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.database_url(), "sqlite::memory:");
    }

    #[test]
    fn should_let_bind_override_host_and_port() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("ROSTER_HOST", "10.0.0.1"),
            ("ROSTER_BIND", "127.0.0.1:7070"),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:7070");
    }

    #[test]
    fn should_ignore_and_record_unparsable_port_override() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("ROSTER_PORT", "eighty")]));
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.rejected,
            vec![RejectedOverride {
                var: "ROSTER_PORT",
                value: "eighty".to_string(),
            }]
        );
    }

    #[test]
    fn should_record_bind_override_without_port() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("ROSTER_BIND", "localhost")]));
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.rejected.len(), 1);
        assert_eq!(config.rejected[0].var, "ROSTER_BIND");
    }

    #[test]
    fn should_leave_host_untouched_when_bind_port_invalid() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("ROSTER_BIND", "127.0.0.1:http")]));
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.rejected[0].value, "127.0.0.1:http");
    }

    #[test]
    fn should_record_nothing_when_overrides_are_valid() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("ROSTER_BIND", "127.0.0.1:7070")]));
        assert!(config.rejected.is_empty());
    }

    #[test]
    fn should_prefer_rust_log_over_roster_log() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("ROSTER_LOG", "warn"), ("RUST_LOG", "trace")]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_accept_valid_port() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }
}
