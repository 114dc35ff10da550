use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

/// Log configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
  /// Log file path, if not set, logs will be printed to stdout
  pub file: Option<String>,
  /// Log level, default is "info"
  #[serde(default = "default_log_level")]
  pub level: String,
}

fn default_log_level() -> String {
  "info".to_string()
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      file: None,
      level: default_log_level(),
    }
  }
}

/// SpaceDB configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
  /// HTTP listening address
  #[serde(default = "default_server_addr")]
  pub server_addr: String,

  /// Serve the OpenAPI document at /openapi.json
  #[serde(default = "default_openapi")]
  pub openapi: bool,

  /// Log configuration
  #[serde(default)]
  pub log: LogConfig,
}

fn default_server_addr() -> String {
  "0.0.0.0:5000".to_string()
}

fn default_openapi() -> bool {
  true
}

impl Default for Config {
  fn default() -> Self {
    Self {
      server_addr: default_server_addr(),
      openapi: default_openapi(),
      log: LogConfig::default(),
    }
  }
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config file '{path}': {source}")]
  Read {
    path: String,
    #[source]
    source: std::io::Error,
  },
  #[error("failed to parse config file '{path}': {source}")]
  Parse {
    path: String,
    #[source]
    source: toml::de::Error,
  },
}

impl Config {
  /// Load configuration from TOML file
  pub fn from_file(path: &str) -> Result<Self, ConfigError> {
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_string(),
      source,
    })?;

    toml::from_str(&config_str).map_err(|source| ConfigError::Parse {
      path: path.to_string(),
      source,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  #[test]
  fn test_full_config() {
    let config_str = r#"
server_addr = "127.0.0.1:8080"
openapi = false

[log]
level = "debug"
file = "/tmp/spacedb.log"
"#;

    let config: Config = toml::from_str(config_str).unwrap();
    assert_eq!(config.server_addr, "127.0.0.1:8080");
    assert!(!config.openapi);
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.log.file.as_deref(), Some("/tmp/spacedb.log"));
  }

  #[test]
  fn test_empty_config_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.server_addr, "0.0.0.0:5000");
    assert!(config.openapi);
    assert_eq!(config.log.level, "info");
    assert!(config.log.file.is_none());
  }

  #[test]
  fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server_addr = \"127.0.0.1:0\"").unwrap();

    let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.server_addr, "127.0.0.1:0");
    assert_eq!(config.log, LogConfig::default());
  }

  #[test]
  fn test_from_file_errors() {
    let err = Config::from_file("/nonexistent/spacedb.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server_addr = [").unwrap();
    let err = Config::from_file(file.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
  }
}
