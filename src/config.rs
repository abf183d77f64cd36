//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before any container is raced.

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_DATA_FILE, DEFAULT_LOG_FILTER, DEFAULT_MARKER, DEFAULT_ROUNDS, env_vars,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub race: RaceConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Race configuration
#[derive(Debug, Clone)]
pub struct RaceConfig {
    /// Line-oriented source read into every container
    pub data_file: PathBuf,
    /// Value inserted at the midpoint of every container
    pub marker: String,
    /// Number of complete Load/Sort/Insert/Delete runs
    pub rounds: u32,
}

/// Report output configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Optional file receiving a JSON export of every round
    pub json_path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            race: RaceConfig::from_lookup(&lookup)?,
            output: OutputConfig::from_lookup(&lookup),
            logging: LoggingConfig::from_lookup(&lookup),
        })
    }
}

impl RaceConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let marker = lookup(env_vars::MARKER).unwrap_or_else(|| DEFAULT_MARKER.to_string());
        if marker.is_empty() {
            return Err(ConfigError::InvalidValue(env_vars::MARKER.to_string()));
        }

        let rounds = match lookup(env_vars::ROUNDS) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|rounds| *rounds > 0)
                .ok_or_else(|| ConfigError::InvalidValue(env_vars::ROUNDS.to_string()))?,
            None => DEFAULT_ROUNDS,
        };

        Ok(Self {
            data_file: PathBuf::from(
                lookup(env_vars::DATA_FILE).unwrap_or_else(|| DEFAULT_DATA_FILE.to_string()),
            ),
            marker,
            rounds,
        })
    }
}

impl OutputConfig {
    fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            json_path: lookup(env_vars::JSON_OUTPUT)
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

impl LoggingConfig {
    fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            rust_log: lookup(env_vars::RUST_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.race.data_file, PathBuf::from("codes.txt"));
        assert_eq!(config.race.marker, "TESTCODE");
        assert_eq!(config.race.rounds, 1);
        assert!(config.output.json_path.is_none());
        assert_eq!(config.logging.rust_log, "info");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATA_FILE", "/tmp/lines.txt"),
            ("RACE_MARKER", "ZZZ"),
            ("RACE_ROUNDS", " 3 "),
            ("RACE_JSON_OUTPUT", "race.json"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.race.data_file, PathBuf::from("/tmp/lines.txt"));
        assert_eq!(config.race.marker, "ZZZ");
        assert_eq!(config.race.rounds, 3);
        assert_eq!(config.output.json_path, Some(PathBuf::from("race.json")));
        assert_eq!(config.logging.rust_log, "debug");
    }

    #[test]
    fn test_invalid_rounds() {
        for raw in ["0", "-2", "many"] {
            let err = Config::from_lookup(lookup_from(&[("RACE_ROUNDS", raw)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue(ref var) if var == "RACE_ROUNDS"));
        }
    }

    #[test]
    fn test_empty_marker_rejected() {
        let err = Config::from_lookup(lookup_from(&[("RACE_MARKER", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var) if var == "RACE_MARKER"));
    }

    #[test]
    fn test_blank_json_path_ignored() {
        let config = Config::from_lookup(lookup_from(&[("RACE_JSON_OUTPUT", "  ")])).unwrap();
        assert!(config.output.json_path.is_none());
    }
}
