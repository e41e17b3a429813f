//! Optional TOML configuration.

use crate::app::AppKind;
use serde::Deserialize;
use std::path::Path;

/// Errors that can occur when loading configuration.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ConfigError {
    /// The config file could not be read.
    #[display("cannot read config file: {_0}")]
    Io(std::io::Error),
    /// The config file is not valid TOML for this schema.
    #[display("invalid config: {_0}")]
    Parse(toml::de::Error),
}

/// TUI configuration. Every field has a default so the file is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Delay before the bot moves, in milliseconds.
    pub bot_delay_ms: u64,
    /// App to open on startup instead of the home screen.
    pub start_app: Option<AppKind>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_delay_ms: 2_000,
            start_app: None,
        }
    }
}

/// Loads configuration from `path`, or the defaults when no path is
/// given.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&text)?)
        }
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_a_file() {
        let config = load(None).unwrap();
        assert_eq!(config.bot_delay_ms, 2_000);
        assert_eq!(config.start_app, None);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bot_delay_ms = 250").unwrap();
        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.bot_delay_ms, 250);
        assert_eq!(config.start_app, None);
    }

    #[test]
    fn test_start_app_parses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "start_app = \"tic-tac-toe\"").unwrap();
        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.start_app, Some(AppKind::TicTacToe));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bot_dely_ms = 250").unwrap();
        assert!(matches!(
            load(Some(file.path())),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        assert!(matches!(
            load(Some(Path::new("/nonexistent/pocket.toml"))),
            Err(ConfigError::Io(_))
        ));
    }
}
