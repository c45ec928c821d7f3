//! Demo configuration.
//!
//! Every field has a default, so an empty file (or no file at all) is a valid
//! configuration:
//!
//! ```toml
//! [log]
//! filter = "debug"
//!
//! [gui]
//! platform = "mac"
//!
//! [social]
//! greeting = "Hello from John"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::creational::abstract_factory::Platform;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PATTERNS_CONFIG";

/// File picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "patterns.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub log: LogConfig,
    pub gui: GuiConfig,
    pub social: SocialConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuiConfig {
    pub platform: Platform,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialConfig {
    pub greeting: String,
}

impl Default for SocialConfig {
    fn default() -> Self {
        SocialConfig {
            greeting: "Hello from John".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&content)
    }

    /// `$PATTERNS_CONFIG`, then `./patterns.toml`, then defaults.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = env::var_os(CONFIG_ENV_VAR) {
            return Self::load_from(Path::new(&path));
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load_from(local);
        }

        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log.filter, "warn");
        assert_eq!(config.gui.platform, Platform::Windows);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str("[gui]\nplatform = \"mac\"\n").unwrap();
        assert_eq!(config.gui.platform, Platform::Mac);
        assert_eq!(config.social, SocialConfig::default());
    }

    #[test]
    fn test_unknown_platform_is_rejected() {
        let err = Config::from_toml_str("[gui]\nplatform = \"amiga\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(Config::from_toml_str("[log]\nlevel = \"info\"\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[log]\nfilter = \"debug\"\n\n[social]\ngreeting = \"Hi\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.log.filter, "debug");
        assert_eq!(config.social.greeting, "Hi");
    }

    /// The only test touching the process environment, so nothing races on it.
    #[test]
    fn test_load_prefers_env_var() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[gui]\nplatform = \"mac\"\n\n[social]\ngreeting = \"From env\"").unwrap();

        env::set_var(CONFIG_ENV_VAR, file.path());
        let from_env = Config::load();
        env::set_var(CONFIG_ENV_VAR, file.path().with_extension("missing"));
        let broken_env = Config::load();
        env::remove_var(CONFIG_ENV_VAR);
        let fallback = Config::load();

        let from_env = from_env.unwrap();
        assert_eq!(from_env.gui.platform, Platform::Mac);
        assert_eq!(from_env.social.greeting, "From env");

        // An explicit path that can't be read is an error, not a silent fallback.
        assert!(matches!(broken_env, Err(ConfigError::Io { .. })));

        if !Path::new(DEFAULT_CONFIG_FILE).exists() {
            assert_eq!(fallback.unwrap(), Config::default());
        }
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        match Config::load_from(&path) {
            Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
