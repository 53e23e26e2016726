//! core::config
//!
//! Configuration schema and loading.
//!
//! # Identity Resolution
//!
//! The engine never reads configuration. The CLI resolves a complete
//! [`Identity`] up front, in this order (earlier wins):
//!
//! | value    | 1. CLI flag | 2. config file | 3. fallback                    |
//! |----------|-------------|----------------|--------------------------------|
//! | user     | `--user`    | `username`     | `$USER`, then `marvin`         |
//! | email    | `--email`   | `email`        | `<user>@student.42.fr`         |
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$STDHEADER_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/stdheader/config.toml`
//! 3. `~/.stdheader/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use stdheader::core::config::Config;
//!
//! let result = Config::load().unwrap();
//! let identity = result.config.identity(None, None).unwrap();
//! println!("Headers will be signed by {} <{}>", identity.user, identity.email);
//! ```

pub mod schema;

pub use schema::GlobalConfig;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::header::Identity;

/// User name used when nothing else is configured.
pub const DEFAULT_USER: &str = "marvin";

/// Domain of the derived default email.
pub const DEFAULT_EMAIL_DOMAIN: &str = "student.42.fr";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// User configuration
    pub global: GlobalConfig,
    /// Path to the config file (if loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// holds invalid values. A missing file is not an error.
    pub fn load() -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        if let Ok(path) = std::env::var("STDHEADER_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Ok(ConfigLoadResult {
                    config: Self::load_from(&path)?,
                    warnings,
                });
            }
            warnings.push(ConfigWarning {
                message: "STDHEADER_CONFIG points to a missing file; ignoring it".to_string(),
                path,
            });
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("stdheader/config.toml");
            if path.exists() {
                return Ok(ConfigLoadResult {
                    config: Self::load_from(&path)?,
                    warnings,
                });
            }
        }

        if let Some(home) = dirs::home_dir() {
            let path = home.join(".stdheader/config.toml");
            if path.exists() {
                return Ok(ConfigLoadResult {
                    config: Self::load_from(&path)?,
                    warnings,
                });
            }
        }

        Ok(ConfigLoadResult {
            config: Config::default(),
            warnings,
        })
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let global: GlobalConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        global.validate()?;

        Ok(Config {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// Get the canonical config path, `~/.stdheader/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".stdheader/config.toml"))
    }

    /// Where `config set` writes: the loaded file, or the canonical path.
    pub fn write_target(&self) -> Result<PathBuf, ConfigError> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Self::global_config_path(),
        }
    }

    /// Write config atomically.
    ///
    /// Creates parent directories if needed, writes to a temp file, then
    /// renames it over the target.
    pub fn write(path: &Path, config: &GlobalConfig) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// Resolve the operator identity.
    ///
    /// Overrides come from CLI flags and win over the config file. The
    /// fallbacks read `$USER`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if an override is invalid.
    pub fn identity(
        &self,
        user_override: Option<&str>,
        email_override: Option<&str>,
    ) -> Result<Identity, ConfigError> {
        let env_user = std::env::var("USER").ok();
        self.resolve_identity(user_override, email_override, env_user.as_deref())
    }

    fn resolve_identity(
        &self,
        user_override: Option<&str>,
        email_override: Option<&str>,
        env_user: Option<&str>,
    ) -> Result<Identity, ConfigError> {
        let user = match user_override.or(self.global.username.as_deref()) {
            Some(user) => user.to_string(),
            None => env_user
                .filter(|u| schema::validate_username(u).is_ok())
                .unwrap_or(DEFAULT_USER)
                .to_string(),
        };
        schema::validate_username(&user)?;

        let email = match email_override.or(self.global.email.as_deref()) {
            Some(email) => email.to_string(),
            None => format!("{}@{}", user, DEFAULT_EMAIL_DOMAIN),
        };
        schema::validate_email(&email)?;

        Ok(Identity::new(user, email))
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
