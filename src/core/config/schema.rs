//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order:
//! 1. `$STDHEADER_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/stdheader/config.toml`
//! 3. `~/.stdheader/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Values are validated after parsing so that a bad user name or email is
//! reported when the config loads, not when a header is half written.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// User configuration.
///
/// # Example
///
/// ```toml
/// username = "jdoe"
/// email = "jdoe@student.42.fr"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// User name written on the `by` fields
    pub username: Option<String>,

    /// Email shown on the `By:` row
    pub email: Option<String>,
}

impl GlobalConfig {
    /// Keys accepted by `config get` / `config set`.
    pub const KEYS: &'static [&'static str] = &["username", "email"];

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(username) = &self.username {
            validate_username(username)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Result<Option<&str>, ConfigError> {
        match key {
            "username" => Ok(self.username.as_deref()),
            "email" => Ok(self.email.as_deref()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a value by key, validating it first.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "username" => {
                validate_username(value)?;
                self.username = Some(value.to_string());
            }
            "email" => {
                validate_email(value)?;
                self.email = Some(value.to_string());
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::InvalidValue(format!(
        "unknown key '{}', must be one of: {}",
        key,
        GlobalConfig::KEYS.join(", ")
    ))
}

/// A user name is non-empty and free of whitespace and angle brackets.
pub fn validate_username(username: &str) -> Result<(), ConfigError> {
    if username.is_empty() {
        return Err(ConfigError::InvalidValue(
            "username cannot be empty".to_string(),
        ));
    }
    if username
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || c == '<' || c == '>')
    {
        return Err(ConfigError::InvalidValue(format!(
            "invalid username '{}': no spaces or angle brackets allowed",
            username
        )));
    }
    Ok(())
}

/// An email contains `@` and no whitespace or angle brackets.
pub fn validate_email(email: &str) -> Result<(), ConfigError> {
    let well_formed = email.contains('@')
        && !email
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '<' || c == '>');
    if !well_formed {
        return Err(ConfigError::InvalidValue(format!(
            "invalid email '{}'",
            email
        )));
    }
    Ok(())
}
