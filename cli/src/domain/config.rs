//! Domain types and validators for reach configuration.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use anyhow::Result;
use reach_common::Platform;
use serde::{Deserialize, Serialize};

use crate::domain::connection::{DEFAULT_HOST_ALIAS, DEFAULT_USER};
use crate::domain::error::ConfigError;
use crate::domain::resolution::DEFAULT_MAX_ATTEMPTS;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &[
    "platform",
    "tunnel.id",
    "tunnel.service",
    "tunnel.custom_domain",
    "tunnel.log_file",
    "resolve.attempts",
    "resolve.delay_secs",
    "connection.user",
    "connection.host_alias",
];
pub const VALID_PLATFORMS: &[&str] = &["linux", "macos", "docker"];
pub const MAX_ATTEMPTS_LIMIT: u32 = 20;
pub const MAX_DELAY_SECS: u64 = 60;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.reach/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReachConfig {
    /// Platform override; auto-detected when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    pub tunnel: TunnelConfig,
    pub resolve: ResolveConfig,
    pub connection: ConnectionConfig,
}

/// Tunnel settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TunnelConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_domain: Option<String>,
    /// Log file scraped on platforms without a log service (containers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

/// Retry settings for the polling strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    pub attempts: u32,
    pub delay_secs: u64,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_MAX_ATTEMPTS,
            delay_secs: 2,
        }
    }
}

/// Output settings for the SSH stanza.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    pub user: String,
    pub host_alias: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            host_alias: DEFAULT_HOST_ALIAS.to_string(),
        }
    }
}

impl ReachConfig {
    /// Applies a validated `key = value` pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        let opt = || (!value.is_empty()).then(|| value.to_string());
        match key {
            "platform" => self.platform = value.parse().ok(),
            "tunnel.id" => self.tunnel.id = opt(),
            "tunnel.service" => self.tunnel.service = opt(),
            "tunnel.custom_domain" => self.tunnel.custom_domain = opt(),
            "tunnel.log_file" => self.tunnel.log_file = opt(),
            "resolve.attempts" => self.resolve.attempts = value.parse()?,
            "resolve.delay_secs" => self.resolve.delay_secs = value.parse()?,
            "connection.user" => self.connection.user = value.to_string(),
            "connection.host_alias" => self.connection.host_alias = value.to_string(),
            _ => anyhow::bail!("Unknown setting: {key}"),
        }
        Ok(())
    }

    /// Current value of `key` in the form `set` accepts, `None` when unset.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "platform" => self.platform.map(|p| p.as_str().to_string()),
            "tunnel.id" => self.tunnel.id.clone(),
            "tunnel.service" => self.tunnel.service.clone(),
            "tunnel.custom_domain" => self.tunnel.custom_domain.clone(),
            "tunnel.log_file" => self.tunnel.log_file.clone(),
            "resolve.attempts" => Some(self.resolve.attempts.to_string()),
            "resolve.delay_secs" => Some(self.resolve.delay_secs.to_string()),
            "connection.user" => Some(self.connection.user.clone()),
            "connection.host_alias" => Some(self.connection.host_alias.clone()),
            _ => None,
        }
    }

    /// Applies the `set` value rules to every key, for files edited by hand.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<()> {
        for key in VALID_CONFIG_KEYS {
            if let Some(value) = self.get(key) {
                validate_config_value(key, &value)?;
            }
        }
        Ok(())
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// Optional tunnel keys accept an empty value, which clears them.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let invalid = |valid: String| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        valid,
    };
    match key {
        "platform" if !VALID_PLATFORMS.contains(&value) => {
            Err(invalid(VALID_PLATFORMS.join(", ")).into())
        }
        "resolve.attempts" => match value.parse::<u32>() {
            Ok(n) if (1..=MAX_ATTEMPTS_LIMIT).contains(&n) => Ok(()),
            _ => Err(invalid(format!("1..={MAX_ATTEMPTS_LIMIT}")).into()),
        },
        "resolve.delay_secs" => match value.parse::<u64>() {
            Ok(n) if n <= MAX_DELAY_SECS => Ok(()),
            _ => Err(invalid(format!("0..={MAX_DELAY_SECS}")).into()),
        },
        "connection.user" | "connection.host_alias" if !is_ssh_token(value) => {
            Err(invalid("non-empty, no whitespace".to_string()).into())
        }
        "tunnel.custom_domain" if !value.is_empty() && !is_domain(value) => {
            Err(invalid("a lowercase domain such as example.com".to_string()).into())
        }
        _ => Ok(()),
    }
}

fn is_ssh_token(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(char::is_whitespace)
}

fn is_domain(value: &str) -> bool {
    value.contains('.')
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-')
}

// ── Unit tests ───────────────────────────────────────────────────────────────
