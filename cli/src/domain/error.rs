//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

use crate::domain::resolution::DiscoveryAttempt;

// ── Resolution errors ─────────────────────────────────────────────────────────

/// Terminal failure of hostname discovery.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error(
        "Could not determine the tunnel hostname after trying {} strategies.\n\n\
         Make sure the tunnel is running (e.g. 'systemctl status cloudflared'), \
         wait a few seconds, then retry.",
        strategies_tried(.attempts)
    )]
    AllStrategiesExhausted { attempts: Vec<DiscoveryAttempt> },
}

fn strategies_tried(attempts: &[DiscoveryAttempt]) -> usize {
    let mut names: Vec<&str> = attempts.iter().map(|a| a.strategy).collect();
    names.dedup();
    names.len()
}

// ── Validation errors ─────────────────────────────────────────────────────────

/// Malformed hostname or username. Indicates bad data, not a timing issue.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid hostname '{0}': expected <label>.<domain> using a-z, 0-9 and '-'")]
    InvalidHostname(String),

    #[error("Username must not be empty")]
    EmptyUsername,
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nValid values: {valid}")]
    InvalidValue {
        key: String,
        value: String,
        valid: String,
    },
}
