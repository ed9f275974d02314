//! JSON output helpers.
//!
//! Provides the error-object formatter used by `--json` code paths when a
//! command fails, and a pretty printer for success payloads.

use anyhow::{Context, Result};
use serde::Serialize;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Pretty-print any serializable payload.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn to_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("JSON serialization failed")
}

/// Stable machine-readable code for a command failure.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    use crate::domain::error::{ConfigError, ResolutionError, ValidationError};

    if err.downcast_ref::<ResolutionError>().is_some() {
        "RESOLUTION_EXHAUSTED"
    } else if err.downcast_ref::<ValidationError>().is_some() {
        "VALIDATION_FAILED"
    } else if err.downcast_ref::<ConfigError>().is_some() {
        "CONFIG_INVALID"
    } else {
        "ERROR"
    }
}
