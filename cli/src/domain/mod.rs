//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod connection;
pub mod error;
pub mod hostname;
pub mod platform;
pub mod resolution;

pub use config::{ReachConfig, validate_config_key, validate_config_value};
pub use connection::ConnectionInfo;
pub use error::{ConfigError, ResolutionError, ValidationError};
pub use hostname::{Hostname, HostnameMatcher, MatchPick, TunnelId, validate};
pub use resolution::{DiscoveryAttempt, LogWindow, Outcome, ResolutionContext};
