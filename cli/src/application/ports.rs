//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`: never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::Result;

use crate::domain::config::ReachConfig;
use crate::domain::hostname::TunnelId;
use crate::domain::resolution::LogWindow;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: std::time::Duration,
    ) -> Result<Output>;
}

// ── Tunnel Client Port ────────────────────────────────────────────────────────

/// The tunnel client CLI (`cloudflared`).
///
/// Each call returns the command's text output. A non-zero exit or a missing
/// binary is an `Err`; callers treat both as "no hostname available".
#[allow(async_fn_in_trait)]
pub trait TunnelClient {
    /// Describe a single tunnel.
    async fn describe(&self, id: &TunnelId) -> Result<String>;
    /// List all tunnels visible to the local credentials.
    async fn list(&self) -> Result<String>;
    /// Query the DNS route bound to a tunnel.
    async fn route_dns(&self, id: &TunnelId) -> Result<String>;
}

// ── Service Supervisor Port ───────────────────────────────────────────────────

/// systemd / launchd / plain-process supervision of the tunnel client.
#[allow(async_fn_in_trait)]
pub trait ServiceSupervisor {
    /// Whether the service is currently running.
    async fn is_active(&self, service: &str) -> Result<bool>;
    /// Recent log output of the service, oldest line first.
    async fn recent_logs(&self, service: &str, window: LogWindow) -> Result<String>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Read-only access to the tunnel client's files.
#[allow(async_fn_in_trait)]
pub trait TunnelFiles {
    /// Credential files (`*.json`) in `dir`, sorted by file name.
    ///
    /// A missing directory yields an empty list.
    async fn credential_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;
    /// Read a UTF-8 file.
    async fn read_to_string(&self, path: &Path) -> Result<String>;
}

// ── Account Port ──────────────────────────────────────────────────────────────

/// Local user account lookup, used for advisory checks only.
#[allow(async_fn_in_trait)]
pub trait AccountDirectory {
    async fn user_exists(&self, name: &str) -> Result<bool>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait: no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading and persisting `ReachConfig`.
pub trait ConfigStore {
    /// Load the config, returning defaults when the file does not exist.
    fn load(&self) -> Result<ReachConfig>;
    /// Persist the config.
    fn save(&self, config: &ReachConfig) -> Result<()>;
    /// Location of the config file.
    fn path(&self) -> Result<PathBuf>;
}
