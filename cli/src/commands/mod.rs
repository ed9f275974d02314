//! Command implementations

pub mod config;
pub mod info;
pub mod status;
pub mod version;

use std::path::Path;

use anyhow::{Context, Result};
use reach_common::Platform;

use crate::application::services::context::ContextInputs;
use crate::domain::config::ReachConfig;
use crate::domain::platform::{self, DOCKERENV_MARKER};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::supervisor::PlatformSupervisor;

/// Environment variable naming the tunnel to resolve.
pub const TUNNEL_ID_ENV: &str = "TUNNEL_ID";

/// Environment variable carrying a hostname handed in by the container host.
pub const TUNNEL_HOSTNAME_ENV: &str = "TUNNEL_HOSTNAME";

/// Collect the process environment the resolution context is built from.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn context_inputs(
    platform_flag: Option<Platform>,
    tunnel_flag: Option<String>,
) -> Result<ContextInputs> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(ContextInputs {
        detected_platform: platform::detect(
            std::env::consts::OS,
            Path::new(DOCKERENV_MARKER).exists(),
        ),
        platform_flag,
        tunnel_flag,
        tunnel_env: std::env::var(TUNNEL_ID_ENV).ok(),
        hostname_env: std::env::var(TUNNEL_HOSTNAME_ENV).ok(),
        home,
    })
}

/// Service supervisor for `platform`, reading `tunnel.log_file` when set.
#[must_use]
pub fn supervisor(platform: Platform, config: &ReachConfig) -> PlatformSupervisor<TokioCommandRunner> {
    let supervisor = PlatformSupervisor::new(platform, TokioCommandRunner::default());
    match &config.tunnel.log_file {
        Some(path) => supervisor.with_log_file(path),
        None => supervisor,
    }
}
