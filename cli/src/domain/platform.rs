//! Platform detection and per-platform well-known paths.

use std::path::{Path, PathBuf};

use reach_common::Platform;

/// Marker file Docker creates at the container root.
pub const DOCKERENV_MARKER: &str = "/.dockerenv";

/// Picks the platform from the compile-target OS and whether the process
/// runs inside a container.
#[must_use]
pub fn detect(os: &str, in_container: bool) -> Platform {
    if in_container {
        Platform::Docker
    } else if os == "macos" {
        Platform::Macos
    } else {
        Platform::Linux
    }
}

/// Directory holding tunnel credential files.
#[must_use]
pub fn credentials_dir(platform: Platform, home: &Path) -> PathBuf {
    match platform {
        Platform::Macos => home.join(".cloudflared"),
        Platform::Linux | Platform::Docker => PathBuf::from("/etc/cloudflared"),
    }
}

/// Tunnel client config file that names the tunnel (`tunnel: <id>`).
#[must_use]
pub fn tunnel_config_file(platform: Platform, home: &Path) -> PathBuf {
    credentials_dir(platform, home).join("config.yml")
}
