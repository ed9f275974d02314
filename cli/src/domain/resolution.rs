//! Value types describing a hostname resolution run.
//!
//! Pure data only. The resolver in `application::services::resolve` consumes
//! these; nothing here touches the process environment or the filesystem.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use reach_common::Platform;

use crate::domain::hostname::{Hostname, HostnameMatcher, TunnelId};

// ── Constants ────────────────────────────────────────────────────────────────

/// Default attempts for strategies that poll a tunnel that may not be ready.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Default pause between polling attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Journal / log-file lines inspected by the log scrape.
pub const LOG_TAIL_LINES: u32 = 200;

/// Unified-log lookback on macOS.
pub const LOG_LOOKBACK: Duration = Duration::from_secs(60 * 60);

/// Service name used when none is configured.
pub const DEFAULT_SERVICE: &str = "cloudflared";

/// launchd label cloudflared installs itself under.
pub const LAUNCHD_LABEL: &str = "com.cloudflare.cloudflared";

// ── Discovery trail ──────────────────────────────────────────────────────────

/// Result of running one strategy once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(Hostname),
    NotFound,
    Error(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(h) => write!(f, "found {h}"),
            Self::NotFound => f.write_str("no hostname"),
            Self::Error(reason) => write!(f, "error: {reason}"),
        }
    }
}

/// One strategy invocation and what it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryAttempt {
    pub strategy: &'static str,
    pub outcome: Outcome,
}

impl DiscoveryAttempt {
    #[must_use]
    pub fn new(strategy: &'static str, outcome: Outcome) -> Self {
        Self { strategy, outcome }
    }
}

// ── Log window ───────────────────────────────────────────────────────────────

/// How much recent service log to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogWindow {
    /// Last N lines (journald, plain log files).
    Lines(u32),
    /// Everything logged within the duration (macOS unified log).
    Since(Duration),
}

impl LogWindow {
    /// The window used by the supervisor of `platform`.
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Macos => Self::Since(LOG_LOOKBACK),
            Platform::Linux | Platform::Docker => Self::Lines(LOG_TAIL_LINES),
        }
    }
}

// ── Context ──────────────────────────────────────────────────────────────────

/// Everything a resolution run needs, built once by the caller.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    pub platform: Platform,
    /// Tunnel to query. `None` for quick tunnels or when discovery failed.
    pub tunnel_id: Option<TunnelId>,
    /// Hostname handed in by the environment (Docker); checked before any
    /// strategy runs.
    pub preset_hostname: Option<String>,
    /// Supervised service running the tunnel client.
    pub service: String,
    /// Directory holding `<tunnel-id>.json` credential files.
    pub credentials_dir: PathBuf,
    pub log_window: LogWindow,
    pub retry_delay: Duration,
    pub matcher: HostnameMatcher,
}

impl ResolutionContext {
    /// Context with platform defaults and no tunnel id.
    #[must_use]
    pub fn new(platform: Platform, credentials_dir: PathBuf) -> Self {
        Self {
            platform,
            tunnel_id: None,
            preset_hostname: None,
            service: default_service(platform).to_string(),
            credentials_dir,
            log_window: LogWindow::for_platform(platform),
            retry_delay: DEFAULT_RETRY_DELAY,
            matcher: HostnameMatcher::quick_tunnel(),
        }
    }

    #[must_use]
    pub fn with_tunnel_id(mut self, id: Option<TunnelId>) -> Self {
        self.tunnel_id = id;
        self
    }

    #[must_use]
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }
}

/// Supervisor-level service name for `platform`.
#[must_use]
pub fn default_service(platform: Platform) -> &'static str {
    match platform {
        Platform::Macos => LAUNCHD_LABEL,
        Platform::Linux | Platform::Docker => DEFAULT_SERVICE,
    }
}
