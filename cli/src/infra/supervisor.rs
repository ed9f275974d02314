//! `ServiceSupervisor` implementations: systemd, launchd, and a bare
//! process with a log file (containers).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use reach_common::Platform;

use crate::application::ports::{CommandRunner, ServiceSupervisor};
use crate::domain::resolution::{LOG_TAIL_LINES, LogWindow};
use crate::infra::cloudflared::CLOUDFLARED;
use crate::infra::command_runner::stdout_of;

/// Default log file of a container-run tunnel client.
pub const CONTAINER_LOG_FILE: &str = "/var/log/cloudflared.log";

/// Supervisor for the detected platform.
pub struct PlatformSupervisor<R> {
    platform: Platform,
    runner: R,
    log_file: PathBuf,
}

impl<R: CommandRunner> PlatformSupervisor<R> {
    #[must_use]
    pub fn new(platform: Platform, runner: R) -> Self {
        Self {
            platform,
            runner,
            log_file: PathBuf::from(CONTAINER_LOG_FILE),
        }
    }

    /// Log file read on platforms without a log service.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    async fn systemd_logs(&self, service: &str, window: LogWindow) -> Result<String> {
        let bound = match window {
            LogWindow::Lines(n) => vec!["-n".to_string(), n.to_string()],
            LogWindow::Since(d) => vec!["--since".to_string(), format!("-{}s", d.as_secs())],
        };
        let mut args = vec!["-u", service, "--no-pager", "-o", "cat"];
        args.extend(bound.iter().map(String::as_str));
        let output = self.runner.run("journalctl", &args).await?;
        stdout_of("journalctl", output)
    }

    async fn unified_logs(&self, window: LogWindow) -> Result<String> {
        let last = match window {
            LogWindow::Since(d) => minutes_arg(d),
            LogWindow::Lines(_) => minutes_arg(crate::domain::resolution::LOG_LOOKBACK),
        };
        let predicate = format!("process == \"{CLOUDFLARED}\"");
        let output = self
            .runner
            .run(
                "log",
                &["show", "--style", "compact", "--last", &last, "--predicate", &predicate],
            )
            .await?;
        let text = stdout_of("log", output)?;
        Ok(match window {
            LogWindow::Lines(n) => tail_lines(&text, n),
            LogWindow::Since(_) => text,
        })
    }

    async fn file_logs(&self, window: LogWindow) -> Result<String> {
        let text = tokio::fs::read_to_string(&self.log_file)
            .await
            .with_context(|| format!("cannot read {}", self.log_file.display()))?;
        let n = match window {
            LogWindow::Lines(n) => n,
            LogWindow::Since(_) => LOG_TAIL_LINES,
        };
        Ok(tail_lines(&text, n))
    }
}

impl<R: CommandRunner> ServiceSupervisor for PlatformSupervisor<R> {
    async fn is_active(&self, service: &str) -> Result<bool> {
        match self.platform {
            Platform::Linux => {
                let output = self
                    .runner
                    .run("systemctl", &["is-active", "--quiet", service])
                    .await?;
                Ok(output.status.success())
            }
            Platform::Macos => {
                let output = self.runner.run("launchctl", &["list", service]).await?;
                Ok(output.status.success()
                    && String::from_utf8_lossy(&output.stdout).contains("\"PID\""))
            }
            Platform::Docker => {
                let output = self.runner.run("pgrep", &["-x", service]).await?;
                Ok(output.status.success())
            }
        }
    }

    async fn recent_logs(&self, service: &str, window: LogWindow) -> Result<String> {
        match self.platform {
            Platform::Linux => self.systemd_logs(service, window).await,
            Platform::Macos => self.unified_logs(window).await,
            Platform::Docker => self.file_logs(window).await,
        }
    }
}

/// `log show --last` only takes minutes, hours or days.
fn minutes_arg(d: Duration) -> String {
    format!("{}m", (d.as_secs() / 60).max(1))
}

/// Last `n` lines of `text`, oldest first.
#[must_use]
pub fn tail_lines(text: &str, n: u32) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let skip = lines.len().saturating_sub(n as usize);
    lines[skip..].join("\n")
}
