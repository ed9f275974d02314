//! Human-readable terminal renderer.

use anyhow::{Context, Result};
use owo_colors::OwoColorize as _;
use reach_common::{ConnectionOutput, StatusOutput, TunnelIdSource};

use crate::domain::config::ReachConfig;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the SSH config stanza and the one-line command.
    ///
    /// Printed even with `--quiet`: this is the command's result, not chatter.
    pub fn render_connection(&self, conn: &ConnectionOutput, hostname_only: bool) {
        println!("{}", connection_text(conn, hostname_only));
    }

    /// Render tunnel status. Nothing is printed with `--quiet`.
    pub fn render_status(&self, status: &StatusOutput) {
        if self.ctx.quiet {
            return;
        }
        for line in self.status_lines(status) {
            println!("{line}");
        }
    }

    /// Lines of the status view: key/value block, blank line, providers.
    #[must_use]
    pub fn status_lines(&self, status: &StatusOutput) -> Vec<String> {
        let styles = &self.ctx.styles;
        let kv = |key: &str, value: &str| format!("  {:<14} {value}", key.style(styles.dim));

        let state = if status.service_active { "active" } else { "inactive" };
        let tunnel = match (&status.tunnel_id, status.tunnel_id_source) {
            (Some(id), Some(source)) => format!("{id} (from {})", source_display(source)),
            (Some(id), None) => id.clone(),
            (None, _) => "(none, quick tunnel)".to_string(),
        };

        let mut lines = vec![
            kv("Platform:", status.platform.as_str()),
            kv("Service:", &format!("{} ({state})", status.service)),
            kv("Tunnel:", &tunnel),
            String::new(),
            format!("  {}", "Providers:".style(styles.header)),
        ];
        lines.extend(status.providers.iter().map(|provider| {
            if provider.installed {
                let version = provider.version.as_deref().unwrap_or("installed");
                format!("  {} {:<12} {version}", "✓".style(styles.success), provider.name)
            } else {
                format!(
                    "  {} {:<12} {}",
                    "✗".style(styles.error),
                    provider.name,
                    "not installed".style(styles.dim)
                )
            }
        }));
        lines
    }

    /// Render the current reach configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized.
    pub fn render_config(&self, config: &ReachConfig, path: &std::path::Path) -> Result<()> {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        let yaml = serde_yaml::to_string(config).context("cannot serialize config")?;
        for line in yaml.lines() {
            println!("  {line}");
        }
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.header));
        for var in ["REACH_CONFIG", "TUNNEL_ID", "TUNNEL_HOSTNAME", "NO_COLOR"] {
            println!(
                "    {:<18} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
        Ok(())
    }
}

/// Text printed for `reach info`: the hostname alone, or the SSH config
/// stanza, a blank line and the one-line command.
#[must_use]
pub fn connection_text(conn: &ConnectionOutput, hostname_only: bool) -> String {
    if hostname_only {
        conn.hostname.clone()
    } else {
        format!("{}\n\n{}", conn.ssh_config, conn.ssh_command)
    }
}

fn source_display(source: TunnelIdSource) -> &'static str {
    match source {
        TunnelIdSource::Flag => "--tunnel",
        TunnelIdSource::Environment => "TUNNEL_ID",
        TunnelIdSource::Config => "reach config",
        TunnelIdSource::TunnelConfigFile => "cloudflared config",
    }
}
