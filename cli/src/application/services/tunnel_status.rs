//! Application service: tunnel status gathering use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use reach_common::{ProviderStatus, StatusOutput, TunnelIdSource};

use crate::application::ports::{CommandRunner, ServiceSupervisor};
use crate::domain::resolution::ResolutionContext;

/// Tunnel clients probed by `reach status`, with their version subcommand.
pub const PROVIDERS: &[(&str, &[&str])] = &[
    ("cloudflared", &["--version"]),
    ("ngrok", &["version"]),
    ("tailscale", &["version"]),
];

/// Gather tunnel status information.
///
/// This function is infallible: probe errors are reflected as
/// `installed: false` or `service_active: false`.
pub async fn gather_status(
    ctx: &ResolutionContext,
    tunnel_id_source: Option<TunnelIdSource>,
    runner: &impl CommandRunner,
    supervisor: &impl ServiceSupervisor,
) -> StatusOutput {
    let mut providers = Vec::with_capacity(PROVIDERS.len());
    for (name, args) in PROVIDERS {
        providers.push(probe_provider(runner, name, args).await);
    }

    let service_active = supervisor
        .is_active(&ctx.service)
        .await
        .unwrap_or_else(|e| {
            tracing::debug!("service check failed: {e:#}");
            false
        });

    StatusOutput {
        platform: ctx.platform,
        service: ctx.service.clone(),
        service_active,
        tunnel_id: ctx.tunnel_id.as_ref().map(ToString::to_string),
        tunnel_id_source,
        providers,
    }
}

async fn probe_provider(runner: &impl CommandRunner, name: &str, args: &[&str]) -> ProviderStatus {
    match runner.run(name, args).await {
        Ok(output) if output.status.success() => ProviderStatus {
            name: name.to_string(),
            installed: true,
            version: first_line(&output.stdout),
        },
        _ => ProviderStatus {
            name: name.to_string(),
            installed: false,
            version: None,
        },
    }
}

fn first_line(bytes: &[u8]) -> Option<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(ToString::to_string)
}
