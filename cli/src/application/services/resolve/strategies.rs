//! The five discovery strategies, in chain order.

use anyhow::Result;
use async_trait::async_trait;

use super::Strategy;
use crate::application::ports::{ServiceSupervisor, TunnelClient, TunnelFiles};
use crate::domain::hostname::Hostname;
use crate::domain::resolution::ResolutionContext;

// ── 1. tunnel info ────────────────────────────────────────────────────────────

/// `cloudflared tunnel info <id>`. Polled: the tunnel may still be
/// registering its connections.
pub struct DirectInfoStrategy<'a, C> {
    client: &'a C,
}

impl<'a, C: TunnelClient> DirectInfoStrategy<'a, C> {
    #[must_use]
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl<C: TunnelClient> Strategy for DirectInfoStrategy<'_, C> {
    fn name(&self) -> &'static str {
        "tunnel-info"
    }

    fn polls(&self) -> bool {
        true
    }

    async fn attempt(&self, ctx: &ResolutionContext) -> Result<Option<Hostname>> {
        let Some(id) = &ctx.tunnel_id else {
            return Ok(None);
        };
        let text = self.client.describe(id).await?;
        Ok(ctx.matcher.first_reported(&text))
    }
}

// ── 2. tunnel list ────────────────────────────────────────────────────────────

/// `cloudflared tunnel list`, restricted to lines mentioning the tunnel id.
pub struct ListStrategy<'a, C> {
    client: &'a C,
}

impl<'a, C: TunnelClient> ListStrategy<'a, C> {
    #[must_use]
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl<C: TunnelClient> Strategy for ListStrategy<'_, C> {
    fn name(&self) -> &'static str {
        "tunnel-list"
    }

    async fn attempt(&self, ctx: &ResolutionContext) -> Result<Option<Hostname>> {
        let Some(id) = &ctx.tunnel_id else {
            return Ok(None);
        };
        let text = self.client.list().await?;
        Ok(text
            .lines()
            .filter(|line| line.contains(id.as_str()))
            .find_map(|line| ctx.matcher.first_reported(line)))
    }
}

// ── 3. service log ────────────────────────────────────────────────────────────

/// Recent output of the supervised tunnel service. Takes the *last* match:
/// a service restarted several times logs every hostname it ever had.
pub struct ServiceLogStrategy<'a, S> {
    supervisor: &'a S,
}

impl<'a, S: ServiceSupervisor> ServiceLogStrategy<'a, S> {
    #[must_use]
    pub fn new(supervisor: &'a S) -> Self {
        Self { supervisor }
    }
}

#[async_trait(?Send)]
impl<S: ServiceSupervisor> Strategy for ServiceLogStrategy<'_, S> {
    fn name(&self) -> &'static str {
        "service-log"
    }

    async fn attempt(&self, ctx: &ResolutionContext) -> Result<Option<Hostname>> {
        if !self.supervisor.is_active(&ctx.service).await? {
            tracing::debug!(service = %ctx.service, "service not active, skipping log scrape");
            return Ok(None);
        }
        let logs = self
            .supervisor
            .recent_logs(&ctx.service, ctx.log_window)
            .await?;
        Ok(ctx.matcher.last(&logs))
    }
}

// ── 4. credentials directory ──────────────────────────────────────────────────

/// Scans credential files in name order; first file with a match wins.
pub struct CredentialScanStrategy<'a, F> {
    files: &'a F,
}

impl<'a, F: TunnelFiles> CredentialScanStrategy<'a, F> {
    #[must_use]
    pub fn new(files: &'a F) -> Self {
        Self { files }
    }
}

#[async_trait(?Send)]
impl<F: TunnelFiles> Strategy for CredentialScanStrategy<'_, F> {
    fn name(&self) -> &'static str {
        "credentials"
    }

    async fn attempt(&self, ctx: &ResolutionContext) -> Result<Option<Hostname>> {
        for path in self.files.credential_files(&ctx.credentials_dir).await? {
            match self.files.read_to_string(&path).await {
                Ok(content) => {
                    if let Some(hostname) = ctx.matcher.first(&content) {
                        return Ok(Some(hostname));
                    }
                }
                Err(e) => tracing::debug!(path = %path.display(), "unreadable credential file: {e:#}"),
            }
        }
        Ok(None)
    }
}

// ── 5. DNS route ──────────────────────────────────────────────────────────────

/// `cloudflared tunnel route dns <id>`. Only part of the Linux chain.
pub struct DnsRouteStrategy<'a, C> {
    client: &'a C,
}

impl<'a, C: TunnelClient> DnsRouteStrategy<'a, C> {
    #[must_use]
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl<C: TunnelClient> Strategy for DnsRouteStrategy<'_, C> {
    fn name(&self) -> &'static str {
        "dns-route"
    }

    async fn attempt(&self, ctx: &ResolutionContext) -> Result<Option<Hostname>> {
        let Some(id) = &ctx.tunnel_id else {
            return Ok(None);
        };
        let text = self.client.route_dns(id).await?;
        Ok(ctx.matcher.first_reported(&text))
    }
}
