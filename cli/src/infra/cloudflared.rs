//! `cloudflared` implementation of the `TunnelClient` port.

use anyhow::Result;

use crate::application::ports::{CommandRunner, TunnelClient};
use crate::domain::hostname::TunnelId;
use crate::infra::command_runner::stdout_of;

/// Binary name of the tunnel client.
pub const CLOUDFLARED: &str = "cloudflared";

/// Talks to the tunnel service through the `cloudflared` CLI.
pub struct CloudflaredClient<R> {
    runner: R,
}

impl<R: CommandRunner> CloudflaredClient<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    async fn tunnel(&self, args: &[&str]) -> Result<String> {
        let mut full = Vec::with_capacity(args.len() + 1);
        full.push("tunnel");
        full.extend_from_slice(args);
        let output = self.runner.run(CLOUDFLARED, &full).await?;
        stdout_of(CLOUDFLARED, output)
    }
}

impl<R: CommandRunner> TunnelClient for CloudflaredClient<R> {
    async fn describe(&self, id: &TunnelId) -> Result<String> {
        self.tunnel(&["info", id.as_str()]).await
    }

    async fn list(&self) -> Result<String> {
        self.tunnel(&["list"]).await
    }

    async fn route_dns(&self, id: &TunnelId) -> Result<String> {
        self.tunnel(&["route", "dns", id.as_str()]).await
    }
}
