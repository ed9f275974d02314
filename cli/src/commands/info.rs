//! `reach info`: resolve the tunnel hostname and print connection info.

use anyhow::Result;
use clap::Args;
use reach_common::Platform;

use crate::app::AppContext;
use crate::application::services::connection_info::{self, ConnectionRequest};
use crate::application::services::context;
use crate::application::services::resolve::HostnameResolver;
use crate::domain::config::MAX_ATTEMPTS_LIMIT;
use crate::infra::accounts::SystemAccounts;
use crate::infra::cloudflared::CloudflaredClient;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::fs::LocalFs;
use crate::output::TerminalReporter;

/// Arguments for the info command.
#[derive(Args)]
pub struct InfoArgs {
    /// Account to connect as (default: `connection.user` from config)
    pub username: Option<String>,

    /// Print only the hostname
    #[arg(long)]
    pub hostname_only: bool,

    /// Tunnel name or UUID (overrides TUNNEL_ID and config)
    #[arg(long, value_name = "ID")]
    pub tunnel: Option<String>,

    /// Attempts for the polling strategy
    #[arg(
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_ATTEMPTS_LIMIT))
    )]
    pub attempts: Option<u32>,

    /// Platform override (default: detected)
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,
}

/// Run the info command.
///
/// # Errors
///
/// Returns an error if every discovery strategy misses or the hostname or
/// username fails validation.
pub async fn run(app: &AppContext, args: &InfoArgs) -> Result<()> {
    let config = app.load_config()?;
    let inputs = super::context_inputs(args.platform, args.tunnel.clone())?;
    let files = LocalFs;
    let assembled = context::assemble(&config, &inputs, &files).await;
    let ctx = &assembled.context;

    let client = CloudflaredClient::new(TokioCommandRunner::default());
    let supervisor = super::supervisor(ctx.platform, &config);
    let accounts = SystemAccounts::new(TokioCommandRunner::default());
    let resolver = HostnameResolver::standard(ctx.platform, &client, &supervisor, &files);

    let request = ConnectionRequest {
        user: args
            .username
            .as_deref()
            .unwrap_or(&config.connection.user),
        host_alias: &config.connection.host_alias,
        max_attempts: args.attempts.unwrap_or(config.resolve.attempts),
    };

    let reporter = TerminalReporter::new(&app.output);
    let result =
        connection_info::gather(&resolver, ctx, &request, &supervisor, &accounts, &reporter).await;
    reporter.finish();
    let report = result?;

    let output = report.info.to_output(report.warnings);
    app.renderer().render_connection(&output, args.hostname_only)
}
