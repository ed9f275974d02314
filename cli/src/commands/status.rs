//! `reach status`: tunnel clients, service state and tunnel id.

use anyhow::Result;
use clap::Args;
use reach_common::Platform;

use crate::app::AppContext;
use crate::application::services::{context, tunnel_status};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::fs::LocalFs;

/// Arguments for the status command.
#[derive(Args)]
pub struct StatusArgs {
    /// Platform override (default: detected)
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,

    /// Tunnel name or UUID
    #[arg(long, value_name = "ID")]
    pub tunnel: Option<String>,
}

/// Run the status command.
///
/// # Errors
///
/// Returns an error if the config is invalid, the home directory is
/// unknown, or output fails.
pub async fn run(app: &AppContext, args: &StatusArgs) -> Result<()> {
    let config = app.load_config()?;
    let inputs = super::context_inputs(args.platform, args.tunnel.clone())?;
    let assembled = context::assemble(&config, &inputs, &LocalFs).await;
    let ctx = &assembled.context;

    let runner = TokioCommandRunner::default();
    let supervisor = super::supervisor(ctx.platform, &config);
    let status =
        tunnel_status::gather_status(ctx, assembled.tunnel_id_source, &runner, &supervisor).await;

    app.renderer().render_status(&status)
}
