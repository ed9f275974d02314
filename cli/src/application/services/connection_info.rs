//! Application service: resolve, validate and package connection info.
//!
//! Imports only from `crate::domain` and `crate::application`.

use anyhow::Result;

use crate::application::ports::{AccountDirectory, ProgressReporter, ServiceSupervisor};
use crate::application::services::resolve::HostnameResolver;
use crate::domain::connection::ConnectionInfo;
use crate::domain::hostname::validate;
use crate::domain::resolution::ResolutionContext;

/// Per-invocation options.
#[derive(Debug, Clone)]
pub struct ConnectionRequest<'a> {
    pub user: &'a str,
    pub host_alias: &'a str,
    pub max_attempts: u32,
}

/// Resolved connection info plus advisory warnings.
#[derive(Debug, Clone)]
pub struct ConnectionReport {
    pub info: ConnectionInfo,
    pub warnings: Vec<String>,
}

/// Resolves the hostname and builds the connection report.
///
/// Advisory problems are reported through `reporter` and returned in the
/// report but never fail the call.
///
/// # Errors
///
/// Returns `ResolutionError` when every strategy misses, or
/// `ValidationError` for a malformed hostname or empty username.
pub async fn gather(
    resolver: &HostnameResolver<'_>,
    ctx: &ResolutionContext,
    request: &ConnectionRequest<'_>,
    supervisor: &impl ServiceSupervisor,
    accounts: &impl AccountDirectory,
    reporter: &impl ProgressReporter,
) -> Result<ConnectionReport> {
    reporter.step("Resolving tunnel hostname");
    let hostname = resolver.resolve(ctx, request.max_attempts).await?;
    validate(hostname.as_str(), request.user)?;

    let warnings = advisory_checks(ctx, request.user, supervisor, accounts).await;
    for warning in &warnings {
        reporter.warn(warning);
    }

    Ok(ConnectionReport {
        info: ConnectionInfo::new(hostname, request.user, request.host_alias),
        warnings,
    })
}

/// Service-running and user-exists checks, downgraded to warnings.
pub async fn advisory_checks(
    ctx: &ResolutionContext,
    user: &str,
    supervisor: &impl ServiceSupervisor,
    accounts: &impl AccountDirectory,
) -> Vec<String> {
    let mut warnings = Vec::new();

    match supervisor.is_active(&ctx.service).await {
        Ok(true) => {}
        Ok(false) => warnings.push(format!("Tunnel service '{}' is not running", ctx.service)),
        Err(e) => {
            tracing::debug!("service check failed: {e:#}");
            warnings.push(format!("Could not check tunnel service '{}'", ctx.service));
        }
    }

    match accounts.user_exists(user).await {
        Ok(true) => {}
        Ok(false) => warnings.push(format!("User '{user}' does not exist on this host")),
        Err(e) => {
            tracing::debug!("user check failed: {e:#}");
            warnings.push(format!("Could not check whether user '{user}' exists"));
        }
    }

    warnings
}
