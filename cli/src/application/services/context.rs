//! Application service: assemble the `ResolutionContext` once per run.
//!
//! Flags, environment and config files are read by the caller and handed in
//! as [`ContextInputs`]; this service only decides precedence.

use std::path::PathBuf;
use std::time::Duration;

use reach_common::{Platform, TunnelIdSource};
use serde::Deserialize;

use crate::application::ports::TunnelFiles;
use crate::domain::config::ReachConfig;
use crate::domain::hostname::{HostnameMatcher, TunnelId};
use crate::domain::platform;
use crate::domain::resolution::{ResolutionContext, default_service};

/// Raw inputs gathered from flags and the process environment.
#[derive(Debug, Clone, Default)]
pub struct ContextInputs {
    /// Platform detected from the running system.
    pub detected_platform: Platform,
    /// `--platform` flag.
    pub platform_flag: Option<Platform>,
    /// `--tunnel` flag.
    pub tunnel_flag: Option<String>,
    /// `TUNNEL_ID` environment variable.
    pub tunnel_env: Option<String>,
    /// `TUNNEL_HOSTNAME` environment variable.
    pub hostname_env: Option<String>,
    /// Home directory of the invoking user.
    pub home: PathBuf,
}

/// The assembled context plus where its tunnel id came from.
#[derive(Debug, Clone)]
pub struct AssembledContext {
    pub context: ResolutionContext,
    pub tunnel_id_source: Option<TunnelIdSource>,
}

#[derive(Deserialize)]
struct TunnelConfigFile {
    tunnel: Option<String>,
}

/// Extracts the `tunnel:` key from the tunnel client's YAML config.
#[must_use]
pub fn parse_tunnel_config(text: &str) -> Option<TunnelId> {
    serde_yaml::from_str::<TunnelConfigFile>(text)
        .ok()
        .and_then(|c| c.tunnel)
        .and_then(|t| TunnelId::new(&t))
}

/// Builds the resolution context.
///
/// Platform: flag > config > detected. Tunnel id: flag > `TUNNEL_ID` >
/// config > the tunnel client's config file. A missing or unreadable tunnel
/// config file just leaves the id unset.
pub async fn assemble(
    config: &ReachConfig,
    inputs: &ContextInputs,
    files: &impl TunnelFiles,
) -> AssembledContext {
    let platform = inputs
        .platform_flag
        .or(config.platform)
        .unwrap_or(inputs.detected_platform);

    let mut found = [
        (inputs.tunnel_flag.as_deref(), TunnelIdSource::Flag),
        (inputs.tunnel_env.as_deref(), TunnelIdSource::Environment),
        (config.tunnel.id.as_deref(), TunnelIdSource::Config),
    ]
    .into_iter()
    .find_map(|(raw, source)| raw.and_then(TunnelId::new).map(|id| (id, source)));

    if found.is_none() {
        let path = platform::tunnel_config_file(platform, &inputs.home);
        match files.read_to_string(&path).await {
            Ok(text) => {
                found = parse_tunnel_config(&text).map(|id| (id, TunnelIdSource::TunnelConfigFile));
            }
            Err(e) => tracing::debug!(path = %path.display(), "no tunnel config: {e:#}"),
        }
    }

    let (tunnel_id, tunnel_id_source) = match found {
        Some((id, source)) => (Some(id), Some(source)),
        None => (None, None),
    };

    let mut context = ResolutionContext::new(
        platform,
        platform::credentials_dir(platform, &inputs.home),
    )
    .with_tunnel_id(tunnel_id)
    .with_retry_delay(Duration::from_secs(config.resolve.delay_secs));

    context.service = config
        .tunnel
        .service
        .clone()
        .unwrap_or_else(|| default_service(platform).to_string());
    context.preset_hostname = inputs
        .hostname_env
        .as_deref()
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(ToString::to_string);
    context.matcher = HostnameMatcher::with_custom_domain(config.tunnel.custom_domain.as_deref());

    tracing::debug!(%platform, tunnel_id = ?context.tunnel_id, ?tunnel_id_source, "resolution context");

    AssembledContext {
        context,
        tunnel_id_source,
    }
}
