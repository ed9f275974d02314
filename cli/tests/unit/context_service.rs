//! Resolution context assembly: precedence of platform and tunnel id sources.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::PathBuf;
use std::time::Duration;

use reach_cli::application::services::context::{ContextInputs, assemble};
use reach_cli::domain::config::ReachConfig;
use reach_common::{Platform, TunnelIdSource};

use crate::mocks::MockFiles;

fn inputs() -> ContextInputs {
    ContextInputs {
        detected_platform: Platform::Linux,
        platform_flag: None,
        tunnel_flag: None,
        tunnel_env: None,
        hostname_env: None,
        home: PathBuf::from("/home/jules"),
    }
}

#[tokio::test]
async fn defaults_follow_the_detected_platform() {
    let assembled = assemble(&ReachConfig::default(), &inputs(), &MockFiles::empty()).await;
    let ctx = assembled.context;

    assert_eq!(ctx.platform, Platform::Linux);
    assert_eq!(ctx.service, "cloudflared");
    assert_eq!(ctx.credentials_dir, PathBuf::from("/etc/cloudflared"));
    assert_eq!(ctx.retry_delay, Duration::from_secs(2));
    assert!(ctx.tunnel_id.is_none());
    assert!(assembled.tunnel_id_source.is_none());
}

#[tokio::test]
async fn platform_flag_beats_config_beats_detection() {
    let mut config = ReachConfig::default();
    config.platform = Some(Platform::Docker);

    let from_config = assemble(&config, &inputs(), &MockFiles::empty()).await;
    assert_eq!(from_config.context.platform, Platform::Docker);

    let flagged = ContextInputs {
        platform_flag: Some(Platform::Macos),
        ..inputs()
    };
    let from_flag = assemble(&config, &flagged, &MockFiles::empty()).await;
    assert_eq!(from_flag.context.platform, Platform::Macos);
    assert_eq!(from_flag.context.service, "com.cloudflare.cloudflared");
    assert_eq!(
        from_flag.context.credentials_dir,
        PathBuf::from("/home/jules/.cloudflared")
    );
}

#[tokio::test]
async fn tunnel_id_precedence_flag_env_config_file() {
    let mut config = ReachConfig::default();
    config.tunnel.id = Some("from-config".to_string());
    let files = MockFiles::empty().with_file("/etc/cloudflared/config.yml", Some("tunnel: from-file\n"));

    let all = ContextInputs {
        tunnel_flag: Some("from-flag".to_string()),
        tunnel_env: Some("from-env".to_string()),
        ..inputs()
    };
    let got = assemble(&config, &all, &files).await;
    assert_eq!(got.context.tunnel_id.unwrap().as_str(), "from-flag");
    assert_eq!(got.tunnel_id_source, Some(TunnelIdSource::Flag));

    let env_only = ContextInputs {
        tunnel_env: Some("from-env".to_string()),
        ..inputs()
    };
    let got = assemble(&config, &env_only, &files).await;
    assert_eq!(got.context.tunnel_id.unwrap().as_str(), "from-env");
    assert_eq!(got.tunnel_id_source, Some(TunnelIdSource::Environment));

    let got = assemble(&config, &inputs(), &files).await;
    assert_eq!(got.context.tunnel_id.unwrap().as_str(), "from-config");
    assert_eq!(got.tunnel_id_source, Some(TunnelIdSource::Config));

    let got = assemble(&ReachConfig::default(), &inputs(), &files).await;
    assert_eq!(got.context.tunnel_id.unwrap().as_str(), "from-file");
    assert_eq!(got.tunnel_id_source, Some(TunnelIdSource::TunnelConfigFile));
}

#[tokio::test]
async fn blank_tunnel_sources_are_skipped() {
    let blank = ContextInputs {
        tunnel_flag: Some("  ".to_string()),
        tunnel_env: Some(String::new()),
        ..inputs()
    };
    let got = assemble(&ReachConfig::default(), &blank, &MockFiles::empty()).await;
    assert!(got.context.tunnel_id.is_none());
}

#[tokio::test]
async fn hostname_env_becomes_the_preset() {
    let with_env = ContextInputs {
        hostname_env: Some(" ssh.example.org \n".to_string()),
        ..inputs()
    };
    let got = assemble(&ReachConfig::default(), &with_env, &MockFiles::empty()).await;
    assert_eq!(got.context.preset_hostname.as_deref(), Some("ssh.example.org"));

    let empty = ContextInputs {
        hostname_env: Some(String::new()),
        ..inputs()
    };
    let got = assemble(&ReachConfig::default(), &empty, &MockFiles::empty()).await;
    assert!(got.context.preset_hostname.is_none());
}

#[tokio::test]
async fn config_overrides_service_delay_and_custom_domain() {
    let mut config = ReachConfig::default();
    config.tunnel.service = Some("cloudflared-jules".to_string());
    config.tunnel.custom_domain = Some("example.org".to_string());
    config.resolve.delay_secs = 0;

    let got = assemble(&config, &inputs(), &MockFiles::empty()).await;

    assert_eq!(got.context.service, "cloudflared-jules");
    assert_eq!(got.context.retry_delay, Duration::ZERO);
    assert_eq!(
        got.context
            .matcher
            .first("route: ssh.example.org")
            .map(|h| h.to_string()),
        Some("ssh.example.org".to_string())
    );
}
