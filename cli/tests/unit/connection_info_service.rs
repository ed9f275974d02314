//! Connection info service: validation, advisory warnings and output shape.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use reach_cli::application::services::connection_info::{ConnectionRequest, advisory_checks, gather};
use reach_cli::application::services::resolve::HostnameResolver;
use reach_cli::domain::error::{ResolutionError, ValidationError};
use reach_common::Platform;

use crate::helpers::{HOST, ctx, info_output};
use crate::mocks::{MockAccounts, MockFiles, MockSupervisor, MockTunnelClient, RecordingReporter};

fn request(user: &str) -> ConnectionRequest<'_> {
    ConnectionRequest {
        user,
        host_alias: "tunnel",
        max_attempts: 5,
    }
}

fn resolving_client() -> MockTunnelClient {
    MockTunnelClient {
        describe_default: Some(info_output(HOST)),
        ..MockTunnelClient::empty()
    }
}

#[tokio::test]
async fn healthy_host_produces_connection_info_without_warnings() {
    let client = resolving_client();
    let supervisor = MockSupervisor::active_with_logs("");
    let files = MockFiles::empty();
    let resolver = HostnameResolver::standard(Platform::Linux, &client, &supervisor, &files);
    let reporter = RecordingReporter::default();

    let report = gather(
        &resolver,
        &ctx(Platform::Linux),
        &request("jules"),
        &supervisor,
        &MockAccounts(Some(vec!["jules"])),
        &reporter,
    )
    .await
    .unwrap();

    assert!(report.warnings.is_empty());
    assert!(reporter.warnings().is_empty());
    let output = report.info.to_output(report.warnings);
    assert_eq!(output.hostname, HOST);
    assert_eq!(output.port, 22);
    assert_eq!(
        output.ssh_command,
        format!("ssh -o StrictHostKeyChecking=no -o UserKnownHostsFile=/dev/null -p 22 jules@{HOST}")
    );
    assert!(output.ssh_config.starts_with("Host tunnel\n"));
    assert!(output.ssh_config.contains(&format!("    HostName {HOST}\n")));
}

#[tokio::test]
async fn advisory_problems_warn_but_do_not_fail() {
    let client = resolving_client();
    let supervisor = MockSupervisor::inactive();
    let files = MockFiles::empty();
    let resolver = HostnameResolver::standard(Platform::Linux, &client, &supervisor, &files);
    let reporter = RecordingReporter::default();

    let report = gather(
        &resolver,
        &ctx(Platform::Linux),
        &request("ghost"),
        &supervisor,
        &MockAccounts(Some(vec!["jules"])),
        &reporter,
    )
    .await
    .unwrap();

    assert_eq!(report.info.hostname.as_str(), HOST);
    assert_eq!(report.warnings.len(), 2);
    assert!(report.warnings[0].contains("not running"));
    assert!(report.warnings[1].contains("'ghost' does not exist"));
    assert_eq!(reporter.warnings(), report.warnings);
}

#[tokio::test]
async fn failed_advisory_lookups_become_warnings() {
    let supervisor = MockSupervisor::new(None, "");
    let warnings = advisory_checks(
        &ctx(Platform::Linux),
        "jules",
        &supervisor,
        &MockAccounts(None),
    )
    .await;

    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().all(|w| w.starts_with("Could not check")));
}

#[tokio::test]
async fn empty_username_is_a_validation_failure() {
    let client = resolving_client();
    let supervisor = MockSupervisor::active_with_logs("");
    let files = MockFiles::empty();
    let resolver = HostnameResolver::standard(Platform::Linux, &client, &supervisor, &files);

    let err = gather(
        &resolver,
        &ctx(Platform::Linux),
        &request(""),
        &supervisor,
        &MockAccounts(Some(vec![])),
        &RecordingReporter::default(),
    )
    .await
    .unwrap_err();

    assert_eq!(
        err.downcast_ref::<ValidationError>(),
        Some(&ValidationError::EmptyUsername)
    );
}

#[tokio::test]
async fn exhaustion_propagates_without_running_advisory_checks() {
    let client = MockTunnelClient::empty();
    let supervisor = MockSupervisor::inactive();
    let files = MockFiles::empty();
    let resolver = HostnameResolver::standard(Platform::Linux, &client, &supervisor, &files);
    let reporter = RecordingReporter::default();

    let err = gather(
        &resolver,
        &ctx(Platform::Linux),
        &request("jules"),
        &supervisor,
        &MockAccounts(Some(vec!["jules"])),
        &reporter,
    )
    .await
    .unwrap_err();

    assert!(err.downcast_ref::<ResolutionError>().is_some());
    assert!(reporter.warnings().is_empty());
    assert_eq!(
        reporter.steps.lock().expect("lock").as_slice(),
        ["Resolving tunnel hostname"]
    );
}
