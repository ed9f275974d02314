//! SSH connection details rendered for the calling agent.

use std::fmt::Write as _;

use reach_common::ConnectionOutput;

use crate::domain::hostname::Hostname;

/// Port the tunnel forwards to.
pub const SSH_PORT: u16 = 22;

/// Username used when neither the argument nor config provides one.
pub const DEFAULT_USER: &str = "jules";

/// `Host` alias written into the SSH config stanza by default.
pub const DEFAULT_HOST_ALIAS: &str = "tunnel";

/// Read-only projection of a resolved hostname for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    pub hostname: Hostname,
    pub user: String,
    pub host_alias: String,
    pub port: u16,
}

impl ConnectionInfo {
    #[must_use]
    pub fn new(hostname: Hostname, user: &str, host_alias: &str) -> Self {
        Self {
            hostname,
            user: user.to_string(),
            host_alias: host_alias.to_string(),
            port: SSH_PORT,
        }
    }

    /// `~/.ssh/config` stanza. Host keys are not pinned because quick-tunnel
    /// hostnames change on every restart.
    #[must_use]
    pub fn ssh_config(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Host {}", self.host_alias);
        let _ = writeln!(out, "    HostName {}", self.hostname);
        let _ = writeln!(out, "    User {}", self.user);
        let _ = writeln!(out, "    Port {}", self.port);
        let _ = writeln!(out, "    IdentitiesOnly yes");
        let _ = writeln!(out, "    StrictHostKeyChecking no");
        let _ = write!(out, "    UserKnownHostsFile /dev/null");
        out
    }

    #[must_use]
    pub fn ssh_command(&self) -> String {
        format!(
            "ssh -o StrictHostKeyChecking=no -o UserKnownHostsFile=/dev/null -p {} {}@{}",
            self.port, self.user, self.hostname
        )
    }

    /// JSON projection, carrying any advisory warnings.
    #[must_use]
    pub fn to_output(&self, warnings: Vec<String>) -> ConnectionOutput {
        ConnectionOutput {
            hostname: self.hostname.to_string(),
            user: self.user.clone(),
            port: self.port,
            host_alias: self.host_alias.clone(),
            ssh_command: self.ssh_command(),
            ssh_config: self.ssh_config(),
            warnings,
        }
    }
}
