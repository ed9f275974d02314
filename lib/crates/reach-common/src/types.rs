use serde::{Deserialize, Serialize};

/// Host platform the tunnel endpoint runs on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Linux,
    Macos,
    Docker,
}

impl Platform {
    /// Lowercase name as used in config files and CLI flags.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Macos => "macos",
            Self::Docker => "docker",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linux" => Ok(Self::Linux),
            "macos" => Ok(Self::Macos),
            "docker" => Ok(Self::Docker),
            other => Err(format!("unknown platform '{other}'")),
        }
    }
}

/// Output of `reach info --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionOutput {
    pub hostname: String,
    pub user: String,
    pub port: u16,
    pub host_alias: String,
    /// One-line SSH command.
    pub ssh_command: String,
    /// `~/.ssh/config` stanza.
    pub ssh_config: String,
    /// Advisory warnings (service not active, user missing).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Where the tunnel identifier in effect was taken from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TunnelIdSource {
    /// `--tunnel` flag.
    Flag,
    /// `TUNNEL_ID` environment variable.
    Environment,
    /// `tunnel.id` in the reach config file.
    Config,
    /// `tunnel:` key of the tunnel client's own config file.
    TunnelConfigFile,
}

/// A tunnel client binary and whether it is installed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderStatus {
    pub name: String,
    pub installed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Output of `reach status --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusOutput {
    pub platform: Platform,
    pub service: String,
    pub service_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tunnel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tunnel_id_source: Option<TunnelIdSource>,
    pub providers: Vec<ProviderStatus>,
}
