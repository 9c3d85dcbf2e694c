use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of an application instance, as reported by the launcher.
///
/// The launcher owns the value set; anything the client does not recognise
/// deserializes to `Unknown` and is treated as "not running".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InstanceState {
    Created,
    Running,
    Stopped,
    #[serde(other)]
    Unknown,
}

impl InstanceState {
    /// Lowercase wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for InstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output stream captured by the launcher for a running instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputStream {
    #[default]
    Stdout,
    Stderr,
}

impl OutputStream {
    /// Value of the `what` query parameter selecting this stream.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

impl fmt::Display for OutputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A launcher host and the applications it can start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HostInfo {
    #[serde(rename = "hostName")]
    pub host_name: String,
    #[serde(default)]
    pub arch: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub apps: Vec<AppInfo>,
}

/// An application registered with a launcher host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppInfo {
    pub name: String,
    #[serde(rename = "class", default)]
    pub class_name: String,
    #[serde(default)]
    pub arch: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Instances of this application currently known to the launcher.
    #[serde(default)]
    pub inst: Vec<InstanceInfo>,
}

/// An application instance.
///
/// Owned by the launcher; every copy held by the client is a snapshot that
/// may already be stale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstanceInfo {
    pub num: u32,
    pub state: InstanceState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<u32>,
    #[serde(default)]
    pub persistent: bool,
    #[serde(default)]
    pub unifystdout: bool,
    #[serde(default)]
    pub cmdline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl InstanceInfo {
    /// Anything other than `running` counts as not running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == InstanceState::Running
    }
}

/// A downloadable artifact in an instance's storage area.
///
/// Exactly one of `stdout`, `stderr`, `log` is set for I/O files; named
/// resources carry `name` instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub stdout: bool,
    #[serde(default)]
    pub stderr: bool,
    #[serde(default)]
    pub log: bool,
    #[serde(default)]
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_num: Option<u32>,
}

impl FileInfo {
    /// Whether this entry is the capture file of `stream`.
    #[must_use]
    pub fn captures(&self, stream: OutputStream) -> bool {
        match stream {
            OutputStream::Stdout => self.stdout,
            OutputStream::Stderr => self.stderr,
        }
    }
}

/// Body of create/modify requests. Unset fields are left to the launcher.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstanceParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<InstanceState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmdline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unifystdout: Option<bool>,
}

impl InstanceParams {
    /// Request the `running` state and nothing else.
    #[must_use]
    pub fn running() -> Self {
        Self {
            state: Some(InstanceState::Running),
            ..Self::default()
        }
    }

    /// Request the `stopped` state and nothing else.
    #[must_use]
    pub fn stopped() -> Self {
        Self {
            state: Some(InstanceState::Stopped),
            ..Self::default()
        }
    }
}
