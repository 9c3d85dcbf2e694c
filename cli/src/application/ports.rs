//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `rlc_common`, never from
//! `crate::infra`, `crate::commands`, or `crate::output`.

use std::path::PathBuf;

use anyhow::Result;
use rlc_common::{FileInfo, HostInfo, InstanceInfo, InstanceParams, OutputStream};

use crate::domain::address::{AppPath, InstancePath, ResourcePath};
use crate::domain::config::RlcConfig;

// ── Value Types ───────────────────────────────────────────────────────────────

/// Which part of an instance's captured output to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputQuery {
    pub stream: OutputStream,
    /// Byte offset to start from. `None` means the beginning.
    pub offset: Option<u64>,
    /// Historical run number; `None` selects the current run.
    pub run_num: Option<u32>,
}

impl OutputQuery {
    /// Current-run output of `stream` starting at `offset`.
    #[must_use]
    pub fn from_offset(stream: OutputStream, offset: u64) -> Self {
        Self {
            stream,
            offset: Some(offset),
            run_num: None,
        }
    }
}

/// Extra knobs for a modify request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifyOptions {
    /// Ask the launcher to answer only once the state change has completed.
    pub sync: bool,
}

// ── Launcher Port Traits ──────────────────────────────────────────────────────

/// Discovery of hosts, applications and their instances.
#[allow(async_fn_in_trait)]
pub trait LauncherDirectory {
    /// List hosts matching the optional host and app glob patterns.
    async fn list(&self, host_pattern: Option<&str>, app_pattern: Option<&str>)
    -> Result<Vec<HostInfo>>;
}

/// Read-only queries on a single instance.
#[allow(async_fn_in_trait)]
pub trait InstanceInspector {
    /// Current description of the instance.
    async fn instance(&self, path: &InstancePath) -> Result<InstanceInfo>;
    /// Raw bytes of captured stdout or stderr.
    async fn read_output(&self, path: &InstancePath, query: &OutputQuery) -> Result<Vec<u8>>;
    /// The launcher-side log of the instance.
    async fn read_log(&self, path: &InstancePath) -> Result<Vec<u8>>;
    /// Capture files kept for the instance, with their current sizes.
    async fn file_info(&self, path: &InstancePath) -> Result<Vec<FileInfo>>;
}

/// Create, modify and delete instances.
#[allow(async_fn_in_trait)]
pub trait InstanceLifecycle {
    /// Create a new instance of `app`.
    async fn create(&self, app: &AppPath, params: &InstanceParams) -> Result<InstanceInfo>;
    /// Apply `params` to an existing instance.
    async fn modify(
        &self,
        path: &InstancePath,
        params: &InstanceParams,
        options: ModifyOptions,
    ) -> Result<InstanceInfo>;
    /// Delete the instance and its data.
    async fn delete(&self, path: &InstancePath) -> Result<()>;
}

/// Resource files stored alongside an instance.
#[allow(async_fn_in_trait)]
pub trait ResourceTransfer {
    /// Raw bytes of the resource.
    async fn download(&self, path: &ResourcePath) -> Result<Vec<u8>>;
    /// Create or replace the resource with `content`.
    async fn upload(&self, path: &ResourcePath, content: Vec<u8>) -> Result<()>;
    /// Delete the resource.
    async fn remove(&self, path: &ResourcePath) -> Result<()>;
}

/// Feeding the standard input of a running instance.
#[allow(async_fn_in_trait)]
pub trait StdinWriter {
    /// Send `text` verbatim to the instance's stdin.
    async fn write_stdin(&self, path: &InstancePath, text: &str) -> Result<()>;
}

/// Composite trait: any type implementing all five sub-traits is a `LauncherApi`.
pub trait LauncherApi:
    LauncherDirectory + InstanceInspector + InstanceLifecycle + ResourceTransfer + StdinWriter
{
}

/// Blanket implementation: any type implementing all five sub-traits is a `LauncherApi`.
impl<T> LauncherApi for T where
    T: LauncherDirectory + InstanceInspector + InstanceLifecycle + ResourceTransfer + StdinWriter
{
}

// ── Console Input Port ────────────────────────────────────────────────────────

/// Line-oriented local input forwarded to an attached instance.
#[allow(async_fn_in_trait)]
pub trait LineSource {
    /// Next line including its terminator, or `None` once input is closed.
    async fn next_line(&mut self) -> Result<Option<String>>;
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts configuration persistence (load/save).
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when none is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored file exists but cannot be read or parsed.
    fn load(&self) -> Result<RlcConfig>;
    /// Persist `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, config: &RlcConfig) -> Result<()>;
    /// Location of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
