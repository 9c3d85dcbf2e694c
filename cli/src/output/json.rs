//! JSON output helpers.
//!
//! `--json` output goes to stdout, one pretty-printed document per command.
//! Failures use the error object produced by [`format_error`].

use std::path::Path;

use anyhow::{Context, Result};
use rlc_common::{FileInfo, HostInfo, InstanceInfo};
use serde::Serialize;

use crate::domain::address::{AppPath, InstancePath};
use crate::domain::config::RlcConfig;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

fn print<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{text}");
    Ok(())
}

/// Machine-readable renderer used when `--json` is set.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Render the host listing as the launcher returned it.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_hosts(&self, hosts: &[HostInfo]) -> Result<()> {
        print(hosts)
    }

    /// Render one instance, tagged with its address.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_instance(&self, app: &AppPath, info: &InstanceInfo) -> Result<()> {
        print(&serde_json::json!({
            "path": app.instance(info.num).to_string(),
            "instance": info,
        }))
    }

    /// Render the capture files and resources of an instance.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_files(&self, path: &InstancePath, files: &[FileInfo]) -> Result<()> {
        print(&serde_json::json!({
            "path": path.to_string(),
            "files": files,
        }))
    }

    /// Render the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_config(&self, config: &RlcConfig, path: &Path) -> Result<()> {
        print(&serde_json::json!({
            "path": path.display().to_string(),
            "config": config,
        }))
    }

    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        print(&serde_json::json!({ "version": version }))
    }

    /// Acknowledge a command that returns no data.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_done(&self, message: &str) -> Result<()> {
        print(&serde_json::json!({ "ok": true, "message": message }))
    }
}
