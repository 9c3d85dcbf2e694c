//! Domain types and validators for rlc configuration.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &["launcher.url", "console.poll_ms"];

/// Launcher contacted when nothing else is configured.
pub const DEFAULT_URL: &str = "http://localhost:7000";

/// Delay between two console poll cycles.
pub const DEFAULT_POLL_MS: u64 = 1000;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.rlc/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RlcConfig {
    /// Remote launcher settings.
    pub launcher: LauncherConfig,
    /// Console attachment settings.
    pub console: ConsoleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Base URL of the launcher, without the `/api/<version>` suffix.
    #[serde(default = "default_url")]
    pub url: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Poll interval in milliseconds.
    #[serde(default = "default_poll_ms")]
    pub poll_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            poll_ms: default_poll_ms(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_poll_ms() -> u64 {
    DEFAULT_POLL_MS
}

impl RlcConfig {
    /// Console poll interval as a `Duration`.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.console.poll_ms)
    }

    /// Check values that did not pass through [`RlcConfig::set`], such as
    /// those read from a hand-edited file.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> Result<()> {
        validate_url(&self.launcher.url)?;
        parse_poll_ms(&self.console.poll_ms.to_string())?;
        Ok(())
    }

    /// Validate and apply `key = value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid for it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        match key {
            "launcher.url" => self.launcher.url = value.trim_end_matches('/').to_string(),
            "console.poll_ms" => self.console.poll_ms = parse_poll_ms(value)?,
            _ => {}
        }
        Ok(())
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    match key {
        "launcher.url" => validate_url(value),
        "console.poll_ms" => parse_poll_ms(value).map(|_| ()),
        _ => Ok(()),
    }
}

/// Validates a launcher base URL: `http://` or `https://` followed by a host.
///
/// # Errors
///
/// Returns an error if the scheme is missing or nothing follows it.
pub fn validate_url(value: &str) -> Result<()> {
    let rest = value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"));
    match rest {
        Some(rest) if !rest.is_empty() && !rest.starts_with('/') => Ok(()),
        _ => Err(ConfigError::InvalidValue {
            key: "launcher.url".to_string(),
            value: value.to_string(),
            expected: "an http:// or https:// URL",
        }
        .into()),
    }
}

/// Parses a poll interval in milliseconds; zero is rejected.
///
/// # Errors
///
/// Returns an error if the value is not a positive integer.
pub fn parse_poll_ms(value: &str) -> Result<u64> {
    match value.parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::InvalidValue {
            key: "console.poll_ms".to_string(),
            value: value.to_string(),
            expected: "a positive number of milliseconds",
        }
        .into()),
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
