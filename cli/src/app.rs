//! Application context: unified state passed to every command handler.
//!
//! Settings are layered once here: built-in defaults, then the YAML config
//! file, then `RLC_URL` / `--url`, then `--verbose`. Handlers read the
//! resolved values and never look at the environment themselves.

use std::time::Duration;

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::RlcConfig;
use crate::infra::config::YamlConfigStore;
use crate::infra::launcher::HttpLauncher;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Launcher URL from `--url` or `RLC_URL`.
    pub url: Option<String>,
    /// Print full error detail and debug logs.
    pub verbose: bool,
}

/// Effective settings after layering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Launcher base URL.
    pub url: String,
    /// Delay between console poll cycles.
    pub poll_interval: Duration,
    /// Debug mode.
    pub verbose: bool,
}

impl Settings {
    /// Overlay command-line values on the stored configuration.
    #[must_use]
    pub fn resolve(config: &RlcConfig, url: Option<&str>, verbose: bool) -> Self {
        Self {
            url: url.map_or_else(|| config.launcher.url.clone(), str::to_string),
            poll_interval: config.poll_interval(),
            verbose,
        }
    }
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Configuration file access.
    pub config_store: YamlConfigStore,
    /// Effective settings.
    pub settings: Settings,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        let config_store = YamlConfigStore::new();
        let config = config_store.load()?;

        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            config_store,
            settings: Settings::resolve(&config, flags.url.as_deref(), flags.verbose),
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// HTTP client for the configured launcher.
    ///
    /// # Errors
    ///
    /// Returns an error if the launcher URL is invalid.
    pub fn launcher(&self) -> Result<HttpLauncher> {
        HttpLauncher::new(&self.settings.url)
    }

    /// Poll interval for a console, honouring a per-command override in
    /// milliseconds.
    #[must_use]
    pub fn poll_interval(&self, override_ms: Option<u64>) -> Duration {
        override_ms.map_or(self.settings.poll_interval, Duration::from_millis)
    }
}
