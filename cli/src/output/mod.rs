//! Output formatting module

pub mod human;
pub mod json;
pub mod progress;
pub mod styles;

use std::path::Path;

use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize as _;
use rlc_common::{FileInfo, HostInfo, InstanceInfo};

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use styles::Styles;

use crate::domain::address::{AppPath, InstancePath};
use crate::domain::config::RlcConfig;
use crate::domain::error::{ErrorClass, RemoteServiceError};

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠` to stderr. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            eprintln!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print an error message to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {msg}", "Error:".style(self.styles.error));
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    /// Report a failed command.
    ///
    /// Prints a single line classified by [`ErrorClass`] (or the JSON error
    /// object when `json` is set); `verbose` appends the full error chain.
    pub fn failure(&self, err: &anyhow::Error, json: bool, verbose: bool) {
        let class = ErrorClass::of(err);
        let message = failure_message(err);
        if json {
            match json::format_error(&message, class.code()) {
                Ok(text) => println!("{text}"),
                Err(_) => self.error(&message),
            }
        } else {
            self.error(&message);
        }
        if verbose {
            eprintln!("{err:?}");
        }
    }
}

/// Single-line description of a failure.
#[must_use]
pub fn failure_message(err: &anyhow::Error) -> String {
    match ErrorClass::of(err) {
        ErrorClass::NotFound | ErrorClass::RemoteService => {
            match err.chain().find_map(|c| c.downcast_ref::<RemoteServiceError>()) {
                Some(svc) => format!("remote launcher responded with {svc}"),
                None => format!("{err:#}"),
            }
        }
        ErrorClass::Validation | ErrorClass::Transport | ErrorClass::Internal => {
            format!("{err:#}")
        }
    }
}

/// Renderer selected by the output mode.
pub enum Renderer<'a> {
    /// Human-readable terminal output.
    Human(HumanRenderer<'a>),
    /// Machine-readable JSON output.
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render the host listing.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_hosts(&self, hosts: &[HostInfo], long: bool) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_hosts(hosts, long);
                Ok(())
            }
            Self::Json(r) => r.render_hosts(hosts),
        }
    }

    /// Render one instance of `app`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_instance(&self, app: &AppPath, info: &InstanceInfo) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_instance(app, info);
                Ok(())
            }
            Self::Json(r) => r.render_instance(app, info),
        }
    }

    /// Render the files kept for an instance.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_files(&self, path: &InstancePath, files: &[FileInfo]) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_files(path, files);
                Ok(())
            }
            Self::Json(r) => r.render_files(path, files),
        }
    }

    /// Render the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &RlcConfig, path: &Path) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config(config, path);
                Ok(())
            }
            Self::Json(r) => r.render_config(config, path),
        }
    }

    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_version(version);
                Ok(())
            }
            Self::Json(r) => r.render_version(version),
        }
    }

    /// Acknowledge a command that returns no data.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_done(&self, message: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_done(message);
                Ok(())
            }
            Self::Json(r) => r.render_done(message),
        }
    }
}
