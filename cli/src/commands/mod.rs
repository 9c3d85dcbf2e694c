//! Command implementations
//!
//! One module per subcommand. Every handler parses its address argument
//! first, so malformed input is rejected before any request is sent.

pub mod attach;
pub mod config;
pub mod delete;
pub mod exec;
pub mod info;
pub mod log;
pub mod ls;
pub mod modify;
pub mod new;
pub mod resdel;
pub mod resget;
pub mod resgetio;
pub mod resls;
pub mod resput;
pub mod run;
pub mod stop;
pub mod version;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use rlc_common::{InstanceParams, InstanceState, OutputStream};
use tokio::io::AsyncWriteExt;

use crate::app::AppContext;
use crate::application::services::console::AttachOutcome;
use crate::domain::instance::parse_bool;

/// Conventional exit status after Ctrl-C.
pub const EXIT_INTERRUPTED: u8 = 130;

/// Stream selection shared by `run`, `attach` and `resgetio`.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct StreamArgs {
    /// Select the standard output stream
    #[arg(short = 'o', long, conflicts_with = "stderr")]
    pub stdout: bool,

    /// Select the standard error stream
    #[arg(short = 'e', long)]
    pub stderr: bool,
}

impl StreamArgs {
    /// The stream explicitly requested, if any.
    #[must_use]
    pub fn selected(self) -> Option<OutputStream> {
        if self.stderr {
            Some(OutputStream::Stderr)
        } else if self.stdout {
            Some(OutputStream::Stdout)
        } else {
            None
        }
    }
}

/// Instance parameters accepted by `new` and `modify`.
#[derive(Args, Debug, Clone, Default)]
pub struct InstanceParamArgs {
    /// Request the running state
    #[arg(short = 'r', long = "run")]
    pub run: bool,

    /// Run the process as this user
    #[arg(short = 'u', long)]
    pub user: Option<String>,

    /// Command line passed to the application
    #[arg(short = 'c', long, allow_hyphen_values = true)]
    pub cmdline: Option<String>,

    /// Keep the instance after it stops (1|0|yes|no|true|false)
    #[arg(short = 'p', long, value_name = "BOOL", value_parser = parse_bool)]
    pub persistent: Option<bool>,

    /// Merge stderr into stdout (1|0|yes|no|true|false)
    #[arg(short = 's', long = "unifystdout", value_name = "BOOL", value_parser = parse_bool)]
    pub unify_stdout: Option<bool>,
}

impl InstanceParamArgs {
    /// Request body carrying only the options that were given.
    #[must_use]
    pub fn to_params(&self) -> InstanceParams {
        InstanceParams {
            state: self.run.then_some(InstanceState::Running),
            cmdline: self.cmdline.clone(),
            user: self.user.clone(),
            persistent: self.persistent,
            unifystdout: self.unify_stdout,
        }
    }
}

/// Write downloaded bytes to `file`, or to stdout when no file is given.
///
/// # Errors
///
/// Returns an error if the file or stdout cannot be written.
pub async fn emit_bytes(app: &AppContext, bytes: &[u8], file: Option<&Path>) -> Result<()> {
    match file {
        Some(path) => {
            tokio::fs::write(path, bytes)
                .await
                .with_context(|| format!("cannot write {}", path.display()))?;
            app.output
                .success(&format!("Saved {} bytes to {}", bytes.len(), path.display()));
        }
        None => {
            let mut out = tokio::io::stdout();
            out.write_all(bytes).await.context("writing to stdout")?;
            out.flush().await.context("flushing stdout")?;
        }
    }
    Ok(())
}

/// Exit status for a finished console attachment.
#[must_use]
pub fn attach_exit_status(outcome: AttachOutcome) -> u8 {
    match outcome {
        AttachOutcome::Finished | AttachOutcome::InputClosed => 0,
        AttachOutcome::Interrupted => EXIT_INTERRUPTED,
    }
}

/// [`attach_exit_status`] as an `ExitCode`.
#[must_use]
pub fn attach_exit_code(outcome: AttachOutcome) -> ExitCode {
    ExitCode::from(attach_exit_status(outcome))
}

/// Optional local file argument shared by the download commands.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputFileArgs {
    /// Save to this file instead of printing
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,
}
