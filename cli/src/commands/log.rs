//! `rlc log [-f file] <host/app/instance>`: fetch the launcher log of an instance.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::InstanceInspector;
use crate::commands::{OutputFileArgs, emit_bytes};
use crate::domain::address::InstancePath;

/// Arguments for the log command.
#[derive(Args, Debug)]
pub struct LogArgs {
    #[command(flatten)]
    pub output: OutputFileArgs,

    /// Instance address: hostName/appId/instanceId
    pub instance: String,
}

/// Run `rlc log`.
///
/// # Errors
///
/// Returns an error if the address is malformed, the launcher call fails, or
/// the log cannot be written locally.
pub async fn run(app: &AppContext, api: &impl InstanceInspector, args: &LogArgs) -> Result<ExitCode> {
    let path: InstancePath = args.instance.parse()?;
    let log = api.read_log(&path).await?;
    emit_bytes(app, &log, args.output.file.as_deref()).await?;
    Ok(ExitCode::SUCCESS)
}
