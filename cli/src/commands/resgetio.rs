//! `rlc resgetio [-f file] [-o|-e] [-n num] <host/app/instance>`: download
//! captured stdout or stderr.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::{InstanceInspector, OutputQuery};
use crate::commands::{OutputFileArgs, StreamArgs, emit_bytes};
use crate::domain::address::InstancePath;

/// Arguments for the resgetio command.
#[derive(Args, Debug)]
pub struct ResGetIoArgs {
    #[command(flatten)]
    pub output: OutputFileArgs,

    #[command(flatten)]
    pub stream: StreamArgs,

    /// Run number of a previous execution (default: current run)
    #[arg(short = 'n', long = "num", value_name = "NUM")]
    pub run_num: Option<u32>,

    /// Instance address: hostName/appId/instanceId
    pub instance: String,
}

/// Run `rlc resgetio`.
///
/// # Errors
///
/// Returns an error if the address is malformed, the launcher call fails, or
/// the content cannot be written locally.
pub async fn run(
    app: &AppContext,
    api: &impl InstanceInspector,
    args: &ResGetIoArgs,
) -> Result<ExitCode> {
    let path: InstancePath = args.instance.parse()?;
    let query = OutputQuery {
        stream: args.stream.selected().unwrap_or_default(),
        offset: None,
        run_num: args.run_num,
    };
    let content = api.read_output(&path, &query).await?;
    emit_bytes(app, &content, args.output.file.as_deref()).await?;
    Ok(ExitCode::SUCCESS)
}
