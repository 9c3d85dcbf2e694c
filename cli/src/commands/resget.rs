//! `rlc resget [-f file] <host/app/instance/resource>`: download a resource.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::ResourceTransfer;
use crate::commands::{OutputFileArgs, emit_bytes};
use crate::domain::address::ResourcePath;

/// Arguments for the resget command.
#[derive(Args, Debug)]
pub struct ResGetArgs {
    #[command(flatten)]
    pub output: OutputFileArgs,

    /// Resource address: hostName/appId/instanceId/resName
    pub resource: String,
}

/// Run `rlc resget`.
///
/// # Errors
///
/// Returns an error if the address is malformed, the download fails, or the
/// content cannot be written locally.
pub async fn run(app: &AppContext, api: &impl ResourceTransfer, args: &ResGetArgs) -> Result<ExitCode> {
    let path: ResourcePath = args.resource.parse()?;
    let content = api.download(&path).await?;
    emit_bytes(app, &content, args.output.file.as_deref()).await?;
    Ok(ExitCode::SUCCESS)
}
