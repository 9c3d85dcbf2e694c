//! `rlc resput -f file <host/app/instance/resource>`: upload a resource.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::ResourceTransfer;
use crate::domain::address::ResourcePath;

/// Arguments for the resput command.
#[derive(Args, Debug)]
pub struct ResPutArgs {
    /// Local file to upload
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: PathBuf,

    /// Resource address: hostName/appId/instanceId/resName
    pub resource: String,
}

/// Run `rlc resput`.
///
/// # Errors
///
/// Returns an error if the address is malformed, the local file cannot be
/// read, or the upload fails.
pub async fn run(app: &AppContext, api: &impl ResourceTransfer, args: &ResPutArgs) -> Result<ExitCode> {
    let path: ResourcePath = args.resource.parse()?;
    let content = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("cannot read {}", args.file.display()))?;
    let size = content.len();
    api.upload(&path, content).await?;
    app.renderer()
        .render_done(&format!("Uploaded {size} bytes to {path}"))?;
    Ok(ExitCode::SUCCESS)
}
