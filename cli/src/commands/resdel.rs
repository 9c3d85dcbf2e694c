//! `rlc resdel <host/app/instance/resource>`: delete a resource.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::ResourceTransfer;
use crate::domain::address::ResourcePath;

/// Arguments for the resdel command.
#[derive(Args, Debug)]
pub struct ResDelArgs {
    /// Resource address: hostName/appId/instanceId/resName
    pub resource: String,
}

/// Run `rlc resdel`.
///
/// # Errors
///
/// Returns an error if the address is malformed or the launcher call fails.
pub async fn run(app: &AppContext, api: &impl ResourceTransfer, args: &ResDelArgs) -> Result<ExitCode> {
    let path: ResourcePath = args.resource.parse()?;
    api.remove(&path).await?;
    app.renderer().render_done(&format!("Deleted {path}"))?;
    Ok(ExitCode::SUCCESS)
}
