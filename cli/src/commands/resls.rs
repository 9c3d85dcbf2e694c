//! `rlc resls <host/app/instance>`: list files kept for an instance.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::InstanceInspector;
use crate::domain::address::InstancePath;

/// Arguments for the resls command.
#[derive(Args, Debug)]
pub struct ResLsArgs {
    /// Instance address: hostName/appId/instanceId
    pub instance: String,
}

/// Run `rlc resls`.
///
/// # Errors
///
/// Returns an error if the address is malformed or the launcher call fails.
pub async fn run(app: &AppContext, api: &impl InstanceInspector, args: &ResLsArgs) -> Result<ExitCode> {
    let path: InstancePath = args.instance.parse()?;
    let files = api.file_info(&path).await?;
    app.renderer().render_files(&path, &files)?;
    Ok(ExitCode::SUCCESS)
}
