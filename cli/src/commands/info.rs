//! `rlc info <host/app/instance>`: show one instance.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::InstanceInspector;
use crate::domain::address::InstancePath;

/// Arguments for the info command.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Instance address: hostName/appId/instanceId
    pub instance: String,
}

/// Run `rlc info`.
///
/// # Errors
///
/// Returns an error if the address is malformed or the launcher call fails.
pub async fn run(app: &AppContext, api: &impl InstanceInspector, args: &InfoArgs) -> Result<ExitCode> {
    let path: InstancePath = args.instance.parse()?;
    let info = api.instance(&path).await?;
    app.renderer().render_instance(&path.app(), &info)?;
    Ok(ExitCode::SUCCESS)
}
