//! `rlc delete <host/app/instance>`: remove an instance.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::InstanceLifecycle;
use crate::application::services::lifecycle;
use crate::domain::address::InstancePath;

/// Arguments for the delete command.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Instance address: hostName/appId/instanceId
    pub instance: String,
}

/// Run `rlc delete`.
///
/// # Errors
///
/// Returns an error if the address is malformed or the launcher call fails.
pub async fn run(app: &AppContext, api: &impl InstanceLifecycle, args: &DeleteArgs) -> Result<ExitCode> {
    let path: InstancePath = args.instance.parse()?;
    lifecycle::delete(api, &path).await?;
    app.renderer().render_done("Instance successfully deleted")?;
    Ok(ExitCode::SUCCESS)
}
