//! `rlc modify [options] <host/app/instance>`: change instance parameters.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::InstanceLifecycle;
use crate::application::services::lifecycle;
use crate::commands::InstanceParamArgs;
use crate::domain::address::InstancePath;

/// Arguments for the modify command.
#[derive(Args, Debug)]
pub struct ModifyArgs {
    #[command(flatten)]
    pub params: InstanceParamArgs,

    /// Instance address: hostName/appId/instanceId
    pub instance: String,
}

/// Run `rlc modify`.
///
/// # Errors
///
/// Returns an error if the address is malformed or the launcher call fails.
pub async fn run(
    app: &AppContext,
    api: &impl InstanceLifecycle,
    args: &ModifyArgs,
) -> Result<ExitCode> {
    let path: InstancePath = args.instance.parse()?;
    let modified = lifecycle::modify(api, &path, &args.params.to_params()).await?;
    app.renderer().render_instance(&path.app(), &modified)?;
    Ok(ExitCode::SUCCESS)
}
