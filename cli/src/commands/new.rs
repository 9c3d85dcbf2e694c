//! `rlc new [options] <host/app>`: create an instance.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::InstanceLifecycle;
use crate::application::services::lifecycle;
use crate::commands::InstanceParamArgs;
use crate::domain::address::AppPath;

/// Arguments for the new command.
#[derive(Args, Debug)]
pub struct NewArgs {
    #[command(flatten)]
    pub params: InstanceParamArgs,

    /// Application address: hostName/appId
    pub app: String,
}

/// Run `rlc new`.
///
/// # Errors
///
/// Returns an error if the address is malformed or the launcher call fails.
pub async fn run(app: &AppContext, api: &impl InstanceLifecycle, args: &NewArgs) -> Result<ExitCode> {
    let path: AppPath = args.app.parse()?;
    let created = lifecycle::create(api, &path, &args.params.to_params()).await?;
    app.renderer().render_instance(&path, &created)?;
    Ok(ExitCode::SUCCESS)
}
