//! `rlc stop <host/app/instance>`: stop an instance and wait for it.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::InstanceLifecycle;
use crate::application::services::lifecycle;
use crate::domain::address::InstancePath;
use crate::output::progress;

/// Arguments for the stop command.
#[derive(Args, Debug)]
pub struct StopArgs {
    /// Instance address: hostName/appId/instanceId
    pub instance: String,
}

/// Run `rlc stop`.
///
/// # Errors
///
/// Returns an error if the address is malformed or the launcher call fails.
pub async fn run(app: &AppContext, api: &impl InstanceLifecycle, args: &StopArgs) -> Result<ExitCode> {
    let path: InstancePath = args.instance.parse()?;

    let spinner = (app.output.show_progress() && !app.is_json())
        .then(|| progress::spinner(&format!("Stopping {path}...")));
    let result = lifecycle::stop(api, &path).await;
    if let Some(pb) = &spinner {
        match &result {
            Ok(_) => progress::finish_ok(pb, &format!("Stopped {path}")),
            Err(_) => progress::finish_clear(pb),
        }
    }

    let stopped = result?;
    app.renderer().render_instance(&path.app(), &stopped)?;
    Ok(ExitCode::SUCCESS)
}
