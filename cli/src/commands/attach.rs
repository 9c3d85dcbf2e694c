//! `rlc attach [-o|-e] [--poll ms] <host/app/instance>`: tail a running
//! instance and forward stdin to it.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use tokio_util::sync::CancellationToken;

use crate::app::AppContext;
use crate::application::ports::{InstanceInspector, LineSource, StdinWriter};
use crate::application::services::console;
use crate::commands::{StreamArgs, attach_exit_code};
use crate::domain::address::InstancePath;

/// Arguments for the attach command.
#[derive(Args, Debug)]
pub struct AttachArgs {
    #[command(flatten)]
    pub stream: StreamArgs,

    /// Poll interval in milliseconds
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub poll: Option<u64>,

    /// Instance address: hostName/appId/instanceId
    pub instance: String,
}

/// Run `rlc attach`.
///
/// Output starts a little before the current end of the stream (stdout
/// unless `-e` is given), so recent lines are visible right away.
///
/// # Errors
///
/// Returns an error if the address is malformed, the stream size is unknown,
/// a launcher call fails, or console output cannot be written.
pub async fn run<A, I>(
    app: &AppContext,
    api: &A,
    args: &AttachArgs,
    input: I,
    cancel: &CancellationToken,
) -> Result<ExitCode>
where
    A: InstanceInspector + StdinWriter,
    I: LineSource,
{
    let path: InstancePath = args.instance.parse()?;
    let stream = args.stream.selected().unwrap_or_default();
    let mut session =
        console::reattach_session(api, path, stream, app.poll_interval(args.poll)).await?;
    let mut out = tokio::io::stdout();
    let outcome = console::attach(api, &mut session, input, &mut out, cancel).await?;
    Ok(attach_exit_code(outcome))
}
