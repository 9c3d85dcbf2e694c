//! `rlc run [-o|-e] [--poll ms] <host/app/instance>`: start an instance,
//! optionally attaching to its output.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use tokio_util::sync::CancellationToken;

use crate::app::AppContext;
use crate::application::ports::{InstanceInspector, InstanceLifecycle, LineSource, StdinWriter};
use crate::application::services::console::{self, ConsoleSession};
use crate::application::services::lifecycle;
use crate::commands::{StreamArgs, attach_exit_code};
use crate::domain::address::InstancePath;

/// Arguments for the run command.
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub stream: StreamArgs,

    /// Poll interval in milliseconds while attached
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub poll: Option<u64>,

    /// Instance address: hostName/appId/instanceId
    pub instance: String,
}

impl RunArgs {
    /// Whether the command stays attached to the instance's output.
    #[must_use]
    pub fn attaches(&self) -> bool {
        self.stream.selected().is_some()
    }
}

/// Run `rlc run`.
///
/// Without a stream flag the started instance is printed. With `-o` or `-e`
/// the console is attached from the beginning of that stream.
///
/// # Errors
///
/// Returns an error if the address is malformed, a launcher call fails, or
/// console output cannot be written.
pub async fn run<A, I>(
    app: &AppContext,
    api: &A,
    args: &RunArgs,
    input: I,
    cancel: &CancellationToken,
) -> Result<ExitCode>
where
    A: InstanceInspector + InstanceLifecycle + StdinWriter,
    I: LineSource,
{
    let path: InstancePath = args.instance.parse()?;
    let started = lifecycle::run(api, &path).await?;

    let Some(stream) = args.stream.selected() else {
        app.renderer().render_instance(&path.app(), &started)?;
        return Ok(ExitCode::SUCCESS);
    };

    let mut session = ConsoleSession::new(path, stream, 0, app.poll_interval(args.poll));
    let mut out = tokio::io::stdout();
    let outcome = console::attach(api, &mut session, input, &mut out, cancel).await?;
    Ok(attach_exit_code(outcome))
}
