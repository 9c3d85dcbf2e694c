//! `rlc exec <host/app> [args...]`: run an application once and discard it.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use tokio_util::sync::CancellationToken;

use crate::app::AppContext;
use crate::application::ports::{InstanceInspector, InstanceLifecycle, LineSource, StdinWriter};
use crate::application::services::exec;
use crate::commands::attach_exit_code;
use crate::domain::address::AppPath;

/// Arguments for the exec command.
#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Poll interval in milliseconds
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub poll: Option<u64>,

    /// Application address: hostName/appId
    pub app: String,

    /// Arguments joined with spaces into the instance command line
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Run `rlc exec`.
///
/// # Errors
///
/// Returns an error if the address is malformed, the instance cannot be
/// created, streaming fails, or the instance cannot be cleaned up.
pub async fn run<A, I>(
    app: &AppContext,
    api: &A,
    args: &ExecArgs,
    input: I,
    cancel: &CancellationToken,
) -> Result<ExitCode>
where
    A: InstanceInspector + InstanceLifecycle + StdinWriter,
    I: LineSource,
{
    let path: AppPath = args.app.parse()?;
    let mut out = tokio::io::stdout();
    let outcome = exec::exec(
        api,
        &path,
        &args.args,
        app.poll_interval(args.poll),
        input,
        &mut out,
        cancel,
    )
    .await?;
    Ok(attach_exit_code(outcome))
}
