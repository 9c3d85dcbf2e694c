//! One-shot execution: create a transient instance, stream its stdout, then
//! stop and delete it whatever happened while streaming.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::time::Duration;

use anyhow::Result;
use rlc_common::OutputStream;
use tokio::io::AsyncWrite;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::application::ports::{InstanceInspector, InstanceLifecycle, LineSource, StdinWriter};
use crate::application::services::console::{self, AttachOutcome, ConsoleSession};
use crate::application::services::lifecycle;
use crate::domain::address::{AppPath, InstancePath};
use crate::domain::instance::exec_params;

/// Run `app` with `args` as its command line and stream its stdout to
/// `output` until it exits, input closes, or `cancel` fires.
///
/// Once the instance exists, a synchronous stop followed by a delete is
/// always issued against it before returning.
///
/// # Errors
///
/// Returns the creation error if the instance could not be created, the
/// streaming error if attachment failed (cleanup failures are then only
/// logged), or otherwise the first cleanup error.
pub async fn exec<A, I, W>(
    api: &A,
    app: &AppPath,
    args: &[String],
    poll_interval: Duration,
    input: I,
    output: &mut W,
    cancel: &CancellationToken,
) -> Result<AttachOutcome>
where
    A: InstanceInspector + InstanceLifecycle + StdinWriter,
    I: LineSource,
    W: AsyncWrite + Unpin,
{
    let created = lifecycle::create(api, app, &exec_params(args)).await?;
    let path = app.instance(created.num);
    info!(instance = %path, "exec instance created");

    let mut session = ConsoleSession::new(path.clone(), OutputStream::Stdout, 0, poll_interval);
    let streamed = console::attach(api, &mut session, input, output, cancel).await;
    let cleaned = teardown(api, &path).await;

    match streamed {
        Ok(outcome) => {
            cleaned?;
            Ok(outcome)
        }
        Err(e) => {
            if let Err(cleanup) = cleaned {
                warn!(instance = %path, error = %cleanup, "cleanup after failed exec did not complete");
            }
            Err(e)
        }
    }
}

/// Stop then delete. Delete is attempted even when stop fails.
async fn teardown(api: &impl InstanceLifecycle, path: &InstancePath) -> Result<()> {
    let stopped = lifecycle::stop(api, path).await;
    let deleted = lifecycle::delete(api, path).await;
    stopped?;
    deleted
}
