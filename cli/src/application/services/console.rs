//! Console attachment: tail an instance's output and feed its stdin.
//!
//! One cooperative loop polls the launcher for new output while a second
//! future forwards local input lines. Both run on the same task inside a
//! `tokio::select!`, so neither blocks the other and an interrupt aborts
//! whichever RPC or sleep is in flight.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use rlc_common::OutputStream;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::application::ports::{InstanceInspector, LineSource, OutputQuery, StdinWriter};
use crate::domain::address::InstancePath;
use crate::domain::instance::{reattach_offset, stream_size};

/// Tailing position on one output stream of one instance.
///
/// `offset` is only ever advanced by [`poll_once`], by exactly the number of
/// bytes it emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleSession {
    pub path: InstancePath,
    pub stream: OutputStream,
    pub offset: u64,
    pub poll_interval: Duration,
}

impl ConsoleSession {
    #[must_use]
    pub fn new(path: InstancePath, stream: OutputStream, offset: u64, poll_interval: Duration) -> Self {
        Self {
            path,
            stream,
            offset,
            poll_interval,
        }
    }
}

/// How an attachment ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachOutcome {
    /// The instance is no longer running and all output was emitted.
    Finished,
    /// The cancellation token fired.
    Interrupted,
    /// Local input reached end-of-file.
    InputClosed,
}

/// Session positioned just before the tail of an instance that is already
/// producing output.
///
/// # Errors
///
/// Returns an error if the launcher cannot be queried or does not list a
/// capture file for `stream`.
pub async fn reattach_session(
    api: &impl InstanceInspector,
    path: InstancePath,
    stream: OutputStream,
    poll_interval: Duration,
) -> Result<ConsoleSession> {
    let files = api.file_info(&path).await?;
    let size =
        stream_size(&files, stream).ok_or_else(|| anyhow!("cannot determine current file size"))?;
    let offset = reattach_offset(size);
    debug!(instance = %path, %stream, size, offset, "re-attaching");
    Ok(ConsoleSession::new(path, stream, offset, poll_interval))
}

/// Fetch output from the session offset, emit it, and advance the offset.
async fn fetch_and_emit<W>(
    api: &impl InstanceInspector,
    session: &mut ConsoleSession,
    output: &mut W,
) -> Result<usize>
where
    W: AsyncWrite + Unpin,
{
    let query = OutputQuery::from_offset(session.stream, session.offset);
    let chunk = api.read_output(&session.path, &query).await?;
    if !chunk.is_empty() {
        output
            .write_all(&chunk)
            .await
            .context("writing console output")?;
        output.flush().await.context("flushing console output")?;
        session.offset += chunk.len() as u64;
    }
    Ok(chunk.len())
}

/// One poll cycle: fetch output from the session offset, emit it, advance the
/// offset, then report whether the instance is still running.
///
/// Once the instance is seen stopped, the stream is read one last time so
/// output written between the fetch and the state query is not lost.
///
/// # Errors
///
/// Returns an error if either launcher query fails or `output` rejects the
/// write. The offset is left untouched when the fetch fails.
pub async fn poll_once<W>(
    api: &impl InstanceInspector,
    session: &mut ConsoleSession,
    output: &mut W,
) -> Result<bool>
where
    W: AsyncWrite + Unpin,
{
    let mut bytes = fetch_and_emit(api, session, output).await?;
    let running = api.instance(&session.path).await?.is_running();
    if !running {
        bytes += fetch_and_emit(api, session, output).await?;
    }
    debug!(
        instance = %session.path,
        bytes,
        offset = session.offset,
        running,
        "poll cycle"
    );
    Ok(running)
}

/// Attach to the session until the instance stops, input closes, or `cancel`
/// fires.
///
/// # Errors
///
/// Returns the first launcher, transport, or local I/O error raised by
/// either the poll loop or the input forwarder.
pub async fn attach<A, I, W>(
    api: &A,
    session: &mut ConsoleSession,
    input: I,
    output: &mut W,
    cancel: &CancellationToken,
) -> Result<AttachOutcome>
where
    A: InstanceInspector + StdinWriter,
    I: LineSource,
    W: AsyncWrite + Unpin,
{
    let path = session.path.clone();
    tokio::select! {
        biased;
        () = cancel.cancelled() => {
            debug!(instance = %path, "attachment interrupted");
            Ok(AttachOutcome::Interrupted)
        }
        res = pump(api, session, output) => res.map(|()| AttachOutcome::Finished),
        res = forward_input(api, &path, input) => res.map(|()| AttachOutcome::InputClosed),
    }
}

async fn pump<W>(
    api: &impl InstanceInspector,
    session: &mut ConsoleSession,
    output: &mut W,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while poll_once(api, session, output).await? {
        tokio::time::sleep(session.poll_interval).await;
    }
    Ok(())
}

async fn forward_input(
    api: &impl StdinWriter,
    path: &InstancePath,
    mut input: impl LineSource,
) -> Result<()> {
    while let Some(line) = input.next_line().await? {
        debug!(instance = %path, len = line.len(), "forwarding input");
        api.write_stdin(path, &line).await?;
    }
    Ok(())
}
