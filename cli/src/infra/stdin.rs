//! Line reader over the process's standard input.

use std::io::BufRead;

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use crate::application::ports::LineSource;

/// Reads stdin on a dedicated OS thread and hands complete lines to the
/// async side.
///
/// The thread is started on the first `next_line` call, so commands that
/// never attach a console leave stdin alone. Blocking stdin reads cannot be
/// cancelled; the thread is abandoned at process exit.
#[derive(Default)]
pub struct StdinLines {
    rx: Option<mpsc::Receiver<std::io::Result<String>>>,
}

impl StdinLines {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn spawn_reader() -> Result<mpsc::Receiver<std::io::Result<String>>> {
        let (tx, rx) = mpsc::channel(16);
        std::thread::Builder::new()
            .name("rlc-stdin".into())
            .spawn(move || {
                let mut stdin = std::io::stdin().lock();
                loop {
                    let mut line = String::new();
                    match stdin.read_line(&mut line) {
                        Ok(0) => return,
                        Ok(_) => {
                            if tx.blocking_send(Ok(line)).is_err() {
                                return;
                            }
                        }
                        Err(e) => {
                            let _ = tx.blocking_send(Err(e));
                            return;
                        }
                    }
                }
            })
            .context("failed to spawn stdin reader")?;
        Ok(rx)
    }
}

impl LineSource for StdinLines {
    async fn next_line(&mut self) -> Result<Option<String>> {
        if self.rx.is_none() {
            self.rx = Some(Self::spawn_reader()?);
        }
        let Some(rx) = self.rx.as_mut() else {
            return Ok(None);
        };
        match rx.recv().await {
            Some(line) => line.map(Some).context("reading standard input"),
            None => Ok(None),
        }
    }
}
