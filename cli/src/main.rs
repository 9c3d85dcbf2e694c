//! rlc - command-line client for the remote process launcher

use std::process::ExitCode;

use clap::Parser;
use rlc_cli::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    Cli::parse().run().await
}
