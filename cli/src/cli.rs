//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use crate::app::{AppContext, AppFlags, OutputFlags};
use crate::commands;
use crate::infra::signal::interrupt_token;
use crate::infra::stdin::StdinLines;
use crate::infra::telemetry;
use crate::output::OutputContext;

/// Command-line client for the remote process launcher
#[derive(Parser)]
#[command(
    name = "rlc",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Launcher base URL [default: from config, http://localhost:7000]
    #[arg(short = 'u', long, env = "RLC_URL", value_name = "URL")]
    pub url: Option<String>,

    /// Print debug logs and full error details
    #[arg(long, global = true, visible_alias = "debug")]
    pub verbose: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List hosts and applications
    Ls(commands::ls::LsArgs),

    /// Show an instance
    Info(commands::info::InfoArgs),

    /// Fetch the launcher log of an instance
    Log(commands::log::LogArgs),

    /// Create an instance
    New(commands::new::NewArgs),

    /// Change instance parameters
    Modify(commands::modify::ModifyArgs),

    /// Delete an instance
    Delete(commands::delete::DeleteArgs),

    /// Start an instance, optionally attaching to its output
    Run(commands::run::RunArgs),

    /// Attach to the output of a running instance
    Attach(commands::attach::AttachArgs),

    /// Stop an instance and wait until it has exited
    Stop(commands::stop::StopArgs),

    /// List resources of an instance
    Resls(commands::resls::ResLsArgs),

    /// Download a resource
    Resget(commands::resget::ResGetArgs),

    /// Download captured stdout or stderr
    Resgetio(commands::resgetio::ResGetIoArgs),

    /// Upload a resource
    Resput(commands::resput::ResPutArgs),

    /// Delete a resource
    Resdel(commands::resdel::ResDelArgs),

    /// Create, run, stream, stop and delete an instance in one go
    Exec(commands::exec::ExecArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command and report any failure.
    pub async fn run(self) -> ExitCode {
        let Cli {
            url,
            verbose,
            json,
            quiet,
            no_color,
            command,
        } = self;

        if let Err(e) = telemetry::init_tracing(verbose) {
            eprintln!("warning: {e}");
        }

        let flags = AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            url,
            verbose,
        };
        let app = match AppContext::new(&flags) {
            Ok(app) => app,
            Err(e) => {
                OutputContext::new(no_color, quiet).failure(&e, json, verbose);
                return ExitCode::FAILURE;
            }
        };

        match dispatch(&app, command).await {
            Ok(code) => code,
            Err(e) => {
                app.output.failure(&e, app.is_json(), app.settings.verbose);
                ExitCode::FAILURE
            }
        }
    }
}

/// Route a parsed command to its handler.
async fn dispatch(app: &AppContext, command: Command) -> Result<ExitCode> {
    match command {
        Command::Version => commands::version::run(app),
        Command::Config(cmd) => commands::config::run(app, &app.config_store, &cmd),
        Command::Ls(args) => commands::ls::run(app, &app.launcher()?, &args).await,
        Command::Info(args) => commands::info::run(app, &app.launcher()?, &args).await,
        Command::Log(args) => commands::log::run(app, &app.launcher()?, &args).await,
        Command::New(args) => commands::new::run(app, &app.launcher()?, &args).await,
        Command::Modify(args) => commands::modify::run(app, &app.launcher()?, &args).await,
        Command::Delete(args) => commands::delete::run(app, &app.launcher()?, &args).await,
        Command::Stop(args) => commands::stop::run(app, &app.launcher()?, &args).await,
        Command::Resls(args) => commands::resls::run(app, &app.launcher()?, &args).await,
        Command::Resget(args) => commands::resget::run(app, &app.launcher()?, &args).await,
        Command::Resgetio(args) => commands::resgetio::run(app, &app.launcher()?, &args).await,
        Command::Resput(args) => commands::resput::run(app, &app.launcher()?, &args).await,
        Command::Resdel(args) => commands::resdel::run(app, &app.launcher()?, &args).await,
        Command::Run(args) => {
            let cancel = if args.attaches() {
                interrupt_token()
            } else {
                CancellationToken::new()
            };
            commands::run::run(app, &app.launcher()?, &args, StdinLines::new(), &cancel).await
        }
        Command::Attach(args) => {
            let cancel = interrupt_token();
            commands::attach::run(app, &app.launcher()?, &args, StdinLines::new(), &cancel).await
        }
        Command::Exec(args) => {
            let cancel = interrupt_token();
            commands::exec::run(app, &app.launcher()?, &args, StdinLines::new(), &cancel).await
        }
    }
}
