//! `rlc config`: show and set configuration values.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;
use crate::application::services::config_service;

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key (launcher.url, console.poll_ms)
        key: String,
        /// Configuration value
        value: String,
    },
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the key or value is invalid or the file cannot be
/// read or written.
pub fn run(app: &AppContext, store: &impl ConfigStore, cmd: &ConfigCommand) -> Result<ExitCode> {
    match cmd {
        ConfigCommand::Show => {
            let config = config_service::load_config(store)?;
            app.renderer().render_config(&config, &store.path()?)?;
        }
        ConfigCommand::Set { key, value } => {
            config_service::set_value(store, key, value)?;
            app.renderer().render_done(&format!("Set {key} = {value}"))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
