//! `rlc ls [-l] [pattern]`: list launcher hosts and their applications.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::LauncherDirectory;
use crate::domain::address::ListingFilter;

/// Arguments for the ls command.
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Show architecture, versions and instances
    #[arg(short, long)]
    pub long: bool,

    /// Host pattern, optionally followed by `/appPattern` (`*` and `?` allowed)
    pub pattern: Option<String>,
}

/// Run `rlc ls`.
///
/// # Errors
///
/// Returns an error if the pattern is malformed or the launcher call fails.
pub async fn run(app: &AppContext, api: &impl LauncherDirectory, args: &LsArgs) -> Result<ExitCode> {
    let filter = args
        .pattern
        .as_deref()
        .map(str::parse::<ListingFilter>)
        .transpose()?;
    let (host, app_pattern) = match &filter {
        Some(f) => (Some(f.host_pattern.as_str()), f.app_pattern.as_deref()),
        None => (None, None),
    };
    let hosts = api.list(host, app_pattern).await?;
    app.renderer().render_hosts(&hosts, args.long)?;
    Ok(ExitCode::SUCCESS)
}
