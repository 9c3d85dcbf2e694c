//! Instance lifecycle operations: create, run, modify, stop, delete.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! Launcher errors are returned untouched so the top level can classify them.

use anyhow::Result;
use rlc_common::{InstanceInfo, InstanceParams};
use tracing::{debug, info};

use crate::application::ports::{InstanceInspector, InstanceLifecycle, ModifyOptions};
use crate::domain::address::{AppPath, InstancePath};

/// Create a new instance of `app` with `params`.
///
/// The launcher answers with the instance in `created` state, or already
/// `running` when `params.state` asked for it.
///
/// # Errors
///
/// Returns the launcher or transport error unchanged.
pub async fn create(
    api: &impl InstanceLifecycle,
    app: &AppPath,
    params: &InstanceParams,
) -> Result<InstanceInfo> {
    info!(app = %app, ?params, "creating instance");
    let created = api.create(app, params).await?;
    debug!(app = %app, num = created.num, state = %created.state, "instance created");
    Ok(created)
}

/// Apply `params` to an existing instance without waiting for completion.
///
/// # Errors
///
/// Returns the launcher or transport error unchanged.
pub async fn modify(
    api: &impl InstanceLifecycle,
    path: &InstancePath,
    params: &InstanceParams,
) -> Result<InstanceInfo> {
    info!(instance = %path, ?params, "modifying instance");
    api.modify(path, params, ModifyOptions::default()).await
}

/// Start the instance.
///
/// # Errors
///
/// Returns the launcher or transport error unchanged.
pub async fn run(api: &impl InstanceLifecycle, path: &InstancePath) -> Result<InstanceInfo> {
    info!(instance = %path, "starting instance");
    api.modify(path, &InstanceParams::running(), ModifyOptions::default())
        .await
}

/// Stop the instance and wait until the remote process has exited.
///
/// # Errors
///
/// Returns the launcher or transport error unchanged.
pub async fn stop(api: &impl InstanceLifecycle, path: &InstancePath) -> Result<InstanceInfo> {
    info!(instance = %path, "stopping instance");
    let stopped = api
        .modify(path, &InstanceParams::stopped(), ModifyOptions { sync: true })
        .await?;
    debug!(instance = %path, state = %stopped.state, "stop acknowledged");
    Ok(stopped)
}

/// Delete the instance and everything stored with it.
///
/// # Errors
///
/// Returns the launcher or transport error unchanged.
pub async fn delete(api: &impl InstanceLifecycle, path: &InstancePath) -> Result<()> {
    info!(instance = %path, "deleting instance");
    api.delete(path).await
}

/// Whether the instance is currently `running`.
///
/// # Errors
///
/// Returns the launcher or transport error unchanged.
pub async fn is_running(api: &impl InstanceInspector, path: &InstancePath) -> Result<bool> {
    Ok(api.instance(path).await?.is_running())
}
