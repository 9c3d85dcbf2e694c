//! Application service: configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::RlcConfig;

/// Load configuration.
///
/// # Errors
///
/// Returns an error if the stored configuration cannot be read.
pub fn load_config(store: &impl ConfigStore) -> Result<RlcConfig> {
    store.load()
}

/// Validate `key = value`, apply it to the stored configuration and save.
///
/// Returns the updated configuration.
///
/// # Errors
///
/// Returns an error if the key or value is invalid, or persistence fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<RlcConfig> {
    let mut config = store.load()?;
    config.set(key, value)?;
    store.save(&config)?;
    Ok(config)
}
