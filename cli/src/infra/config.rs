//! YAML-backed `ConfigStore`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::RlcConfig;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "RLC_CONFIG";

/// Settings file on disk.
///
/// Resolved lazily: an explicit location wins, then `RLC_CONFIG`, then
/// `~/.rlc/config.yaml`. A missing file reads as the defaults and is only
/// created by `save`.
#[derive(Debug, Default, Clone)]
pub struct YamlConfigStore {
    location: Option<PathBuf>,
}

impl YamlConfigStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pinned to `path`, ignoring the environment.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            location: Some(path.into()),
        }
    }

    fn resolve(&self) -> Result<PathBuf> {
        if let Some(path) = &self.location {
            return Ok(path.clone());
        }
        if let Some(val) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(val));
        }
        dirs::home_dir()
            .map(|home| home.join(".rlc").join("config.yaml"))
            .context("cannot determine home directory")
    }
}

fn read_config(path: &Path) -> Result<RlcConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(RlcConfig::default()),
        Err(e) => return Err(e).with_context(|| format!("cannot read {}", path.display())),
    };
    if content.trim().is_empty() {
        return Ok(RlcConfig::default());
    }
    let config: RlcConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("cannot parse {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid setting in {}", path.display()))?;
    Ok(config)
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<RlcConfig> {
        read_config(&self.resolve()?)
    }

    fn save(&self, config: &RlcConfig) -> Result<()> {
        let path = self.resolve()?;
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("cannot create {}", dir.display()))?;
        }
        let yaml = serde_yaml::to_string(config).context("cannot serialize config")?;
        std::fs::write(&path, yaml).with_context(|| format!("cannot write {}", path.display()))
    }

    fn path(&self) -> Result<PathBuf> {
        self.resolve()
    }
}
