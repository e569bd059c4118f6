use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use rslet_core::repo::{Error, Result};

/// Only format version this crate reads and writes.
pub const FORMAT_VERSION: u32 = 0;

pub const DEFAULT_BRANCH: &str = "master";

/// Repository configuration stored in `.rslet/config`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CoreConfig {
    #[serde(default)]
    pub repositoryformatversion: u32,

    /// Branch created by `init`.
    #[serde(default = "default_branch")]
    pub defaultbranch: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        CoreConfig {
            repositoryformatversion: FORMAT_VERSION,
            defaultbranch: default_branch(),
        }
    }
}

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

/// Load `config` from the repository directory, rejecting unknown format versions.
pub fn load_config(repo_dir: &Path) -> Result<Config> {
    let config_path = repo_dir.join("config");
    let content = fs::read_to_string(&config_path)?;
    let config: Config =
        toml::from_str(&content).map_err(|e| Error::CorruptMetadata(format!("config: {}", e)))?;

    if config.core.repositoryformatversion != FORMAT_VERSION {
        return Err(Error::UnsupportedFormat(config.core.repositoryformatversion));
    }
    Ok(config)
}

/// Save `config` to the repository directory.
pub fn save_config(repo_dir: &Path, config: &Config) -> Result<()> {
    let config_path = repo_dir.join("config");
    let content = toml::to_string_pretty(config).map_err(|e| Error::OtherError(Box::new(e)))?;
    fs::write(&config_path, content)?;
    Ok(())
}
