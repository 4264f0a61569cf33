//! User configuration, read from `<config dir>/gridscope/config.toml`.
//!
//! Every section is optional; a missing default file means default settings.
//! Command-line flags override what the file says.

use anyhow::{Context, Result};
use gridscope_views::InfoTypeParameters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridscopeConfig {
    pub output: OutputConfig,
    pub views: ViewsConfig,
    pub schemas: SchemasConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    pub pretty: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewsConfig {
    /// Emit every operational limits group of a branch side
    pub load_operational_limit_groups: bool,
}

impl ViewsConfig {
    pub fn parameters(&self) -> InfoTypeParameters {
        InfoTypeParameters {
            load_operational_limit_groups: self.load_operational_limit_groups,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemasConfig {
    /// Read schema resources from this directory instead of the embedded set
    pub dir: Option<PathBuf>,
}

/// Default location: `<config dir>/gridscope/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gridscope").join("config.toml"))
}

/// Load the configuration.
///
/// An explicit path must exist. The default path is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<GridscopeConfig> {
    match explicit {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => Ok(GridscopeConfig::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<GridscopeConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("parsing config {}", path.display()))
}
