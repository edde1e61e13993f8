use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::ensure_khata_home;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub org: OrgSection,
    pub list: ListSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgSection {
    /// Org used when --org is not passed.
    pub default: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSection {
    /// Page size used when --limit is not passed.
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            org: OrgSection {
                default: "personal".to_string(),
            },
            list: ListSection {
                page_size: khata_core::DEFAULT_PAGE_SIZE,
            },
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_khata_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}
