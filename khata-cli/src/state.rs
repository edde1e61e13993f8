use anyhow::{Context, Result};
use khata_core::OrgStore;
use std::fs;
use std::path::PathBuf;

pub fn khata_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".khata"))
}

pub fn ensure_khata_home() -> Result<PathBuf> {
    let dir = khata_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn store_path() -> Result<PathBuf> {
    Ok(ensure_khata_home()?.join("store.json"))
}

/// Load the store snapshot, or a fresh store when none exists yet.
pub fn read_store() -> Result<OrgStore> {
    let p = store_path()?;
    if !p.exists() {
        return Ok(OrgStore::new());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(serde_json::from_str(&s)?)
}

pub fn write_store(store: &OrgStore) -> Result<()> {
    let p = store_path()?;
    let json = serde_json::to_string_pretty(store)?;
    fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}
