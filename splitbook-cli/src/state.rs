use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

const HOME_ENV: &str = "SPLITBOOK_HOME";

pub fn splitbook_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".splitbook"))
}

pub fn ensure_splitbook_home() -> Result<PathBuf> {
    let dir = splitbook_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Read a statement export as text.
pub fn read_statement(path: &std::path::Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}
