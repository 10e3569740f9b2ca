use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// ~\Users\you\.sm3guard\hash_record.json on Windows; ~/.sm3guard/hash_record.json elsewhere
pub fn default_record_path() -> Result<PathBuf> {
    dirs_next::home_dir()
        .map(|h| h.join(".sm3guard").join("hash_record.json"))
        .ok_or_else(|| anyhow!("home directory not found"))
}

pub fn resolve_record_path(cli_path: &Option<PathBuf>) -> Result<PathBuf> {
    if let Some(p) = cli_path {
        return Ok(p.clone());
    }
    default_record_path()
}
