//! src/commands/verify.rs
//! Integrity check: recompute the digest and compare with the stored one.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use colored::Colorize;

use crate::commands::record_key;
use crate::core::sm3;
use crate::record::RecordStore;

pub fn main(file: PathBuf, record_file: PathBuf) -> Result<i32> {
    let key = record_key(&file)?;
    let store = RecordStore::from_path(&record_file)?;

    let stored = store
        .hash_of(&key)
        .ok_or_else(|| anyhow!("no record for {key}; run `sm3guard record` first"))?;

    let data = std::fs::read(&file).with_context(|| format!("read {}", file.display()))?;
    let current = sm3::digest_hex(&data)?;

    // case-sensitive exact match; digests are always lowercase hex
    if current == stored {
        println!("{}  {}", "PASS".green().bold(), key);
        Ok(0)
    } else {
        println!("{}  {}", "FAIL".red().bold(), key);
        println!("  recorded: {}", stored);
        println!("  current:  {}", current);
        Ok(1)
    }
}
