//! src/commands/record.rs
//! Initial registration: fingerprint a file and store the digest.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::commands::record_key;
use crate::core::sm3;
use crate::record::RecordStore;

pub fn main(
    file: PathBuf,
    remark: Option<String>,
    update: bool,
    record_file: PathBuf,
) -> Result<i32> {
    let key = record_key(&file)?;
    let mut store = RecordStore::from_path(&record_file)?;

    if !update {
        if let Some(existing) = store.hash_of(&key) {
            println!("already recorded: {}", key);
            println!("SM3: {}", existing);
            println!("(use --update to re-record)");
            return Ok(0);
        }
    }

    let data = std::fs::read(&file).with_context(|| format!("read {}", file.display()))?;
    let hash = sm3::digest_hex(&data)?;
    store.add(&key, &hash, remark.as_deref())?;

    println!("recorded: {}", key);
    println!("SM3: {}", hash);
    Ok(0)
}
