//! src/commands/remove.rs

use std::path::PathBuf;

use anyhow::Result;

use crate::commands::record_key_lossy;
use crate::record::RecordStore;

pub fn main(file: PathBuf, record_file: PathBuf) -> Result<i32> {
    let key = record_key_lossy(&file);
    let mut store = RecordStore::from_path(&record_file)?;
    store.remove(&key)?;
    println!("record removed: {}", key);
    Ok(0)
}
