//! src/commands/remark.rs

use std::path::PathBuf;

use anyhow::Result;

use crate::commands::record_key_lossy;
use crate::record::RecordStore;

pub fn main(file: PathBuf, remark: String, record_file: PathBuf) -> Result<i32> {
    let key = record_key_lossy(&file);
    let mut store = RecordStore::from_path(&record_file)?;
    store.set_remark(&key, &remark)?;
    println!("remark updated: {} => {}", key, remark);
    Ok(0)
}
