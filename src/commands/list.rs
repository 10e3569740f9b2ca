//! src/commands/list.rs

use std::path::PathBuf;

use anyhow::Result;

use crate::record::RecordStore;

pub fn main(json: bool, record_file: PathBuf) -> Result<i32> {
    let store = RecordStore::from_path(&record_file)?;

    if json {
        println!("{}", store.to_json_pretty()?);
        return Ok(0);
    }

    if store.is_empty() {
        println!("no records yet");
        return Ok(0);
    }

    for (path, record) in store.records() {
        if record.remark.is_empty() {
            println!("{}  {}", record.hash, path);
        } else {
            println!("{}  {}  ({})", record.hash, path, record.remark);
        }
    }
    Ok(0)
}
