use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::io::atomic::atomic_write;

/// One protected file: its SM3 digest at registration time plus a free-form
/// remark the user can edit later.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct FileRecord {
    pub hash: String,
    #[serde(default)]
    pub remark: String,
    pub created_at: String,
    pub updated_at: String,
}

/// JSON-backed store mapping file paths to their integrity records.
pub struct RecordStore {
    storage_path: PathBuf,
    records: BTreeMap<String, FileRecord>,
}

impl RecordStore {
    pub fn open_default() -> Result<Self> {
        Self::from_path(crate::config::default_record_path()?)
    }

    /// A missing file is an empty store; a present-but-unparseable file is an
    /// error, so a later save cannot silently wipe existing records.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let records = if path.exists() {
            let data = fs::read_to_string(path)
                .with_context(|| format!("read record file {}", path.display()))?;
            serde_json::from_str(&data)
                .with_context(|| format!("parse record file {}", path.display()))?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            storage_path: path.to_path_buf(),
            records,
        })
    }

    /// Insert or update the record for `file_path`. A `None` remark keeps the
    /// existing remark on update; a fresh entry gets an empty one.
    pub fn add(&mut self, file_path: &str, hash: &str, remark: Option<&str>) -> Result<()> {
        let now = current_timestamp();
        match self.records.get_mut(file_path) {
            Some(record) => {
                record.hash = hash.to_string();
                if let Some(remark) = remark {
                    record.remark = remark.to_string();
                }
                record.updated_at = now;
            }
            None => {
                self.records.insert(
                    file_path.to_string(),
                    FileRecord {
                        hash: hash.to_string(),
                        remark: remark.unwrap_or("").to_string(),
                        created_at: now.clone(),
                        updated_at: now,
                    },
                );
            }
        }
        self.persist()
    }

    pub fn hash_of(&self, file_path: &str) -> Option<&str> {
        self.records.get(file_path).map(|r| r.hash.as_str())
    }

    pub fn remark_of(&self, file_path: &str) -> Option<&str> {
        self.records.get(file_path).map(|r| r.remark.as_str())
    }

    pub fn set_remark(&mut self, file_path: &str, remark: &str) -> Result<()> {
        let record = self
            .records
            .get_mut(file_path)
            .ok_or_else(|| anyhow!("no record for {file_path}"))?;
        record.remark = remark.to_string();
        record.updated_at = current_timestamp();
        self.persist()
    }

    pub fn remove(&mut self, file_path: &str) -> Result<()> {
        if self.records.remove(file_path).is_none() {
            return Err(anyhow!("no record for {file_path}"));
        }
        self.persist()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = (&str, &FileRecord)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.records).context("serialize records")
    }

    fn persist(&self) -> Result<()> {
        let serialized = serde_json::to_string_pretty(&self.records)?;
        atomic_write(&self.storage_path, serialized.as_bytes())
            .with_context(|| format!("persist record file {}", self.storage_path.display()))
    }
}

fn current_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> RecordStore {
        RecordStore::from_path(dir.path().join("hash_record.json")).unwrap()
    }

    #[test]
    fn missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.is_empty());
        assert_eq!(store.hash_of("/tmp/nowhere"), None);
    }

    #[test]
    fn add_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hash_record.json");

        let mut store = RecordStore::from_path(&path).unwrap();
        store.add("/data/a.bin", "aa".repeat(32).as_str(), Some("first")).unwrap();

        let reloaded = RecordStore::from_path(&path).unwrap();
        assert_eq!(reloaded.hash_of("/data/a.bin"), Some("aa".repeat(32).as_str()));
        assert_eq!(reloaded.remark_of("/data/a.bin"), Some("first"));
    }

    #[test]
    fn update_without_remark_keeps_old_remark() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add("/data/a.bin", "old-hash", Some("keep me")).unwrap();
        store.add("/data/a.bin", "new-hash", None).unwrap();
        assert_eq!(store.hash_of("/data/a.bin"), Some("new-hash"));
        assert_eq!(store.remark_of("/data/a.bin"), Some("keep me"));
    }

    #[test]
    fn set_remark_requires_existing_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        assert!(store.set_remark("/data/missing", "x").is_err());

        store.add("/data/a.bin", "h", None).unwrap();
        store.set_remark("/data/a.bin", "annotated").unwrap();
        assert_eq!(store.remark_of("/data/a.bin"), Some("annotated"));
    }

    #[test]
    fn remove_deletes_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add("/data/a.bin", "h", None).unwrap();
        store.remove("/data/a.bin").unwrap();
        assert!(store.is_empty());
        assert!(store.remove("/data/a.bin").is_err());
    }

    #[test]
    fn corrupt_file_is_an_error_not_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hash_record.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(RecordStore::from_path(&path).is_err());
    }
}
