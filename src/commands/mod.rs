pub mod digest;
pub mod list;
pub mod record;
pub mod remark;
pub mod remove;
pub mod verify;

use anyhow::{Context, Result};
use std::path::Path;

/// Records are keyed by absolute path so registration and later verification
/// agree regardless of the working directory.
pub fn record_key(path: &Path) -> Result<String> {
    let canonical = std::fs::canonicalize(path)
        .with_context(|| format!("resolve path {}", path.display()))?;
    Ok(canonical.display().to_string())
}

/// Like [`record_key`], but tolerates a file that no longer exists on disk so
/// stale records can still be renamed or removed.
pub fn record_key_lossy(path: &Path) -> String {
    record_key(path).unwrap_or_else(|_| path.display().to_string())
}
