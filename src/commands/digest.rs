//! src/commands/digest.rs
//! Print SM3 digests, one `digest  path` line per input, sha256sum-style.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::sm3;

pub fn main(files: Vec<PathBuf>) -> Result<i32> {
    for path in files {
        let (data, label) = if path.as_os_str() == "-" {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("read stdin")?;
            (buf, "-".to_string())
        } else {
            let data =
                std::fs::read(&path).with_context(|| format!("read {}", path.display()))?;
            (data, path.display().to_string())
        };
        let hash = sm3::digest_hex(&data)?;
        println!("{}  {}", hash, label);
    }
    Ok(0)
}
