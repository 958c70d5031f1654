use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::input::InputError;

/// One `[address, score, count]` entry of an analyzer result file.
///
/// Address and count are kept as signed integers: an address outside the IPv4 range
/// never matches a malicious address, and a negative count replicates nothing.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ResultRecord(pub i64, pub f64, pub i64);

impl ResultRecord {
    /// Packed IPv4 address, `None` when the value does not fit in 32 bits.
    pub fn address(&self) -> Option<u32> {
        u32::try_from(self.0).ok()
    }

    pub fn score(&self) -> f64 {
        self.1
    }

    pub fn count(&self) -> u64 {
        self.2.max(0) as u64
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultFile {
    #[serde(rename = "Results")]
    pub results: Vec<ResultRecord>,
}

/// Every entry of a tag's result directory, sorted by file name.
pub fn list_result_files(dir: &Path) -> Result<Vec<PathBuf>, InputError> {
    let read_dir = std::fs::read_dir(dir).map_err(|e| InputError::io(dir, e))?;
    let mut paths = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| InputError::io(dir, e))?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}

pub fn read_result_file(path: &Path) -> Result<ResultFile, InputError> {
    let text = std::fs::read_to_string(path).map_err(|e| InputError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| InputError::json(path, e))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/results.rs"]
mod tests;
