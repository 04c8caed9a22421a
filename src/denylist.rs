//! Denylist file loading
//!
//! Reads denylist entries from a file so they can be fed into a
//! [`RuleUpdate`](crate::RuleUpdate).

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Returns the denylist file path.
///
/// Priority:
/// 1. Environment variable `SANITY_DENYLIST_PATH`
/// 2. Default path `./assets/denylist.txt`
pub fn get_denylist_path() -> PathBuf {
    std::env::var("SANITY_DENYLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/denylist.txt"))
}

/// Loads denylist entries from the path given by [`get_denylist_path`].
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File has no entries
///
/// # Example
///
/// ```rust,ignore
/// let entries = pwd_sanity::load_denylist()?;
/// sanity.configure(&RuleUpdate::new().disallow(entries), None);
/// ```
pub fn load_denylist() -> Result<Vec<String>, DenylistError> {
    load_denylist_from_path(get_denylist_path())
}

/// Loads denylist entries from a specific file.
///
/// One entry per line. Lines are trimmed; blank lines and lines starting
/// with `#` are skipped. Order is kept and duplicates are left to
/// [`RuleUpdate::apply`](crate::RuleUpdate::apply), which merges them.
pub fn load_denylist_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DenylistError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist loading FAILED: FileNotFound {:?}", path);
        return Err(DenylistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let entries: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect();

    if entries.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist loading FAILED: Empty file {:?}", path);
        return Err(DenylistError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Denylist loaded: {} entries from {:?}", entries.len(), path);

    Ok(entries)
}
