//! # Secrets File
//!
//! Loads the optional `key=value` env file that carries deployment-specific
//! configuration (reference paths, credentials). The file belongs to the
//! deployment, not the repo, so parsing is deliberately permissive: a missing
//! file is an empty map and malformed lines are skipped, never fatal.

use std::collections::BTreeMap;
use std::path::Path;

/// Load the secrets file at `path` into a flat string map.
///
/// `#` comments and blank lines are ignored. Lines that do not parse as
/// `key=value` are skipped with a warning.
pub fn load(path: &Path) -> BTreeMap<String, String> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) => {
            tracing::warn!(path = %path.display(), "no secrets file loaded: {}", e);
            return BTreeMap::new();
        }
    };

    let mut map = BTreeMap::new();
    for item in iter {
        match item {
            Ok((key, value)) => {
                map.insert(key, value);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "skipping malformed secrets line: {}", e);
            }
        }
    }
    tracing::debug!(path = %path.display(), keys = map.len(), "secrets loaded");
    map
}
