//! Read-permission checks for directories.
use std::fs;
use std::path::Path;
use tracing::debug;

/// Check whether the current process can list `path`.
///
/// Opens a listing handle and drops it immediately; no entries are read.
/// Any error (not only `PermissionDenied`) counts as unreadable.
pub fn is_readable_dir(path: &Path) -> bool {
    match fs::read_dir(path) {
        Ok(_) => true,
        Err(err) => {
            debug!("cannot list {}: {err}", path.display());
            false
        }
    }
}
