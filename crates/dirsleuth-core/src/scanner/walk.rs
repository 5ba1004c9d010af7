//! Serial directory walker built on `jwalk`.
//!
//! `jwalk` runs in [`jwalk::Parallelism::Serial`] mode so the whole walk
//! happens on the calling thread, with entries in each directory sorted
//! by name for a reproducible discovery order. Symbolic links are never
//! followed.
//!
//! Entry classification mirrors what a parent directory listing reports:
//!
//! | entry                          | counted as | sized / tallied |
//! |--------------------------------|------------|-----------------|
//! | directory                      | directory  | -               |
//! | symlink resolving to directory | directory  | -               |
//! | regular file                   | file       | yes             |
//! | symlink to file, broken link   | file       | no              |
//! | fifo, socket, device           | file       | no              |
use crate::model::DirectoryStats;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Error bookkeeping from a single walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkErrors {
    pub error_count: u64,
    pub permission_denied: bool,
}

impl WalkErrors {
    /// Record a directory that could not be listed.
    ///
    /// `io_error` is `None` for jwalk errors without an OS cause (link loops).
    pub fn note_listing_error(&mut self, io_error: Option<&io::Error>) {
        self.error_count += 1;
        if io_error.is_some_and(|e| e.kind() == io::ErrorKind::PermissionDenied) {
            self.permission_denied = true;
        }
    }
}

/// Walk `root` depth-first, recording every entry below it into `stats`.
///
/// The root itself is not counted. Listing failures skip that directory's
/// contents and carry on with its siblings.
pub fn walk_serial(root: &Path, stats: &mut DirectoryStats) -> WalkErrors {
    let mut errors = WalkErrors::default();

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                errors.note_listing_error(err.io_error());
                debug!(
                    "cannot list {}: {err}",
                    err.path().map(|p| p.display().to_string()).unwrap_or_default()
                );
                continue;
            }
        };

        let path = entry.path();

        // Skip the root itself.
        if path.as_path() == root {
            continue;
        }

        let file_type = entry.file_type();

        if file_type.is_dir() {
            stats.count_directory();
            // jwalk yields an unlistable directory as `Ok` and parks the
            // failure on the entry itself.
            if let Some(err) = &entry.read_children_error {
                errors.note_listing_error(err.io_error());
                debug!("cannot list {}: {err}", path.display());
            }
            continue;
        }

        if file_type.is_symlink() {
            // Follow once to classify; the target is never walked or sized.
            match fs::metadata(&path) {
                Ok(meta) if meta.is_dir() => stats.count_directory(),
                _ => stats.count_file(),
            }
            continue;
        }

        // Count first, then size. A failed stat leaves the file counted.
        stats.count_file();
        match fs::symlink_metadata(&path) {
            Ok(meta) if meta.is_file() => {
                stats.record_file(path.to_string_lossy().into_owned(), meta.len());
            }
            Ok(_) => {}
            Err(err) => {
                errors.error_count += 1;
                debug!("skipping {}: {err}", path.display());
            }
        }
    }

    errors
}
