//! Scanner module: validation and filesystem traversal.
//!
//! A scan is strictly linear and runs on the calling thread:
//! - [`AnalysisTarget::validate`] rejects missing, non-directory, or
//!   unreadable paths before any work starts.
//! - [`scan`] walks the validated tree depth-first and fills a
//!   [`DirectoryStats`]. Per-entry failures are absorbed by the walker;
//!   the outcome only reports how many occurred and whether any listing
//!   was refused for lack of permission.
pub mod validate;
pub mod walk;

pub use validate::AnalysisTarget;

use crate::model::DirectoryStats;
use std::time::Instant;
use tracing::info;

/// Everything a completed scan produced.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Frozen counters, sized-file list, and extension tally.
    pub stats: DirectoryStats,
    /// Entries or listings that could not be read and were skipped.
    pub error_count: u64,
    /// `true` if at least one directory listing failed with
    /// `PermissionDenied`. The caller surfaces this as a single warning.
    pub permission_denied: bool,
}

impl ScanOutcome {
    /// The one warning line to show for this scan, if any.
    pub fn warning(&self) -> Option<&'static str> {
        self.permission_denied
            .then_some("Warning: insufficient permissions for some files/directories")
    }
}

/// Walk `target` to completion and return the aggregated results.
///
/// Never fails: once validation has passed a report can always be produced,
/// even if large parts of the tree were inaccessible.
pub fn scan(target: &AnalysisTarget) -> ScanOutcome {
    let start = Instant::now();
    info!("Starting scan of {}", target.path().display());

    let mut stats = DirectoryStats::new();
    let walked = walk::walk_serial(target.path(), &mut stats);

    let duration = start.elapsed();
    info!(
        "Scan complete: {} files, {} dirs, {} bytes in {duration:?} ({} errors)",
        stats.total_files(),
        stats.total_directories(),
        stats.total_size(),
        walked.error_count
    );

    ScanOutcome {
        stats,
        error_count: walked.error_count,
        permission_denied: walked.permission_denied,
    }
}
