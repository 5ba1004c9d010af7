//! Data model for DirSleuth scans.
//!
//! Re-exports the per-file record, the aggregation state filled in by the
//! walker, and the size formatting helpers used by the report.
pub mod file_record;
pub mod size;
pub mod stats;

pub use file_record::FileRecord;
pub use stats::DirectoryStats;
