//! Analysis modules: post-scan derivations over collected stats.
//!
//! Nothing here touches the filesystem; each function is a sort and
//! truncate over data the walker already gathered.

pub mod file_types;
pub mod top_files;

pub use file_types::{extension_key, top_extensions, ExtensionStats, NO_EXTENSION};
pub use top_files::{top_files, LargestFile};
