//! Errors raised before any traversal work begins.
//!
//! Everything that can go wrong *during* a scan is recovered locally by the
//! walker, so validation is the only fallible stage exposed to callers.
use std::path::PathBuf;
use thiserror::Error;

/// Why a path cannot be analysed.
///
/// The `Display` output is the user-facing message; the binary prints it
/// verbatim and exits with status 1.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("directory '{}' does not exist", .0.display())]
    NotExists(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("no read permission on '{}'", .0.display())]
    PermissionDenied(PathBuf),
}
