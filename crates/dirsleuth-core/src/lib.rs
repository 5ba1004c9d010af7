//! DirSleuth Core: traversal, analysis, and report rendering.
//!
//! This crate contains all business logic with zero CLI dependencies.
//! The binary only parses arguments, wires up logging, and drives the
//! pipeline `validate -> scan -> summarise -> render`.
//!
//! # Modules
//!
//! - [`model`]: File records, aggregation counters, and size formatting.
//! - [`scanner`]: Target validation and the serial directory walk.
//! - [`analysis`]: Post-scan derivations (largest files, extension frequency).
//! - [`report`]: Fixed-layout plain-text report.
//! - [`platform`]: Filesystem permission probes.
//! - [`error`]: Typed validation errors.
pub mod analysis;
pub mod error;
pub mod model;
pub mod platform;
pub mod report;
pub mod scanner;

pub use error::ValidationError;
pub use report::{Report, ReportOptions};
pub use scanner::{scan, AnalysisTarget, ScanOutcome};
