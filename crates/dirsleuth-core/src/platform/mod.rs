//! Platform-specific functionality: permission probes.

pub mod permissions;

pub use permissions::is_readable_dir;
