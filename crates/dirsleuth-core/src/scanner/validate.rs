//! Pre-scan validation of the requested path.
use crate::error::ValidationError;
use crate::platform;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A directory that passed validation and may be scanned.
///
/// Only obtainable through [`AnalysisTarget::validate`], so holding one
/// means the path existed, was a directory, and was listable at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTarget {
    /// Absolute form of the requested path. Symlinks are not resolved.
    path: PathBuf,
}

impl AnalysisTarget {
    /// Run the checks in order: exists, is a directory, is readable.
    ///
    /// The first failing check wins. No traversal work is done here.
    pub fn validate(path: impl AsRef<Path>) -> Result<Self, ValidationError> {
        let path = path.as_ref();

        // `metadata` follows symlinks, so a link to a directory is accepted.
        let meta = match fs::metadata(path) {
            Ok(meta) => meta,
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                return Err(ValidationError::PermissionDenied(path.to_path_buf()));
            }
            Err(_) => return Err(ValidationError::NotExists(path.to_path_buf())),
        };

        if !meta.is_dir() {
            return Err(ValidationError::NotADirectory(path.to_path_buf()));
        }

        if !platform::is_readable_dir(path) {
            return Err(ValidationError::PermissionDenied(path.to_path_buf()));
        }

        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        Ok(Self { path: absolute })
    }

    /// The absolute path to scan.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn existing_directory_is_accepted() {
        let tmp = TempDir::new().unwrap();
        let target = AnalysisTarget::validate(tmp.path()).unwrap();
        assert!(target.path().is_absolute());
        assert_eq!(target.path(), tmp.path());
    }

    #[test]
    fn missing_path_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("does-not-exist");
        let err = AnalysisTarget::validate(&missing).unwrap_err();
        assert!(
            matches!(&err, ValidationError::NotExists(p) if p == &missing),
            "got {err:?}"
        );
    }

    #[test]
    fn regular_file_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        File::create(&file).unwrap();
        let err = AnalysisTarget::validate(&file).unwrap_err();
        assert!(matches!(err, ValidationError::NotADirectory(_)), "got {err:?}");
    }

    /// Relative inputs are made absolute against the working directory.
    #[test]
    fn relative_path_becomes_absolute() {
        let target = AnalysisTarget::validate(".").unwrap();
        assert!(target.path().is_absolute());
    }

    #[cfg(unix)]
    #[test]
    fn unlistable_directory_is_rejected() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let locked = tmp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users bypass mode bits; the PermissionDenied branch is
        // not exercised then.
        let listable = fs::read_dir(&locked).is_ok();
        let result = AnalysisTarget::validate(&locked);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if listable {
            return;
        }

        let err = result.unwrap_err();
        assert!(matches!(err, ValidationError::PermissionDenied(_)), "got {err:?}");
    }
}
