use compact_str::CompactString;

/// A single sized file discovered during a scan.
///
/// Records are appended in discovery order and never mutated afterwards,
/// so a record's position in [`DirectoryStats::files`] doubles as its
/// discovery index.
///
/// [`DirectoryStats::files`]: super::DirectoryStats::files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Full path as reported by the walker (lossily converted to UTF-8).
    pub path: String,

    /// Logical file size in bytes.
    pub size: u64,

    /// Normalised extension key, e.g. `.txt`, or the `no extension` sentinel.
    pub extension: CompactString,
}

impl FileRecord {
    /// Create a record, deriving the extension key from the path's file name.
    pub fn new(path: String, size: u64) -> Self {
        let extension = {
            let file_name = std::path::Path::new(&path)
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default();
            crate::analysis::file_types::extension_key(&file_name)
        };
        Self {
            path,
            size,
            extension,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_comes_from_file_name_not_parent() {
        let rec = FileRecord::new("/data/v1.2/README".to_string(), 10);
        assert_eq!(rec.extension, "no extension");

        let rec = FileRecord::new("/data/v1.2/notes.MD".to_string(), 10);
        assert_eq!(rec.extension, ".md");
        assert_eq!(rec.size, 10);
    }
}
