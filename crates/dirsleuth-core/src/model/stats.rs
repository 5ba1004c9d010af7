use super::file_record::FileRecord;
use compact_str::CompactString;
use std::collections::HashMap;

/// Aggregation state filled in by a single scan.
///
/// Counters only ever grow while the walker runs and are read-only once
/// the scan returns. The sized-file list and the extension tally are
/// updated together in [`DirectoryStats::record_file`], which keeps two
/// invariants:
///
/// - the sum of all record sizes equals `total_size`;
/// - every record's extension key is present in the tally with count >= 1.
#[derive(Debug, Clone, Default)]
pub struct DirectoryStats {
    total_files: u64,
    total_directories: u64,
    total_size: u64,
    extensions: HashMap<CompactString, u64>,
    files: Vec<FileRecord>,
}

impl DirectoryStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a subdirectory seen in its parent's listing.
    pub fn count_directory(&mut self) {
        self.total_directories += 1;
    }

    /// Count a file entry. Happens before (and independently of) sizing,
    /// so entries that later fail to stat, and symlinks, still count.
    pub fn count_file(&mut self) {
        self.total_files += 1;
    }

    /// Record the size of a regular file that was already counted.
    pub fn record_file(&mut self, path: String, size: u64) {
        let record = FileRecord::new(path, size);
        *self.extensions.entry(record.extension.clone()).or_insert(0) += 1;
        self.total_size += size;
        self.files.push(record);
    }

    /// Total file entries, including symlinks and entries that could not be sized.
    #[inline]
    pub fn total_files(&self) -> u64 {
        self.total_files
    }

    /// Subdirectories below the scan root. The root itself is not counted.
    #[inline]
    pub fn total_directories(&self) -> u64 {
        self.total_directories
    }

    /// Sum of all sized files, in bytes.
    #[inline]
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Sized files in discovery order.
    #[inline]
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    /// Extension key -> number of sized files carrying it.
    #[inline]
    pub fn extensions(&self) -> &HashMap<CompactString, u64> {
        &self.extensions
    }

    /// Mean size over *all* counted files, or `None` when nothing was counted.
    pub fn average_file_size(&self) -> Option<f64> {
        if self.total_files == 0 {
            return None;
        }
        Some(self.total_size as f64 / self.total_files as f64)
    }

    /// Returns `true` if no file entry of any kind was counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_files == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_with(files: &[(&str, u64)]) -> DirectoryStats {
        let mut stats = DirectoryStats::new();
        for (path, size) in files {
            stats.count_file();
            stats.record_file(path.to_string(), *size);
        }
        stats
    }

    #[test]
    fn record_sizes_sum_to_total() {
        let stats = stats_with(&[("a.txt", 100), ("b.rs", 200), ("c", 300)]);
        let sum: u64 = stats.files().iter().map(|f| f.size).sum();
        assert_eq!(sum, stats.total_size());
        assert_eq!(stats.total_size(), 600);
        assert_eq!(stats.total_files(), 3);
    }

    #[test]
    fn every_record_extension_is_tallied() {
        let stats = stats_with(&[("a.TXT", 1), ("b.txt", 2), ("Makefile", 3)]);
        for record in stats.files() {
            let count = stats.extensions().get(&record.extension).copied();
            assert!(
                count.is_some_and(|c| c >= 1),
                "{} missing from tally",
                record.extension
            );
        }
        assert_eq!(stats.extensions().get(".txt"), Some(&2));
        assert_eq!(stats.extensions().get("no extension"), Some(&1));
    }

    /// A counted file that is never sized (failed stat, symlink) lowers the
    /// average but leaves the record list untouched.
    #[test]
    fn counted_but_unsized_files_affect_average_only() {
        let mut stats = stats_with(&[("big.bin", 1_000)]);
        stats.count_file();

        assert_eq!(stats.total_files(), 2);
        assert_eq!(stats.files().len(), 1);
        assert_eq!(stats.average_file_size(), Some(500.0));
    }

    #[test]
    fn empty_stats_have_no_average() {
        let stats = DirectoryStats::new();
        assert!(stats.is_empty());
        assert_eq!(stats.average_file_size(), None);
        assert_eq!(stats.total_directories(), 0);
    }

    #[test]
    fn directories_are_counted_separately() {
        let mut stats = DirectoryStats::new();
        stats.count_directory();
        stats.count_directory();
        assert_eq!(stats.total_directories(), 2);
        assert_eq!(stats.total_files(), 0);
    }
}
