//! Top-N largest files analysis.
use crate::model::DirectoryStats;

/// A single entry in the "largest files" results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LargestFile<'a> {
    /// Full path as recorded by the walker.
    pub path: &'a str,
    /// File size in bytes.
    pub size: u64,
}

/// Get the `n` largest sized files, biggest first.
///
/// The sort is stable, so files of equal size keep their discovery order.
/// Returns fewer than `n` entries when fewer files were sized.
pub fn top_files(stats: &DirectoryStats, n: usize) -> Vec<LargestFile<'_>> {
    if n == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<LargestFile<'_>> = stats
        .files()
        .iter()
        .map(|record| LargestFile {
            path: &record.path,
            size: record.size,
        })
        .collect();

    ranked.sort_by(|a, b| b.size.cmp(&a.size));
    ranked.truncate(n);
    ranked
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
    fn sorted_descending_and_truncated() {
        let stats = stats_with(&[("a", 10), ("b", 300), ("c", 20), ("d", 4_000)]);
        let top = top_files(&stats, 3);

        let sizes: Vec<u64> = top.iter().map(|f| f.size).collect();
        assert_eq!(sizes, [4_000, 300, 20]);
        assert_eq!(top[0].path, "d");
    }

    /// Equal sizes must come out in discovery order.
    #[test]
    fn ties_keep_discovery_order() {
        let stats = stats_with(&[("first", 5), ("big", 9), ("second", 5), ("third", 5)]);
        let top = top_files(&stats, 10);

        let paths: Vec<&str> = top.iter().map(|f| f.path).collect();
        assert_eq!(paths, ["big", "first", "second", "third"]);
    }

    /// Every result refers back to the record it was derived from.
    #[test]
    fn results_are_records_by_identity() {
        let stats = stats_with(&[("x", 1), ("y", 2), ("z", 3)]);
        for entry in top_files(&stats, 2) {
            let record = stats
                .files()
                .iter()
                .find(|r| std::ptr::eq(entry.path, r.path.as_str()))
                .expect("entry must borrow from a record");
            assert_eq!(entry.size, record.size);
        }
    }

    #[test]
    fn shorter_list_than_n() {
        let stats = stats_with(&[("only", 1)]);
        assert_eq!(top_files(&stats, 10).len(), 1);
    }

    #[test]
    fn zero_n_and_empty_stats() {
        let stats = stats_with(&[("a", 1)]);
        assert!(top_files(&stats, 0).is_empty());
        assert!(top_files(&DirectoryStats::new(), 10).is_empty());
    }
}
