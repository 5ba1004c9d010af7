//! File type frequency based on file extensions.
//!
//! Extensions are normalised to a lowercase key that keeps the leading dot
//! (`.txt`), so `a.TXT` and `b.txt` land in the same bucket. Names without
//! a usable suffix share the [`NO_EXTENSION`] bucket.
use crate::model::DirectoryStats;
use compact_str::CompactString;

/// Tally key for files without a suffix.
pub const NO_EXTENSION: &str = "no extension";

/// Frequency of one extension across the scanned tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionStats {
    pub extension: CompactString,
    pub count: u64,
    /// `100 * count / total_files`. The denominator includes counted but
    /// unsized files, so the column need not add up to 100.
    pub percent: f64,
}

/// Normalised extension key for a file name.
///
/// The suffix is everything from the last dot, lowercased. A dot in first
/// position (`.bashrc`) or in last position (`archive.`) does not start a
/// suffix.
pub fn extension_key(file_name: &str) -> CompactString {
    match file_name.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < file_name.len() => {
            CompactString::from(file_name[dot..].to_lowercase())
        }
        _ => CompactString::new(NO_EXTENSION),
    }
}

/// The `n` most frequent extensions, most frequent first.
///
/// Equal counts are ordered by extension key, ascending, so output does not
/// depend on hash-map iteration order.
pub fn top_extensions(stats: &DirectoryStats, n: usize) -> Vec<ExtensionStats> {
    let total_files = stats.total_files();

    let mut results: Vec<ExtensionStats> = stats
        .extensions()
        .iter()
        .map(|(ext, &count)| ExtensionStats {
            extension: ext.clone(),
            count,
            percent: if total_files > 0 {
                count as f64 / total_files as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect();

    results.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.extension.cmp(&b.extension))
    });
    results.truncate(n);
    results
}
