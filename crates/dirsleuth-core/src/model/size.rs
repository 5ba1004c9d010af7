//! Size formatting utilities: human-readable byte counts.
//!
//! All internal sizes are `u64` bytes. Floating point is only used
//! at the display-formatting boundary.

/// Unit labels, smallest first. Values never leave the last tier.
const UNITS: [&str; 5] = ["bytes", "KiB", "MiB", "GiB", "TiB"];

/// Format a byte count with binary prefixes and two fraction digits.
///
/// `format_size(2048) == "2.00 KiB"`, `format_size(0) == "0.00 bytes"`.
pub fn format_size(bytes: u64) -> String {
    format_size_f64(bytes as f64)
}

/// Fractional variant of [`format_size`], used for averages.
///
/// Divides by 1024 until the value drops below 1024 or the TiB tier is
/// reached; anything beyond that stays in TiB.
pub fn format_size_f64(bytes: f64) -> String {
    let mut value = bytes;
    let mut tier = 0;
    while value >= 1024.0 && tier < UNITS.len() - 1 {
        value /= 1024.0;
        tier += 1;
    }
    format!("{value:.2} {}", UNITS[tier])
}

/// Format a count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
