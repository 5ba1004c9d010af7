//! Fixed-layout plain-text report.
//!
//! [`Report::build`] derives every figure up front (formatted sizes, top-N
//! tables, percentages); [`Report::render`] only lays them out, so the
//! output is a pure function of the report value.
use crate::analysis::{top_extensions, top_files};
use crate::model::size::{format_count, format_size, format_size_f64};
use crate::model::DirectoryStats;
use crate::scanner::AnalysisTarget;
use std::io::{self, Write};
use std::path::PathBuf;

/// Width of the `=` and `-` rules.
pub const RULE_WIDTH: usize = 70;

/// Rows shown in each verbose table.
pub const DEFAULT_TOP_N: usize = 10;

/// Presentation switches, set from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Include the extension-frequency and largest-files tables.
    pub verbose: bool,
    pub top_n: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// One row of the extension-frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionRow {
    pub extension: String,
    pub count: String,
    pub percent: String,
}

/// One row of the largest-files table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargestRow {
    pub size: String,
    pub path: String,
}

/// A fully derived report, ready to render.
#[derive(Debug, Clone)]
pub struct Report {
    directory: PathBuf,
    timestamp: String,
    top_n: usize,
    verbose: bool,
    is_empty: bool,
    total_files: String,
    total_directories: String,
    total_size: String,
    total_bytes: String,
    average_size: Option<String>,
    extensions: Vec<ExtensionRow>,
    largest: Vec<LargestRow>,
}

impl Report {
    /// Summarise `stats` for `target`. `timestamp` is printed as given.
    pub fn build(
        target: &AnalysisTarget,
        stats: &DirectoryStats,
        options: ReportOptions,
        timestamp: impl Into<String>,
    ) -> Self {
        let (extensions, largest) = if options.verbose {
            let extensions = top_extensions(stats, options.top_n)
                .into_iter()
                .map(|e| ExtensionRow {
                    extension: e.extension.to_string(),
                    count: format_count(e.count),
                    percent: format!("{:>6.2}", e.percent),
                })
                .collect();
            let largest = top_files(stats, options.top_n)
                .into_iter()
                .map(|f| LargestRow {
                    size: format_size(f.size),
                    path: f.path.to_string(),
                })
                .collect();
            (extensions, largest)
        } else {
            (Vec::new(), Vec::new())
        };

        Self {
            directory: target.path().to_path_buf(),
            timestamp: timestamp.into(),
            top_n: options.top_n,
            verbose: options.verbose,
            is_empty: stats.is_empty(),
            total_files: format_count(stats.total_files()),
            total_directories: format_count(stats.total_directories()),
            total_size: format_size(stats.total_size()),
            total_bytes: format_count(stats.total_size()),
            average_size: stats.average_file_size().map(format_size_f64),
            extensions,
            largest,
        }
    }

    /// Extension table rows; empty unless built with `verbose`.
    pub fn extension_rows(&self) -> &[ExtensionRow] {
        &self.extensions
    }

    /// Largest-files table rows; empty unless built with `verbose`.
    pub fn largest_rows(&self) -> &[LargestRow] {
        &self.largest
    }

    /// Write the report to `out`.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(out, "{heavy}")?;
        writeln!(out, "{:15}DIRECTORY ANALYSIS REPORT", "")?;
        writeln!(out, "{heavy}")?;
        writeln!(out)?;

        writeln!(out, "Directory analyzed : {}", self.directory.display())?;
        writeln!(out, "Analysis date      : {}", self.timestamp)?;
        writeln!(out)?;

        section(out, &light, "GENERAL STATISTICS")?;
        writeln!(out, "Total files                   : {}", self.total_files)?;
        writeln!(out, "Subdirectories                : {}", self.total_directories)?;
        writeln!(out, "Total size                    : {}", self.total_size)?;
        writeln!(out, "{:33}({} bytes)", "", self.total_bytes)?;
        if let Some(average) = &self.average_size {
            writeln!(out, "Average file size             : {average}")?;
        }
        writeln!(out)?;

        if self.verbose {
            if !self.extensions.is_empty() {
                section(out, &light, "MOST FREQUENT FILE TYPES")?;
                writeln!(out, "{:<20} {:<15} Percentage", "Extension", "Count")?;
                writeln!(out, "{light}")?;
                for row in &self.extensions {
                    writeln!(out, "{:<20} {:<15} {}%", row.extension, row.count, row.percent)?;
                }
                writeln!(out)?;
            }

            if !self.largest.is_empty() {
                let title = format!("TOP {} LARGEST FILES", self.top_n);
                section(out, &light, &title)?;
                writeln!(out, "{:<15} Path", "Size")?;
                writeln!(out, "{light}")?;
                for row in &self.largest {
                    writeln!(out, "{:<15} {}", row.size, row.path)?;
                }
                writeln!(out)?;
            }
        }

        section(out, &light, "SUMMARY")?;
        if self.is_empty {
            writeln!(out, "The directory is empty (no files found).")?;
        } else {
            writeln!(out, "The directory contains {} file(s)", self.total_files)?;
            writeln!(
                out,
                "spread across {} subdirectory(ies)",
                self.total_directories
            )?;
            writeln!(out, "for a total of {}.", self.total_size)?;
        }
        writeln!(out, "{heavy}")?;

        Ok(())
    }

    /// Render into a `String`.
    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        self.render(&mut buf)
            .expect("writing into a Vec<u8> cannot fail");
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn section<W: Write>(out: &mut W, rule: &str, title: &str) -> io::Result<()> {
    writeln!(out, "{rule}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{rule}")
}
