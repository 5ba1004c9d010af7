//! DirSleuth: directory size and file-type report.
//!
//! Thin binary entry point. All logic lives in the `dirsleuth-core` crate.

use clap::Parser;
use dirsleuth_core::{scan, AnalysisTarget, Report, ReportOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "dirsleuth",
    version,
    about = "Analyse a directory and print a detailed report.",
    after_help = "Examples:\n  dirsleuth /home/user/Documents\n  dirsleuth /var/log -v\n  dirsleuth . --verbose"
)]
struct Cli {
    /// Path of the directory to analyse.
    directory: PathBuf,

    /// Show extra details (most frequent file types, largest files).
    #[arg(short, long)]
    verbose: bool,

    /// Maximum level of diagnostic output written to stderr.
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: tracing::Level,
}

impl Cli {
    fn report_options(&self) -> ReportOptions {
        ReportOptions {
            verbose: self.verbose,
            ..ReportOptions::default()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let target = match AnalysisTarget::validate(&cli.directory) {
        Ok(target) => target,
        Err(err) => {
            eprintln!("Error: {err}.");
            return Ok(ExitCode::FAILURE);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Analyzing directory...")?;
    out.flush()?;

    let outcome = scan(&target);
    if let Some(warning) = outcome.warning() {
        eprintln!("{warning}");
    }
    writeln!(out)?;

    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let report = Report::build(&target, &outcome.stats, cli.report_options(), timestamp);
    report.render(&mut out)?;
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}
