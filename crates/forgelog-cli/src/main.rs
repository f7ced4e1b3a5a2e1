use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use forgelog_classify::{Classification, Classifier, SCHEMA_VERSION, Severity};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "forgelog")]
#[command(about = "Filter toolchain build logs down to actionable diagnostics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a build log and print the actionable lines
    Filter {
        /// Path to the captured build log
        #[arg(value_name = "FILE")]
        path: PathBuf,
        /// Keep only diagnostics at or above this severity
        #[arg(long, value_name = "SEVERITY")]
        min_severity: Option<Severity>,
        /// Print every line, including ones that matched no rule
        #[arg(long)]
        all: bool,
    },
    /// Classify a build log and emit JSON records
    Json {
        /// Path to the captured build log
        #[arg(value_name = "FILE")]
        path: PathBuf,
        /// Keep only diagnostics at or above this severity
        #[arg(long, value_name = "SEVERITY")]
        min_severity: Option<Severity>,
    },
}

/// One diagnostic in the JSON report, tagged with its 1-based position in
/// the input log so results can be re-associated with the raw text.
#[derive(Serialize)]
struct ReportEntry {
    input_line: usize,
    #[serde(flatten)]
    result: Classification,
}

#[derive(Serialize)]
struct Report {
    schema_version: &'static str,
    diagnostics: Vec<ReportEntry>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Filter {
            path,
            min_severity,
            all,
        } => {
            let content = fs::read_to_string(path)?;
            let classifier = Classifier::new();
            let mut total = 0usize;
            let mut kept = 0usize;
            for line in content.lines() {
                total += 1;
                let result = classifier.classify(line);
                if !keep(&result, *min_severity, *all) {
                    continue;
                }
                kept += 1;
                if result.is_normal() {
                    // Normal results carry no fields; echo the raw line.
                    println!("{} {line}", severity_tag(result.severity));
                } else {
                    println!("{}", render(&result));
                }
            }
            log::debug!("classified {total} lines, kept {kept}");
        }
        Commands::Json { path, min_severity } => {
            let content = fs::read_to_string(path)?;
            let classifier = Classifier::new();
            let diagnostics: Vec<ReportEntry> = content
                .lines()
                .enumerate()
                .map(|(i, line)| (i + 1, classifier.classify(line)))
                .filter(|(_, result)| keep(result, *min_severity, false))
                .map(|(input_line, result)| ReportEntry { input_line, result })
                .collect();
            log::debug!("kept {} diagnostics", diagnostics.len());
            let report = Report {
                schema_version: SCHEMA_VERSION,
                diagnostics,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// Normal lines are dropped unless `all` is set; the minimum-severity
/// filter applies to actual diagnostics either way.
fn keep(result: &Classification, min_severity: Option<Severity>, all: bool) -> bool {
    if !result.severity.is_actionable() {
        return all;
    }
    min_severity.is_none_or(|min| result.severity >= min)
}

/// Render one diagnostic for the console: severity tag, clickable location
/// (absolute paths get a `file://` prefix), then the message.
fn render(result: &Classification) -> String {
    let mut out = String::from(severity_tag(result.severity));
    out.push(' ');
    if let Some(file) = &result.file {
        if file.starts_with('/') {
            out.push_str("file://");
        }
        out.push_str(file);
        if let Some(line) = &result.line {
            out.push(':');
            out.push_str(line);
        }
        out.push(' ');
    }
    if let Some(message) = &result.message {
        out.push_str(message);
    }
    out
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Normal => "NORMAL :",
        Severity::Info => "INFO :",
        Severity::Warning => "WARNING :",
        Severity::Error => "ERROR :",
    }
}
