use crate::{CaseStyle, SplitPolicy};
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum ReportFormat {
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "lowercase")]
pub enum FileStatus {
    Rewritten,
    Unchanged,
    Failed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn failed(&self) -> bool {
        matches!(self.status, FileStatus::Failed(_))
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    case_style: CaseStyle,
    files_processed: usize,
    files_rewritten: usize,
    files_failed: usize,
    files: &'a [FileOutcome],
}

/// Report the outcome of an in-place run. Text goes to stderr so that it
/// never mixes with document output; the JSON report goes to stdout.
pub fn print_report(
    outcomes: &[FileOutcome],
    style: CaseStyle,
    colored_output: bool,
    format: ReportFormat,
) -> Result<()> {
    match format {
        ReportFormat::Text => {
            print_text_report(outcomes, colored_output);
            print_summary(outcomes, style, colored_output);
        }
        ReportFormat::Json => print_json_report(outcomes, style)?,
    }
    Ok(())
}

fn print_text_report(outcomes: &[FileOutcome], colored_output: bool) {
    for outcome in outcomes {
        let path = outcome.path.display().to_string();
        match (&outcome.status, colored_output) {
            (FileStatus::Rewritten, true) => eprintln!("  {} {}", "✓".green().bold(), path),
            (FileStatus::Rewritten, false) => eprintln!("  ✓ {}", path),
            (FileStatus::Unchanged, true) => eprintln!("  {} {}", "=".dimmed(), path.dimmed()),
            (FileStatus::Unchanged, false) => eprintln!("  = {}", path),
            (FileStatus::Failed(error), true) => {
                eprintln!("  {} {} {}", "✗".red().bold(), path.bold(), error.red())
            }
            (FileStatus::Failed(error), false) => eprintln!("  ✗ {} {}", path, error),
        }
    }
}

fn print_json_report(outcomes: &[FileOutcome], style: CaseStyle) -> Result<()> {
    let report = JsonReport {
        case_style: style,
        files_processed: outcomes.len(),
        files_rewritten: count(outcomes, |s| *s == FileStatus::Rewritten),
        files_failed: count(outcomes, |s| matches!(s, FileStatus::Failed(_))),
        files: outcomes,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn count(outcomes: &[FileOutcome], predicate: impl Fn(&FileStatus) -> bool) -> usize {
    outcomes.iter().filter(|o| predicate(&o.status)).count()
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        "file"
    } else {
        "files"
    }
}

pub fn print_summary(outcomes: &[FileOutcome], style: CaseStyle, colored: bool) {
    let rewritten = count(outcomes, |s| *s == FileStatus::Rewritten);
    let failed = count(outcomes, |s| matches!(s, FileStatus::Failed(_)));

    eprintln!();
    if failed > 0 {
        if colored {
            eprintln!(
                "{} {} {} failed, {} rewritten to {}",
                "✗".red().bold(),
                failed.to_string().red().bold(),
                plural(failed),
                rewritten,
                style.to_string().cyan()
            );
        } else {
            eprintln!(
                "✗ {} {} failed, {} rewritten to {}",
                failed,
                plural(failed),
                rewritten,
                style
            );
        }
    } else if rewritten == 0 {
        if colored {
            eprintln!("{}", format!("✓ All keys already {}", style).green().bold());
        } else {
            eprintln!("✓ All keys already {}", style);
        }
    } else if colored {
        eprintln!(
            "{} {} {} rewritten to {}",
            "✓".green().bold(),
            rewritten.to_string().green().bold(),
            plural(rewritten),
            style.to_string().cyan()
        );
    } else {
        eprintln!("✓ {} {} rewritten to {}", rewritten, plural(rewritten), style);
    }
}

/// List every case style with `key` converted to it.
pub fn print_styles(key: &str, policy: SplitPolicy, colored: bool) {
    let width = CaseStyle::ALL
        .iter()
        .map(|style| style.name().len())
        .max()
        .unwrap_or(0);

    for style in CaseStyle::ALL {
        let name = format!("{:width$}", style.name(), width = width);
        let example = style.convert(key, policy);
        if colored {
            println!("  {}  {}", name.cyan().bold(), example.green());
        } else {
            println!("  {}  {}", name, example);
        }
    }
}

/// Print one word per line, lowercase as split.
pub fn print_words(words: &[String], colored: bool) {
    for (i, word) in words.iter().enumerate() {
        if colored {
            println!("{} {}", format!("{:>2}", i + 1).dimmed(), word.green());
        } else {
            println!("{}", word);
        }
    }
}
