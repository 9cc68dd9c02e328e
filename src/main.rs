use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use keycase::cli::output::{self, FileOutcome, FileStatus, ReportFormat};
use keycase::config::PartialConfig;
use keycase::document::{discover::discover, Document, DocumentFormat};
use keycase::{CaseStyle, CollisionPolicy, Config, SplitPolicy};
use rayon::prelude::*;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "keycase")]
#[command(version, about = "Rename the keys of JSON and TOML documents between naming conventions", long_about = None)]
struct Cli {
    /// Files or directories to transform (reads stdin when omitted)
    #[arg(value_name = "PATHS")]
    paths: Vec<PathBuf>,

    /// Target case style (camelCase, snake_case, kebab-case, PascalCase, flatcase,
    /// UPPERFLATCASE, Pascal_Snake_Case, camel_Snake_Case, SCREAMING_SNAKE_CASE)
    #[arg(short, long, value_name = "STYLE")]
    case: Option<CaseStyle>,

    /// Treat runs of capitals as one word (HTTPServer -> http, server)
    #[arg(long)]
    acronyms: bool,

    /// What to do when two keys rename to the same key (overwrite, warn, error)
    #[arg(long, value_name = "POLICY")]
    on_collision: Option<CollisionPolicy>,

    /// Fail on documents nested deeper than this
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Rewrite files in place instead of printing the result
    #[arg(short, long)]
    in_place: bool,

    /// Write compact output instead of pretty-printing
    #[arg(long)]
    compact: bool,

    /// Format of the document read from stdin (json, toml)
    #[arg(short, long, default_value = "json")]
    format: DocumentFormat,

    /// Report format for --in-place runs (text, json)
    #[arg(long, default_value = "text")]
    report: ReportFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the supported case styles with an example conversion
    Styles {
        /// Key to convert
        #[arg(default_value = "userAccountId")]
        key: String,

        /// Treat runs of capitals as one word
        #[arg(long)]
        acronyms: bool,
    },
    /// Show the words a key splits into
    Split {
        key: String,

        /// Treat runs of capitals as one word
        #[arg(long)]
        acronyms: bool,
    },
    /// Convert a single key
    Convert {
        key: String,

        /// Target case style (defaults to the configured style)
        #[arg(short, long, value_name = "STYLE")]
        case: Option<CaseStyle>,

        /// Treat runs of capitals as one word
        #[arg(long)]
        acronyms: bool,
    },
}

impl Cli {
    fn overrides(&self) -> PartialConfig {
        PartialConfig {
            case_style: self.case,
            split_policy: self.acronyms.then_some(SplitPolicy::Acronym),
            on_collision: self.on_collision,
            max_depth: self.max_depth,
            pretty: self.compact.then_some(false),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "keycase", &mut io::stdout());
        return Ok(());
    }

    let colored = !cli.no_color;
    let config = Config::load(cli.overrides())?;

    // Handle subcommands
    if let Some(command) = cli.command {
        handle_command(command, &config, colored);
        return Ok(());
    }

    if cli.paths.is_empty() {
        if cli.in_place {
            anyhow::bail!("--in-place needs at least one file. Use --help for usage information.");
        }
        return transform_stdin(&config, cli.format);
    }

    let inputs = discover(&cli.paths)?;
    if inputs.is_empty() {
        anyhow::bail!("No JSON or TOML files found in the given paths.");
    }

    if !cli.in_place {
        let [path] = inputs.as_slice() else {
            anyhow::bail!(
                "{} documents found; use --in-place to rewrite more than one.",
                inputs.len()
            );
        };
        let (_, transformed) = transform_file(path, &config)?;
        print!("{}", transformed.render(config.pretty)?);
        return Ok(());
    }

    let outcomes = rewrite_all(&inputs, &config)?;
    output::print_report(&outcomes, config.case_style, colored, cli.report)?;

    // Exit with appropriate code
    if outcomes.iter().any(FileOutcome::failed) {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn handle_command(command: Commands, config: &Config, colored: bool) {
    let policy = |acronyms: bool| {
        if acronyms {
            SplitPolicy::Acronym
        } else {
            config.split_policy
        }
    };

    match command {
        Commands::Styles { key, acronyms } => {
            output::print_styles(&key, policy(acronyms), colored);
        }
        Commands::Split { key, acronyms } => {
            let words = keycase::split_words_with(&key, policy(acronyms));
            output::print_words(&words, colored);
        }
        Commands::Convert { key, case, acronyms } => {
            let style = case.unwrap_or(config.case_style);
            println!("{}", style.convert(&key, policy(acronyms)));
        }
    }
}

fn transform_stdin(config: &Config, format: DocumentFormat) -> Result<()> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read stdin")?;

    let document = Document::parse(&content, format)?;
    let transformed = document.transform(config.case_style, &config.options())?;
    print!("{}", transformed.render(config.pretty)?);
    Ok(())
}

/// Parse and transform one file, returning the original next to the result.
fn transform_file(path: &Path, config: &Config) -> Result<(Document, Document)> {
    let format = DocumentFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let document = Document::parse(&content, format)
        .with_context(|| format!("Failed to parse file: {}", path.display()))?;
    log::info!("{}: renaming keys to {}", path.display(), config.case_style);
    let transformed = document
        .transform(config.case_style, &config.options())
        .with_context(|| format!("Failed to transform file: {}", path.display()))?;

    Ok((document, transformed))
}

fn rewrite(path: &Path, config: &Config) -> Result<FileStatus> {
    let (original, transformed) = transform_file(path, config)?;
    if original == transformed {
        return Ok(FileStatus::Unchanged);
    }

    fs::write(path, transformed.render(config.pretty)?)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(FileStatus::Rewritten)
}

fn rewrite_all(inputs: &[PathBuf], config: &Config) -> Result<Vec<FileOutcome>> {
    let progress = if inputs.len() > 1 && Term::stderr().is_term() {
        let pb = ProgressBar::new(inputs.len() as u64);
        pb.set_style(ProgressStyle::default_bar().template("{bar:30.cyan} {pos}/{len} {msg}")?);
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<FileOutcome> = inputs
        .par_iter()
        .map(|path| {
            let status = match rewrite(path, config) {
                Ok(status) => status,
                Err(e) => FileStatus::Failed(format!("{:#}", e)),
            };
            progress.inc(1);
            FileOutcome {
                path: path.clone(),
                status,
            }
        })
        .collect();

    progress.finish_and_clear();
    Ok(outcomes)
}
