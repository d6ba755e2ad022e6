//! javadoc-gen: add Javadoc blocks to undocumented Java declarations.
//!
//! Two modes:
//!
//! - **stdin mode**: `javadoc-gen < Employee.java` prints the documented source
//! - **file mode**: `javadoc-gen src/ Extra.java 'lib/**/*.java'` rewrites files
//!   in place, keeping a `.backup` copy of each one it changes

use anyhow::{Context, Result};
use clap::Parser;
use javadoc_gen::discover::{self, DEFAULT_EXTENSION};
use javadoc_gen::process::{self, FileOutcome, ProcessOptions, RunSummary};
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "javadoc-gen",
    about = "Insert Javadoc comment blocks above undocumented Java declarations"
)]
struct Cli {
    /// Files, directories (searched recursively) or glob patterns.
    /// If omitted, reads Java source from stdin and writes to stdout.
    paths: Vec<String>,

    /// Extension of files to pick up inside directories
    #[arg(short = 'e', long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Show what would change without writing anything
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Overwrite files without writing a backup copy first
    #[arg(long)]
    no_backup: bool,

    /// Suffix appended to the path of each backup copy
    #[arg(long, default_value = ".backup")]
    backup_suffix: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress per-file progress lines
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.paths.is_empty() {
        stdin_mode()?;
        return Ok(ExitCode::SUCCESS);
    }

    file_mode(&cli)
}

/// `RUST_LOG` wins; otherwise the level follows `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// stdin mode: read from stdin, write the documented source to stdout.
fn stdin_mode() -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let result = javadoc_gen::transform(&input);
    log::debug!("stdin: {} block(s) inserted", result.blocks_inserted);
    print!("{}", result.text);
    Ok(())
}

/// file mode: discover sources and rewrite each one, never stopping on a failure.
fn file_mode(cli: &Cli) -> Result<ExitCode> {
    let files = discover::collect_sources(&cli.paths, &cli.extension)?;
    let options = ProcessOptions {
        dry_run: cli.dry_run,
        backup: !cli.no_backup,
        backup_suffix: cli.backup_suffix.clone(),
    };

    if !cli.quiet {
        println!("Scanning: {}", cli.paths.join(", "));
        println!("================================");
    }

    let summary = process::process_all(&files, &options, |path, outcome| {
        if !cli.quiet {
            report_file(path, outcome);
        }
    });

    print_summary(&summary, cli.dry_run);

    if summary.has_failures() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn report_file(path: &Path, outcome: &Result<FileOutcome>) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    println!("Processing: {}", name);
    match outcome {
        Ok(FileOutcome::Updated { blocks }) => println!("  added {} doc comment(s)", blocks),
        Ok(FileOutcome::WouldUpdate { blocks }) => {
            println!("  would add {} doc comment(s)", blocks)
        }
        Ok(FileOutcome::Unchanged) => println!("  already documented or no changes needed"),
        Err(_) => println!("  failed"),
    }
}

fn print_summary(summary: &RunSummary, dry_run: bool) {
    println!("================================");
    println!("Files processed: {}", summary.files_processed);
    if dry_run {
        println!("Files that would be updated: {}", summary.files_updated);
        println!("Doc comments that would be added: {}", summary.blocks_inserted);
    } else {
        println!("Files updated: {}", summary.files_updated);
        println!("Doc comments added: {}", summary.blocks_inserted);
    }
    if summary.has_failures() {
        println!("Files failed: {}", summary.failures.len());
    }
}
