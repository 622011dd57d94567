use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use anyhow::{Context, Result};
use crate::archive::Archive;
use crate::cli::error::user_error;
use crate::cli::output::{format_inventory, format_layout_report, is_tty};
use crate::config::Config;
use crate::input::read_text;
use crate::{convert, stats, words};

#[derive(Parser)]
#[command(name = "triad")]
#[command(about = "Descriptive statistics, number base conversion and word frequency tools with a results archive checker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute mean, median, mode, standard deviation and variance of a file of numbers
    Stats(ProgramArgs),
    /// Convert a file of decimal integers to binary and hexadecimal
    Convert(ProgramArgs),
    /// Count the frequency of distinct words in a text file
    Words(ProgramArgs),
    /// Program result archive commands
    Archive {
        #[command(subcommand)]
        subcommand: ArchiveCommands,
    },
}

#[derive(Args)]
pub struct ProgramArgs {
    /// Input file
    pub file: PathBuf,
    /// Results file path (defaults to the program's results file in output.dir or the current directory)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
    /// Output a JSON summary instead of the text report
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum ArchiveCommands {
    /// Verify the archive directory layout
    Check {
        /// Archive root
        #[arg(default_value = ".")]
        root: PathBuf,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Create missing project unit directories
    Init {
        /// Archive root
        #[arg(default_value = ".")]
        root: PathBuf,
    },
    /// List the files in each project unit's source and results areas
    List {
        /// Archive root
        #[arg(default_value = ".")]
        root: PathBuf,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and succeed; usage errors exit 1
            e.print()?;
            if e.use_stderr() {
                std::process::exit(1);
            }
            return Ok(());
        }
    };

    let config = Config::load()?;
    handle_command(cli, &config)
}

fn handle_command(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Commands::Stats(args) => handle_stats(&args, config),
        Commands::Convert(args) => handle_convert(&args, config),
        Commands::Words(args) => handle_words(&args, config),
        Commands::Archive { subcommand } => match subcommand {
            ArchiveCommands::Check { root, json } => handle_archive_check(&root, json, config),
            ArchiveCommands::Init { root } => handle_archive_init(&root, config),
            ArchiveCommands::List { root, json } => handle_archive_list(&root, json, config),
        },
    }
}

/// Write a results file; failures are reported but not fatal
fn write_results(path: &Path, content: &str) -> bool {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error writing to file '{}': {}", path.display(), e);
                return false;
            }
        }
    }
    match std::fs::write(path, content) {
        Ok(()) => {
            log::debug!("wrote {} bytes to {}", content.len(), path.display());
            true
        }
        Err(e) => {
            eprintln!("Error writing to file '{}': {}", path.display(), e);
            false
        }
    }
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn handle_stats(args: &ProgramArgs, config: &Config) -> Result<()> {
    let results_path = config.results_path(args.output.as_deref(), stats::RESULTS_FILE);
    if !args.json {
        println!("Reading data from '{}'...\n", args.file.display());
    }

    let start = Instant::now();
    let text = read_text(&args.file)?;
    let parsed = stats::parse_values(&text);

    for entry in &parsed.invalid {
        eprintln!("Warning: Invalid data at line {}: '{}' - Skipping", entry.line, entry.text);
    }
    if !parsed.invalid.is_empty() {
        eprintln!("\nTotal invalid entries skipped: {}\n", parsed.invalid.len());
    }

    if parsed.values.is_empty() {
        return Err(user_error("No valid data found in the file."));
    }

    if !args.json {
        println!("Successfully loaded {} numbers.", parsed.values.len());
        println!("Calculating statistics...\n");
    }

    let statistics = stats::Statistics::compute(&parsed.values);
    let elapsed = start.elapsed();
    let report = stats::format_report(&statistics, elapsed);
    let written = write_results(&results_path, &report);

    if args.json {
        print_json(&serde_json::json!({
            "input": args.file,
            "statistics": statistics,
            "invalid_entries": parsed.invalid,
            "elapsed_secs": elapsed.as_secs_f64(),
            "results_file": written.then_some(&results_path),
        }))?;
    } else {
        println!("{}", report);
        if written {
            println!("\nResults saved to '{}'", results_path.display());
        }
    }
    Ok(())
}

fn handle_convert(args: &ProgramArgs, config: &Config) -> Result<()> {
    let results_path = config.results_path(args.output.as_deref(), convert::RESULTS_FILE);
    let rule = "=".repeat(70);
    if !args.json {
        println!("{}", rule);
        println!("NUMBER BASE CONVERTER");
        println!("{}", rule);
        println!("Input file: {}", args.file.display());
        println!("Output file: {}", results_path.display());
        println!("{}\n", rule);
    }

    let start = Instant::now();
    let text = read_text(&args.file)?;
    if !args.json {
        println!("Processing {} items from '{}'...", text.lines().count(), args.file.display());
        println!("{}", "-".repeat(70));
    }

    let batch = convert::convert_lines(&text, |error| eprintln!("ERROR - {}", error));
    let elapsed = start.elapsed();

    let written = write_results(&results_path, &convert::format_results_file(&batch, elapsed));

    if args.json {
        print_json(&serde_json::json!({
            "input": args.file,
            "conversions": batch.conversions,
            "errors": batch.errors,
            "total_processed": batch.total_processed(),
            "total_errors": batch.total_errors(),
            "elapsed_secs": elapsed.as_secs_f64(),
            "results_file": written.then_some(&results_path),
        }))?;
    } else {
        print!("{}", convert::format_display(&batch, elapsed));
        if written {
            println!("\nResults saved to '{}'", results_path.display());
        }
    }
    Ok(())
}

fn handle_words(args: &ProgramArgs, config: &Config) -> Result<()> {
    let results_path = config.results_path(args.output.as_deref(), words::RESULTS_FILE);
    let progress = |message: &str| {
        if !args.json {
            println!("{}", message);
        }
    };

    progress(format!("Processing file: {}", args.file.display()).as_str());
    progress("=".repeat(60).as_str());

    let start = Instant::now();
    let text = read_text(&args.file)?;

    progress("Extracting words...");
    let extracted = words::extract_words(&text);

    let counts = if extracted.is_empty() {
        eprintln!("Warning: No valid words found in file.");
        Vec::new()
    } else {
        progress("Counting word frequencies...");
        let mut counts = words::count_frequencies(&extracted, |word| {
            eprintln!("Warning: Skipping invalid word '{}'", word);
        });
        progress("Sorting results...");
        words::sort_frequencies(&mut counts);
        counts
    };

    let elapsed = start.elapsed();
    finish_words(args, &results_path, &counts, elapsed, !extracted.is_empty())
}

fn finish_words(
    args: &ProgramArgs,
    results_path: &Path,
    counts: &[words::WordCount],
    elapsed: Duration,
    had_words: bool,
) -> Result<()> {
    let report = words::format_report(counts, elapsed);

    if args.json {
        let written = write_results(results_path, &report);
        return print_json(&serde_json::json!({
            "input": args.file,
            "total_words": counts.iter().map(|c| c.frequency).sum::<usize>(),
            "distinct_words": counts.len(),
            "words": counts,
            "elapsed_secs": elapsed.as_secs_f64(),
            "results_file": written.then_some(results_path),
        }));
    }

    if had_words {
        println!("\n{}", report);
    } else {
        println!("{}", report);
    }
    if write_results(results_path, &report) {
        println!("\nResults written to '{}'", results_path.display());
    }
    if had_words {
        println!("\nProcessing complete!");
    }
    Ok(())
}

fn handle_archive_check(root: &Path, json: bool, config: &Config) -> Result<()> {
    let archive = config.archive(root)?;
    let report = archive.check()
        .with_context(|| format!("Failed to check archive at {}", root.display()))?;

    if json {
        print_json(&serde_json::json!({
            "root": report.root,
            "valid": report.is_valid(),
            "violations": report.violations,
        }))?;
    } else {
        println!("{}", format_layout_report(&report));
    }

    if report.is_valid() {
        Ok(())
    } else {
        Err(user_error(format!(
            "Archive layout is incomplete ({} problem(s))",
            report.violations.len()
        )))
    }
}

fn handle_archive_init(root: &Path, config: &Config) -> Result<()> {
    let archive: Archive = config.archive(root)?;
    let created = archive.init()
        .with_context(|| format!("Failed to initialize archive at {}", root.display()))?;

    if created.is_empty() {
        println!("All project directories already exist.");
    } else {
        for dir in &created {
            println!("Created {}", dir.display());
        }
    }

    if !archive.report_path().is_file() {
        println!(
            "Note: aggregate report '{}' is not present; it is never created automatically.",
            archive.report_path().display()
        );
    }
    Ok(())
}

fn handle_archive_list(root: &Path, json: bool, config: &Config) -> Result<()> {
    let archive = config.archive(root)?;
    let inventory = archive.inventory()
        .with_context(|| format!("Failed to list archive at {}", root.display()))?;

    if json {
        print_json(&serde_json::to_value(&inventory)?)?;
    } else {
        println!("{}", format_inventory(&inventory, is_tty()));
    }
    Ok(())
}
