//! detag CLI
//!
//! Converts HTML files to plain text, writing each output next to its
//! source as a `.txt` sibling.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::error;
use tracing_subscriber::EnvFilter;

use detag_core::{ConvertOptions, ConvertResult, Converter, WalkConfig};

/// detag - HTML to plain text converter
#[derive(Parser)]
#[command(name = "detag")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files or directories to convert
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Report what would be written without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Print the extracted text to stdout instead of a report
    #[arg(long)]
    print: bool,

    /// Report format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Include hidden files when walking directories
    #[arg(long)]
    hidden: bool,

    /// Respect .gitignore files when walking directories
    #[arg(long)]
    respect_gitignore: bool,

    /// Glob patterns to exclude from directory walks
    #[arg(long, value_name = "GLOB")]
    exclude: Vec<String>,

    /// Number of threads (0 uses all available CPUs)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(has_failures) => {
            if has_failures {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let walk = WalkConfig {
        respect_gitignore: cli.respect_gitignore,
        include_hidden: cli.hidden,
        threads: cli.threads,
        exclude_patterns: cli.exclude.clone(),
        ..WalkConfig::default()
    };

    let converter = Converter::new(ConvertOptions {
        dry_run: cli.dry_run,
        walk,
    });

    let (results, failures) = converter.run(&cli.paths).into_diagnostic()?;

    // Report failures (already logged as warnings in the converter)
    if !failures.is_empty() {
        eprintln!("\n{} file(s) failed to convert:", failures.len());
        for (path, error) in &failures {
            eprintln!("  {}: {}", path.display(), error);
        }
    }

    if cli.print {
        for result in &results {
            print!("{}", result.text);
        }
    } else {
        output_report(&results, &cli.format, cli.dry_run)?;
    }

    Ok(!failures.is_empty())
}

fn output_report(results: &[ConvertResult], format: &str, dry_run: bool) -> Result<()> {
    match format {
        "json" => {
            println!(
                "{}",
                serde_json::to_string_pretty(results).into_diagnostic()?
            );
        }
        _ => {
            // Text format
            for result in results {
                println!(
                    "{} -> {} ({} lines)",
                    result.path.display(),
                    result.output_path.display(),
                    result.lines
                );
            }

            let total_lines: usize = results.iter().map(|r| r.lines).sum();

            println!();
            if dry_run {
                println!(
                    "Dry run: would convert {} files ({} lines)",
                    results.len(),
                    total_lines
                );
            } else {
                println!("Converted {} files ({} lines)", results.len(), total_lines);
            }
        }
    }

    Ok(())
}
