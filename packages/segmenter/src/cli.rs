//! Command-line interface for the segmenter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use textwrap::{fill, Options};

use crate::config::{DEFAULT_LOG_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_WORKERS, TEXT_WRAP_WIDTH};
use crate::error::{Result, SegmenterError};
use crate::log::LogCategory;
use crate::output::to_json;
use crate::segmenter::{collect_record_paths, load_record, BatchOptions, Segmenter};
use crate::types::ArgumentRole;

/// FJUD Segmenter - Split court judgments into sections and argument spans.
#[derive(Parser)]
#[command(name = "fjud-segmenter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Segment every raw judgment record in a directory.
    Segment {
        /// Directory of raw judgment records (*.json)
        input: PathBuf,

        /// Output directory for segmented judgments
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Directory for run logs
        #[arg(short, long, default_value = DEFAULT_LOG_DIR)]
        logs: PathBuf,

        /// Number of parallel workers
        #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
        jobs: usize,
    },

    /// Segment a single record and print the result.
    Inspect {
        /// Raw judgment record (JSON)
        file: PathBuf,

        /// Print the segmented record as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Segment {
            input,
            output,
            logs,
            jobs,
        } => segment_command(
            &input,
            BatchOptions::default()
                .with_output_dir(output)
                .with_log_dir(logs)
                .with_workers(jobs),
        ),
        Commands::Inspect { file, json } => inspect_command(&file, json),
    }
}

/// Execute the segment command.
fn segment_command(input: &Path, options: BatchOptions) -> Result<()> {
    if !input.is_dir() {
        return Err(SegmenterError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Input directory does not exist: {}", input.display()),
        )));
    }

    let total = collect_record_paths(input)?.len();
    println!(
        "{} {} records from {}",
        style("Segmenting").bold(),
        style(total).cyan(),
        style(input.display()).green()
    );
    println!();

    let pb = ProgressBar::new(total as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let result = Segmenter::new().segment_directory(input, &options, |path| {
        if let Some(name) = path.file_name() {
            pb.set_message(name.to_string_lossy().into_owned());
        }
        pb.inc(1);
    });
    pb.finish_and_clear();
    let summary = result?;

    println!("  Written: {}", style(summary.written).green());
    println!("  Skipped (existing): {}", summary.skipped);
    if !summary.failed.is_empty() {
        println!("  Failed: {}", style(summary.failed.len()).yellow().bold());
        for path in &summary.failed {
            println!("    {}", path.display());
        }
    }

    println!();
    println!("{}", style("Flagged judgments:").bold());
    for (category, count) in summary.log.counts() {
        println!("  {category}: {count}");
    }

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        options.output_dir.display()
    );

    Ok(())
}

/// Execute the inspect command.
fn inspect_command(file: &Path, json: bool) -> Result<()> {
    let record = load_record(file)?;
    let segmentation = Segmenter::new().segment(&record);

    if json {
        println!("{}", to_json(&segmentation.judgment)?);
        return Ok(());
    }

    let judgment = &segmentation.judgment;
    println!("{} {}", style("Judgment").bold(), style(&record.jid).cyan());
    println!("  Title: {}", style(&judgment.title).green());
    println!("  Cause: {}", judgment.cause);
    for (name, segment) in judgment.sections.iter() {
        println!("  {name}: {} blocks", segment.len());
    }

    let wrap = Options::new(TEXT_WRAP_WIDTH)
        .initial_indent("    ")
        .subsequent_indent("    ");
    match &judgment.arguments {
        Some(spans) => {
            for role in ArgumentRole::ALL {
                let chunks = spans.get(role);
                println!();
                println!(
                    "{} ({}, {} chunks)",
                    style(role.key()).bold(),
                    role.label(),
                    chunks.len()
                );
                for chunk in chunks {
                    println!("{}", fill(chunk, &wrap));
                }
            }
        }
        None => println!("  {}", style("No argument spans extracted").yellow()),
    }

    let flags: Vec<String> = [
        LogCategory::Title,
        LogCategory::Notation,
        LogCategory::SecondSearch,
        LogCategory::Waiver,
        LogCategory::All,
        LogCategory::Fact,
    ]
    .into_iter()
    .flat_map(|category| {
        segmentation
            .log
            .entries(category)
            .iter()
            .map(move |entry| format!("{category}: {}", entry.payload))
    })
    .collect();

    if !flags.is_empty() {
        println!();
        println!("{}", style("Flags:").yellow().bold());
        for flag in flags {
            println!("  {flag}");
        }
    }

    Ok(())
}
