//! Batch command - convert every invoice PDF in a folder.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use invtab_core::{BatchEntry, InvoiceProcessor, ProcessOutcome, list_input_files};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Folder containing invoice PDFs
    #[arg(default_value = "Input_Folder")]
    input_dir: PathBuf,

    /// Output directory for cleaned spreadsheets
    #[arg(short, long, default_value = "Output_Folder")]
    output_dir: PathBuf,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::load_config(config_path)?;

    // The output folder exists even when the run finds nothing to do.
    std::fs::create_dir_all(&args.output_dir)?;

    let files = list_input_files(&args.input_dir)?;
    if files.is_empty() {
        println!(
            "{} No PDF files found in {}",
            style("ℹ").blue(),
            args.input_dir.display()
        );
        return Ok(());
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let processor = InvoiceProcessor::new(config);
    let entries =
        processor.run_batch_with(&args.input_dir, &args.output_dir, |_entry| pb.inc(1))?;

    pb.finish_with_message("Complete");

    let written = entries
        .iter()
        .filter(|e| matches!(e.outcome, Ok(ProcessOutcome::Written(_))))
        .count();
    let skipped = entries
        .iter()
        .filter(|e| matches!(e.outcome, Ok(ProcessOutcome::NoTables)))
        .count();
    let failed: Vec<_> = entries.iter().filter(|e| e.outcome.is_err()).collect();

    if args.summary {
        let summary_path = args.output_dir.join("summary.csv");
        write_summary(&summary_path, &entries)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        entries.len(),
        start.elapsed()
    );
    println!(
        "   {} written, {} skipped, {} failed",
        style(written).green(),
        style(skipped).yellow(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for entry in &failed {
            println!(
                "  - {}: {}",
                entry.path.display(),
                entry.outcome.as_ref().err().map(String::as_str).unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn write_summary(path: &PathBuf, entries: &[BatchEntry]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["filename", "status", "output", "error"])?;

    for entry in entries {
        let filename = entry
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        match &entry.outcome {
            Ok(ProcessOutcome::Written(output)) => {
                let output = output.display().to_string();
                wtr.write_record([filename, "written", output.as_str(), ""])?;
            }
            Ok(ProcessOutcome::NoTables) => {
                wtr.write_record([filename, "skipped", "", "no tables found"])?;
            }
            Err(e) => {
                wtr.write_record([filename, "error", "", e.as_str()])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
