//! Process command - convert a single invoice file.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::debug;

use invtab_core::{InvoiceProcessor, ProcessOutcome};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input invoice PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Output directory for the cleaned spreadsheet
    #[arg(short, long, default_value = "Output_Folder")]
    output_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "xlsx")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Cleaned spreadsheet written to the output directory
    Xlsx,
    /// Extracted metadata printed as JSON
    Json,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let processor = InvoiceProcessor::new(config);

    match args.format {
        OutputFormat::Json => {
            let metadata = processor.extract_metadata(&args.input)?;
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
        OutputFormat::Xlsx => {
            std::fs::create_dir_all(&args.output_dir)?;

            let outcome = processor.process_document(&args.input, &args.output_dir)?;
            match outcome {
                ProcessOutcome::Written(path) => {
                    println!(
                        "{} Saved cleaned data to {}",
                        style("✓").green(),
                        path.display()
                    );
                }
                ProcessOutcome::NoTables => {
                    println!(
                        "{} No tables found in {}, nothing written",
                        style("ℹ").blue(),
                        args.input.display()
                    );
                }
            }
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
