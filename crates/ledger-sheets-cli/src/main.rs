//! Ledger Sheets CLI - invoice workbook builder

mod sample;

use anyhow::{bail, Context, Result};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use clap::{Parser, Subcommand};
use ledger_sheets::prelude::*;
use ledger_sheets::{column_letters, read_records_file};
use std::path::{Path, PathBuf};

use crate::sample::SampleGenerator;

#[derive(Parser)]
#[command(name = "ledger")]
#[command(author, version, about = "Invoice workbook builder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an invoice workbook from CSV records or generated samples
    #[command(alias = "gen")]
    Generate {
        /// Input CSV file with one invoice per line
        #[arg(short, long, conflicts_with = "sample", required_unless_present = "sample")]
        input: Option<PathBuf>,

        /// Generate this many random sample records instead of reading a file
        #[arg(long)]
        sample: Option<usize>,

        /// Seed for sample generation
        #[arg(long, requires = "sample")]
        seed: Option<u64>,

        /// Date of the first sample record (default: one year ago)
        #[arg(long, requires = "sample")]
        start: Option<NaiveDate>,

        /// Output workbook file
        #[arg(short, long)]
        output: PathBuf,

        /// Worksheet name
        #[arg(long, default_value = "CompleteWorksheet")]
        sheet_name: String,

        /// Label placed next to the grand total
        #[arg(long, default_value = "Total:")]
        footer_label: String,
    },

    /// Print the default column layout
    Layout,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            sample,
            seed,
            start,
            output,
            sheet_name,
            footer_label,
        } => {
            let records = match (input, sample) {
                (Some(path), _) => load_records(&path)?,
                (None, Some(count)) => sample_records(count, seed, start),
                (None, None) => bail!("either --input or --sample is required"),
            };
            let options = BuildOptions::default()
                .with_sheet_name(sheet_name)
                .with_footer_label(footer_label);
            generate(&records, &options, &output)
        }
        Commands::Layout => show_layout(),
    }
}

fn load_records(path: &Path) -> Result<Vec<InvoiceRecord>> {
    let records = read_records_file(path)
        .with_context(|| format!("Failed to read records from '{}'", path.display()))?;
    eprintln!("Read {} records from '{}'", records.len(), path.display());
    Ok(records)
}

fn sample_records(count: usize, seed: Option<u64>, start: Option<NaiveDate>) -> Vec<InvoiceRecord> {
    let mut generator = match seed {
        Some(seed) => SampleGenerator::seeded(seed),
        None => SampleGenerator::from_entropy(),
    };
    let start = match start {
        Some(date) => date.and_time(NaiveTime::MIN),
        None => one_year_ago(),
    };
    eprintln!("Generating {} sample records starting {}", count, start);
    generator.records(count, start)
}

fn one_year_ago() -> NaiveDateTime {
    let then = Local::now().naive_local() - Duration::days(365);
    // Whole seconds only
    then.with_nanosecond(0).unwrap_or(then)
}

fn generate(records: &[InvoiceRecord], options: &BuildOptions, output: &Path) -> Result<()> {
    let document = Document::build(&ColumnLayout::invoice(), records, options)
        .context("Failed to build invoice sheet")?;

    document
        .save(output)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    eprintln!(
        "Wrote {} rows to sheet \"{}\" in '{}'",
        document.sheet().row_count(),
        document.sheet().name(),
        output.display()
    );
    Ok(())
}

fn show_layout() -> Result<()> {
    let layout = ColumnLayout::invoice();
    for (i, spec) in layout.columns().iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{}",
            column_letters(i as u32 + 1)?,
            spec.label,
            spec.kind,
            spec.width
        );
    }
    Ok(())
}
