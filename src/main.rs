use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

use sql_column_csv::{
    discover_jobs, logging, run_batch, BatchReport, ColumnCsvError, ColumnOrder, ExtractJob,
    HeaderLanguage,
};

#[derive(Parser)]
#[command(name = "sql-column-csv")]
#[command(author, version, about = "Extract column names, types and comments from CREATE TABLE DDL into CSV")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one SQL file into a column CSV
    Extract {
        /// Path to the SQL file
        input: PathBuf,

        /// Path of the CSV file to write
        output: PathBuf,

        #[command(flatten)]
        format: FormatArgs,
    },
    /// Convert many SQL files, continuing past failures
    Batch {
        /// Explicit input/output pair (repeatable)
        #[arg(long, num_args = 2, value_names = ["INPUT", "OUTPUT"], action = clap::ArgAction::Append)]
        pair: Vec<PathBuf>,

        /// SQL files, directories or glob patterns
        sources: Vec<String>,

        /// Directory for CSVs of discovered inputs (defaults to beside each input)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(clap::Args)]
struct FormatArgs {
    /// Row order in the output
    #[arg(long, value_enum, default_value_t = OrderArg::Declared)]
    order: OrderArg,

    /// Header row language
    #[arg(long, value_enum, default_value_t = HeaderArg::English)]
    header: HeaderArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    /// Order of declaration in the table body
    Declared,
    /// Ascending by column name
    Name,
}

#[derive(Clone, Copy, ValueEnum)]
enum HeaderArg {
    English,
    Chinese,
}

impl From<OrderArg> for ColumnOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Declared => ColumnOrder::Declared,
            OrderArg::Name => ColumnOrder::Name,
        }
    }
}

impl From<HeaderArg> for HeaderLanguage {
    fn from(arg: HeaderArg) -> Self {
        match arg {
            HeaderArg::English => HeaderLanguage::English,
            HeaderArg::Chinese => HeaderLanguage::Chinese,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)?;

    let report = match cli.command {
        Commands::Extract {
            input,
            output,
            format,
        } => run_batch(
            &[ExtractJob::new(input, output)],
            format.order.into(),
            format.header.into(),
        ),
        Commands::Batch {
            pair,
            sources,
            out_dir,
            format,
        } => {
            let mut jobs: Vec<ExtractJob> = pair
                .chunks(2)
                .map(|p| ExtractJob::new(p[0].clone(), p[1].clone()))
                .collect();
            jobs.extend(discover_jobs(&sources, out_dir.as_deref()));

            if jobs.is_empty() {
                return Err(ColumnCsvError::NoInputs.into());
            }
            if let Some(dir) = &out_dir {
                std::fs::create_dir_all(dir)?;
            }

            run_batch(&jobs, format.order.into(), format.header.into())
        }
    };

    print_report(&report);

    Ok(if report.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_report(report: &BatchReport) {
    for summary in &report.succeeded {
        println!(
            "{} -> {}: {} columns, {} with comments",
            summary.input_path.display(),
            summary.output_path.display(),
            summary.column_count,
            summary.comment_count
        );
    }
    for failure in &report.failed {
        eprintln!("{}: {}", failure.job.input.display(), failure.message);
    }
    if report.total() > 1 {
        println!(
            "Processed {} files: {} succeeded, {} failed",
            report.total(),
            report.succeeded.len(),
            report.failed.len()
        );
    }
}
