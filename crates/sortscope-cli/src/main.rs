//! SortScope CLI - compare sorting algorithms on a CSV column
//!
//! # Usage
//!
//! ```bash
//! # Preview the first rows of a file
//! sortscope preview data.csv
//!
//! # List the columns available for analysis
//! sortscope columns data.csv
//!
//! # Time every algorithm on one column
//! sortscope analyze data.csv --column price
//!
//! # Show the algorithms and their policies
//! sortscope info
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

mod commands;
mod ingest;

use commands::{analyze, columns, info, preview};

/// SortScope - Sorting Algorithm Performance Evaluator
///
/// Loads a numeric CSV column and times five classic sorts on identical copies of it.
#[derive(Parser)]
#[command(
    name = "sortscope",
    version,
    about = "SortScope - Sorting Algorithm Performance Evaluator",
    long_about = "SortScope times insertion, shell, merge, quick and heap sort\n\
                  on the same integer column and reports the fastest.\n\n\
                  Every algorithm sorts its own copy of the original data,\n\
                  one after another on a single thread."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the first rows of a CSV file
    #[command(name = "preview")]
    Preview(preview::PreviewArgs),

    /// List the columns of a CSV file
    #[command(name = "columns")]
    Columns(columns::ColumnsArgs),

    /// Time every sorting algorithm on one column
    #[command(name = "analyze")]
    Analyze(analyze::AnalyzeArgs),

    /// Show algorithm information
    #[command(name = "info")]
    Info(info::InfoArgs),
}

fn main() {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    setup_logging(cli.verbose);

    let result: Result<()> = match cli.command {
        Commands::Preview(args) => preview::run(args),
        Commands::Columns(args) => columns::run(args),
        Commands::Analyze(args) => analyze::run(args),
        Commands::Info(args) => info::run(args),
    };

    if let Err(err) = result {
        print_error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

/// Setup logging based on verbosity level
fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(filter))
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Print a success message with a checkmark
pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

/// Print an error message with an X
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}
