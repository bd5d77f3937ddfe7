//! Columns command - List selectable columns

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::ingest;

/// Arguments for the columns command
#[derive(Args)]
pub struct ColumnsArgs {
    /// Path to the CSV file
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

/// Run the columns command
pub fn run(args: ColumnsArgs) -> Result<()> {
    let header = ingest::load_header(&args.file)?;

    println!("{}", "Select Column:".bold());
    for (i, name) in header.iter().enumerate() {
        println!("  {} {} (Column {})", "•".cyan(), name.trim().green(), i);
    }
    println!();
    println!(
        "Analyze one: {}",
        "sortscope analyze <FILE> --column <INDEX|NAME>".green()
    );

    Ok(())
}
