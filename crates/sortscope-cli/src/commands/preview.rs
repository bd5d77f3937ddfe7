//! Preview command - Show the first rows of a CSV file
//!
//! Usage:
//! ```bash
//! sortscope preview data.csv
//! sortscope preview data.csv --rows 10
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};
use std::path::PathBuf;

use crate::ingest;

/// Arguments for the preview command
#[derive(Args)]
pub struct PreviewArgs {
    /// Path to the CSV file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Number of lines to read, header included
    #[arg(long, short = 'n', default_value_t = 5, env = "SORTSCOPE_PREVIEW_ROWS")]
    rows: usize,
}

/// Run the preview command
pub fn run(args: PreviewArgs) -> Result<()> {
    let preview = ingest::load_preview(&args.file, args.rows)?;

    println!("{} {}", "📄 Data Preview:".bold().cyan(), args.file.display());
    println!();

    let Some((header, rows)) = preview.split_first() else {
        println!("{}", "(empty file)".dimmed());
        return Ok(());
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(header.iter().map(|h| Cell::new(h.trim()).fg(Color::Cyan)));

    for row in rows {
        table.add_row(row.iter().map(|field| Cell::new(field.trim())));
    }

    println!("{table}");
    Ok(())
}
