//! Analyze command - Time every algorithm on one CSV column
//!
//! Usage:
//! ```bash
//! sortscope analyze data.csv --column 2
//! sortscope analyze data.csv --column price --warmup 3
//! sortscope analyze data.csv --column price --json
//! ```

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, CellAlignment, Color, Table};
use std::path::{Path, PathBuf};
use tracing::info;

use sortscope_core::{Config, Evaluator, ResultSet};

use super::group_thousands;
use crate::{ingest, print_success};

/// Arguments for the analyze command
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to the CSV file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Column to analyze, as a zero-based index or a header name
    #[arg(long, short = 'c', value_name = "INDEX|NAME")]
    column: String,

    /// Untimed warm-up runs per algorithm (overrides SORTSCOPE_WARMUP_RUNS)
    #[arg(long, value_name = "N")]
    warmup: Option<u32>,

    /// Skip the final-order check on each sorted copy
    #[arg(long)]
    no_verify: bool,

    /// Output the result set as JSON
    #[arg(long)]
    json: bool,
}

/// Run the analyze command
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let mut config = Config::from_env();
    if let Some(runs) = args.warmup {
        config = config.with_warmup(runs);
    }
    if args.no_verify {
        config = config.with_verify_order(false);
    }

    let analysis = analyze_column(&args.file, &args.column, config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis.results)?);
        return Ok(());
    }

    print_report(&analysis);
    Ok(())
}

/// Outcome of analyzing one column
pub struct ColumnAnalysis {
    pub column_name: String,
    pub index: usize,
    pub column: ingest::ColumnData,
    pub results: ResultSet,
}

/// Resolve `selector`, load its integers and time every algorithm on them.
///
/// Fails when the column holds no numeric value at all.
pub fn analyze_column(file: &Path, selector: &str, config: Config) -> Result<ColumnAnalysis> {
    let header = ingest::load_header(file)?;
    let index = ingest::resolve_column(&header, selector)?;
    let column = ingest::load_column(file, index)?;

    info!(
        column = index,
        values = column.values.len(),
        short_rows = column.short_rows,
        invalid_rows = column.invalid_rows,
        "column loaded"
    );

    if column.values.is_empty() {
        bail!("No valid numeric data found in the selected column");
    }

    let results = Evaluator::new(config)
        .evaluate(&column.values)
        .context("Performance evaluation failed")?;

    Ok(ColumnAnalysis {
        column_name: header[index].trim().to_string(),
        index,
        column,
        results,
    })
}

fn print_report(analysis: &ColumnAnalysis) {
    let ColumnAnalysis {
        column_name,
        index,
        column,
        results,
    } = analysis;

    println!(
        "{} {} (Column {})",
        "📊 Results:".bold().cyan(),
        column_name.green(),
        index
    );
    println!("{}", "═".repeat(40).cyan());
    println!();
    println!(
        "Array size: {} elements",
        group_thousands(results.input_len() as u64).bold()
    );
    let skipped = column.short_rows + column.invalid_rows;
    if skipped > 0 {
        println!("{} {} rows skipped", "⚠".yellow().bold(), skipped);
    }
    println!();

    let best = results.best();
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Algorithm").fg(Color::Cyan),
            Cell::new("Time (ns)").fg(Color::Cyan),
        ]);

    for m in results.iter() {
        let name = Cell::new(m.algorithm.name());
        let time = Cell::new(group_thousands(m.time_ns)).set_alignment(CellAlignment::Right);
        if m.algorithm == best.algorithm {
            table.add_row(vec![name.fg(Color::Green), time.fg(Color::Green)]);
        } else {
            table.add_row(vec![name, time]);
        }
    }

    println!("{table}");
    println!();
    print_success(&format!(
        "Best performing algorithm: {} ({} ns)",
        best.algorithm.name().bold(),
        group_thousands(best.time_ns)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortscope_core::Algorithm;
    use std::io::Write;

    fn csv_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const SAMPLE: &str = "id,price,label\n1,30,a\n2,x,b\n3,-5,c\n4,12,d\n";

    #[test]
    fn test_analyze_numeric_column() {
        let file = csv_file(SAMPLE);
        let analysis = analyze_column(file.path(), "price", Config::default()).unwrap();

        assert_eq!(analysis.index, 1);
        assert_eq!(analysis.column_name, "price");
        assert_eq!(analysis.column.values, vec![30, -5, 12]);
        assert_eq!(analysis.column.invalid_rows, 1);
        assert_eq!(analysis.results.input_len(), 3);
        assert_eq!(analysis.results.len(), Algorithm::ALL.len());
    }

    #[test]
    fn test_analyze_by_index() {
        let file = csv_file(SAMPLE);
        let analysis = analyze_column(file.path(), "0", Config::default()).unwrap();
        assert_eq!(analysis.column.values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_analyze_rejects_non_numeric_column() {
        let file = csv_file(SAMPLE);
        let err = analyze_column(file.path(), "label", Config::default())
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "No valid numeric data found in the selected column"
        );
    }

    #[test]
    fn test_analyze_unknown_column() {
        let file = csv_file(SAMPLE);
        assert!(analyze_column(file.path(), "volume", Config::default()).is_err());
    }

    #[test]
    fn test_analyze_json_shape() {
        let file = csv_file(SAMPLE);
        let analysis = analyze_column(file.path(), "price", Config::default()).unwrap();
        let json = serde_json::to_value(&analysis.results).unwrap();

        assert_eq!(json["input_len"], 3);
        assert_eq!(json["measurements"].as_object().map(|m| m.len()), Some(5));
        for key in ["heap", "insertion", "merge", "quick", "shell"] {
            assert!(json["measurements"][key]["time_ns"].is_u64(), "{key}");
        }
        assert!(json["best"]["algorithm"].is_string());
    }
}
