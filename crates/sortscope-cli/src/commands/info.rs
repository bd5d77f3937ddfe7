//! Info command - Show algorithm information
//!
//! Usage:
//! ```bash
//! sortscope info
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};

use sortscope_core::{Algorithm, Config};

/// Arguments for the info command
#[derive(Args)]
pub struct InfoArgs;

/// Run the info command
pub fn run(_args: InfoArgs) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{}",
        "SortScope - Sorting Algorithm Performance Evaluator".bold().cyan()
    );
    println!("{}", "═".repeat(50).cyan());
    println!();

    println!("{}", "Version Information:".bold());
    println!("  {} {}", "CLI Version:".dimmed(), version.green());
    println!();

    println!("{}", "Algorithms (in execution order):".bold());
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Name").fg(Color::Cyan),
            Cell::new("Best").fg(Color::Cyan),
            Cell::new("Average").fg(Color::Cyan),
            Cell::new("Worst").fg(Color::Cyan),
            Cell::new("Policy").fg(Color::Cyan),
        ]);

    for algo in Algorithm::ALL {
        let (best, average, worst) = algo.complexity();
        table.add_row(vec![
            Cell::new(algo.name()).fg(Color::Green),
            Cell::new(best),
            Cell::new(average),
            Cell::new(worst),
            Cell::new(algo.policy()).fg(Color::Yellow),
        ]);
    }
    println!("{table}");
    println!();

    let config = Config::from_env();
    println!("{}", "Configuration:".bold());
    println!("  {} {}", "SORTSCOPE_WARMUP_RUNS:".dimmed(), config.warmup_runs);
    println!("  {} {}", "SORTSCOPE_VERIFY_ORDER:".dimmed(), config.verify_order);
    println!();

    Ok(())
}
