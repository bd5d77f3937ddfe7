//! CSV ingestion
//!
//! Minimal comma-separated reading: the first line is a header, fields are
//! split on `,` with no quoting. Rows whose selected field is missing or not an
//! integer are skipped rather than treated as fatal.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};

/// Integers read from one column, plus counts of what was skipped
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ColumnData {
    pub values: Vec<i64>,
    /// Rows with too few fields to reach the column
    pub short_rows: usize,
    /// Rows whose field did not parse as an integer
    pub invalid_rows: usize,
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}

/// Iterate the reader's lines, decoding bytes that are not valid UTF-8 as
/// U+FFFD so one bad row never aborts the whole read.
fn lossy_lines(reader: impl BufRead) -> impl Iterator<Item = std::io::Result<String>> {
    reader.split(b'\n').map(|bytes| {
        let mut bytes = bytes?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    })
}

/// Read up to `rows` lines (header included), each split into fields
pub fn load_preview(path: &Path, rows: usize) -> Result<Vec<Vec<String>>> {
    read_preview(open(path)?, rows)
        .with_context(|| format!("Error reading file: {}", path.display()))
}

fn read_preview(reader: impl BufRead, rows: usize) -> Result<Vec<Vec<String>>> {
    let mut preview = Vec::with_capacity(rows);
    for line in lossy_lines(reader).take(rows) {
        preview.push(split_fields(&line?));
    }
    Ok(preview)
}

/// Read the header line
pub fn load_header(path: &Path) -> Result<Vec<String>> {
    let mut preview = load_preview(path, 1)?;
    if preview.is_empty() {
        bail!("CSV file is empty: {}", path.display());
    }
    Ok(preview.swap_remove(0))
}

/// Resolve a column given either as a zero-based index or a header name
pub fn resolve_column(headers: &[String], selector: &str) -> Result<usize> {
    let selector = selector.trim();

    if let Ok(index) = selector.parse::<usize>() {
        if index < headers.len() {
            return Ok(index);
        }
        bail!(
            "Column index {} out of range (file has {} columns)",
            index,
            headers.len()
        );
    }

    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(selector))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Column '{}' not found. Run 'sortscope columns <FILE>' to list columns.",
                selector
            )
        })
}

/// Load every integer in column `index`, skipping the header line
pub fn load_column(path: &Path, index: usize) -> Result<ColumnData> {
    read_column(open(path)?, index)
        .with_context(|| format!("Error reading file: {}", path.display()))
}

fn read_column(reader: impl BufRead, index: usize) -> Result<ColumnData> {
    let mut data = ColumnData::default();

    for (line_no, line) in lossy_lines(reader).enumerate().skip(1) {
        let line = line?;
        let Some(field) = line.split(',').nth(index) else {
            debug!(line = line_no + 1, "row too short, skipping");
            data.short_rows += 1;
            continue;
        };
        match field.trim().parse::<i64>() {
            Ok(value) => data.values.push(value),
            Err(err) => {
                warn!(line = line_no + 1, field = field.trim(), %err, "Skipping invalid number");
                data.invalid_rows += 1;
            }
        }
    }
    Ok(data)
}
