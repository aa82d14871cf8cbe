//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

/// How command results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON
    Json,
    /// OpenQASM 3 source
    Qasm,
}

impl OutputFormat {
    /// Use the flag when given, else the configured default.
    pub fn resolve(flag: Option<OutputFormat>, configured: &str) -> Result<Self> {
        match flag {
            Some(format) => Ok(format),
            None => <Self as ValueEnum>::from_str(configured, true)
                .map_err(|e| anyhow::anyhow!("Invalid output format '{configured}': {e}")),
        }
    }
}

/// Read the raw input text from `--data` or `--input`.
pub fn read_input(data: Option<&str>, input: Option<&Path>) -> Result<String> {
    match (data, input) {
        (Some(data), None) => Ok(data.to_string()),
        (None, Some(path)) => {
            if !path.exists() {
                anyhow::bail!("File not found: {}", path.display());
            }
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))
        }
        (Some(_), Some(_)) => anyhow::bail!("Use either --data or --input, not both"),
        (None, None) => anyhow::bail!("No input given; pass --data or --input"),
    }
}

/// Parse numbers separated by commas and/or whitespace.
pub fn parse_values(text: &str) -> Result<Vec<f64>> {
    let values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("Invalid number: '{token}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    if values.is_empty() {
        anyhow::bail!("Input contains no numbers");
    }
    Ok(values)
}

/// Parse one row of numbers per non-empty line.
pub fn parse_rows(text: &str) -> Result<Vec<Vec<f64>>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_values(line).with_context(|| format!("Line {}", i + 1)))
        .collect()
}

/// Write `content` to `output`, or to stdout when no path is given.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display())),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}

/// Render values as `[a, b, c]` with fixed precision.
pub fn format_values(values: &[f64], precision: usize) -> String {
    let items: Vec<String> = values.iter().map(|v| format!("{v:.precision$}")).collect();
    format!("[{}]", items.join(", "))
}
