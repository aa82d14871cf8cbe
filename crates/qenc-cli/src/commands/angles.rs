//! Angles command implementation.

use anyhow::{Context, Result};
use console::style;

use qenc_synth::{AmplitudeVector, AngleSolver};

use super::common::{OutputFormat, format_values, parse_values};

/// Execute the angles command.
pub fn execute(text: &str, normalize: bool, format: OutputFormat, precision: usize) -> Result<()> {
    let values = parse_values(text)?;
    let mut vector = AmplitudeVector::from_data(&values).context("Invalid input vector")?;
    if normalize {
        vector = vector.normalized().context("Cannot normalize input")?;
    }
    let angles = AngleSolver::new().solve(vector.as_slice())?;

    match format {
        OutputFormat::Table => {
            println!(
                "{} {} values → {} angles",
                style("→").cyan().bold(),
                style(values.len()).green(),
                style(angles.len()).yellow()
            );
            println!("  Vector: {}", format_values(vector.as_slice(), precision));
            for (i, angle) in angles.as_slice().iter().enumerate() {
                println!("  a{i:<4} {angle:>12.precision$}");
            }
        }
        OutputFormat::Json => {
            let report = serde_json::json!({
                "vector": vector.as_slice(),
                "angles": angles,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Qasm => {
            anyhow::bail!("QASM output is only available for `qenc encode`");
        }
    }

    Ok(())
}
