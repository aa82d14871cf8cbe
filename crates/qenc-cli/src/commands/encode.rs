//! Encode command implementation.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::style;
use tracing::info;

use qenc_ir::{Circuit, GateOp};
use qenc_qasm3::emit;
use qenc_synth::{amplitude_encoding, angle_encoding, basis_encoding, frqi_encoding};

use super::common::{OutputFormat, format_values, parse_rows, parse_values, write_output};

/// Classical-to-quantum encoding scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EncodingMethod {
    /// Values become normalized amplitudes
    Amplitude,
    /// One qubit per value, rotated by the scaled value
    Angle,
    /// Flexible representation of quantum images (one row per line)
    Frqi,
    /// NEQR basis encoding of integers
    Basis,
}

/// Options for the encode command.
#[derive(Debug, Clone)]
pub struct EncodeOptions<'a> {
    pub method: EncodingMethod,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub format: OutputFormat,
    pub precision: usize,
    pub output: Option<&'a Path>,
}

/// Execute the encode command.
pub fn execute(text: &str, opts: &EncodeOptions<'_>) -> Result<()> {
    let content = render(text, opts)?;
    write_output(&content, opts.output)?;

    if let Some(path) = opts.output {
        println!(
            "{} Wrote {} to {}",
            style("✓").green().bold(),
            style(format!("{:?}", opts.format).to_lowercase()).yellow(),
            style(path.display()).green()
        );
    }
    Ok(())
}

/// Encode `text` and render it in the requested format.
pub fn render(text: &str, opts: &EncodeOptions<'_>) -> Result<String> {
    let (circuit, json) = match opts.method {
        EncodingMethod::Amplitude => {
            let encoding = amplitude_encoding(&parse_values(text)?).context("Amplitude encoding failed")?;
            let json = serde_json::to_string_pretty(&encoding)?;
            (encoding.circuit, json)
        }
        EncodingMethod::Angle => {
            let circuit = angle_encoding(&parse_values(text)?, opts.min, opts.max)
                .context("Angle encoding failed")?;
            let json = serde_json::to_string_pretty(&circuit)?;
            (circuit, json)
        }
        EncodingMethod::Frqi => {
            let circuit = frqi_encoding(&frqi_rows(text)?, opts.min, opts.max)
                .context("FRQI encoding failed")?;
            let json = serde_json::to_string_pretty(&circuit)?;
            (circuit, json)
        }
        EncodingMethod::Basis => {
            let circuit = basis_encoding(&parse_values(text)?).context("Basis encoding failed")?;
            let json = serde_json::to_string_pretty(&circuit)?;
            (circuit, json)
        }
    };

    info!(
        method = ?opts.method,
        num_qubits = circuit.num_qubits(),
        num_ops = circuit.num_ops(),
        "encoded input"
    );

    Ok(match opts.format {
        OutputFormat::Table => render_table(&circuit, opts.precision),
        OutputFormat::Json => json + "\n",
        OutputFormat::Qasm => emit(&circuit)?,
    })
}

/// A single line of values is a column (one value per row); otherwise
/// every line is a row.
fn frqi_rows(text: &str) -> Result<Vec<Vec<f64>>> {
    let rows = parse_rows(text)?;
    if rows.len() == 1 {
        return Ok(rows[0].iter().map(|&v| vec![v]).collect());
    }
    Ok(rows)
}

fn render_table(circuit: &Circuit, precision: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "circuit '{}': {} qubits, {} ops ({} rotations, {} flips), max controls {}",
        circuit.name(),
        circuit.num_qubits(),
        circuit.num_ops(),
        circuit.num_rotations(),
        circuit.num_flips(),
        circuit.max_controls()
    );
    let counts: Vec<String> = circuit
        .op_counts()
        .iter()
        .map(|(name, count)| format!("{name}={count}"))
        .collect();
    let _ = writeln!(out, "gates: {}", counts.join(" "));

    for (i, op) in circuit.ops().iter().enumerate() {
        let angle = match op {
            GateOp::Rotation { angle, .. } => format_values(&[*angle], precision),
            GateOp::Flip { .. } => String::new(),
        };
        let controls = if op.controls().is_empty() {
            String::new()
        } else {
            format!(" ctrl {}", op.controls())
        };
        let _ = writeln!(out, "{i:>4}  {:<5}{angle} {}{controls}", op.name(), op.target());
    }
    out
}
