//! Classical-data encoders.
//!
//! Each encoder validates its input and returns a [`Circuit`] that prepares
//! the encoded state from |0…0⟩.
//!
//! | Encoder | Register | Gates |
//! |---------|----------|-------|
//! | [`amplitude_encoding`] | `log2(len)` | recursive multi-controlled `Ry` |
//! | [`angle_encoding`] | one qubit per value | `Ry(2θ)` |
//! | [`frqi_encoding`] | `log2(rows)` address + one per column | address `Ry(π/2)`, addressed `Ry(2θ)` |
//! | [`basis_encoding`] | `log2(len)` address + value width | address `Ry(π/2)`, addressed `X` |
//!
//! Scaled encoders map a value `x` to `θ = (x − min)·(π/2)/(max − min)`,
//! so `min` lands on |0⟩ and `max` on |1⟩.

use std::f64::consts::FRAC_PI_2;

use qenc_ir::{Circuit, ControlSet, GateOp, QubitId};
use serde::Serialize;
use tracing::debug;

use crate::angles::{AngleSet, AngleSolver};
use crate::error::{SynthError, SynthResult};
use crate::synthesis::CircuitSynthesizer;
use crate::vector::{AmplitudeVector, next_power_of_two, num_qubits_for};

/// Largest magnitude accepted by [`basis_encoding`] (2^53).
pub const MAX_BASIS_MAGNITUDE: f64 = 9_007_199_254_740_992.0;

/// Everything produced while amplitude-encoding a vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmplitudeEncoding {
    /// Padded and normalized target state.
    pub vector: AmplitudeVector,
    /// Spherical angles of `vector`.
    pub angles: AngleSet,
    /// Preparation circuit.
    pub circuit: Circuit,
}

/// Amplitude-encode `data`.
///
/// The data is zero-padded to a power of two (at least 2) and normalized.
pub fn amplitude_encoding(data: &[f64]) -> SynthResult<AmplitudeEncoding> {
    let vector = AmplitudeVector::from_data(data)?.normalized()?;
    let num_qubits = vector.num_qubits();

    debug!(len = data.len(), num_qubits, "amplitude encoding");

    let angles = AngleSolver.solve(vector.as_slice())?;
    let circuit = CircuitSynthesizer.synthesize_circuit("amplitude", angles.as_slice(), num_qubits)?;

    Ok(AmplitudeEncoding {
        vector,
        angles,
        circuit,
    })
}

/// Angle-encode `data`, one qubit per value.
///
/// `min`/`max` default to the data extrema.
pub fn angle_encoding(data: &[f64], min: Option<f64>, max: Option<f64>) -> SynthResult<Circuit> {
    check_finite(data)?;
    let thetas = scale(data, min, max)?;
    let num_qubits = u32::try_from(data.len()).map_err(|_| SynthError::InvalidQubitCount(u32::MAX))?;

    debug!(num_qubits, "angle encoding");

    let mut circuit = Circuit::with_size("angle", num_qubits);
    for (i, theta) in thetas.into_iter().enumerate() {
        circuit.push(GateOp::ry(2.0 * theta, i))?;
    }
    Ok(circuit)
}

/// FRQI-encode a 2-D table.
///
/// Rows are padded with zero rows to a power of two and addressed by
/// `log2(rows)` qubits. Column `j` is written to data qubit
/// `a + d − j − 1`, where `a` is the address width and `d` the column
/// count. Padding rows take part in the `min`/`max` defaults.
pub fn frqi_encoding(rows: &[Vec<f64>], min: Option<f64>, max: Option<f64>) -> SynthResult<Circuit> {
    let width = rows.first().map_or(0, Vec::len);
    if width == 0 {
        return Err(SynthError::EmptyVector);
    }
    for (row, values) in rows.iter().enumerate() {
        if values.len() != width {
            return Err(SynthError::RaggedRows {
                row,
                expected: width,
                got: values.len(),
            });
        }
    }

    let padded_rows = next_power_of_two(rows.len());
    let mut flat: Vec<f64> = rows.iter().flatten().copied().collect();
    check_finite(&flat)?;
    flat.resize(padded_rows * width, 0.0);
    let thetas = scale(&flat, min, max)?;

    let address = num_qubits_for(padded_rows);
    let data_width = width as u32;
    let address_qubits: Vec<QubitId> = (0..address).map(QubitId).collect();

    debug!(rows = rows.len(), columns = width, address, "FRQI encoding");

    let mut circuit = Circuit::with_size("frqi", address + data_width);
    superpose(&mut circuit, address)?;
    for (i, row) in thetas.chunks(width).enumerate() {
        let controls = ControlSet::from_ctrl_state(&address_qubits, i as u64)?;
        for (j, theta) in row.iter().enumerate() {
            let target = QubitId(address + data_width - j as u32 - 1);
            circuit.ry(2.0 * theta, target, controls.clone())?;
        }
    }
    Ok(circuit)
}

/// Basis-encode (NEQR) a list of integers.
///
/// Values are written in two's complement. The width is the bit length of
/// the largest magnitude, plus a sign bit when any value is negative. Bit
/// `k` of value `i` lands on qubit `a + k` under address pattern `i`.
pub fn basis_encoding(values: &[f64]) -> SynthResult<Circuit> {
    if values.is_empty() {
        return Err(SynthError::EmptyVector);
    }
    check_finite(values)?;
    let mut ints = Vec::with_capacity(next_power_of_two(values.len()));
    for (index, &value) in values.iter().enumerate() {
        if value.abs() > MAX_BASIS_MAGNITUDE {
            return Err(SynthError::ValueOutOfRange { index, value });
        }
        if value.fract() != 0.0 {
            return Err(SynthError::NonIntegerValue { index, value });
        }
        ints.push(value as i64);
    }
    ints.resize(next_power_of_two(values.len()), 0);

    let max_abs = ints.iter().map(|v| v.unsigned_abs()).max().unwrap_or(0);
    let mut bit_depth = (u64::BITS - max_abs.leading_zeros()).max(1);
    if ints.iter().any(|&v| v < 0) {
        bit_depth += 1;
    }

    let address = num_qubits_for(ints.len());
    let address_qubits: Vec<QubitId> = (0..address).map(QubitId).collect();

    debug!(len = values.len(), address, bit_depth, "basis encoding");

    let mut circuit = Circuit::with_size("basis", address + bit_depth);
    superpose(&mut circuit, address)?;
    for (i, &value) in ints.iter().enumerate() {
        let controls = ControlSet::from_ctrl_state(&address_qubits, i as u64)?;
        for k in 0..bit_depth {
            if (value >> k) & 1 == 1 {
                circuit.flip(QubitId(address + k), controls.clone())?;
            }
        }
    }
    Ok(circuit)
}

/// Put qubits `0..count` into an equal superposition.
fn superpose(circuit: &mut Circuit, count: u32) -> SynthResult<()> {
    for q in 0..count {
        circuit.push(GateOp::ry(FRAC_PI_2, q))?;
    }
    Ok(())
}

fn check_finite(data: &[f64]) -> SynthResult<()> {
    if let Some(index) = data.iter().position(|v| !v.is_finite()) {
        return Err(SynthError::NonFiniteValue { index });
    }
    Ok(())
}

/// Map every value to `[0, π/2]` relative to `min`/`max`.
fn scale(data: &[f64], min: Option<f64>, max: Option<f64>) -> SynthResult<Vec<f64>> {
    if data.is_empty() {
        return Err(SynthError::EmptyVector);
    }
    let min = min.unwrap_or_else(|| data.iter().copied().fold(f64::INFINITY, f64::min));
    let max = max.unwrap_or_else(|| data.iter().copied().fold(f64::NEG_INFINITY, f64::max));
    if max < min {
        return Err(SynthError::InvalidRange { min, max });
    }
    if max == min {
        return Ok(vec![0.0; data.len()]);
    }
    Ok(data
        .iter()
        .map(|x| (x - min) * FRAC_PI_2 / (max - min))
        .collect())
}
