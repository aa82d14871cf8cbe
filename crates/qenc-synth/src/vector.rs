//! Amplitude vectors: validation, zero-padding and normalization.

use serde::Serialize;

use crate::error::{SynthError, SynthResult};

/// A real amplitude vector whose length is a power of two, at least 2.
///
/// The vector is not necessarily normalized; call
/// [`AmplitudeVector::normalized`] before handing it to a backend
/// comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmplitudeVector {
    values: Vec<f64>,
}

impl AmplitudeVector {
    /// Validate `data` and pad it with trailing zeros to the next power of
    /// two. A single value is padded to length two so it owns a qubit.
    pub fn from_data(data: &[f64]) -> SynthResult<Self> {
        if data.is_empty() {
            return Err(SynthError::EmptyVector);
        }
        if let Some(index) = data.iter().position(|v| !v.is_finite()) {
            return Err(SynthError::NonFiniteValue { index });
        }
        Ok(Self {
            values: pad_with_zeros(data),
        })
    }

    /// Return a unit-norm copy.
    pub fn normalized(&self) -> SynthResult<Self> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(SynthError::ZeroNorm);
        }
        Ok(Self {
            values: self.values.iter().map(|v| v / norm).collect(),
        })
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Register width needed to hold this vector (`log2(len)`).
    pub fn num_qubits(&self) -> u32 {
        num_qubits_for(self.values.len())
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }
}

/// Smallest power of two that is `>= len` (1 for an empty input).
pub fn next_power_of_two(len: usize) -> usize {
    len.max(1).next_power_of_two()
}

/// Number of qubits addressing `len` amplitudes, i.e. `ceil(log2(len))`.
pub fn num_qubits_for(len: usize) -> u32 {
    next_power_of_two(len).trailing_zeros()
}

/// Copy `data` and append zeros up to the next power of two, never
/// shorter than 2.
pub fn pad_with_zeros(data: &[f64]) -> Vec<f64> {
    let mut padded = data.to_vec();
    padded.resize(next_power_of_two(data.len()).max(2), 0.0);
    padded
}
