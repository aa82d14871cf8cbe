//! Backend trait and the local statevector implementation.

use num_complex::Complex64;
use tracing::debug;

use qenc_ir::{Circuit, GateOp};

use crate::error::{SimError, SimResult};
use crate::statevector::{MAX_SUPPORTED_QUBITS, Statevector};

/// Default register limit of [`StatevectorBackend`].
pub const DEFAULT_MAX_QUBITS: u32 = 24;

/// Something that can execute a gate list and report the final state.
pub trait CircuitBackend {
    /// Backend name.
    fn name(&self) -> &str;

    /// Run `ops` on `num_qubits` qubits starting from |0…0⟩ and return the
    /// final amplitudes indexed by basis state.
    fn run(&self, ops: &[GateOp], num_qubits: u32) -> SimResult<Vec<Complex64>>;

    /// Run a whole [`Circuit`].
    fn run_circuit(&self, circuit: &Circuit) -> SimResult<Vec<Complex64>> {
        self.run(circuit.ops(), circuit.num_qubits())
    }
}

/// Exact statevector backend.
///
/// Memory grows as `16 · 2^n` bytes, so the register width is capped.
#[derive(Debug, Clone)]
pub struct StatevectorBackend {
    max_qubits: u32,
}

impl StatevectorBackend {
    /// Create a backend with the default width limit.
    pub fn new() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }

    /// Create a backend with a custom width limit, clamped to
    /// [`MAX_SUPPORTED_QUBITS`].
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            max_qubits: max_qubits.min(MAX_SUPPORTED_QUBITS),
        }
    }

    pub fn max_qubits(&self) -> u32 {
        self.max_qubits
    }
}

impl Default for StatevectorBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CircuitBackend for StatevectorBackend {
    fn name(&self) -> &str {
        "statevector"
    }

    fn run(&self, ops: &[GateOp], num_qubits: u32) -> SimResult<Vec<Complex64>> {
        if num_qubits > self.max_qubits {
            return Err(SimError::TooManyQubits {
                requested: num_qubits,
                max: self.max_qubits,
            });
        }
        debug!(num_qubits, n_ops = ops.len(), "running statevector simulation");

        let mut state = Statevector::new(num_qubits)?;
        for op in ops {
            state.apply(op)?;
        }
        Ok(state.into_amplitudes())
    }
}

/// Largest `|actual[i] − expected[i]|` over all indices.
///
/// Returns infinity when the lengths differ.
pub fn max_abs_diff(actual: &[Complex64], expected: &[f64]) -> f64 {
    if actual.len() != expected.len() {
        return f64::INFINITY;
    }
    actual
        .iter()
        .zip(expected)
        .map(|(a, &e)| (a - Complex64::new(e, 0.0)).norm())
        .fold(0.0, f64::max)
}

/// Whether `actual` equals the real vector `expected` within `tolerance`.
pub fn matches_real(actual: &[Complex64], expected: &[f64], tolerance: f64) -> bool {
    max_abs_diff(actual, expected) <= tolerance
}
