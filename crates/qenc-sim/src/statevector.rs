//! Statevector simulation engine.

use num_complex::Complex64;
use tracing::trace;

use qenc_ir::{ControlSet, GateOp};

use crate::error::{SimError, SimResult};

/// Widest register a [`Statevector`] will allocate (16 GiB of amplitudes).
pub const MAX_SUPPORTED_QUBITS: u32 = 30;

/// A statevector representing a quantum state.
///
/// Qubit `k` is bit `k` of the basis index.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: u32,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    ///
    /// Widths above [`MAX_SUPPORTED_QUBITS`] are rejected.
    pub fn new(num_qubits: u32) -> SimResult<Self> {
        if num_qubits > MAX_SUPPORTED_QUBITS {
            return Err(SimError::TooManyQubits {
                requested: num_qubits,
                max: MAX_SUPPORTED_QUBITS,
            });
        }
        let size = 1_usize << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }

    /// Apply an op, honouring positive and negated controls.
    pub fn apply(&mut self, op: &GateOp) -> SimResult<()> {
        if let Some(qubit) = op.qubits().into_iter().find(|q| q.0 >= self.num_qubits) {
            return Err(SimError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        trace!(%op, "apply");

        let target = op.target().index();
        let (ctrl_mask, ctrl_value) = control_masks(op.controls());
        match op {
            GateOp::Rotation { angle, .. } => self.apply_ry(target, *angle, ctrl_mask, ctrl_value),
            GateOp::Flip { .. } => self.apply_x(target, ctrl_mask, ctrl_value),
        }
        Ok(())
    }

    // =========================================================================
    // Gate kernels
    // =========================================================================

    fn apply_x(&mut self, qubit: usize, ctrl_mask: usize, ctrl_value: usize) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 && i & ctrl_mask == ctrl_value {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    fn apply_ry(&mut self, qubit: usize, theta: f64, ctrl_mask: usize, ctrl_value: usize) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 && i & ctrl_mask == ctrl_value {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a - s * b;
                self.amplitudes[j] = s * a + c * b;
            }
        }
    }
}

/// Bit mask of all control qubits and the pattern they must match.
fn control_masks(controls: &ControlSet) -> (usize, usize) {
    controls.iter().fold((0, 0), |(mask, value), literal| {
        let bit = 1 << literal.qubit.index();
        (mask | bit, if literal.state { value | bit } else { value })
    })
}
