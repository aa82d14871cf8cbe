//! Ordered gate sequences with a declared register width.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::control::ControlSet;
use crate::error::{IrError, IrResult};
use crate::gate::GateOp;
use crate::qubit::QubitId;

/// A state-preparation circuit.
///
/// Ops execute in insertion order starting from |0…0⟩. Every op is checked
/// on insertion: all of its qubits must lie inside the register and its
/// target must not be one of its controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Declared register width.
    num_qubits: u32,
    /// Ops in execution order.
    ops: Vec<GateOp>,
}

impl Circuit {
    /// Create an empty circuit over `num_qubits` qubits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            ops: vec![],
        }
    }

    /// Build a circuit from an existing op list, validating every op.
    pub fn from_ops(
        name: impl Into<String>,
        num_qubits: u32,
        ops: impl IntoIterator<Item = GateOp>,
    ) -> IrResult<Self> {
        let mut circuit = Self::with_size(name, num_qubits);
        circuit.extend(ops)?;
        Ok(circuit)
    }

    /// Append an op.
    pub fn push(&mut self, op: GateOp) -> IrResult<&mut Self> {
        self.check_op(&op)?;
        self.ops.push(op);
        Ok(self)
    }

    /// Append several ops in order. Nothing is appended if any op is invalid.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = GateOp>) -> IrResult<&mut Self> {
        let ops: Vec<GateOp> = ops.into_iter().collect();
        for op in &ops {
            self.check_op(op)?;
        }
        self.ops.extend(ops);
        Ok(self)
    }

    /// Apply a (possibly controlled) Y-rotation.
    pub fn ry(
        &mut self,
        angle: f64,
        target: QubitId,
        controls: ControlSet,
    ) -> IrResult<&mut Self> {
        self.push(GateOp::rotation(angle, target, controls)?)
    }

    /// Apply a (possibly controlled) bit flip.
    pub fn flip(&mut self, target: QubitId, controls: ControlSet) -> IrResult<&mut Self> {
        self.push(GateOp::flip(target, controls)?)
    }

    fn check_op(&self, op: &GateOp) -> IrResult<()> {
        let target = op.target();
        if op.controls().contains_qubit(target) {
            return Err(IrError::ControlTargetConflict {
                qubit: target,
                gate_name: Some(op.name().to_string()),
            });
        }
        for qubit in op.qubits() {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit,
                    num_qubits: self.num_qubits,
                    gate_name: Some(op.name().to_string()),
                });
            }
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the declared number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Ops in execution order.
    pub fn ops(&self) -> &[GateOp] {
        &self.ops
    }

    /// Consume the circuit, returning its ops.
    pub fn into_ops(self) -> Vec<GateOp> {
        self.ops
    }

    /// Total number of ops.
    pub fn num_ops(&self) -> usize {
        self.ops.len()
    }

    /// Number of rotations.
    pub fn num_rotations(&self) -> usize {
        self.ops.iter().filter(|op| op.is_rotation()).count()
    }

    /// Number of flips.
    pub fn num_flips(&self) -> usize {
        self.ops.iter().filter(|op| op.is_flip()).count()
    }

    /// Largest control count of any op (0 for an empty circuit).
    pub fn max_controls(&self) -> usize {
        self.ops.iter().map(GateOp::num_controls).max().unwrap_or(0)
    }

    /// Op counts keyed by gate name, sorted by name.
    pub fn op_counts(&self) -> Vec<(&'static str, usize)> {
        let mut counts: FxHashMap<&'static str, usize> = FxHashMap::default();
        for op in &self.ops {
            *counts.entry(op.name()).or_insert(0) += 1;
        }
        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_unstable_by_key(|(name, _)| *name);
        counts
    }
}
