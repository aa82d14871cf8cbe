//! Generalized multi-controlled gate operations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::control::ControlSet;
use crate::error::{IrError, IrResult};
use crate::qubit::QubitId;

/// One instruction of a state-preparation sequence.
///
/// The rotation axis is fixed to Y: `Rotation` applies
/// `Ry(θ) = [[cos θ/2, −sin θ/2], [sin θ/2, cos θ/2]]` to its target,
/// `Flip` applies Pauli-X. Both act only on basis states satisfying every
/// control literal. [`GateOp::rotation`] and [`GateOp::flip`] reject a
/// target that sits inside its own control set; [`crate::Circuit::push`]
/// re-checks ops built from literals or deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum GateOp {
    /// Controlled Y-rotation.
    Rotation {
        /// Rotation angle in radians.
        angle: f64,
        /// Target qubit.
        target: QubitId,
        /// Control literals.
        #[serde(default, skip_serializing_if = "ControlSet::is_empty")]
        controls: ControlSet,
    },
    /// Controlled bit flip.
    Flip {
        /// Target qubit.
        target: QubitId,
        /// Control literals.
        #[serde(default, skip_serializing_if = "ControlSet::is_empty")]
        controls: ControlSet,
    },
}

impl GateOp {
    /// Create a (possibly controlled) Y-rotation.
    pub fn rotation(angle: f64, target: impl Into<QubitId>, controls: ControlSet) -> IrResult<Self> {
        let target = target.into();
        check_target(target, &controls, rotation_name(controls.len()))?;
        Ok(GateOp::Rotation {
            angle,
            target,
            controls,
        })
    }

    /// Create a (possibly controlled) bit flip.
    pub fn flip(target: impl Into<QubitId>, controls: ControlSet) -> IrResult<Self> {
        let target = target.into();
        check_target(target, &controls, flip_name(controls.len()))?;
        Ok(GateOp::Flip { target, controls })
    }

    /// Uncontrolled Y-rotation.
    pub fn ry(angle: f64, target: impl Into<QubitId>) -> Self {
        GateOp::Rotation {
            angle,
            target: target.into(),
            controls: ControlSet::new(),
        }
    }

    /// Uncontrolled bit flip.
    pub fn x(target: impl Into<QubitId>) -> Self {
        GateOp::Flip {
            target: target.into(),
            controls: ControlSet::new(),
        }
    }

    /// Get the target qubit.
    #[inline]
    pub fn target(&self) -> QubitId {
        match self {
            GateOp::Rotation { target, .. } | GateOp::Flip { target, .. } => *target,
        }
    }

    /// Get the control literals.
    #[inline]
    pub fn controls(&self) -> &ControlSet {
        match self {
            GateOp::Rotation { controls, .. } | GateOp::Flip { controls, .. } => controls,
        }
    }

    /// Number of control literals.
    #[inline]
    pub fn num_controls(&self) -> usize {
        self.controls().len()
    }

    /// Rotation angle, if this is a rotation.
    pub fn angle(&self) -> Option<f64> {
        match self {
            GateOp::Rotation { angle, .. } => Some(*angle),
            GateOp::Flip { .. } => None,
        }
    }

    /// Check if this is a rotation.
    pub fn is_rotation(&self) -> bool {
        matches!(self, GateOp::Rotation { .. })
    }

    /// Check if this is a flip.
    pub fn is_flip(&self) -> bool {
        matches!(self, GateOp::Flip { .. })
    }

    /// Gate name following the usual `ry`/`cry`/`mcry` convention.
    pub fn name(&self) -> &'static str {
        match self {
            GateOp::Rotation { controls, .. } => rotation_name(controls.len()),
            GateOp::Flip { controls, .. } => flip_name(controls.len()),
        }
    }

    /// All qubits touched by this op: controls first, target last.
    pub fn qubits(&self) -> Vec<QubitId> {
        let mut qubits: Vec<QubitId> = self.controls().qubits().collect();
        qubits.push(self.target());
        qubits
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateOp::Rotation {
                angle,
                target,
                controls,
            } => {
                write!(f, "{}({angle:.4}) {target}", self.name())?;
                if !controls.is_empty() {
                    write!(f, " ctrl {controls}")?;
                }
                Ok(())
            }
            GateOp::Flip { target, controls } => {
                write!(f, "{} {target}", self.name())?;
                if !controls.is_empty() {
                    write!(f, " ctrl {controls}")?;
                }
                Ok(())
            }
        }
    }
}

fn check_target(target: QubitId, controls: &ControlSet, name: &str) -> IrResult<()> {
    if controls.contains_qubit(target) {
        return Err(IrError::ControlTargetConflict {
            qubit: target,
            gate_name: Some(name.to_string()),
        });
    }
    Ok(())
}

fn rotation_name(num_controls: usize) -> &'static str {
    match num_controls {
        0 => "ry",
        1 => "cry",
        _ => "mcry",
    }
}

fn flip_name(num_controls: usize) -> &'static str {
    match num_controls {
        0 => "x",
        1 => "cx",
        _ => "mcx",
    }
}
