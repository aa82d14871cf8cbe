//! Recursive state-preparation synthesis.
//!
//! Turns the `2^n − 1` spherical angles of an amplitude vector into an
//! ordered list of multi-controlled Y-rotations and bit flips that
//! prepares that vector from |0…0⟩ on `n` qubits (qubit 0 is the least
//! significant bit of the basis index).
//!
//! # Construction
//!
//! - **n = 1**: `Ry(a0)` on q0.
//! - **n = 2**: `Ry(a0)` on q0, `Ry(−a1)` on q1 controlled by q0,
//!   `Ry(π + a2)` on q0 controlled by q1.
//! - **n > 2**, with `h = 2^(n−1) − 1`:
//!   1. prepare the lower half on q0..q(n−2) from `angles[..h]`
//!   2. `Ry(angles[h])` on q(n−1) controlled by q0..q(n−2)
//!   3. flip q0..q(n−2), each controlled by q(n−1)
//!   4. prepare the upper half from `angles[h+1..]`, every gate
//!      additionally controlled by q(n−1)
//!
//! Every gate also carries the caller's extra controls.
//!
//! Gate count for n ≥ 2: `2^n − 1` rotations and `3·2^(n−2) − n − 1`
//! flips.

use std::f64::consts::PI;

use qenc_ir::{Circuit, ControlLiteral, ControlSet, GateOp, QubitId};
use tracing::{debug, trace};

use crate::error::{SynthError, SynthResult};

/// Builds state-preparation gate sequences from angle sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircuitSynthesizer;

impl CircuitSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Synthesize the uncontrolled preparation circuit for `angles` on
    /// `num_qubits` qubits.
    pub fn synthesize(&self, angles: &[f64], num_qubits: u32) -> SynthResult<Vec<GateOp>> {
        self.synthesize_controlled(angles, num_qubits, &[])
    }

    /// Synthesize with extra controls attached to every emitted gate.
    ///
    /// Controls are deduplicated. They must live outside the target
    /// register `[0, num_qubits)`.
    ///
    /// # Errors
    ///
    /// - [`SynthError::InvalidQubitCount`] when `num_qubits == 0`
    /// - [`SynthError::AngleCountMismatch`] unless `angles.len() == 2^num_qubits − 1`
    /// - [`SynthError::ControlTargetConflict`] when a control lies in the register
    /// - [`SynthError::Ir`] when a qubit is listed with both polarities
    pub fn synthesize_controlled(
        &self,
        angles: &[f64],
        num_qubits: u32,
        controls: &[ControlLiteral],
    ) -> SynthResult<Vec<GateOp>> {
        if num_qubits == 0 || num_qubits >= usize::BITS {
            return Err(SynthError::InvalidQubitCount(num_qubits));
        }
        let expected = (1_usize << num_qubits) - 1;
        if angles.len() != expected {
            return Err(SynthError::AngleCountMismatch {
                qubits: num_qubits,
                expected,
                got: angles.len(),
            });
        }

        let controls = ControlSet::from_literals(controls.iter().copied())?;
        if let Some(qubit) = controls.qubits().find(|q| q.0 < num_qubits) {
            return Err(SynthError::ControlTargetConflict { qubit });
        }

        debug!(
            num_qubits,
            n_angles = angles.len(),
            n_controls = controls.len(),
            "synthesizing state-preparation circuit"
        );

        let mut ops = Vec::new();
        prepare(angles, num_qubits, &controls, &mut ops)?;
        Ok(ops)
    }

    /// Synthesize directly into a [`Circuit`] of width `num_qubits`.
    pub fn synthesize_circuit(
        &self,
        name: impl Into<String>,
        angles: &[f64],
        num_qubits: u32,
    ) -> SynthResult<Circuit> {
        let ops = self.synthesize(angles, num_qubits)?;
        Ok(Circuit::from_ops(name, num_qubits, ops)?)
    }
}

fn prepare(
    angles: &[f64],
    num_qubits: u32,
    controls: &ControlSet,
    ops: &mut Vec<GateOp>,
) -> SynthResult<()> {
    trace!(num_qubits, n_controls = controls.len(), "prepare");
    match num_qubits {
        1 => {
            ops.push(GateOp::rotation(angles[0], QubitId(0), controls.clone())?);
        }
        2 => {
            let q0 = QubitId(0);
            let q1 = QubitId(1);
            ops.push(GateOp::rotation(angles[0], q0, controls.clone())?);
            ops.push(GateOp::rotation(
                -angles[1],
                q1,
                controls.with(ControlLiteral::positive(q0))?,
            )?);
            ops.push(GateOp::rotation(
                PI + angles[2],
                q0,
                controls.with(ControlLiteral::positive(q1))?,
            )?);
        }
        n => {
            let top = QubitId(n - 1);
            let half = (1_usize << (n - 1)) - 1;

            prepare(&angles[..half], n - 1, controls, ops)?;

            let lower = controls.union(&ControlSet::positive(0..n - 1))?;
            ops.push(GateOp::rotation(angles[half], top, lower)?);

            let upper = controls.with(ControlLiteral::positive(top))?;
            for i in 0..n - 1 {
                ops.push(GateOp::flip(QubitId(i), upper.clone())?);
            }

            prepare(&angles[half + 1..], n - 1, &upper, ops)?;
        }
    }
    Ok(())
}

/// Shorthand for [`CircuitSynthesizer::synthesize`].
pub fn synthesize(angles: &[f64], num_qubits: u32) -> SynthResult<Vec<GateOp>> {
    CircuitSynthesizer.synthesize(angles, num_qubits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_qubit() {
        let ops = synthesize(&[0.6695], 1).unwrap();
        assert_eq!(ops, vec![GateOp::ry(0.6695, 0u32)]);
    }

    #[test]
    fn test_two_qubit_pattern() {
        let ops = synthesize(&[2.2483, 1.3956, 2.2143], 2).unwrap();
        assert_eq!(ops.len(), 3);

        assert_eq!(ops[0].target(), QubitId(0));
        assert!(ops[0].controls().is_empty());
        assert_eq!(ops[0].angle(), Some(2.2483));

        assert_eq!(ops[1].target(), QubitId(1));
        assert_eq!(ops[1].controls(), &ControlSet::positive([0u32]));
        assert_eq!(ops[1].angle(), Some(-1.3956));

        assert_eq!(ops[2].target(), QubitId(0));
        assert_eq!(ops[2].controls(), &ControlSet::positive([1u32]));
        assert!((ops[2].angle().unwrap() - 5.3559).abs() < 1e-4);
    }

    #[test]
    fn test_three_qubit_layout() {
        let angles = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let ops = synthesize(&angles, 3).unwrap();
        let names: Vec<&str> = ops.iter().map(GateOp::name).collect();
        assert_eq!(
            names,
            vec!["ry", "cry", "cry", "mcry", "cx", "cx", "cry", "mcry", "mcry"]
        );
        // Middle rotation consumes angles[3]; the upper half starts at angles[4].
        assert_eq!(ops[3].angle(), Some(4.0));
        assert_eq!(ops[6].angle(), Some(5.0));
        assert_eq!(ops[7].angle(), Some(-6.0));
        assert_eq!(ops[8].angle(), Some(PI + 7.0));
        assert_eq!(ops[8].controls(), &ControlSet::positive([1u32, 2]));
    }

    #[test]
    fn test_invalid_qubit_count() {
        assert_eq!(synthesize(&[], 0), Err(SynthError::InvalidQubitCount(0)));
    }

    #[test]
    fn test_angle_count_mismatch() {
        assert_eq!(
            synthesize(&[0.1, 0.2], 2),
            Err(SynthError::AngleCountMismatch {
                qubits: 2,
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn test_control_inside_register_rejected() {
        let err = CircuitSynthesizer
            .synthesize_controlled(&[0.1, 0.2, 0.3], 2, &[ControlLiteral::positive(1u32)])
            .unwrap_err();
        assert_eq!(err, SynthError::ControlTargetConflict { qubit: QubitId(1) });
    }

    #[test]
    fn test_conflicting_controls_rejected() {
        let err = CircuitSynthesizer
            .synthesize_controlled(
                &[0.1],
                1,
                &[ControlLiteral::positive(4u32), ControlLiteral::negative(4u32)],
            )
            .unwrap_err();
        assert!(matches!(
            err,
            SynthError::Ir(qenc_ir::IrError::ConflictingControl { .. })
        ));
    }

    #[test]
    fn test_duplicate_controls_collapse() {
        let extra = [ControlLiteral::positive(5u32), ControlLiteral::positive(5u32)];
        let ops = CircuitSynthesizer
            .synthesize_controlled(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7], 3, &extra)
            .unwrap();
        for op in &ops {
            let fives = op.controls().qubits().filter(|q| *q == QubitId(5)).count();
            assert_eq!(fives, 1, "{op}");
        }
    }
}
