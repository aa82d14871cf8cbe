//! Property-based tests for control-set construction.

use proptest::prelude::*;
use qenc_ir::{ControlLiteral, ControlSet, GateOp, QubitId};

fn arb_positive_literals() -> impl Strategy<Value = Vec<ControlLiteral>> {
    prop::collection::vec((0_u32..8).prop_map(ControlLiteral::positive), 0..16)
}

proptest! {
    /// Repeated positive literals always collapse to one per qubit, sorted.
    #[test]
    fn test_positive_literals_dedup_sorted(literals in arb_positive_literals()) {
        let set = ControlSet::from_literals(literals.clone()).unwrap();

        let qubits: Vec<QubitId> = set.qubits().collect();
        let mut expected: Vec<QubitId> = literals.iter().map(|l| l.qubit).collect();
        expected.sort_unstable();
        expected.dedup();

        prop_assert_eq!(qubits, expected);
    }

    /// `from_ctrl_state` selects exactly one basis pattern on its qubits.
    #[test]
    fn test_ctrl_state_matches_only_its_pattern(width in 1_u32..6, state in 0_u64..64) {
        let state = state % (1 << width);
        let qubits: Vec<QubitId> = (0..width).map(QubitId).collect();
        let set = ControlSet::from_ctrl_state(&qubits, state).unwrap();

        for basis in 0..(1_usize << width) {
            prop_assert_eq!(set.is_satisfied_by(basis), basis as u64 == state);
        }
    }

    /// A gate built through the checked constructor never controls its own target.
    #[test]
    fn test_checked_gate_never_self_controlled(
        literals in arb_positive_literals(),
        target in 0_u32..8,
    ) {
        let set = ControlSet::from_literals(literals).unwrap();
        match GateOp::flip(target, set.clone()) {
            Ok(op) => prop_assert!(!op.controls().contains_qubit(op.target())),
            Err(_) => prop_assert!(set.contains_qubit(QubitId(target))),
        }
    }
}
