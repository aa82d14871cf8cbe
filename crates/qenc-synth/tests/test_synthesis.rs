//! End-to-end tests: solve angles, synthesize, simulate, compare.

use std::f64::consts::PI;

use qenc_ir::{ControlLiteral, GateOp, QubitId};
use qenc_sim::{CircuitBackend, StatevectorBackend, matches_real, max_abs_diff};
use qenc_synth::{
    AmplitudeVector, CircuitSynthesizer, SynthError, amplitude_encoding, solve_spherical_angles,
    synthesize,
};

const TOL: f64 = 1e-6;

fn prepare(data: &[f64]) -> (Vec<f64>, Vec<GateOp>) {
    let vector = AmplitudeVector::from_data(data).unwrap().normalized().unwrap();
    let angles = solve_spherical_angles(vector.as_slice()).unwrap();
    let ops = synthesize(angles.as_slice(), vector.num_qubits()).unwrap();
    (vector.into_inner(), ops)
}

fn realize(data: &[f64]) -> (Vec<f64>, f64) {
    let (target, ops) = prepare(data);
    let n = target.len().trailing_zeros();
    let state = StatevectorBackend::new().run(&ops, n).unwrap();
    let diff = max_abs_diff(&state, &target);
    (target, diff)
}

// ---------------------------------------------------------------------------
// Documented examples
// ---------------------------------------------------------------------------

#[test]
fn two_qubit_example_gate_angles() {
    let (target, ops) = prepare(&[0.5, 0.8, 0.3, 0.6]);
    assert_eq!(ops.len(), 3);

    let expected = [2.2483, -1.3956, 5.3559];
    for (op, e) in ops.iter().zip(expected) {
        assert!((op.angle().unwrap() - e).abs() < 1e-4, "{op}");
    }

    let state = StatevectorBackend::new().run(&ops, 2).unwrap();
    assert!(matches_real(&state, &target, TOL));
}

#[test]
fn signed_example_is_realized() {
    let (target, diff) = realize(&[6.0, -12.5, 11.15, 7.0]);
    let expected = [0.3138, -0.6538, 0.5832, 0.3661];
    for (t, e) in target.iter().zip(expected) {
        assert!((t - e).abs() < 1e-4);
    }
    assert!(diff < TOL, "diff = {diff}");
}

#[test]
fn three_qubit_example_gate_angles() {
    let (target, ops) = prepare(&[0.5, 0.8, 0.3, 0.6, 0.23, 0.16, 0.89, 0.94]);

    let rotations: Vec<f64> = ops.iter().filter_map(GateOp::angle).collect();
    let expected = [2.5652, -2.1531, 5.8762, 2.2909, 2.7925, -2.8956, 4.767];
    assert_eq!(rotations.len(), expected.len());
    for (a, e) in rotations.iter().zip(expected) {
        assert!((a - e).abs() < 1e-3, "{a} vs {e}");
    }
    assert_eq!(ops.iter().filter(|op| op.is_flip()).count(), 2);

    let state = StatevectorBackend::new().run(&ops, 3).unwrap();
    assert!(matches_real(&state, &target, TOL));
}

#[test]
fn padded_input_is_realized() {
    let (target, diff) = realize(&[0.5, 0.8, 0.3]);
    assert_eq!(target.len(), 4);
    assert_eq!(target[3], 0.0);
    assert!(diff < TOL);
}

// ---------------------------------------------------------------------------
// Realization across widths
// ---------------------------------------------------------------------------

#[test]
fn realization_for_one_to_six_qubits() {
    for n in 1..=6_u32 {
        let len = 1_usize << n;
        // Deterministic mixed-sign data.
        let data: Vec<f64> = (0..len)
            .map(|i| ((i as f64 * 1.7 + 0.3).sin() * 3.0) + if i % 3 == 0 { -0.5 } else { 0.25 })
            .collect();
        let (_, diff) = realize(&data);
        assert!(diff < TOL, "n = {n}: diff = {diff}");
    }
}

#[test]
fn degenerate_last_basis_state() {
    for n in 2..=4_u32 {
        for sign in [1.0, -1.0] {
            let len = 1_usize << n;
            let mut data = vec![0.0; len];
            data[len - 1] = 2.5 * sign;

            let angles = solve_spherical_angles(&data).unwrap();
            let (last, rest) = angles.as_slice().split_last().unwrap();
            assert!(rest.iter().all(|a| (a - PI).abs() < 1e-12));
            assert!((last - sign * PI).abs() < 1e-12);

            let (target, diff) = realize(&data);
            assert_eq!(target[len - 1], sign);
            assert!(diff < TOL, "n = {n}, sign = {sign}: diff = {diff}");
        }
    }
}

#[test]
fn first_basis_state_with_negative_sign() {
    let (_, diff) = realize(&[-1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    assert!(diff < TOL);
}

#[test]
fn sparse_vectors_hit_zero_sine_product() {
    let (_, diff) = realize(&[0.0, 1.0, 0.0, 0.0]);
    assert!(diff < TOL);
    let (_, diff) = realize(&[0.0, 0.0, -3.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    assert!(diff < TOL);
}

// ---------------------------------------------------------------------------
// Structure
// ---------------------------------------------------------------------------

#[test]
fn gate_counts_follow_closed_form() {
    for n in 2..=7_u32 {
        let angles = vec![0.1; (1 << n) - 1];
        let ops = synthesize(&angles, n).unwrap();
        let rotations = ops.iter().filter(|op| op.is_rotation()).count();
        let flips = ops.iter().filter(|op| op.is_flip()).count();

        assert_eq!(rotations, (1 << n) - 1, "n = {n}");
        assert_eq!(flips, 3 * (1 << (n - 2)) - n as usize - 1, "n = {n}");
        assert_eq!(ops.len(), 7 * (1 << (n - 2)) - n as usize - 2, "n = {n}");
    }
}

#[test]
fn total_gates_for_small_widths() {
    let totals: Vec<usize> = (2..=6_u32)
        .map(|n| synthesize(&vec![0.0; (1 << n) - 1], n).unwrap().len())
        .collect();
    assert_eq!(totals, vec![3, 9, 22, 49, 104]);
}

#[test]
fn every_op_stays_inside_register() {
    let n = 5;
    let ops = synthesize(&vec![0.3; (1 << n) - 1], n).unwrap();
    for op in &ops {
        assert!(op.qubits().iter().all(|q| q.0 < n), "{op}");
        assert!(!op.controls().contains_qubit(op.target()), "{op}");
    }
}

#[test]
fn extra_controls_reach_every_gate() {
    let extra = [ControlLiteral::negative(7u32), ControlLiteral::positive(9u32)];
    let ops = CircuitSynthesizer::new()
        .synthesize_controlled(&vec![0.4; 15], 4, &extra)
        .unwrap();
    for op in &ops {
        assert_eq!(op.controls().get(QubitId(7)), Some(false), "{op}");
        assert_eq!(op.controls().get(QubitId(9)), Some(true), "{op}");
    }
}

#[test]
fn controlled_preparation_only_acts_on_selected_branch() {
    // Prepare on q0..q1 only when q2 is |1⟩; q2 starts in |0⟩ so nothing happens.
    let ops = CircuitSynthesizer::new()
        .synthesize_controlled(&[1.0, 2.0, 3.0], 2, &[ControlLiteral::positive(2u32)])
        .unwrap();
    let state = StatevectorBackend::new().run(&ops, 3).unwrap();
    let mut ground = vec![0.0; 8];
    ground[0] = 1.0;
    assert!(matches_real(&state, &ground, 1e-12));
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn zero_qubits_rejected() {
    assert!(matches!(synthesize(&[], 0), Err(SynthError::InvalidQubitCount(0))));
}

#[test]
fn wrong_angle_count_rejected() {
    assert!(matches!(
        synthesize(&[0.1; 6], 3),
        Err(SynthError::AngleCountMismatch {
            qubits: 3,
            expected: 7,
            got: 6
        })
    ));
}

#[test]
fn control_on_register_qubit_rejected() {
    let err = CircuitSynthesizer::new()
        .synthesize_controlled(&[0.1; 7], 3, &[ControlLiteral::negative(0u32)])
        .unwrap_err();
    assert!(matches!(err, SynthError::ControlTargetConflict { qubit: QubitId(0) }));
}

#[test]
fn empty_input_rejected() {
    assert!(matches!(solve_spherical_angles(&[]), Err(SynthError::EmptyVector)));
    assert!(matches!(amplitude_encoding(&[]), Err(SynthError::EmptyVector)));
}
