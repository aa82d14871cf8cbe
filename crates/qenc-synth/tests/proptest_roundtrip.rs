//! Property-based tests: angles reconstruct their vector, circuits prepare it.

use proptest::prelude::*;
use qenc_sim::{CircuitBackend, StatevectorBackend, max_abs_diff};
use qenc_synth::{AmplitudeVector, amplitude_encoding, solve_spherical_angles};

const TOL: f64 = 1e-6;

/// Vectors of 1..=32 values in [-10, 10] with at least one clearly non-zero entry.
fn arb_data() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-10.0_f64..10.0, 1..=32)
        .prop_filter("needs a non-zero entry", |v| v.iter().any(|x| x.abs() > 1e-3))
}

/// Mostly-zero vectors exercise the vanishing sine product.
fn arb_sparse() -> impl Strategy<Value = Vec<f64>> {
    (1_u32..=5, any::<prop::sample::Index>(), -5.0_f64..5.0)
        .prop_filter("needs a non-zero entry", |(_, _, v)| v.abs() > 1e-3)
        .prop_map(|(n, idx, v)| {
            let len = 1_usize << n;
            let mut data = vec![0.0; len];
            data[idx.index(len)] = v;
            data
        })
}

proptest! {
    #[test]
    fn reconstruct_inverts_solve(data in arb_data()) {
        let vector = AmplitudeVector::from_data(&data).unwrap().normalized().unwrap();
        let angles = solve_spherical_angles(vector.as_slice()).unwrap();
        prop_assert_eq!(angles.len(), vector.len() - 1);

        let rebuilt = angles.reconstruct();
        for (r, c) in rebuilt.iter().zip(vector.as_slice()) {
            prop_assert!((r - c).abs() < TOL, "{} vs {}", r, c);
        }
    }

    #[test]
    fn circuit_prepares_normalized_vector(data in arb_data()) {
        let encoding = amplitude_encoding(&data).unwrap();
        let state = StatevectorBackend::new().run_circuit(&encoding.circuit).unwrap();
        let diff = max_abs_diff(&state, encoding.vector.as_slice());
        prop_assert!(diff < TOL, "diff = {}", diff);
    }

    #[test]
    fn sparse_vectors_are_prepared_exactly(data in arb_sparse()) {
        let encoding = amplitude_encoding(&data).unwrap();
        let state = StatevectorBackend::new().run_circuit(&encoding.circuit).unwrap();
        prop_assert!(max_abs_diff(&state, encoding.vector.as_slice()) < TOL);
    }
}
