//! qenc Statevector Backend
//!
//! Runs qenc gate sequences exactly and returns the final amplitudes, so a
//! synthesized circuit can be compared against the vector it was meant to
//! prepare.
//!
//! # Performance
//!
//! | Qubits | Memory |
//! |--------|--------|
//! | 10 | ~16 KB |
//! | 15 | ~512 KB |
//! | 20 | ~16 MB |
//! | 24 | ~256 MB |
//!
//! # Example
//!
//! ```rust
//! use qenc_ir::{Circuit, ControlSet, QubitId};
//! use qenc_sim::{CircuitBackend, StatevectorBackend, matches_real};
//!
//! let mut circuit = Circuit::with_size("flip", 1);
//! circuit.flip(QubitId(0), ControlSet::new()).unwrap();
//!
//! let state = StatevectorBackend::new().run_circuit(&circuit).unwrap();
//! assert!(matches_real(&state, &[0.0, 1.0], 1e-12));
//! ```

mod backend;
mod error;
mod statevector;

pub use backend::{CircuitBackend, DEFAULT_MAX_QUBITS, StatevectorBackend, matches_real, max_abs_diff};
pub use error::{SimError, SimResult};
pub use statevector::{MAX_SUPPORTED_QUBITS, Statevector};
