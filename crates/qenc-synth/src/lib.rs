//! `qenc-synth`: amplitude-to-circuit decomposition.
//!
//! Converts a real classical vector into a `qenc_ir::Circuit` that prepares
//! it as quantum amplitudes:
//!
//! - **AngleSolver** decomposes the (padded) vector into spherical angles
//! - **CircuitSynthesizer** turns `2^n − 1` angles into multi-controlled
//!   Y-rotations and flips on `n` qubits
//! - **encoding** wraps both, and adds angle, FRQI and basis encoders
//!
//! # Quick start
//!
//! ```rust
//! use qenc_synth::{AmplitudeVector, AngleSolver, CircuitSynthesizer};
//!
//! let vector = AmplitudeVector::from_data(&[0.5, 0.8, 0.3, 0.6])
//!     .unwrap()
//!     .normalized()
//!     .unwrap();
//! let angles = AngleSolver::new().solve(vector.as_slice()).unwrap();
//! let ops = CircuitSynthesizer::new()
//!     .synthesize(angles.as_slice(), vector.num_qubits())
//!     .unwrap();
//! assert_eq!(ops.len(), 3);
//! ```

pub mod angles;
pub mod encoding;
pub mod error;
pub mod synthesis;
pub mod vector;

pub use angles::{AngleSet, AngleSolver, solve_spherical_angles};
pub use encoding::{AmplitudeEncoding, amplitude_encoding, angle_encoding, basis_encoding, frqi_encoding};
pub use error::{SynthError, SynthResult};
pub use synthesis::{CircuitSynthesizer, synthesize};
pub use vector::{AmplitudeVector, next_power_of_two, num_qubits_for, pad_with_zeros};
