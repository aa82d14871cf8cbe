//! `OpenQASM` 3 Emitter for qenc
//!
//! Serializes state-preparation circuits to `OpenQASM` 3.0 so they can be
//! loaded by any toolchain that reads the standard gate library.
//!
//! # Output
//!
//! | Op | Emitted as |
//! |----|------------|
//! | Rotation | `ry(θ) q[t];` |
//! | Flip | `x q[t];` |
//! | Positive controls | `ctrl @` / `ctrl(k) @` |
//! | Negated controls | `negctrl @` / `negctrl(k) @` |
//!
//! Control operands come before the target, negated controls first.
//! Angles are printed with full `f64` precision.
//!
//! # Example
//!
//! ```rust
//! use qenc_ir::{Circuit, ControlSet, QubitId};
//! use qenc_qasm3::emit;
//!
//! let mut circuit = Circuit::with_size("prep", 2);
//! circuit.ry(1.5, QubitId(0), ControlSet::new()).unwrap();
//! circuit.ry(-0.25, QubitId(1), ControlSet::positive([0u32])).unwrap();
//!
//! let qasm = emit(&circuit).unwrap();
//! assert!(qasm.contains("OPENQASM 3.0;"));
//! assert!(qasm.contains("ctrl @ ry(-0.25) q[0], q[1];"));
//! ```

mod emitter;
mod error;

pub use emitter::emit;
pub use error::{Qasm3Error, Qasm3Result};
