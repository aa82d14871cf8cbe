//! qenc Circuit Intermediate Representation
//!
//! Data structures for state-preparation circuits produced by the qenc
//! encoders. A circuit is nothing more than an ordered list of
//! generalized multi-controlled gates over a register of declared width;
//! rendering and simulation are left to other crates.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] names a position in the register
//! - **Controls**: [`ControlLiteral`] pairs a qubit with the basis state it
//!   must hold, [`ControlSet`] keeps at most one literal per qubit
//! - **Gates**: [`GateOp`] is either a Y-rotation or a bit flip, each with
//!   an arbitrary signed control set
//! - **Circuit**: [`Circuit`] validates and stores ops in execution order
//!
//! # Example: Two-qubit preparation
//!
//! ```rust
//! use qenc_ir::{Circuit, ControlSet, QubitId};
//!
//! let mut circuit = Circuit::with_size("prep", 2);
//! circuit.ry(1.2, QubitId(0), ControlSet::new()).unwrap();
//! circuit
//!     .ry(-0.4, QubitId(1), ControlSet::positive([0u32]))
//!     .unwrap();
//!
//! assert_eq!(circuit.num_ops(), 2);
//! assert_eq!(circuit.max_controls(), 1);
//! ```
//!
//! # Gate naming
//!
//! | Op | Controls | Name |
//! |----|----------|------|
//! | `Rotation` | 0 / 1 / ≥2 | `ry` / `cry` / `mcry` |
//! | `Flip` | 0 / 1 / ≥2 | `x` / `cx` / `mcx` |

pub mod circuit;
pub mod control;
pub mod error;
pub mod gate;
pub mod qubit;

pub use circuit::Circuit;
pub use control::ControlSet;
pub use error::{IrError, IrResult};
pub use gate::GateOp;
pub use qubit::{ControlLiteral, QubitId};
