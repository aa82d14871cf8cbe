//! Error types for the synth crate.

use qenc_ir::{IrError, QubitId};
use thiserror::Error;

/// Errors produced while building encodings.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SynthError {
    /// Synthesis needs at least one qubit.
    #[error("qubit count must be at least 1, got {0}")]
    InvalidQubitCount(u32),

    /// The angle array does not match the qubit count.
    #[error("{qubits}-qubit synthesis needs {expected} angles, got {got}")]
    AngleCountMismatch {
        /// Requested qubit count.
        qubits: u32,
        /// 2^qubits − 1.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },

    /// A gate would be controlled on its own target.
    #[error("qubit {qubit} would control its own gate")]
    ControlTargetConflict {
        /// The offending qubit.
        qubit: QubitId,
    },

    /// Input vector has no elements.
    #[error("input vector is empty")]
    EmptyVector,

    /// Input contains NaN or an infinity.
    #[error("value at index {index} is not finite")]
    NonFiniteValue {
        /// Position of the first offending value.
        index: usize,
    },

    /// Normalization of an all-zero vector.
    #[error("cannot normalize an all-zero vector")]
    ZeroNorm,

    /// Scaling range is inverted.
    #[error("invalid scaling range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// FRQI rows have differing lengths.
    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        /// Index of the first offending row.
        row: usize,
        /// Column count of row 0.
        expected: usize,
        /// Column count of the offending row.
        got: usize,
    },

    /// Basis encoding only accepts integers.
    #[error("value {value} at index {index} is not an integer")]
    NonIntegerValue {
        /// Position of the first offending value.
        index: usize,
        /// The value itself.
        value: f64,
    },

    /// Basis encoding value too large to be held exactly.
    #[error("value {value} at index {index} exceeds the basis encoding limit of 2^53")]
    ValueOutOfRange {
        /// Position of the first offending value.
        index: usize,
        /// The value itself.
        value: f64,
    },

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(IrError),
}

impl From<IrError> for SynthError {
    fn from(err: IrError) -> Self {
        match err {
            IrError::ControlTargetConflict { qubit, .. } => SynthError::ControlTargetConflict { qubit },
            other => SynthError::Ir(other),
        }
    }
}

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;
