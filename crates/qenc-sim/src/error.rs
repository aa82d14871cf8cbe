//! Error types for the simulator backend.

use qenc_ir::QubitId;
use thiserror::Error;

/// Errors raised while running a circuit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Register is wider than the backend allows.
    #[error("circuit needs {requested} qubits, backend supports at most {max}")]
    TooManyQubits { requested: u32, max: u32 },

    /// An op touches a qubit outside the register.
    #[error("qubit {qubit} is out of range for a {num_qubits}-qubit register")]
    QubitOutOfRange { qubit: QubitId, num_qubits: u32 },
}

/// Result type for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
