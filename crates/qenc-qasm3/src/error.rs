//! Error types for the QASM3 emitter.

use qenc_ir::IrError;
use thiserror::Error;

/// Errors that can occur during emission.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Qasm3Error {
    /// The circuit holds an op that does not fit its register.
    #[error("Malformed circuit: {0}")]
    Ir(#[from] IrError),
}

/// Result type for emission.
pub type Qasm3Result<T> = Result<T, Qasm3Error>;
