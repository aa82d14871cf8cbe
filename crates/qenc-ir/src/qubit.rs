//! Qubit identifiers and control literals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based position of a qubit in the output register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitId(pub u32);

impl QubitId {
    /// Index usable for bit masks and slices.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

impl From<usize> for QubitId {
    fn from(id: usize) -> Self {
        QubitId(u32::try_from(id).expect("QubitId overflow: exceeds u32::MAX"))
    }
}

/// A qubit paired with the basis state it must hold for a gate to fire.
///
/// `state == true` is an ordinary (positive) control, `state == false`
/// a negated control that fires on |0⟩.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ControlLiteral {
    /// The control qubit.
    pub qubit: QubitId,
    /// Required basis state of the control qubit.
    pub state: bool,
}

impl ControlLiteral {
    /// Create a literal with an explicit required state.
    pub fn new(qubit: impl Into<QubitId>, state: bool) -> Self {
        Self {
            qubit: qubit.into(),
            state,
        }
    }

    /// Control that fires when the qubit is |1⟩.
    pub fn positive(qubit: impl Into<QubitId>) -> Self {
        Self::new(qubit, true)
    }

    /// Control that fires when the qubit is |0⟩.
    pub fn negative(qubit: impl Into<QubitId>) -> Self {
        Self::new(qubit, false)
    }

    /// Whether a basis-state index satisfies this literal.
    #[inline]
    pub fn is_satisfied_by(&self, basis_index: usize) -> bool {
        ((basis_index >> self.qubit.index()) & 1 == 1) == self.state
    }
}

impl fmt::Display for ControlLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.state {
            write!(f, "{}", self.qubit)
        } else {
            write!(f, "!{}", self.qubit)
        }
    }
}
