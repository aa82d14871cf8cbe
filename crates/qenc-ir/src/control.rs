//! Control sets: signed control literals with unique qubits.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::qubit::{ControlLiteral, QubitId};

/// A set of control literals, at most one per qubit.
///
/// Literals are kept sorted by qubit. Sets are values: [`ControlSet::with`]
/// and [`ControlSet::union`] return a new set and leave `self` untouched,
/// so sibling branches of a recursive construction never observe each
/// other's additions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<ControlLiteral>", into = "Vec<ControlLiteral>")]
pub struct ControlSet {
    literals: Vec<ControlLiteral>,
}

impl ControlSet {
    /// Create an empty control set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from arbitrary literals.
    ///
    /// Repeated literals collapse into one. A qubit listed with both
    /// polarities is rejected with [`IrError::ConflictingControl`].
    pub fn from_literals(literals: impl IntoIterator<Item = ControlLiteral>) -> IrResult<Self> {
        let mut set = Self::new();
        for literal in literals {
            set.insert(literal)?;
        }
        Ok(set)
    }

    /// Positive controls on every given qubit (duplicates collapse).
    pub fn positive<Q: Into<QubitId>>(qubits: impl IntoIterator<Item = Q>) -> Self {
        let mut literals: Vec<ControlLiteral> = qubits
            .into_iter()
            .map(ControlLiteral::positive)
            .collect();
        literals.sort_unstable();
        literals.dedup();
        Self { literals }
    }

    /// Controls selecting basis state `state` on `qubits`.
    ///
    /// Bit `k` of `state` is the required value of `qubits[k]`; zero bits
    /// become negated controls.
    pub fn from_ctrl_state(qubits: &[QubitId], state: u64) -> IrResult<Self> {
        Self::from_literals(
            qubits
                .iter()
                .enumerate()
                .map(|(k, &q)| ControlLiteral::new(q, (state >> k) & 1 == 1)),
        )
    }

    /// Return a copy of this set extended with `literal`.
    pub fn with(&self, literal: ControlLiteral) -> IrResult<Self> {
        let mut extended = self.clone();
        extended.insert(literal)?;
        Ok(extended)
    }

    /// Return the union of two sets.
    pub fn union(&self, other: &ControlSet) -> IrResult<Self> {
        let mut merged = self.clone();
        for &literal in &other.literals {
            merged.insert(literal)?;
        }
        Ok(merged)
    }

    fn insert(&mut self, literal: ControlLiteral) -> IrResult<()> {
        match self
            .literals
            .binary_search_by_key(&literal.qubit, |l| l.qubit)
        {
            Ok(pos) if self.literals[pos].state == literal.state => Ok(()),
            Ok(_) => Err(IrError::ConflictingControl {
                qubit: literal.qubit,
            }),
            Err(pos) => {
                self.literals.insert(pos, literal);
                Ok(())
            }
        }
    }

    /// Required state of `qubit`, if it is a control.
    pub fn get(&self, qubit: QubitId) -> Option<bool> {
        self.literals
            .binary_search_by_key(&qubit, |l| l.qubit)
            .ok()
            .map(|pos| self.literals[pos].state)
    }

    /// Check whether `qubit` is used as a control.
    pub fn contains_qubit(&self, qubit: QubitId) -> bool {
        self.get(qubit).is_some()
    }

    /// Number of controls.
    #[inline]
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Check whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Literals sorted by qubit.
    pub fn as_slice(&self) -> &[ControlLiteral] {
        &self.literals
    }

    /// Iterate over literals in qubit order.
    pub fn iter(&self) -> std::slice::Iter<'_, ControlLiteral> {
        self.literals.iter()
    }

    /// Control qubits in ascending order.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.literals.iter().map(|l| l.qubit)
    }

    /// Number of negated controls.
    pub fn num_negated(&self) -> usize {
        self.literals.iter().filter(|l| !l.state).count()
    }

    /// Whether every literal holds in the given basis state.
    #[inline]
    pub fn is_satisfied_by(&self, basis_index: usize) -> bool {
        self.literals.iter().all(|l| l.is_satisfied_by(basis_index))
    }
}

impl TryFrom<Vec<ControlLiteral>> for ControlSet {
    type Error = IrError;

    fn try_from(literals: Vec<ControlLiteral>) -> IrResult<Self> {
        Self::from_literals(literals)
    }
}

impl From<ControlSet> for Vec<ControlLiteral> {
    fn from(set: ControlSet) -> Self {
        set.literals
    }
}

impl<'a> IntoIterator for &'a ControlSet {
    type Item = &'a ControlLiteral;
    type IntoIter = std::slice::Iter<'a, ControlLiteral>;

    fn into_iter(self) -> Self::IntoIter {
        self.literals.iter()
    }
}

impl fmt::Display for ControlSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, literal) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{literal}")?;
        }
        write!(f, "}}")
    }
}
