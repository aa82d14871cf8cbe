//! Spherical angle decomposition of a real amplitude vector.
//!
//! A vector `c` of length `n + 1` is described by `n` angles such that
//!
//!   c[0] = cos(a0/2)
//!   c[i] = cos(ai/2) · ∏_{k<i} sin(ak/2)      for 0 < i < n
//!   c[n] = ∏_{k<n} sin(ak/2)
//!
//! Signs are folded into the angles afterwards: a negative `c[i]` maps
//! `ai` to `2π − ai`, and a negative final element negates the last angle.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{SynthError, SynthResult};

/// Angles produced by [`AngleSolver`], in radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AngleSet {
    angles: Vec<f64>,
}

impl AngleSet {
    pub fn as_slice(&self) -> &[f64] {
        &self.angles
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.angles
    }

    /// Rebuild the unit vector these angles describe.
    ///
    /// For angles solved from a unit-norm vector this reproduces the input
    /// up to floating-point error. An empty set reconstructs to `[1.0]`.
    pub fn reconstruct(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.angles.len() + 1);
        let mut sin_prod = 1.0;
        for &a in &self.angles {
            out.push((a / 2.0).cos() * sin_prod);
            sin_prod *= (a / 2.0).sin();
        }
        out.push(sin_prod);
        out
    }
}

impl AsRef<[f64]> for AngleSet {
    fn as_ref(&self) -> &[f64] {
        &self.angles
    }
}

/// Computes spherical angles for amplitude vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct AngleSolver;

impl AngleSolver {
    pub fn new() -> Self {
        Self
    }

    /// Solve the angle set for `c`.
    ///
    /// `c` need not be normalized; only absolute values and signs are
    /// read. Once the running sine product reaches exactly zero every
    /// later angle is left at `0`. Ratios above 1 caused by rounding are
    /// clamped before `acos`.
    ///
    /// # Errors
    ///
    /// [`SynthError::EmptyVector`] when `c` is empty.
    pub fn solve(&self, c: &[f64]) -> SynthResult<AngleSet> {
        if c.is_empty() {
            return Err(SynthError::EmptyVector);
        }
        let n = c.len() - 1;
        let mut angles = vec![0.0; n];
        if n == 0 {
            return Ok(AngleSet { angles });
        }

        angles[0] = 2.0 * c[0].abs().min(1.0).acos();
        let mut sin_prod = (angles[0] / 2.0).sin();

        for i in 1..n {
            if sin_prod == 0.0 {
                trace!(index = i, "sine product vanished, remaining angles stay zero");
                break;
            }
            let ratio = c[i].abs() / sin_prod;
            if ratio > 1.0 {
                trace!(index = i, ratio, "clamping amplitude ratio to 1");
            }
            angles[i] = 2.0 * ratio.min(1.0).acos();
            sin_prod *= (angles[i] / 2.0).sin();
        }

        for (angle, &value) in angles.iter_mut().zip(c) {
            if value < 0.0 {
                *angle = 2.0 * PI - *angle;
            }
        }
        if c[n] < 0.0 {
            angles[n - 1] = -angles[n - 1];
        }

        Ok(AngleSet { angles })
    }
}

/// Shorthand for [`AngleSolver::solve`].
pub fn solve_spherical_angles(c: &[f64]) -> SynthResult<AngleSet> {
    AngleSolver.solve(c)
}
