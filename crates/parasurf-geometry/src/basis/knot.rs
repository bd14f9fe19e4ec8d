//! Knot vectors and the recursive Cox-de Boor basis.

use parasurf_core::{ParasurfError, Result};
use serde::{Deserialize, Serialize};

/// A non-decreasing knot vector.
///
/// For `n` control points and degree `p` the vector holds `n + p + 1`
/// knots and the valid parameter domain is `[knots[p], knots[n]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnotVector {
    knots: Vec<f64>,
}

impl KnotVector {
    /// Wrap an explicit knot sequence, rejecting non-finite or decreasing values.
    pub fn new(knots: Vec<f64>) -> Result<Self> {
        if knots.len() < 2 {
            return Err(ParasurfError::InvalidParameter(format!(
                "knot vector needs at least 2 knots, got {}",
                knots.len()
            )));
        }
        if knots.iter().any(|k| !k.is_finite()) {
            return Err(ParasurfError::InvalidParameter(
                "knot vector contains a non-finite value".into(),
            ));
        }
        if knots.windows(2).any(|w| w[1] < w[0]) {
            return Err(ParasurfError::InvalidParameter(
                "knot vector must be non-decreasing".into(),
            ));
        }
        Ok(Self { knots })
    }

    /// Clamped knot vector with uniform interior spacing over `domain`.
    ///
    /// The first and last knots are repeated `degree + 1` times, so the curve
    /// starts at the first control point and ends at the last one.
    pub fn clamped_uniform(n: usize, degree: usize, domain: (f64, f64)) -> Self {
        let (t0, t1) = domain;
        let m = n + degree + 1;
        let mut knots = vec![t0; m];

        let n_internal = m.saturating_sub(2 * (degree + 1));
        for i in 0..=degree.min(m.saturating_sub(1)) {
            knots[m - 1 - i] = t1;
        }
        for i in 1..=n_internal {
            knots[degree + i] = t0 + (t1 - t0) * i as f64 / (n_internal + 1) as f64;
        }

        Self { knots }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.knots
    }

    pub fn len(&self) -> usize {
        self.knots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    /// Valid parameter domain for a curve of the given degree.
    pub fn domain(&self, degree: usize) -> (f64, f64) {
        let last = self.knots.len() - 1;
        (
            self.knots[degree.min(last)],
            self.knots[last.saturating_sub(degree)],
        )
    }

    /// Cox-de Boor basis function `N(i, k, t)`.
    ///
    /// `N(i, 0, t)` is the indicator of the half-open span
    /// `[knots[i], knots[i + 1])`. A recursion term whose knot difference is
    /// zero contributes 0, and any index reaching past the knot vector
    /// evaluates to 0.
    pub fn basis(&self, i: usize, k: usize, t: f64) -> f64 {
        let knots = &self.knots;
        if i + k + 1 >= knots.len() {
            return 0.0;
        }

        if k == 0 {
            return if knots[i] <= t && t < knots[i + 1] { 1.0 } else { 0.0 };
        }

        let left_den = knots[i + k] - knots[i];
        let left = if left_den == 0.0 {
            0.0
        } else {
            (t - knots[i]) / left_den * self.basis(i, k - 1, t)
        };

        let right_den = knots[i + k + 1] - knots[i + 1];
        let right = if right_den == 0.0 {
            0.0
        } else {
            (knots[i + k + 1] - t) / right_den * self.basis(i + 1, k - 1, t)
        };

        left + right
    }
}
