//! B-spline curves evaluated through the recursive Cox-de Boor basis.

use parasurf_math::Point2;
use serde::{Deserialize, Serialize};

use super::ParametricCurve;
use crate::basis::KnotVector;

/// Parameter domain of the curve editor's B-spline.
pub(crate) const EDITOR_DOMAIN: (f64, f64) = (2.0, 4.0);

/// Degree of the curve editor's B-spline.
pub(crate) const EDITOR_DEGREE: usize = 2;

/// A planar B-spline curve defined by degree, knot vector, and control points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BSplineCurve {
    pub degree: usize,
    pub knots: KnotVector,
    pub control_points: Vec<Point2>,
}

impl BSplineCurve {
    pub fn new(degree: usize, knots: KnotVector, control_points: Vec<Point2>) -> Self {
        debug_assert!(
            knots.len() == control_points.len() + degree + 1,
            "Knot vector length must be n + p + 1, got {} knots for {} CPs with degree {}",
            knots.len(),
            control_points.len(),
            degree
        );
        Self {
            degree,
            knots,
            control_points,
        }
    }

    /// Clamped uniform B-spline over `domain`.
    ///
    /// The degree is lowered to `n - 1` when there are too few control points.
    pub fn clamped(degree: usize, domain: (f64, f64), control_points: Vec<Point2>) -> Self {
        let degree = degree.min(control_points.len().saturating_sub(1));
        let knots = KnotVector::clamped_uniform(control_points.len(), degree, domain);
        Self::new(degree, knots, control_points)
    }

    /// The curve editor's spline: quadratic, clamped, domain `[2, 4]`.
    pub fn quadratic(control_points: Vec<Point2>) -> Self {
        Self::clamped(EDITOR_DEGREE, EDITOR_DOMAIN, control_points)
    }

    /// Basis weight of control point `i` at `t`.
    pub fn basis(&self, i: usize, t: f64) -> f64 {
        self.knots.basis(i, self.degree, t)
    }
}

impl ParametricCurve for BSplineCurve {
    fn point_at(&self, t: f64) -> Point2 {
        let Some(&last) = self.control_points.last() else {
            return Point2::ZERO;
        };
        let (t_min, t_max) = self.domain();
        let t = t.clamp(t_min, t_max);

        // The half-open degree-0 spans leave every basis at zero on the closing
        // knot; the clamped curve's limit there is the last control point.
        if t >= t_max {
            return last;
        }

        self.control_points
            .iter()
            .enumerate()
            .fold(Point2::ZERO, |acc, (i, &p)| acc + self.basis(i, t) * p)
    }

    fn domain(&self) -> (f64, f64) {
        self.knots.domain(self.degree)
    }
}
