//! Bezier curves evaluated directly in the Bernstein basis.

use parasurf_math::Point2;
use serde::{Deserialize, Serialize};

use super::ParametricCurve;
use crate::basis::bernstein;

/// A Bezier curve of degree `control_points.len() - 1` over `t in [0, 1]`.
///
/// Six control points give the quintic curve of the curve editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BezierCurve {
    pub control_points: Vec<Point2>,
}

impl BezierCurve {
    pub fn new(control_points: Vec<Point2>) -> Self {
        Self { control_points }
    }

    pub fn degree(&self) -> usize {
        self.control_points.len().saturating_sub(1)
    }
}

impl ParametricCurve for BezierCurve {
    fn point_at(&self, t: f64) -> Point2 {
        let n = self.degree();
        self.control_points
            .iter()
            .enumerate()
            .fold(Point2::ZERO, |acc, (k, &p)| acc + bernstein(n, k, t) * p)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use parasurf_math::dvec2;

    #[test]
    fn test_quadratic_midpoint() {
        let curve = BezierCurve::new(vec![dvec2(0.0, 0.0), dvec2(0.5, 1.0), dvec2(1.0, 0.0)]);
        // 0.25*P0 + 0.5*P1 + 0.25*P2
        let pm = curve.point_at(0.5);
        assert_relative_eq!(pm.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(pm.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_quintic_matches_expanded_formula() {
        let cps: Vec<Point2> = (0..6).map(|i| dvec2(i as f64, (i * i) as f64 * 0.1)).collect();
        let curve = BezierCurve::new(cps.clone());
        let t: f64 = 0.3;
        let s = 1.0 - t;
        let expected = s.powi(5) * cps[0]
            + 5.0 * t * s.powi(4) * cps[1]
            + 10.0 * t.powi(2) * s.powi(3) * cps[2]
            + 10.0 * t.powi(3) * s.powi(2) * cps[3]
            + 5.0 * t.powi(4) * s * cps[4]
            + t.powi(5) * cps[5];
        let p = curve.point_at(t);
        assert_relative_eq!(p.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(p.y, expected.y, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_curve_is_origin() {
        let curve = BezierCurve::new(vec![]);
        assert_eq!(curve.degree(), 0);
        assert_eq!(curve.point_at(0.5), Point2::ZERO);
    }
}
