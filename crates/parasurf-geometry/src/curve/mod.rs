//! Planar curves and the editable curve built from a control-point set.

mod bezier;
mod bspline;
mod control;
mod sampled;

use parasurf_math::Point2;

pub use bezier::BezierCurve;
pub use bspline::BSplineCurve;
pub use control::{ControlPointSet, DEFAULT_CONTROL_POINTS};
pub use sampled::{evaluate_bezier, evaluate_bspline, Curve, CurveKind};

/// Trait for parametric curves in the plane.
pub trait ParametricCurve {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point2;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);
}
