//! parasurf geometry: the toroidal surface, Bezier and B-spline curves, and
//! the basis functions behind them.

pub mod basis;
pub mod curve;
pub mod surface;
pub mod tessellate;

pub use curve::{
    evaluate_bezier, evaluate_bspline, BSplineCurve, BezierCurve, ControlPointSet, Curve,
    CurveKind, ParametricCurve, DEFAULT_CONTROL_POINTS,
};
pub use surface::{Surface, ToroidalSurface};
