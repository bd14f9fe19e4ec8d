//! Polylines sampled from the editor's control points.

use parasurf_math::Point2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{BSplineCurve, BezierCurve};
use crate::tessellate::{sample_uniform, step_count};

/// Which curve the editor draws through its control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    #[default]
    Bezier,
    BSpline,
}

impl CurveKind {
    pub fn toggled(self) -> Self {
        match self {
            CurveKind::Bezier => CurveKind::BSpline,
            CurveKind::BSpline => CurveKind::Bezier,
        }
    }
}

/// Sample the Bezier curve through `control_points`.
///
/// `segments` is rounded up to a whole number of parameter steps (at least 1).
/// The polyline holds the `steps + 1` uniform samples on `[0, 1]` followed by
/// the last control point, `ceil(segments) + 2` points in total.
pub fn evaluate_bezier(control_points: &[Point2], segments: f64) -> Vec<Point2> {
    let Some(&last) = control_points.last() else {
        return Vec::new();
    };
    let curve = BezierCurve::new(control_points.to_vec());
    let mut polyline = sample_uniform(&curve, step_count(segments));
    polyline.push(last);
    polyline
}

/// Sample the quadratic B-spline through `control_points` over `[2, 4]`.
///
/// Produces `ceil(segments) + 1` points (at least 2).
pub fn evaluate_bspline(control_points: &[Point2], segments: f64) -> Vec<Point2> {
    if control_points.is_empty() {
        return Vec::new();
    }
    let curve = BSplineCurve::quadratic(control_points.to_vec());
    sample_uniform(&curve, step_count(segments))
}

/// A curve kind, its resolution, and the polyline last built from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    kind: CurveKind,
    resolution: f64,
    polyline: Vec<Point2>,
}

impl Curve {
    pub fn new(kind: CurveKind, resolution: f64, control_points: &[Point2]) -> Self {
        let mut curve = Self {
            kind,
            resolution,
            polyline: Vec::new(),
        };
        curve.rebuild(control_points);
        curve
    }

    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    pub fn polyline(&self) -> &[Point2] {
        &self.polyline
    }

    pub fn set_kind(&mut self, kind: CurveKind, control_points: &[Point2]) {
        self.kind = kind;
        self.rebuild(control_points);
    }

    pub fn set_resolution(&mut self, resolution: f64, control_points: &[Point2]) {
        self.resolution = resolution;
        self.rebuild(control_points);
    }

    /// Discard the polyline and sample it again from `control_points`.
    pub fn rebuild(&mut self, control_points: &[Point2]) {
        self.polyline = match self.kind {
            CurveKind::Bezier => evaluate_bezier(control_points, self.resolution),
            CurveKind::BSpline => evaluate_bspline(control_points, self.resolution),
        };
        debug!(
            kind = ?self.kind,
            resolution = self.resolution,
            points = self.polyline.len(),
            "rebuilt curve"
        );
    }
}
