//! Editable control points with a single selection.

use parasurf_core::{ParasurfError, Result, Validate};
use parasurf_math::{Point2, Vector2};
use serde::Serialize;

/// Initial control polygon of the curve editor.
pub const DEFAULT_CONTROL_POINTS: [Point2; 6] = [
    Point2::new(-1.0, 0.0),
    Point2::new(-0.25, 1.0),
    Point2::new(0.25, 1.0),
    Point2::new(1.0, 0.0),
    Point2::new(0.25, -1.0),
    Point2::new(-0.25, -1.0),
];

/// An ordered set of 2D control points with one selected point.
///
/// Selection wraps around in both directions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlPointSet {
    points: Vec<Point2>,
    selected: usize,
}

impl ControlPointSet {
    /// Minimum number of points a curve needs.
    pub const MIN_POINTS: usize = 2;

    pub fn new(points: Vec<Point2>) -> Result<Self> {
        let set = Self {
            points,
            selected: 0,
        };
        set.validate()?;
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[Point2] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<Point2> {
        self.points.get(index).copied()
    }

    pub fn set(&mut self, index: usize, point: Point2) -> Result<()> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(ParasurfError::IndexOutOfRange { index, len })?;
        *slot = point;
        Ok(())
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_point(&self) -> Point2 {
        self.points[self.selected]
    }

    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.points.len() {
            return Err(ParasurfError::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        self.selected = index;
        Ok(())
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.points.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.points.len() - 1);
    }

    /// Move the selected point by `delta`.
    pub fn translate_selected(&mut self, delta: Vector2) {
        self.points[self.selected] += delta;
    }
}

impl Default for ControlPointSet {
    fn default() -> Self {
        Self {
            points: DEFAULT_CONTROL_POINTS.to_vec(),
            selected: 0,
        }
    }
}

impl Validate for ControlPointSet {
    fn validate(&self) -> Result<()> {
        if self.points.len() < Self::MIN_POINTS {
            return Err(ParasurfError::InvalidParameter(format!(
                "need at least {} control points, got {}",
                Self::MIN_POINTS,
                self.points.len()
            )));
        }
        if let Some(i) = self.points.iter().position(|p| !p.is_finite()) {
            return Err(ParasurfError::InvalidParameter(format!(
                "control point {} is not finite",
                i
            )));
        }
        Ok(())
    }
}
