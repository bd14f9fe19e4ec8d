use crate::{Point3, Point4, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Bounds of a homogeneous vertex stream. The `w` component is ignored;
    /// every stream this crate produces carries `w == 1` or `w == 0`.
    pub fn from_homogeneous(points: &[Point4]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut aabb = Self::new(first.truncate(), first.truncate());
        for p in rest {
            aabb.include(p.truncate());
        }
        Some(aabb)
    }

    pub fn include(&mut self, p: Point3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn center(&self) -> Point3 {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }
}
