use parasurf_core::BoundingBox;
use parasurf_math::aabb::Aabb3;
use parasurf_math::{direction4, point4, Point3, Point4, Rgba, Vector3};
use serde::{Deserialize, Serialize};

/// Non-indexed triangle list with parallel per-vertex attributes.
///
/// Every three consecutive vertices form one triangle. Positions and normals
/// are homogeneous with `w = 1`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleSoup {
    pub positions: Vec<Point4>,
    pub colors: Vec<Rgba>,
    pub normals: Vec<Point4>,
}

impl TriangleSoup {
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            colors: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
        }
    }

    /// Number of vertices in the soup.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the soup.
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn push_vertex(&mut self, position: Point3, color: Rgba, normal: Vector3) {
        self.positions.push(point4(position));
        self.colors.push(color);
        self.normals.push(direction4(normal));
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.colors.clear();
        self.normals.clear();
    }

    /// Triangle corner positions in emission order.
    pub fn triangles(&self) -> impl Iterator<Item = [Point3; 3]> + '_ {
        self.positions
            .chunks_exact(3)
            .map(|t| [t[0].truncate(), t[1].truncate(), t[2].truncate()])
    }

    /// Whether every position and normal component is finite.
    pub fn is_finite(&self) -> bool {
        self.positions.iter().all(|p| p.is_finite()) && self.normals.iter().all(|n| n.is_finite())
    }

    /// Compute the axis-aligned bounding box of all positions.
    pub fn bounds(&self) -> Aabb3 {
        Aabb3::from_homogeneous(&self.positions)
            .unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}

impl BoundingBox for TriangleSoup {
    type Point = Point3;

    fn bounding_box(&self) -> (Point3, Point3) {
        let aabb = self.bounds();
        (aabb.min, aabb.max)
    }
}
