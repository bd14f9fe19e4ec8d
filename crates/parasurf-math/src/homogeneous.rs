//! Homogeneous 4-component helpers for vertex streams.

use crate::{Point3, Point4, Vector3};

/// Lift a point to homogeneous coordinates with `w = 1`.
pub fn point4(p: Point3) -> Point4 {
    p.extend(1.0)
}

/// Lift a shading normal into the 4-component attribute layout.
///
/// Normals carry `w = 1` in the vertex stream, so a disabled normal is
/// `(0, 0, 0, 1)` rather than all zeros.
pub fn direction4(v: Vector3) -> Point4 {
    v.extend(1.0)
}

/// Narrow a homogeneous `f64` vector to the `f32` layout the renderer uploads.
pub fn to_f32x4(v: Point4) -> [f32; 4] {
    v.as_vec4().to_array()
}
