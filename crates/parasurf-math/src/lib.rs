pub mod aabb;
pub mod color;
pub mod homogeneous;

pub use aabb::Aabb3;
pub use color::Rgba;
pub use glam::{dvec2, dvec3, dvec4, DVec2, DVec3, DVec4};
pub use homogeneous::{direction4, point4, to_f32x4};

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Point4 = DVec4;
pub type Vector2 = DVec2;
pub type Vector3 = DVec3;
