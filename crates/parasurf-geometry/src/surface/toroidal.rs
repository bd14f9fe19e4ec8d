//! Toroidal surface.

use std::f64::consts::TAU;

use parasurf_math::{DVec3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Surface;

/// A torus around the z axis, parameterized by `u` (angle around the ring)
/// and `v` (angle around the tube), both in `[0, 2*PI]`.
///
/// `major_radius` is the distance from `center` to the tube center and
/// `minor_radius` the radius of the tube. Neither is clamped; negative radii
/// mirror the surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToroidalSurface {
    pub center: Point3,
    pub major_radius: f64,
    pub minor_radius: f64,
}

impl ToroidalSurface {
    pub fn new(center: Point3, major_radius: f64, minor_radius: f64) -> Self {
        Self {
            center,
            major_radius,
            minor_radius,
        }
    }

    /// Point on the tube's center circle at ring angle `u`.
    pub fn ring_center_at(&self, u: f64) -> Point3 {
        self.center + self.major_radius * DVec3::new(u.cos(), u.sin(), 0.0)
    }

    /// Vector from the tube's center circle to the surface point, of length
    /// `|minor_radius|`.
    pub fn radial_at(&self, u: f64, v: f64) -> Vector3 {
        self.point_at(u, v) - self.ring_center_at(u)
    }
}

impl Surface for ToroidalSurface {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let slice_radius = self.major_radius + self.minor_radius * v.cos();
        self.center
            + DVec3::new(
                slice_radius * u.cos(),
                slice_radius * u.sin(),
                self.minor_radius * v.sin(),
            )
    }

    fn normal_at(&self, u: f64, v: f64) -> Vector3 {
        DVec3::new(v.cos() * u.cos(), v.cos() * u.sin(), v.sin())
    }

    fn domain_u(&self) -> (f64, f64) {
        (0.0, TAU)
    }

    fn domain_v(&self) -> (f64, f64) {
        (0.0, TAU)
    }
}
