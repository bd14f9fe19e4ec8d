//! Torus tessellation with flat, smooth, or disabled shading normals.

use std::fmt;
use std::str::FromStr;

use parasurf_core::{ParasurfError, Result, Validate};
use parasurf_geometry::{Surface, ToroidalSurface};
use parasurf_math::{Point3, Rgba, Vector3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::TriangleSoup;

/// How vertex normals are derived for the torus.
///
/// The labels follow the viewer's key bindings: `Smooth` shares one face
/// normal across a quad (faceted look) while `Flat` gives every vertex its own
/// radial normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadingMode {
    /// Every normal is `(0, 0, 0, 1)`; lighting contributes nothing.
    None,
    /// Per-vertex radial normal from the tube's center circle.
    ///
    /// Measured from the ring center including the torus center, so a
    /// translated torus keeps radial normals.
    Flat,
    /// One normalized cross product per quad, shared by its six vertices.
    #[default]
    Smooth,
}

impl fmt::Display for ShadingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShadingMode::None => "none",
            ShadingMode::Flat => "flat",
            ShadingMode::Smooth => "smooth",
        };
        f.write_str(name)
    }
}

impl FromStr for ShadingMode {
    type Err = ParasurfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(ShadingMode::None),
            "flat" => Ok(ShadingMode::Flat),
            "smooth" => Ok(ShadingMode::Smooth),
            other => Err(ParasurfError::InvalidParameter(format!(
                "unknown shading mode '{}', expected none, flat or smooth",
                other
            ))),
        }
    }
}

/// Color presets of the two torus viewers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TorusColor {
    /// Plain tessellation viewer.
    Gray,
    /// Lit viewer.
    Orange,
}

impl TorusColor {
    pub fn rgba(self) -> Rgba {
        match self {
            TorusColor::Gray => Rgba::GRAY,
            TorusColor::Orange => Rgba::ORANGE,
        }
    }
}

/// Upper bound on slices and loops; `generate` clamps larger counts.
pub const MAX_SUBDIVISIONS: u32 = 1024;

/// Shape, placement, and color of a generated torus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusParams {
    pub major_radius: f64,
    pub minor_radius: f64,
    /// Subdivisions around the tube.
    pub slice_count: u32,
    /// Subdivisions around the ring.
    pub loop_count: u32,
    pub center: Point3,
    pub color: Rgba,
}

impl TorusParams {
    pub fn new(major_radius: f64, minor_radius: f64, slice_count: u32, loop_count: u32) -> Self {
        Self {
            major_radius,
            minor_radius,
            slice_count,
            loop_count,
            ..Self::default()
        }
    }

    pub fn with_center(mut self, center: Point3) -> Self {
        self.center = center;
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn surface(&self) -> ToroidalSurface {
        ToroidalSurface::new(self.center, self.major_radius, self.minor_radius)
    }

    /// Slice and loop counts as tessellated, clamped to `1..=MAX_SUBDIVISIONS`.
    pub fn effective_counts(&self) -> (u32, u32) {
        (
            self.slice_count.clamp(1, MAX_SUBDIVISIONS),
            self.loop_count.clamp(1, MAX_SUBDIVISIONS),
        )
    }

    /// Vertex count of the generated soup, counting the closing band and the
    /// clamp of both subdivision counts.
    pub fn vertex_count(&self) -> usize {
        let (slices, loops) = self.effective_counts();
        6 * (loops as usize + 1) * (slices as usize + 1)
    }
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            major_radius: 0.4,
            minor_radius: 0.2,
            slice_count: 5,
            loop_count: 5,
            center: Point3::ZERO,
            color: TorusColor::Orange.rgba(),
        }
    }
}

impl Validate for TorusParams {
    fn validate(&self) -> Result<()> {
        let counts = 1..=MAX_SUBDIVISIONS;
        if !counts.contains(&self.slice_count) || !counts.contains(&self.loop_count) {
            return Err(ParasurfError::InvalidParameter(format!(
                "slice and loop counts must be in 1..={}, got {} slices and {} loops",
                MAX_SUBDIVISIONS, self.slice_count, self.loop_count
            )));
        }
        if !self.major_radius.is_finite() || !self.minor_radius.is_finite() {
            return Err(ParasurfError::InvalidParameter(
                "torus radii must be finite".into(),
            ));
        }
        if !self.center.is_finite() {
            return Err(ParasurfError::InvalidParameter(
                "torus center must be finite".into(),
            ));
        }
        Ok(())
    }
}

// Corner slots of one quad: a = (u1, v1), a1 = (u2, v1), b = (u1, v2), b1 = (u2, v2).
const A: usize = 0;
const A1: usize = 1;
const B: usize = 2;
const B1: usize = 3;

/// Counter-clockwise in `(u, v)`: {a, a1, b} then {b, a1, b1}.
const WINDING: [usize; 6] = [A, A1, B, B, A1, B1];

/// Tessellate the torus into a triangle soup.
///
/// Both loops run one step past a full turn, so the last band around the
/// ring and the last slice around the tube repeat the first ones and close the
/// surface. Slice and loop counts of 0 are treated as 1, counts above
/// [`MAX_SUBDIVISIONS`] as that bound.
pub fn generate(params: &TorusParams, shading: ShadingMode) -> TriangleSoup {
    let (slices, loops) = params.effective_counts();
    let surface = params.surface();
    let color = params.color;

    let (u_min, u_max) = surface.domain_u();
    let (v_min, v_max) = surface.domain_v();
    let u_at = |j: f64| u_min + (u_max - u_min) * j / loops as f64;
    let v_at = |i: f64| v_min + (v_max - v_min) * i / slices as f64;

    let mut soup = TriangleSoup::with_capacity(params.vertex_count());

    for j in 0..=loops {
        let j = j as f64;
        let (u1, u2) = (u_at(j), u_at(j + 1.0));

        for i in 0..=slices {
            let i = i as f64;
            let (v1, v2) = (v_at(i), v_at(i + 1.0));

            let params_uv = [(u1, v1), (u2, v1), (u1, v2), (u2, v2)];
            let corners = params_uv.map(|(u, v)| surface.point_at(u, v));
            let normals = quad_normals(&surface, &params_uv, &corners, shading);

            for slot in WINDING {
                soup.push_vertex(corners[slot], color, normals[slot]);
            }
        }
    }

    debug!(
        slices,
        loops,
        shading = %shading,
        vertices = soup.vertex_count(),
        "generated torus"
    );
    soup
}

fn quad_normals(
    surface: &ToroidalSurface,
    params_uv: &[(f64, f64); 4],
    corners: &[Point3; 4],
    shading: ShadingMode,
) -> [Vector3; 4] {
    match shading {
        ShadingMode::None => [Vector3::ZERO; 4],
        ShadingMode::Smooth => {
            // (b - a1) x (a1 - a) points into the tube; the debug normal lines
            // subtract it for this mode.
            let edge_1 = corners[B] - corners[A1];
            let edge_2 = corners[A1] - corners[A];
            [edge_1.cross(edge_2).normalize_or_zero(); 4]
        }
        ShadingMode::Flat => params_uv.map(|(u, v)| surface.radial_at(u, v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parasurf_math::dvec3;

    #[test]
    fn test_default_params() {
        let params = TorusParams::default();
        assert_eq!(params.major_radius, 0.4);
        assert_eq!(params.minor_radius, 0.2);
        assert_eq!(params.slice_count, 5);
        assert_eq!(params.color, Rgba::ORANGE);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_vertex_count_formula() {
        let params = TorusParams::new(1.0, 0.3, 4, 7);
        let soup = generate(&params, ShadingMode::Smooth);
        assert_eq!(soup.vertex_count(), 6 * 8 * 5);
        assert_eq!(soup.vertex_count(), params.vertex_count());
        assert_eq!(soup.colors.len(), soup.vertex_count());
        assert_eq!(soup.normals.len(), soup.vertex_count());
    }

    #[test]
    fn test_oversized_counts_are_clamped() {
        let params = TorusParams::new(0.4, 0.2, u32::MAX, u32::MAX);
        assert!(params.validate().is_err());
        assert_eq!(params.effective_counts(), (MAX_SUBDIVISIONS, MAX_SUBDIVISIONS));
        let side = MAX_SUBDIVISIONS as usize + 1;
        assert_eq!(params.vertex_count(), 6 * side * side);

        let params = TorusParams::new(0.4, 0.2, u32::MAX, 2);
        let soup = generate(&params, ShadingMode::Flat);
        assert_eq!(soup.vertex_count(), params.vertex_count());
        assert_eq!(soup.vertex_count(), 6 * 3 * side);
        assert!(soup.is_finite());
    }

    #[test]
    fn test_first_quad_layout() {
        let params = TorusParams::new(0.4, 0.2, 4, 4);
        let soup = generate(&params, ShadingMode::None);
        let p = |i: usize| soup.positions[i].truncate();
        // a at (0, 0) is the outer equator point on +x
        assert!((p(0) - dvec3(0.6, 0.0, 0.0)).length() < 1e-12);
        // a1 advances a quarter turn around the ring
        assert!((p(1) - dvec3(0.0, 0.6, 0.0)).length() < 1e-12);
        // b advances a quarter turn around the tube
        assert!((p(2) - dvec3(0.4, 0.0, 0.2)).length() < 1e-12);
        // shared corners repeat
        assert_eq!(p(3), p(2));
        assert_eq!(p(4), p(1));
    }

    #[test]
    fn test_center_offset_translates() {
        let offset = dvec3(1.0, -1.0, 2.0);
        let base = generate(&TorusParams::default(), ShadingMode::None);
        let moved = generate(&TorusParams::default().with_center(offset), ShadingMode::None);
        for (p, q) in base.positions.iter().zip(&moved.positions) {
            assert!((q.truncate() - p.truncate() - offset).length() < 1e-12);
        }
    }

    #[test]
    fn test_flat_normals_ignore_center_offset() {
        let offset = dvec3(3.0, 0.0, -1.0);
        let base = generate(&TorusParams::default(), ShadingMode::Flat);
        let moved = generate(&TorusParams::default().with_center(offset), ShadingMode::Flat);
        for (n, m) in base.normals.iter().zip(&moved.normals) {
            assert!((*n - *m).length() < 1e-12);
        }
    }

    #[test]
    fn test_color_is_uniform() {
        let params = TorusParams::default().with_color(TorusColor::Gray.rgba());
        let soup = generate(&params, ShadingMode::Flat);
        assert!(soup.colors.iter().all(|&c| c == Rgba::GRAY));
    }

    #[test]
    fn test_shading_mode_parse() {
        assert_eq!("flat".parse::<ShadingMode>().unwrap(), ShadingMode::Flat);
        assert_eq!("Smooth".parse::<ShadingMode>().unwrap(), ShadingMode::Smooth);
        assert_eq!("none".parse::<ShadingMode>().unwrap(), ShadingMode::None);
        assert!("phong".parse::<ShadingMode>().is_err());
        assert_eq!(ShadingMode::Flat.to_string(), "flat");
    }

    #[test]
    fn test_validate_rejects_degenerate() {
        assert!(TorusParams::new(0.4, 0.2, 0, 5).validate().is_err());
        assert!(TorusParams::new(f64::INFINITY, 0.2, 5, 5).validate().is_err());
        assert!(TorusParams::new(0.4, 0.2, MAX_SUBDIVISIONS + 1, 5).validate().is_err());
        assert!(TorusParams::new(0.4, 0.2, MAX_SUBDIVISIONS, MAX_SUBDIVISIONS).validate().is_ok());
        // Negative radii are allowed
        assert!(TorusParams::new(-0.4, -0.2, 5, 5).validate().is_ok());
    }
}
