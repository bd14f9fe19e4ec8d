//! Line-segment sets for debug overlays: shading normals and coordinate axes.

use parasurf_math::{point4, Point3, Point4, Rgba};
use serde::{Deserialize, Serialize};

use crate::ShadingMode;

/// Independent 2-point segments with per-vertex colors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSet {
    pub positions: Vec<Point4>,
    pub colors: Vec<Rgba>,
}

impl LineSet {
    pub fn push_segment(&mut self, from: Point3, to: Point3, color: Rgba) {
        self.positions.push(point4(from));
        self.positions.push(point4(to));
        self.colors.push(color);
        self.colors.push(color);
    }

    pub fn segment_count(&self) -> usize {
        self.positions.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Segment endpoints in emission order.
    pub fn segments(&self) -> impl Iterator<Item = (Point3, Point3)> + '_ {
        self.positions
            .chunks_exact(2)
            .map(|s| (s[0].truncate(), s[1].truncate()))
    }
}

/// One normal line per triangle, anchored at its first vertex.
///
/// `Smooth` normals point into the tube, so their lines run to
/// `position - normal` and are drawn red; `Flat` lines run to
/// `position + normal` in green. `None` produces no lines.
pub fn generate_normal_lines(
    positions: &[Point4],
    normals: &[Point4],
    mode: ShadingMode,
) -> LineSet {
    let (sign, color) = match mode {
        ShadingMode::None => return LineSet::default(),
        ShadingMode::Smooth => (-1.0, Rgba::RED),
        ShadingMode::Flat => (1.0, Rgba::GREEN),
    };

    let mut lines = LineSet::default();
    for (position, normal) in positions.iter().zip(normals).step_by(3) {
        let from = position.truncate();
        lines.push_segment(from, from + sign * normal.truncate(), color);
    }
    lines
}

/// The x, y and z axes from `-extent` to `extent`, colored red, green and blue.
pub fn axis_lines(extent: f64) -> LineSet {
    let mut lines = LineSet::default();
    for (axis, color) in [
        (Point3::X, Rgba::RED),
        (Point3::Y, Rgba::GREEN),
        (Point3::Z, Rgba::BLUE),
    ] {
        lines.push_segment(-extent * axis, extent * axis, color);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate, TorusParams};
    use parasurf_math::{dvec3, dvec4};

    #[test]
    fn test_one_line_per_triangle() {
        let soup = generate(&TorusParams::new(0.4, 0.2, 6, 6), ShadingMode::Flat);
        let lines = generate_normal_lines(&soup.positions, &soup.normals, ShadingMode::Flat);
        assert_eq!(lines.segment_count(), soup.triangle_count());
        assert_eq!(lines.colors.len(), lines.positions.len());
    }

    #[test]
    fn test_smooth_subtracts_flat_adds() {
        let positions = vec![dvec4(1.0, 2.0, 3.0, 1.0); 3];
        let normals = vec![dvec4(0.0, 0.0, 1.0, 1.0); 3];

        let smooth = generate_normal_lines(&positions, &normals, ShadingMode::Smooth);
        let (from, to) = smooth.segments().next().unwrap();
        assert_eq!(from, dvec3(1.0, 2.0, 3.0));
        assert_eq!(to, dvec3(1.0, 2.0, 2.0));
        assert_eq!(smooth.colors[0], Rgba::RED);

        let flat = generate_normal_lines(&positions, &normals, ShadingMode::Flat);
        let (_, to) = flat.segments().next().unwrap();
        assert_eq!(to, dvec3(1.0, 2.0, 4.0));
        assert_eq!(flat.colors[1], Rgba::GREEN);
        assert_eq!(flat.positions[1].w, 1.0);
    }

    #[test]
    fn test_none_mode_is_empty() {
        let soup = generate(&TorusParams::default(), ShadingMode::None);
        let lines = generate_normal_lines(&soup.positions, &soup.normals, ShadingMode::None);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_axis_lines() {
        let axes = axis_lines(1.0);
        assert_eq!(axes.segment_count(), 3);
        let segments: Vec<_> = axes.segments().collect();
        assert_eq!(segments[0], (dvec3(-1.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0)));
        assert_eq!(segments[2].1, dvec3(0.0, 0.0, 1.0));
        assert_eq!(axes.colors[4], Rgba::BLUE);
    }
}
