//! Flat `f32` attribute streams ready for buffer upload.

use bytemuck::{Pod, Zeroable};
use parasurf_geometry::ControlPointSet;
use parasurf_math::{to_f32x4, Point2, Point4, Rgba};
use parasurf_mesh::{LineSet, TriangleSoup};
use serde::Serialize;

/// Floats per attribute per vertex.
pub const COMPONENTS: usize = 4;

/// Vertex with position, color, and normal packed for interleaved upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 4],
    pub color: [f32; 4],
    pub normal: [f32; 4],
}

/// Separate position, color and (optional) normal streams, four floats per
/// vertex each, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VertexBuffers {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
    pub normals: Option<Vec<f32>>,
}

impl VertexBuffers {
    /// Torus triangles with positions, colors and normals.
    pub fn from_triangles(soup: &TriangleSoup) -> Self {
        Self {
            positions: flatten(&soup.positions),
            colors: flatten_colors(&soup.colors),
            normals: Some(flatten(&soup.normals)),
        }
    }

    /// Line segments (normal lines, axes) with positions and colors.
    pub fn from_lines(lines: &LineSet) -> Self {
        Self {
            positions: flatten(&lines.positions),
            colors: flatten_colors(&lines.colors),
            normals: None,
        }
    }

    /// A planar polyline in one color.
    ///
    /// Curve-editor vertices use `z = 0` and `w = 0`, like its point arrays.
    pub fn from_polyline(points: &[Point2], color: Rgba) -> Self {
        let positions = points
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32, 0.0, 0.0])
            .collect();
        let colors = points.iter().flat_map(|_| color.to_array()).collect();
        Self {
            positions,
            colors,
            normals: None,
        }
    }

    /// Control points, with the selected one in `selected_color`.
    pub fn from_control_points(set: &ControlPointSet, color: Rgba, selected_color: Rgba) -> Self {
        let mut buffers = Self::from_polyline(set.as_slice(), color);
        let start = set.selected() * COMPONENTS;
        buffers.colors[start..start + COMPONENTS].copy_from_slice(&selected_color.to_array());
        buffers
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / COMPONENTS
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    pub fn normal_bytes(&self) -> Option<&[u8]> {
        self.normals.as_deref().map(bytemuck::cast_slice::<f32, u8>)
    }

    /// Interleave the streams into one vertex array. Missing normals are
    /// written as `(0, 0, 0, 1)`.
    pub fn interleaved(&self) -> Vec<GpuVertex> {
        let placeholder = [0.0, 0.0, 0.0, 1.0];
        (0..self.vertex_count())
            .map(|i| {
                let range = i * COMPONENTS..(i + 1) * COMPONENTS;
                let mut vertex = GpuVertex::zeroed();
                vertex.position.copy_from_slice(&self.positions[range.clone()]);
                vertex.color.copy_from_slice(&self.colors[range.clone()]);
                match &self.normals {
                    Some(normals) => vertex.normal.copy_from_slice(&normals[range]),
                    None => vertex.normal = placeholder,
                }
                vertex
            })
            .collect()
    }
}

fn flatten(values: &[Point4]) -> Vec<f32> {
    values.iter().flat_map(|&v| to_f32x4(v)).collect()
}

fn flatten_colors(colors: &[Rgba]) -> Vec<f32> {
    bytemuck::cast_slice(colors).to_vec()
}
