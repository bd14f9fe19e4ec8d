//! What the binary prints after applying a command script.

use std::fmt;

use parasurf_geometry::CurveKind;
use parasurf_math::{Aabb3, Point2};
use parasurf_mesh::{ShadingMode, TorusParams};
use parasurf_render::{CurveController, TorusController, VertexBuffers};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TorusBuffers {
    pub mesh: VertexBuffers,
    pub normal_lines: Option<VertexBuffers>,
    pub axes: VertexBuffers,
}

/// Final torus state plus the buffers it would upload.
#[derive(Debug, Serialize)]
pub struct TorusReport {
    pub params: TorusParams,
    pub shading: ShadingMode,
    pub show_normal_lines: bool,
    pub wireframe: bool,
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub normal_line_count: usize,
    pub bounds: Aabb3,
    pub buffers: TorusBuffers,
}

impl TorusReport {
    pub fn new(controller: &TorusController) -> Self {
        let mesh = controller.mesh();
        Self {
            params: controller.params().clone(),
            shading: controller.shading(),
            show_normal_lines: controller.show_normal_lines(),
            wireframe: controller.wireframe(),
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            normal_line_count: controller.normal_lines().segment_count(),
            bounds: mesh.bounds(),
            buffers: TorusBuffers {
                mesh: controller.mesh_buffers(),
                normal_lines: controller.normal_line_buffers(),
                axes: controller.axis_buffers(),
            },
        }
    }
}

impl fmt::Display for TorusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.params;
        writeln!(
            f,
            "torus: R={:.3} r={:.3} slices={} loops={} center=({:.3}, {:.3}, {:.3})",
            p.major_radius,
            p.minor_radius,
            p.slice_count,
            p.loop_count,
            p.center.x,
            p.center.y,
            p.center.z
        )?;
        writeln!(
            f,
            "shading: {}  normal lines: {}  wireframe: {}",
            self.shading,
            on_off(self.show_normal_lines),
            on_off(self.wireframe)
        )?;
        writeln!(
            f,
            "vertices: {}  triangles: {}  normal lines: {}",
            self.vertex_count, self.triangle_count, self.normal_line_count
        )?;
        write!(
            f,
            "bounds: ({:.3}, {:.3}, {:.3}) .. ({:.3}, {:.3}, {:.3})",
            self.bounds.min.x,
            self.bounds.min.y,
            self.bounds.min.z,
            self.bounds.max.x,
            self.bounds.max.y,
            self.bounds.max.z
        )
    }
}

#[derive(Debug, Serialize)]
pub struct CurveBuffers {
    pub curve: VertexBuffers,
    pub polygon: VertexBuffers,
    pub points: VertexBuffers,
}

/// Final curve-editor state plus its buffers.
#[derive(Debug, Serialize)]
pub struct CurveReport {
    pub kind: CurveKind,
    pub resolution: f64,
    pub selected: usize,
    pub control_points: Vec<Point2>,
    pub polyline: Vec<Point2>,
    pub buffers: CurveBuffers,
}

impl CurveReport {
    pub fn new(controller: &CurveController) -> Self {
        let points = controller.points();
        let curve = controller.curve();
        Self {
            kind: curve.kind(),
            resolution: curve.resolution(),
            selected: points.selected(),
            control_points: points.as_slice().to_vec(),
            polyline: curve.polyline().to_vec(),
            buffers: CurveBuffers {
                curve: controller.curve_buffers(),
                polygon: controller.polygon_buffers(),
                points: controller.point_buffers(),
            },
        }
    }
}

impl fmt::Display for CurveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            CurveKind::Bezier => "bezier",
            CurveKind::BSpline => "b-spline",
        };
        writeln!(
            f,
            "curve: {}  resolution: {}  polyline points: {}",
            kind,
            self.resolution,
            self.polyline.len()
        )?;
        write!(f, "control points:")?;
        for (i, p) in self.control_points.iter().enumerate() {
            let marker = if i == self.selected { '*' } else { ' ' };
            write!(f, "\n {}{}: ({:.3}, {:.3})", marker, i, p.x, p.y)?;
        }
        Ok(())
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
