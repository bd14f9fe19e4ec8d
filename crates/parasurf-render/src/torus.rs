//! Editing state of the torus viewer.

use parasurf_core::{ParasurfError, Result};
use parasurf_math::Vector3;
use parasurf_mesh::{
    axis_lines, generate, generate_normal_lines, LineSet, ShadingMode, TorusParams, TriangleSoup,
    MAX_SUBDIVISIONS,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::buffers::VertexBuffers;
use crate::keys::KeyCommand;

/// Step applied to either radius per key press.
pub const RADIUS_STEP: f64 = 0.1;

/// Step applied to the center per key press.
pub const CENTER_STEP: f64 = 1.0;

/// Half-length of the drawn coordinate axes.
pub const AXIS_EXTENT: f64 = 1.0;

/// Serializable starting state of the torus viewer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusConfig {
    #[serde(flatten)]
    pub params: TorusParams,
    pub shading: ShadingMode,
}

/// One discrete edit of the torus viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TorusCommand {
    /// One more slice and one more loop, never above `MAX_SUBDIVISIONS`.
    IncreaseDetail,
    /// One fewer slice and loop, never below 1.
    DecreaseDetail,
    GrowMinor,
    ShrinkMinor,
    GrowMajor,
    ShrinkMajor,
    MoveCenter(Vector3),
    SetShading(ShadingMode),
    ToggleNormalLines,
    ToggleWireframe,
}

impl KeyCommand for TorusCommand {
    fn from_key(key: char) -> Result<Self> {
        let command = match key {
            'q' => TorusCommand::IncreaseDetail,
            'a' => TorusCommand::DecreaseDetail,
            'w' => TorusCommand::GrowMinor,
            's' => TorusCommand::ShrinkMinor,
            'e' => TorusCommand::GrowMajor,
            'd' => TorusCommand::ShrinkMajor,
            '1' => TorusCommand::MoveCenter(Vector3::X * CENTER_STEP),
            '2' => TorusCommand::MoveCenter(Vector3::NEG_X * CENTER_STEP),
            '3' => TorusCommand::MoveCenter(Vector3::Y * CENTER_STEP),
            '4' => TorusCommand::MoveCenter(Vector3::NEG_Y * CENTER_STEP),
            '5' => TorusCommand::MoveCenter(Vector3::Z * CENTER_STEP),
            '6' => TorusCommand::MoveCenter(Vector3::NEG_Z * CENTER_STEP),
            'z' => TorusCommand::SetShading(ShadingMode::Flat),
            'x' => TorusCommand::SetShading(ShadingMode::Smooth),
            'n' => TorusCommand::SetShading(ShadingMode::None),
            'c' => TorusCommand::ToggleNormalLines,
            'g' => TorusCommand::ToggleWireframe,
            other => return Err(ParasurfError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

/// Owns the torus parameters and the geometry generated from them.
///
/// Every command that touches the shape or shading regenerates the mesh and
/// its normal lines before returning.
#[derive(Debug, Clone)]
pub struct TorusController {
    params: TorusParams,
    shading: ShadingMode,
    show_normal_lines: bool,
    wireframe: bool,
    mesh: TriangleSoup,
    normal_lines: LineSet,
}

impl TorusController {
    pub fn new(params: TorusParams, shading: ShadingMode) -> Self {
        let mut controller = Self {
            params,
            shading,
            show_normal_lines: true,
            wireframe: false,
            mesh: TriangleSoup::default(),
            normal_lines: LineSet::default(),
        };
        controller.regenerate();
        controller
    }

    pub fn from_config(config: TorusConfig) -> Self {
        Self::new(config.params, config.shading)
    }

    pub fn params(&self) -> &TorusParams {
        &self.params
    }

    pub fn shading(&self) -> ShadingMode {
        self.shading
    }

    pub fn show_normal_lines(&self) -> bool {
        self.show_normal_lines
    }

    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    pub fn mesh(&self) -> &TriangleSoup {
        &self.mesh
    }

    pub fn normal_lines(&self) -> &LineSet {
        &self.normal_lines
    }

    pub fn apply(&mut self, command: TorusCommand) {
        trace!(?command, "torus command");
        match command {
            TorusCommand::IncreaseDetail => {
                let (slices, loops) = self.params.effective_counts();
                self.params.slice_count = (slices + 1).min(MAX_SUBDIVISIONS);
                self.params.loop_count = (loops + 1).min(MAX_SUBDIVISIONS);
            }
            TorusCommand::DecreaseDetail => {
                self.params.slice_count = self.params.slice_count.saturating_sub(1).max(1);
                self.params.loop_count = self.params.loop_count.saturating_sub(1).max(1);
            }
            TorusCommand::GrowMinor => self.params.minor_radius += RADIUS_STEP,
            TorusCommand::ShrinkMinor => self.params.minor_radius -= RADIUS_STEP,
            TorusCommand::GrowMajor => self.params.major_radius += RADIUS_STEP,
            TorusCommand::ShrinkMajor => self.params.major_radius -= RADIUS_STEP,
            TorusCommand::MoveCenter(delta) => self.params.center += delta,
            TorusCommand::SetShading(mode) => self.shading = mode,
            TorusCommand::ToggleNormalLines => {
                self.show_normal_lines = !self.show_normal_lines;
                return;
            }
            TorusCommand::ToggleWireframe => {
                self.wireframe = !self.wireframe;
                debug!(wireframe = self.wireframe, "toggled wireframe");
                return;
            }
        }
        self.regenerate();
    }

    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = TorusCommand>) {
        for command in commands {
            self.apply(command);
        }
    }

    fn regenerate(&mut self) {
        self.mesh = generate(&self.params, self.shading);
        self.normal_lines =
            generate_normal_lines(&self.mesh.positions, &self.mesh.normals, self.shading);
    }

    pub fn mesh_buffers(&self) -> VertexBuffers {
        VertexBuffers::from_triangles(&self.mesh)
    }

    /// Normal-line buffers, or `None` while the overlay is hidden.
    pub fn normal_line_buffers(&self) -> Option<VertexBuffers> {
        self.show_normal_lines
            .then(|| VertexBuffers::from_lines(&self.normal_lines))
    }

    pub fn axis_buffers(&self) -> VertexBuffers {
        VertexBuffers::from_lines(&axis_lines(AXIS_EXTENT))
    }
}

impl Default for TorusController {
    fn default() -> Self {
        Self::new(TorusParams::default(), ShadingMode::default())
    }
}
