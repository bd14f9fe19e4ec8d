//! Editing state of the curve viewer.

use parasurf_core::{ParasurfError, Result};
use parasurf_geometry::tessellate::MAX_STEPS;
use parasurf_geometry::{ControlPointSet, Curve, CurveKind, DEFAULT_CONTROL_POINTS};
use parasurf_math::{Point2, Rgba, Vector2};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::buffers::VertexBuffers;
use crate::keys::KeyCommand;

/// Distance a control point moves per key press.
pub const MOVE_STEP: f64 = 0.05;

/// Resolution change per key press.
pub const RESOLUTION_STEP: f64 = 4.0;

/// Resolution restored by the reset key; also the floor for decrements.
pub const MIN_RESOLUTION: f64 = 4.0;

pub const DEFAULT_RESOLUTION: f64 = 6.0;

/// Largest resolution a config may request; increments stop here.
pub const MAX_RESOLUTION: f64 = MAX_STEPS as f64;

pub const CURVE_COLOR: Rgba = Rgba::RED;
pub const POLYGON_COLOR: Rgba = Rgba::GREEN;
pub const POINT_COLOR: Rgba = Rgba::GREEN;
pub const SELECTED_COLOR: Rgba = Rgba::BLUE;

/// Serializable starting state of the curve viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    pub points: Vec<Point2>,
    pub resolution: f64,
    pub kind: CurveKind,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            points: DEFAULT_CONTROL_POINTS.to_vec(),
            resolution: DEFAULT_RESOLUTION,
            kind: CurveKind::default(),
        }
    }
}

/// One discrete edit of the curve viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveCommand {
    MoveSelected(Vector2),
    SelectNext,
    SelectPrevious,
    /// Stops at [`MAX_RESOLUTION`].
    IncreaseResolution,
    /// Only applies while the resolution is above [`MIN_RESOLUTION`].
    DecreaseResolution,
    ResetResolution,
    ToggleKind,
}

impl KeyCommand for CurveCommand {
    fn from_key(key: char) -> Result<Self> {
        let command = match key {
            'w' => CurveCommand::MoveSelected(Vector2::Y * MOVE_STEP),
            's' => CurveCommand::MoveSelected(Vector2::NEG_Y * MOVE_STEP),
            'a' => CurveCommand::MoveSelected(Vector2::NEG_X * MOVE_STEP),
            'd' => CurveCommand::MoveSelected(Vector2::X * MOVE_STEP),
            'e' => CurveCommand::SelectNext,
            'q' => CurveCommand::SelectPrevious,
            'z' => CurveCommand::IncreaseResolution,
            'x' => CurveCommand::DecreaseResolution,
            'c' => CurveCommand::ResetResolution,
            'f' => CurveCommand::ToggleKind,
            other => return Err(ParasurfError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

/// Owns the control points and the curve sampled through them.
#[derive(Debug, Clone)]
pub struct CurveController {
    points: ControlPointSet,
    curve: Curve,
}

impl CurveController {
    pub fn new(points: ControlPointSet, kind: CurveKind, resolution: f64) -> Self {
        let curve = Curve::new(kind, resolution, points.as_slice());
        Self { points, curve }
    }

    pub fn from_config(config: CurveConfig) -> Result<Self> {
        if !config.resolution.is_finite() || config.resolution > MAX_RESOLUTION {
            return Err(ParasurfError::InvalidParameter(format!(
                "curve resolution must be finite and at most {}, got {}",
                MAX_RESOLUTION, config.resolution
            )));
        }
        let points = ControlPointSet::new(config.points)?;
        Ok(Self::new(points, config.kind, config.resolution))
    }

    pub fn points(&self) -> &ControlPointSet {
        &self.points
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn apply(&mut self, command: CurveCommand) {
        trace!(?command, "curve command");
        match command {
            CurveCommand::MoveSelected(delta) => {
                self.points.translate_selected(delta);
                self.curve.rebuild(self.points.as_slice());
            }
            CurveCommand::SelectNext => self.points.select_next(),
            CurveCommand::SelectPrevious => self.points.select_previous(),
            CurveCommand::IncreaseResolution => {
                let current = self.curve.resolution();
                if current < MAX_RESOLUTION {
                    let resolution = (current + RESOLUTION_STEP).min(MAX_RESOLUTION);
                    self.curve.set_resolution(resolution, self.points.as_slice());
                }
            }
            CurveCommand::DecreaseResolution => {
                let current = self.curve.resolution();
                if current > MIN_RESOLUTION {
                    let resolution = (current - RESOLUTION_STEP).max(MIN_RESOLUTION);
                    self.curve.set_resolution(resolution, self.points.as_slice());
                }
            }
            CurveCommand::ResetResolution => {
                self.curve.set_resolution(MIN_RESOLUTION, self.points.as_slice());
            }
            CurveCommand::ToggleKind => {
                let kind = self.curve.kind().toggled();
                self.curve.set_kind(kind, self.points.as_slice());
            }
        }
    }

    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = CurveCommand>) {
        for command in commands {
            self.apply(command);
        }
    }

    pub fn curve_buffers(&self) -> VertexBuffers {
        VertexBuffers::from_polyline(self.curve.polyline(), CURVE_COLOR)
    }

    pub fn polygon_buffers(&self) -> VertexBuffers {
        VertexBuffers::from_polyline(self.points.as_slice(), POLYGON_COLOR)
    }

    pub fn point_buffers(&self) -> VertexBuffers {
        VertexBuffers::from_control_points(&self.points, POINT_COLOR, SELECTED_COLOR)
    }
}

impl Default for CurveController {
    fn default() -> Self {
        let curve = Curve::new(CurveKind::default(), DEFAULT_RESOLUTION, &DEFAULT_CONTROL_POINTS);
        Self {
            points: ControlPointSet::default(),
            curve,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::parse_script;
    use approx::assert_relative_eq;
    use parasurf_math::dvec2;

    #[test]
    fn test_default_state() {
        let controller = CurveController::default();
        assert_eq!(controller.points().len(), 6);
        assert_eq!(controller.points().selected(), 0);
        assert_eq!(controller.curve().kind(), CurveKind::Bezier);
        assert_eq!(controller.curve().polyline().len(), 8);
    }

    #[test]
    fn test_move_rebuilds_curve() {
        let mut controller = CurveController::default();
        let commands: Vec<CurveCommand> = parse_script("w,w,d").unwrap();
        controller.apply_all(commands);
        let moved = controller.points().selected_point();
        assert_relative_eq!(moved.x, -0.95, epsilon = 1e-12);
        assert_relative_eq!(moved.y, 0.1, epsilon = 1e-12);
        // the Bezier curve starts at the first control point
        assert_relative_eq!(controller.curve().polyline()[0].x, moved.x, epsilon = 1e-12);
        assert_relative_eq!(controller.curve().polyline()[0].y, moved.y, epsilon = 1e-12);
    }

    #[test]
    fn test_selection_wraps() {
        let mut controller = CurveController::default();
        controller.apply(CurveCommand::SelectPrevious);
        assert_eq!(controller.points().selected(), 5);
        controller.apply(CurveCommand::SelectNext);
        assert_eq!(controller.points().selected(), 0);
    }

    #[test]
    fn test_resolution_commands() {
        let mut controller = CurveController::default();
        controller.apply(CurveCommand::IncreaseResolution);
        assert_eq!(controller.curve().resolution(), 10.0);
        controller.apply(CurveCommand::DecreaseResolution);
        controller.apply(CurveCommand::DecreaseResolution);
        assert_eq!(controller.curve().resolution(), 4.0);
        controller.apply(CurveCommand::DecreaseResolution);
        assert_eq!(controller.curve().resolution(), 4.0);
        controller.apply(CurveCommand::IncreaseResolution);
        controller.apply(CurveCommand::ResetResolution);
        assert_eq!(controller.curve().resolution(), 4.0);
        assert_eq!(controller.curve().polyline().len(), 6);
    }

    #[test]
    fn test_increase_stops_at_max_resolution() {
        let config = CurveConfig {
            resolution: MAX_RESOLUTION - 1.0,
            ..CurveConfig::default()
        };
        let mut controller = CurveController::from_config(config).unwrap();
        controller.apply(CurveCommand::IncreaseResolution);
        assert_eq!(controller.curve().resolution(), MAX_RESOLUTION);
        controller.apply(CurveCommand::IncreaseResolution);
        assert_eq!(controller.curve().resolution(), MAX_RESOLUTION);
        assert_eq!(controller.curve().polyline().len(), MAX_STEPS + 2);
    }

    #[test]
    fn test_toggle_kind() {
        let mut controller = CurveController::default();
        controller.apply(CurveCommand::ToggleKind);
        assert_eq!(controller.curve().kind(), CurveKind::BSpline);
        assert_eq!(controller.curve().polyline().len(), 7);
    }

    #[test]
    fn test_point_buffers_highlight_selection() {
        let mut controller = CurveController::default();
        controller.apply(CurveCommand::SelectNext);
        let buffers = controller.point_buffers();
        assert_eq!(buffers.vertex_count(), 6);
        assert_eq!(&buffers.colors[0..4], &POINT_COLOR.to_array());
        assert_eq!(&buffers.colors[4..8], &SELECTED_COLOR.to_array());
        assert_eq!(controller.curve_buffers().colors[0..4], CURVE_COLOR.to_array());
    }

    #[test]
    fn test_config_validation() {
        let config = CurveConfig {
            points: vec![dvec2(0.0, 0.0)],
            ..CurveConfig::default()
        };
        assert!(CurveController::from_config(config).is_err());

        let config = CurveConfig {
            resolution: f64::INFINITY,
            ..CurveConfig::default()
        };
        assert!(CurveController::from_config(config).is_err());

        let config = CurveConfig {
            resolution: 1e30,
            ..CurveConfig::default()
        };
        assert!(matches!(
            CurveController::from_config(config),
            Err(ParasurfError::InvalidParameter(_))
        ));

        let controller = CurveController::from_config(CurveConfig::default()).unwrap();
        assert_eq!(controller.curve().resolution(), DEFAULT_RESOLUTION);
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{ "points": [[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]], "kind": "bspline" }"#;
        let config: CurveConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.kind, CurveKind::BSpline);
        assert_eq!(config.resolution, DEFAULT_RESOLUTION);
        assert_eq!(config.points.len(), 3);
    }

    #[test]
    fn test_unknown_key() {
        assert!(matches!(
            CurveCommand::from_key('r'),
            Err(ParasurfError::UnknownCommand(_))
        ));
    }
}
