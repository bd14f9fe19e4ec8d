//! RGBA colors as uploaded to the color attribute.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A linear RGBA color with `f32` channels.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    /// Half-transparent gray of the plain tessellation viewer.
    pub const GRAY: Self = Self::new(0.5, 0.5, 0.5, 0.5);
    /// Opaque orange of the lit torus viewer.
    pub const ORANGE: Self = Self::new(1.0, 0.5, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Rgba {
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}
