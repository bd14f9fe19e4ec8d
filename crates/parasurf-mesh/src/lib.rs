pub mod lines;
pub mod soup;
pub mod torus;

pub use lines::{axis_lines, generate_normal_lines, LineSet};
pub use soup::TriangleSoup;
pub use torus::{generate, ShadingMode, TorusColor, TorusParams, MAX_SUBDIVISIONS};
