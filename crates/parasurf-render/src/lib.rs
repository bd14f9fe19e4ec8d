//! Render-side glue for the two viewers.
//!
//! Controllers hold the editable state and regenerate geometry after every
//! command; [`VertexBuffers`] flattens that geometry into the four-float
//! attribute streams a GPU upload expects.

pub mod buffers;
pub mod curve;
pub mod keys;
pub mod torus;

pub use buffers::{GpuVertex, VertexBuffers, COMPONENTS};
pub use curve::{CurveCommand, CurveConfig, CurveController};
pub use keys::{parse_script, KeyCommand};
pub use torus::{TorusCommand, TorusConfig, TorusController};
