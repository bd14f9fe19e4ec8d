pub mod error;
pub mod traits;

pub use error::{ParasurfError, Result};
pub use traits::{BoundingBox, Validate};
