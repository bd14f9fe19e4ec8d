//! JSON config files for the two viewers.

use std::fs;
use std::path::Path;

use parasurf_core::Result;
use parasurf_render::{CurveConfig, TorusConfig};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Read and deserialize a JSON file. Missing fields take their defaults.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)?;
    let value = serde_json::from_str(&text)?;
    debug!(path = %path.display(), "loaded config");
    Ok(value)
}

pub fn load_torus_config(path: Option<&Path>) -> Result<TorusConfig> {
    path.map_or_else(|| Ok(TorusConfig::default()), load_json)
}

pub fn load_curve_config(path: Option<&Path>) -> Result<CurveConfig> {
    path.map_or_else(|| Ok(CurveConfig::default()), load_json)
}
