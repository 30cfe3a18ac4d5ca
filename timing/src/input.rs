use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::types::{NetworkInput, SensorMap};

/// # Errors
/// Fails if the file is missing or any intersection drops a required field.
pub fn load_sensor_readings(path: &Path) -> Result<SensorMap> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {:?}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("parse sensor readings in {:?}", path))
}

/// # Errors
/// Fails if the file is missing or the top-level `intersections` key is
/// absent. Per-approach fields are never validated; missing ones default.
pub fn load_network_input(path: &Path) -> Result<NetworkInput> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {:?}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("parse intersection map in {:?}", path))
}
