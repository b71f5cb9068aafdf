//! JSON export of generated trajectories.

use crate::data::Trajectory;

/// Export a trajectory as serde_json::Value (stable schema for
/// FFI/serialization). Renderers consume the pose samples directly.
pub fn export_trajectory_json(trajectory: &Trajectory) -> serde_json::Value {
    serde_json::to_value(trajectory).unwrap_or(serde_json::Value::Null)
}
