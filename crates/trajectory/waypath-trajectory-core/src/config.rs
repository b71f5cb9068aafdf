//! Kinematic configuration for trajectory generation.

use serde::{Deserialize, Serialize};

use crate::error::TrajectoryError;

/// Kinematic limits and boundary velocities for one generation call.
///
/// All limits are explicit parameters in the caller's length unit; the core
/// embeds no field dimensions or scale constants.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrajectoryConfig {
    /// Maximum speed along the path (length units per second). Must be > 0.
    pub max_velocity: f32,
    /// Maximum acceleration along the path (length units per second
    /// squared). Must be > 0.
    pub max_acceleration: f32,
    /// Speed at the first waypoint. Must be in [0, max_velocity].
    #[serde(default)]
    pub start_velocity: f32,
    /// Speed at the last waypoint. Must be in [0, max_velocity].
    #[serde(default)]
    pub end_velocity: f32,
    /// Optional lateral acceleration limit. When set, speed through a bend
    /// is additionally capped at sqrt(limit / |curvature|).
    #[serde(default)]
    pub max_lateral_acceleration: Option<f32>,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        // Example limits only (1 unit/s, 1 unit/s^2, rest-to-rest); pick
        // limits that match the actual platform.
        Self {
            max_velocity: 1.0,
            max_acceleration: 1.0,
            start_velocity: 0.0,
            end_velocity: 0.0,
            max_lateral_acceleration: None,
        }
    }
}

impl TrajectoryConfig {
    /// Construct a config with the given limits and rest-to-rest boundaries.
    pub fn new(max_velocity: f32, max_acceleration: f32) -> Self {
        Self {
            max_velocity,
            max_acceleration,
            ..Self::default()
        }
    }

    /// Validate the invariants (positive finite limits, boundary velocities
    /// within [0, max_velocity]).
    pub fn validate(&self) -> Result<(), TrajectoryError> {
        if !self.max_velocity.is_finite() || self.max_velocity <= 0.0 {
            return Err(TrajectoryError::InvalidConfig(format!(
                "max_velocity must be positive and finite, got {}",
                self.max_velocity
            )));
        }
        if !self.max_acceleration.is_finite() || self.max_acceleration <= 0.0 {
            return Err(TrajectoryError::InvalidConfig(format!(
                "max_acceleration must be positive and finite, got {}",
                self.max_acceleration
            )));
        }
        for (name, v) in [
            ("start_velocity", self.start_velocity),
            ("end_velocity", self.end_velocity),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(TrajectoryError::InvalidConfig(format!(
                    "{name} must be non-negative and finite, got {v}"
                )));
            }
            if v > self.max_velocity {
                return Err(TrajectoryError::InvalidConfig(format!(
                    "{name} ({v}) exceeds max_velocity ({})",
                    self.max_velocity
                )));
            }
        }
        if let Some(lat) = self.max_lateral_acceleration {
            if !lat.is_finite() || lat <= 0.0 {
                return Err(TrajectoryError::InvalidConfig(format!(
                    "max_lateral_acceleration must be positive and finite, got {lat}"
                )));
            }
        }
        Ok(())
    }
}
