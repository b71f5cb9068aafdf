//! Canonical trajectory data model.
//! Errors live in error.rs; the generation pipeline in generator.rs.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sampling::sample_trajectory;

/// A 2D position the generated path must pass through, in order.
///
/// Heading is in radians and optional: when absent, the fitter infers the
/// tangent direction from neighboring waypoints. Coordinates use one
/// consistent length unit chosen by the caller.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Waypoint {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub heading: Option<f32>,
}

impl Waypoint {
    /// Waypoint with an inferred tangent direction.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            heading: None,
        }
    }

    /// Waypoint with an explicit heading in radians.
    pub fn with_heading(x: f32, y: f32, heading: f32) -> Self {
        Self {
            x,
            y,
            heading: Some(heading),
        }
    }

    /// Euclidean distance to another waypoint.
    pub fn distance(&self, other: &Waypoint) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// 2D pose: position plus heading in radians.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub heading: f32,
}

/// One time-stamped state along a generated trajectory.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrajectoryState {
    /// Elapsed time since the trajectory start (seconds). The first state
    /// has time 0; times are strictly non-decreasing across the sequence.
    pub time: f32,
    pub pose: Pose,
    /// Signed speed along the path (length units per second).
    pub velocity: f32,
    /// Signed acceleration along the path (length units per second squared).
    pub acceleration: f32,
    /// Path curvature (1 / length unit).
    pub curvature: f32,
}

/// An immutable, time-indexed sequence of states describing motion along a
/// smooth path. Produced once per generation call; supports sampling at an
/// arbitrary elapsed time via interpolation between bracketing states.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Trajectory {
    states: Vec<TrajectoryState>,
}

impl Trajectory {
    pub(crate) fn from_states(states: Vec<TrajectoryState>) -> Self {
        Self { states }
    }

    /// The stored state sequence, ordered by elapsed time.
    pub fn states(&self) -> &[TrajectoryState] {
        &self.states
    }

    /// Total duration in seconds (0 for an empty trajectory).
    pub fn total_duration(&self) -> f32 {
        self.states.last().map(|s| s.time).unwrap_or(0.0)
    }

    /// Interpolate a state at an arbitrary elapsed time.
    ///
    /// Fails with [`crate::TrajectoryError::OutOfRange`] when `time` lies
    /// outside `[0, total_duration]`; callers wanting clamp semantics can
    /// clamp against [`Trajectory::total_duration`] first.
    pub fn sample(&self, time: f32) -> Result<TrajectoryState> {
        sample_trajectory(self, time)
    }
}
