//! Error taxonomy for trajectory generation and sampling.
//!
//! All errors are detected synchronously; generation never returns a
//! partially valid trajectory. Retry with corrected input is a caller
//! concern.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, TrajectoryError>;

/// Errors produced while generating or sampling a trajectory.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrajectoryError {
    /// Fewer than two waypoints were supplied.
    #[error("at least two waypoints are required, got {0}")]
    InsufficientWaypoints(usize),

    /// Two consecutive waypoints coincide (zero-length segment, undefined
    /// tangent). `index` is the first of the coincident pair.
    #[error("waypoints {index} and {next} coincide", next = .index + 1)]
    DegenerateSegment { index: usize },

    /// The curve derivative vanished at a sample (cusp).
    #[error("path has a cusp near arc length {arc_length}")]
    SingularCurvature { arc_length: f32 },

    /// Kinematic configuration rejected upfront.
    #[error("invalid kinematic config: {0}")]
    InvalidConfig(String),

    /// The profile would need infinite time to cross a nonzero segment.
    #[error("profile cannot progress past arc length {arc_length}: both bracketing velocities are zero")]
    ZeroVelocitySegment { arc_length: f32 },

    /// Sampling requested outside the trajectory's time domain.
    #[error("sample time {time} outside trajectory domain [0, {duration}]")]
    OutOfRange { time: f32, duration: f32 },
}
