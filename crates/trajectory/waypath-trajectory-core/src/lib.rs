//! Waypath Trajectory Core (engine-agnostic)
//!
//! Generates a smooth, time-parameterized trajectory through an ordered list
//! of 2D waypoints under kinematic limits. The pipeline has three stages:
//! quintic Hermite path fitting, fixed-step arc-length resampling with
//! curvature, and a trapezoidal velocity profile (forward/backward pass).
//! Generation is a pure, deterministic computation with no shared state.

pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod generator;
pub mod parameterize;
pub mod profile;
pub mod sampling;
pub mod spline;

// Re-exports for consumers (adapters)
pub use config::TrajectoryConfig;
pub use data::{Pose, Trajectory, TrajectoryState, Waypoint};
pub use error::{Result, TrajectoryError};
pub use export::export_trajectory_json;
pub use generator::generate_trajectory;
pub use parameterize::{PathSample, ARC_STEP};
pub use sampling::sample_trajectory;
pub use spline::SplinePath;
