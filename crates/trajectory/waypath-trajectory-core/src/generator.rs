//! Trajectory generation pipeline: fit -> parameterize -> profile.

use log::debug;

use crate::config::TrajectoryConfig;
use crate::data::{Pose, Trajectory, TrajectoryState, Waypoint};
use crate::error::Result;
use crate::parameterize::parameterize;
use crate::profile::solve_profile;
use crate::spline::SplinePath;

/// Generate a time-parameterized trajectory through the waypoints.
///
/// Pure function: identical inputs always produce identical output, so
/// callers may memoize results by input hash. Fails fast with a
/// [`crate::TrajectoryError`] and never returns a partial trajectory.
pub fn generate_trajectory(
    waypoints: &[Waypoint],
    config: &TrajectoryConfig,
) -> Result<Trajectory> {
    config.validate()?;

    let path = SplinePath::fit(waypoints)?;
    let samples = parameterize(&path)?;
    debug!(
        "parameterized {} waypoints into {} samples over {:.3} length units",
        waypoints.len(),
        samples.len(),
        samples.last().map(|s| s.arc_length).unwrap_or(0.0)
    );

    let profile = solve_profile(&samples, config)?;

    let states = samples
        .iter()
        .zip(profile.iter())
        .map(|(sample, point)| TrajectoryState {
            time: point.time,
            pose: Pose {
                x: sample.x,
                y: sample.y,
                heading: sample.heading,
            },
            velocity: point.velocity,
            acceleration: point.acceleration,
            curvature: sample.curvature,
        })
        .collect::<Vec<_>>();
    debug!(
        "profiled trajectory: {} states, {:.3}s total",
        states.len(),
        states.last().map(|s| s.time).unwrap_or(0.0)
    );

    Ok(Trajectory::from_states(states))
}
