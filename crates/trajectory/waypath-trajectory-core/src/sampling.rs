//! Trajectory sampling at arbitrary elapsed time.
//!
//! Scalar fields interpolate linearly between the bracketing stored
//! states; heading blends along the shortest arc so paths crossing the
//! +-pi seam interpolate correctly.

use crate::data::{Pose, Trajectory, TrajectoryState};
use crate::error::{Result, TrajectoryError};

use std::f32::consts::PI;

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Shortest-arc interpolation between two angles in radians.
#[inline]
fn lerp_angle(a: f32, b: f32, t: f32) -> f32 {
    let mut delta = (b - a) % (2.0 * PI);
    if delta > PI {
        delta -= 2.0 * PI;
    } else if delta < -PI {
        delta += 2.0 * PI;
    }
    a + delta * t
}

/// Find the bracketing states [i, i+1] for a time inside the domain and the
/// local interpolation factor. Times at or past the last state return the
/// final index pair (last, last, 0).
fn find_bracket(states: &[TrajectoryState], time: f32) -> (usize, usize, f32) {
    let n = states.len();
    if n == 1 || time <= states[0].time {
        return (0, 0, 0.0);
    }
    if time >= states[n - 1].time {
        return (n - 1, n - 1, 0.0);
    }
    // Linear scan (could be optimized to binary search if needed)
    for i in 0..n - 1 {
        let t0 = states[i].time;
        let t1 = states[i + 1].time;
        if time >= t0 && time <= t1 {
            let denom = (t1 - t0).max(f32::EPSILON);
            return (i, i + 1, ((time - t0) / denom).clamp(0.0, 1.0));
        }
    }
    (n - 1, n - 1, 0.0)
}

/// Interpolate a state at the given elapsed time.
///
/// Fails with [`TrajectoryError::OutOfRange`] when `time` lies outside
/// `[0, total_duration]` (including any time for an empty trajectory).
pub fn sample_trajectory(trajectory: &Trajectory, time: f32) -> Result<TrajectoryState> {
    let states = trajectory.states();
    let duration = trajectory.total_duration();
    if states.is_empty() || !time.is_finite() || time < 0.0 || time > duration {
        return Err(TrajectoryError::OutOfRange { time, duration });
    }

    let (i0, i1, t) = find_bracket(states, time);
    if i0 == i1 {
        return Ok(states[i0]);
    }
    let a = &states[i0];
    let b = &states[i1];
    Ok(TrajectoryState {
        time,
        pose: Pose {
            x: lerp(a.pose.x, b.pose.x, t),
            y: lerp(a.pose.y, b.pose.y, t),
            heading: lerp_angle(a.pose.heading, b.pose.heading, t),
        },
        velocity: lerp(a.velocity, b.velocity, t),
        acceleration: lerp(a.acceleration, b.acceleration, t),
        curvature: lerp(a.curvature, b.curvature, t),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_angle_crosses_the_seam() {
        let a = PI - 0.1;
        let b = -PI + 0.1;
        let mid = lerp_angle(a, b, 0.5);
        // Midpoint should sit on the seam, not at zero.
        assert!((mid.abs() - PI).abs() < 1e-5, "mid {mid}");
    }

    #[test]
    fn lerp_angle_plain_case() {
        let mid = lerp_angle(0.0, 1.0, 0.25);
        assert!((mid - 0.25).abs() < 1e-6);
    }
}
