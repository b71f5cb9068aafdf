//! Trapezoidal velocity profile over arc-length samples.
//!
//! Two linear passes (forward from the start velocity, backward from the
//! end velocity) under v^2 = v0^2 + 2*a*ds, merged by taking the pointwise
//! minimum together with the velocity cap. The merge is the maximum-speed
//! profile that satisfies the acceleration and velocity limits and meets
//! both boundary velocities exactly.

use crate::config::TrajectoryConfig;
use crate::error::{Result, TrajectoryError};
use crate::parameterize::PathSample;

/// Below this speed an interval average counts as stationary.
const MIN_AVG_VELOCITY: f32 = 1e-6;

/// Allowed deviation when checking that the merged profile still meets the
/// requested boundary velocities.
const BOUNDARY_TOLERANCE: f32 = 1e-4;

/// Curvatures below this magnitude are treated as straight for the lateral
/// acceleration cap.
const MIN_CURVATURE: f32 = 1e-6;

/// Velocity, acceleration, and elapsed time for one path sample.
#[derive(Clone, Copy, Debug)]
pub struct ProfilePoint {
    pub velocity: f32,
    pub acceleration: f32,
    pub time: f32,
}

/// Solve the velocity profile for the given samples and limits.
///
/// The caller validates the config beforehand; this function assumes
/// positive limits. Boundary velocities are met exactly: a boundary the
/// acceleration limit cannot reach over this path length fails with
/// [`TrajectoryError::InvalidConfig`] rather than being silently clamped.
/// Fails with [`TrajectoryError::ZeroVelocitySegment`] if a nonzero
/// interval ends up bracketed by two zero velocities.
pub fn solve_profile(
    samples: &[PathSample],
    config: &TrajectoryConfig,
) -> Result<Vec<ProfilePoint>> {
    let n = samples.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let caps: Vec<f32> = samples.iter().map(|s| velocity_cap(s, config)).collect();
    let accel = config.max_acceleration;

    // Forward pass: accelerate from the start velocity.
    let mut velocity = vec![0.0f32; n];
    velocity[0] = config.start_velocity.min(caps[0]);
    for i in 0..n - 1 {
        let ds = samples[i + 1].arc_length - samples[i].arc_length;
        let reachable = (velocity[i] * velocity[i] + 2.0 * accel * ds).sqrt();
        velocity[i + 1] = reachable.min(caps[i + 1]);
    }

    // Backward pass: decelerate toward the end velocity, applied
    // symmetrically from the end.
    velocity[n - 1] = velocity[n - 1].min(config.end_velocity);
    for i in (0..n - 1).rev() {
        let ds = samples[i + 1].arc_length - samples[i].arc_length;
        let reachable = (velocity[i + 1] * velocity[i + 1] + 2.0 * accel * ds).sqrt();
        velocity[i] = velocity[i].min(reachable);
    }

    // Both boundary velocities must survive the merge exactly; if either
    // was clamped, the limits cannot realize it over this path length.
    if (velocity[0] - config.start_velocity).abs() > BOUNDARY_TOLERANCE {
        return Err(TrajectoryError::InvalidConfig(format!(
            "start_velocity {} is unreachable over this path (limits allow {})",
            config.start_velocity, velocity[0]
        )));
    }
    if (velocity[n - 1] - config.end_velocity).abs() > BOUNDARY_TOLERANCE {
        return Err(TrajectoryError::InvalidConfig(format!(
            "end_velocity {} is unreachable over this path (limits allow {})",
            config.end_velocity,
            velocity[n - 1]
        )));
    }

    // Time reconstruction: dt = ds / avg(v_i, v_{i+1}).
    let mut points = Vec::with_capacity(n);
    let mut time = 0.0f32;
    for i in 0..n {
        let acceleration = if i + 1 < n {
            let ds = samples[i + 1].arc_length - samples[i].arc_length;
            if ds > 0.0 {
                (velocity[i + 1] * velocity[i + 1] - velocity[i] * velocity[i]) / (2.0 * ds)
            } else {
                0.0
            }
        } else {
            0.0
        };
        points.push(ProfilePoint {
            velocity: velocity[i],
            acceleration,
            time,
        });
        if i + 1 < n {
            let ds = samples[i + 1].arc_length - samples[i].arc_length;
            let avg = 0.5 * (velocity[i] + velocity[i + 1]);
            if avg < MIN_AVG_VELOCITY {
                if ds > 0.0 {
                    return Err(TrajectoryError::ZeroVelocitySegment {
                        arc_length: samples[i].arc_length,
                    });
                }
            } else {
                time += ds / avg;
            }
        }
    }
    Ok(points)
}

/// Per-sample velocity cap: the global limit, plus the curvature-limited
/// bound sqrt(a_lat / |kappa|) when a lateral acceleration limit is set.
fn velocity_cap(sample: &PathSample, config: &TrajectoryConfig) -> f32 {
    let mut cap = config.max_velocity;
    if let Some(lat) = config.max_lateral_acceleration {
        let kappa = sample.curvature.abs();
        if kappa > MIN_CURVATURE {
            cap = cap.min((lat / kappa).sqrt());
        }
    }
    cap
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_samples(length: f32, step: f32) -> Vec<PathSample> {
        let n = (length / step) as usize;
        (0..=n)
            .map(|i| PathSample {
                arc_length: i as f32 * step,
                x: i as f32 * step,
                y: 0.0,
                heading: 0.0,
                curvature: 0.0,
            })
            .collect()
    }

    #[test]
    fn rest_to_rest_profile_is_trapezoidal() {
        let samples = straight_samples(10.0, 0.01);
        let config = TrajectoryConfig::new(1.0, 1.0);
        let profile = solve_profile(&samples, &config).unwrap();

        assert_eq!(profile.first().unwrap().velocity, 0.0);
        assert!(profile.last().unwrap().velocity < 1e-3);
        let peak = profile.iter().map(|p| p.velocity).fold(0.0f32, f32::max);
        assert!(peak <= 1.0 + 1e-4, "peak {peak}");
        // Long enough to cruise: the peak should reach the velocity limit.
        assert!(peak > 0.999, "peak {peak}");
        // Analytic duration for a 10-unit trapezoid at v=1, a=1 is 11s.
        let duration = profile.last().unwrap().time;
        assert!((duration - 11.0).abs() < 0.05, "duration {duration}");
    }

    #[test]
    fn short_segment_yields_triangular_profile() {
        let samples = straight_samples(0.5, 0.01);
        let config = TrajectoryConfig::new(2.0, 1.0);
        let profile = solve_profile(&samples, &config).unwrap();
        let peak = profile.iter().map(|p| p.velocity).fold(0.0f32, f32::max);
        // Peak of a rest-to-rest triangle over 0.5 units at a=1 is sqrt(0.5).
        assert!((peak - 0.5f32.sqrt()).abs() < 1e-2, "peak {peak}");
    }

    #[test]
    fn boundary_velocities_are_honored() {
        let samples = straight_samples(4.0, 0.01);
        let config = TrajectoryConfig {
            start_velocity: 0.5,
            end_velocity: 0.25,
            ..TrajectoryConfig::new(1.0, 1.0)
        };
        let profile = solve_profile(&samples, &config).unwrap();
        assert!((profile.first().unwrap().velocity - 0.5).abs() < 1e-5);
        assert!((profile.last().unwrap().velocity - 0.25).abs() < 1e-5);
    }

    #[test]
    fn unreachable_end_velocity_is_rejected() {
        // 0.1 units at a=1 from rest tops out near sqrt(0.2) ~ 0.45.
        let samples = straight_samples(0.1, 0.01);
        let config = TrajectoryConfig {
            end_velocity: 1.0,
            ..TrajectoryConfig::new(1.0, 1.0)
        };
        let err = solve_profile(&samples, &config).unwrap_err();
        assert!(
            matches!(err, TrajectoryError::InvalidConfig(_)),
            "unexpected error {err:?}"
        );
    }

    #[test]
    fn unreachable_start_velocity_is_rejected() {
        // Starting at full speed leaves no room to brake to rest in 0.1
        // units at a=1.
        let samples = straight_samples(0.1, 0.01);
        let config = TrajectoryConfig {
            start_velocity: 1.0,
            ..TrajectoryConfig::new(1.0, 1.0)
        };
        let err = solve_profile(&samples, &config).unwrap_err();
        assert!(
            matches!(err, TrajectoryError::InvalidConfig(_)),
            "unexpected error {err:?}"
        );
    }

    #[test]
    fn lateral_limit_caps_speed_in_bends() {
        let mut samples = straight_samples(2.0, 0.01);
        for s in samples.iter_mut() {
            s.curvature = 2.0;
        }
        let config = TrajectoryConfig {
            start_velocity: 0.0,
            end_velocity: 0.0,
            max_lateral_acceleration: Some(0.5),
            ..TrajectoryConfig::new(5.0, 5.0)
        };
        let profile = solve_profile(&samples, &config).unwrap();
        let bound = (0.5f32 / 2.0).sqrt();
        for p in &profile {
            assert!(
                p.velocity * p.velocity * 2.0 <= 0.5 + 1e-3,
                "lateral accel exceeded at v={}",
                p.velocity
            );
            assert!(p.velocity <= bound + 1e-4);
        }
    }
}
