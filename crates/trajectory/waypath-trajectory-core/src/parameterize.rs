//! Arc-length parameterization of a fitted path.
//!
//! The fitter's natural parameter advances unevenly in space, so the path
//! is first walked at a fine fixed parameter step to build a cumulative
//! arc-length table, then resampled at a fixed arc-length increment
//! ([`ARC_STEP`]). Paths shorter than a few increments are subdivided
//! instead, so the profile solver always sees interior samples between the
//! boundary states. Identical inputs always produce identical samples.
//!
//! Cusps are rejected during the fine walk: a vanishing first derivative,
//! or a tangent that reverses between consecutive fine points, fails with
//! [`TrajectoryError::SingularCurvature`].

use crate::error::{Result, TrajectoryError};
use crate::spline::{CurvePoint, SplinePath};

/// Fixed arc-length resampling step, in length units.
pub const ARC_STEP: f32 = 0.01;

/// Minimum number of resampling intervals for very short paths.
const MIN_INTERVALS: usize = 4;

/// Fine parameter subdivisions per segment for arc-length integration.
const INTEGRATION_STEPS: usize = 1000;

/// Below this squared magnitude the first derivative counts as a cusp.
const MIN_DERIVATIVE_SQ: f32 = 1e-10;

/// One resampled point along the path.
#[derive(Clone, Copy, Debug)]
pub struct PathSample {
    /// Distance traveled along the path from its start.
    pub arc_length: f32,
    pub x: f32,
    pub y: f32,
    /// Tangent direction in radians.
    pub heading: f32,
    /// kappa = (x'y'' - y'x'') / (x'^2 + y'^2)^1.5
    pub curvature: f32,
}

/// A fine table entry mapping cumulative arc length to (segment, parameter).
#[derive(Clone, Copy)]
struct ArcEntry {
    s: f32,
    segment: usize,
    t: f32,
}

/// Resample the path at a fixed arc-length increment.
///
/// Guarantees monotonically increasing arc length across samples and a
/// final sample exactly at the path end. Fails with
/// [`TrajectoryError::SingularCurvature`] if the first derivative vanishes
/// at a sample.
pub fn parameterize(path: &SplinePath) -> Result<Vec<PathSample>> {
    let table = arc_length_table(path)?;
    let total = table.last().map(|e| e.s).unwrap_or(0.0);
    // Paths shorter than a few increments are subdivided so the profile
    // solver still gets interior samples to build up speed across.
    let step = ARC_STEP.min(total / MIN_INTERVALS as f32);

    let mut samples = Vec::with_capacity((total / step) as usize + 2);
    let mut cursor = 0usize;
    let mut target = 0.0f32;
    loop {
        let last = target >= total;
        let s = if last { total } else { target };
        let (segment, t) = locate(&table, s, &mut cursor);
        samples.push(sample_at(path, segment, t, s)?);
        if last {
            break;
        }
        target += step;
        // Avoid a near-duplicate penultimate sample right before the end.
        if target > total - 0.5 * step {
            target = total;
        }
    }
    Ok(samples)
}

/// Walk every segment at a fine parameter step, accumulating chord lengths
/// and rejecting cusps (vanishing or reversing first derivative).
fn arc_length_table(path: &SplinePath) -> Result<Vec<ArcEntry>> {
    let segments = path.segments();
    let mut table = Vec::with_capacity(segments.len() * (INTEGRATION_STEPS + 1));
    let mut s = 0.0f32;
    let mut prev_deriv: Option<(f32, f32)> = None;
    for (si, seg) in segments.iter().enumerate() {
        let start = seg.point_at(0.0);
        check_tangent(&start, &mut prev_deriv, s)?;
        table.push(ArcEntry {
            s,
            segment: si,
            t: 0.0,
        });
        let mut prev = start;
        for k in 1..=INTEGRATION_STEPS {
            let t = k as f32 / INTEGRATION_STEPS as f32;
            let p = seg.point_at(t);
            let dx = p.x - prev.x;
            let dy = p.y - prev.y;
            s += (dx * dx + dy * dy).sqrt();
            check_tangent(&p, &mut prev_deriv, s)?;
            table.push(ArcEntry { s, segment: si, t });
            prev = p;
        }
    }
    Ok(table)
}

/// Reject a vanishing first derivative, or one that reverses against the
/// previous fine point (the tangent flips through zero at a cusp even when
/// no fine point lands exactly on it).
fn check_tangent(
    p: &CurvePoint,
    prev_deriv: &mut Option<(f32, f32)>,
    s: f32,
) -> Result<()> {
    if p.dx * p.dx + p.dy * p.dy < MIN_DERIVATIVE_SQ {
        return Err(TrajectoryError::SingularCurvature { arc_length: s });
    }
    if let Some((px, py)) = *prev_deriv {
        if px * p.dx + py * p.dy < 0.0 {
            return Err(TrajectoryError::SingularCurvature { arc_length: s });
        }
    }
    *prev_deriv = Some((p.dx, p.dy));
    Ok(())
}

/// Map a target arc length to (segment, parameter) by interpolating the
/// fine table. `cursor` advances monotonically across calls, so a full
/// resampling pass stays linear in the table size.
fn locate(table: &[ArcEntry], s: f32, cursor: &mut usize) -> (usize, f32) {
    while *cursor + 1 < table.len() && table[*cursor + 1].s < s {
        *cursor += 1;
    }
    let lo = table[*cursor];
    if *cursor + 1 >= table.len() {
        return (lo.segment, lo.t);
    }
    let hi = table[*cursor + 1];
    let span = hi.s - lo.s;
    // Zero-span brackets only occur at segment boundaries, where the next
    // segment restarts at t=0 with the same cumulative arc length.
    if span <= f32::EPSILON || hi.segment != lo.segment {
        return (hi.segment, hi.t);
    }
    let frac = ((s - lo.s) / span).clamp(0.0, 1.0);
    (lo.segment, lo.t + frac * (hi.t - lo.t))
}

/// Evaluate pose and curvature at a located point.
fn sample_at(path: &SplinePath, segment: usize, t: f32, s: f32) -> Result<PathSample> {
    let p = path.segments()[segment].point_at(t);
    let speed_sq = p.dx * p.dx + p.dy * p.dy;
    if speed_sq < MIN_DERIVATIVE_SQ {
        return Err(TrajectoryError::SingularCurvature { arc_length: s });
    }
    let heading = p.dy.atan2(p.dx);
    let curvature = (p.dx * p.ddy - p.dy * p.ddx) / speed_sq.powf(1.5);
    Ok(PathSample {
        arc_length: s,
        x: p.x,
        y: p.y,
        heading,
        curvature,
    })
}
