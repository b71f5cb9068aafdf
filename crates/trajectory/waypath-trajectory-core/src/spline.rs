//! Path fitting: one quintic Hermite segment per consecutive waypoint pair.
//!
//! Model:
//! - Tangent direction at a waypoint comes from its explicit heading when
//!   present; otherwise it is inferred by Catmull-Rom chord averaging
//!   (endpoints use the chord to their single neighbor).
//! - Tangent magnitude per segment is 1.2x the segment chord length.
//! - Second-derivative boundary vectors are zero at every waypoint, so
//!   curvature is continuous across interior joins.

use crate::data::Waypoint;
use crate::error::{Result, TrajectoryError};

/// Control-vector scaling relative to the segment chord.
const TANGENT_CHORD_SCALE: f32 = 1.2;

/// Below this squared distance two waypoints are considered coincident.
const MIN_CHORD_SQ: f32 = 1e-12;

/// Position and first/second parameter derivatives at one curve point.
#[derive(Clone, Copy, Debug)]
pub struct CurvePoint {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub ddx: f32,
    pub ddy: f32,
}

/// One quintic Hermite segment over t in [0, 1], defined by endpoint
/// positions and tangent vectors (second derivatives are zero at both ends).
#[derive(Clone, Copy, Debug)]
pub struct HermiteSegment {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    mx0: f32,
    my0: f32,
    mx1: f32,
    my1: f32,
}

// Quintic Hermite basis restricted to zero second-derivative boundaries:
// only the position and tangent terms remain.
#[inline]
fn h_pos(t: f32) -> (f32, f32, f32, f32) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    (
        1.0 - 10.0 * t3 + 15.0 * t4 - 6.0 * t5,
        t - 6.0 * t3 + 8.0 * t4 - 3.0 * t5,
        10.0 * t3 - 15.0 * t4 + 6.0 * t5,
        -4.0 * t3 + 7.0 * t4 - 3.0 * t5,
    )
}

#[inline]
fn h_vel(t: f32) -> (f32, f32, f32, f32) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    (
        -30.0 * t2 + 60.0 * t3 - 30.0 * t4,
        1.0 - 18.0 * t2 + 32.0 * t3 - 15.0 * t4,
        30.0 * t2 - 60.0 * t3 + 30.0 * t4,
        -12.0 * t2 + 28.0 * t3 - 15.0 * t4,
    )
}

#[inline]
fn h_acc(t: f32) -> (f32, f32, f32, f32) {
    let t2 = t * t;
    let t3 = t2 * t;
    (
        -60.0 * t + 180.0 * t2 - 120.0 * t3,
        -36.0 * t + 96.0 * t2 - 60.0 * t3,
        60.0 * t - 180.0 * t2 + 120.0 * t3,
        -24.0 * t + 84.0 * t2 - 60.0 * t3,
    )
}

impl HermiteSegment {
    /// Evaluate position and first/second derivatives at parameter t.
    pub fn point_at(&self, t: f32) -> CurvePoint {
        let (p0, m0, p1, m1) = h_pos(t);
        let (dp0, dm0, dp1, dm1) = h_vel(t);
        let (ap0, am0, ap1, am1) = h_acc(t);
        CurvePoint {
            x: p0 * self.x0 + m0 * self.mx0 + p1 * self.x1 + m1 * self.mx1,
            y: p0 * self.y0 + m0 * self.my0 + p1 * self.y1 + m1 * self.my1,
            dx: dp0 * self.x0 + dm0 * self.mx0 + dp1 * self.x1 + dm1 * self.mx1,
            dy: dp0 * self.y0 + dm0 * self.my0 + dp1 * self.y1 + dm1 * self.my1,
            ddx: ap0 * self.x0 + am0 * self.mx0 + ap1 * self.x1 + am1 * self.mx1,
            ddy: ap0 * self.y0 + am0 * self.my0 + ap1 * self.y1 + am1 * self.my1,
        }
    }
}

/// A continuous, twice-differentiable path through the waypoints in order.
#[derive(Clone, Debug)]
pub struct SplinePath {
    segments: Vec<HermiteSegment>,
}

impl SplinePath {
    /// Fit a path through the waypoints.
    ///
    /// Fails with [`TrajectoryError::InsufficientWaypoints`] for fewer than
    /// two waypoints and [`TrajectoryError::DegenerateSegment`] when two
    /// consecutive waypoints coincide.
    pub fn fit(waypoints: &[Waypoint]) -> Result<SplinePath> {
        let n = waypoints.len();
        if n < 2 {
            return Err(TrajectoryError::InsufficientWaypoints(n));
        }
        for (i, pair) in waypoints.windows(2).enumerate() {
            let dx = pair[1].x - pair[0].x;
            let dy = pair[1].y - pair[0].y;
            if dx * dx + dy * dy < MIN_CHORD_SQ {
                return Err(TrajectoryError::DegenerateSegment { index: i });
            }
        }

        let directions = tangent_directions(waypoints);
        let mut segments = Vec::with_capacity(n - 1);
        for i in 0..n - 1 {
            let w0 = &waypoints[i];
            let w1 = &waypoints[i + 1];
            let scale = TANGENT_CHORD_SCALE * w0.distance(w1);
            let (ux0, uy0) = directions[i];
            let (ux1, uy1) = directions[i + 1];
            segments.push(HermiteSegment {
                x0: w0.x,
                y0: w0.y,
                x1: w1.x,
                y1: w1.y,
                mx0: ux0 * scale,
                my0: uy0 * scale,
                mx1: ux1 * scale,
                my1: uy1 * scale,
            });
        }
        Ok(SplinePath { segments })
    }

    /// Fitted segments, one per waypoint pair.
    pub fn segments(&self) -> &[HermiteSegment] {
        &self.segments
    }
}

/// Unit tangent direction per waypoint: explicit heading where present,
/// Catmull-Rom chord averaging otherwise.
fn tangent_directions(waypoints: &[Waypoint]) -> Vec<(f32, f32)> {
    let n = waypoints.len();
    let mut dirs = Vec::with_capacity(n);
    for i in 0..n {
        if let Some(h) = waypoints[i].heading {
            dirs.push((h.cos(), h.sin()));
            continue;
        }
        let (dx, dy) = if i == 0 {
            (waypoints[1].x - waypoints[0].x, waypoints[1].y - waypoints[0].y)
        } else if i == n - 1 {
            (
                waypoints[n - 1].x - waypoints[n - 2].x,
                waypoints[n - 1].y - waypoints[n - 2].y,
            )
        } else {
            (
                waypoints[i + 1].x - waypoints[i - 1].x,
                waypoints[i + 1].y - waypoints[i - 1].y,
            )
        };
        let len_sq = dx * dx + dy * dy;
        if len_sq < MIN_CHORD_SQ {
            // The two neighbors coincide (path doubles back); fall back to
            // the outgoing chord, which is non-degenerate by the fit checks.
            let (cx, cy) = (waypoints[i + 1].x - waypoints[i].x, waypoints[i + 1].y - waypoints[i].y);
            let clen = (cx * cx + cy * cy).sqrt();
            dirs.push((cx / clen, cy / clen));
        } else {
            let len = len_sq.sqrt();
            dirs.push((dx / len, dy / len));
        }
    }
    dirs
}
