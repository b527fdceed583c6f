//! Ray vs. segment intersection
//!
//! The ray is described the way the canvas page always described it: by its
//! origin plus a second point one unit further along the heading. The hit is
//! the classic two-line determinant solution, then filtered twice:
//!
//! - the point must sit inside the segment's bounding box, with every bound
//!   relaxed by 0.1% of the candidate coordinate to absorb rounding at vertices
//! - the point must be ahead of the origin, tested separately on each axis
//!
//! The per-axis test is a simplification of half-line containment. A heading
//! component of exactly zero makes its axis pass unconditionally (`>= 0`), and a
//! component that is merely tiny compares against a coordinate delta that is
//! mostly rounding noise. Near-axis-aligned rays can therefore keep or drop a
//! hit on noise alone. Recorded charts depend on this exact behavior; keep it.

use crate::{Point, direction_from_degrees};

/// Relative slack applied to the segment bounding box
pub const BOUND_TOLERANCE: f64 = 0.001;

/// Why a segment produced no hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Ray and segment lines are parallel or collinear (determinant is exactly zero)
    Parallel,
    /// Lines cross outside the tolerant segment bounding box
    OutsideSegment,
    /// Lines cross behind the origin on at least one axis
    BehindOrigin,
}

/// Intersect the ray from `origin` at `angle_degrees` with segment `a`-`b`
///
/// Returns `None` for every kind of miss. Pure: identical inputs give
/// bit-identical outputs.
#[inline]
pub fn intersect(origin: Point, angle_degrees: f64, a: Point, b: Point) -> Option<Point> {
    intersect_with_reason(origin, angle_degrees, a, b).ok()
}

/// Same as [`intersect`], reporting which check rejected the segment
pub fn intersect_with_reason(
    origin: Point,
    angle_degrees: f64,
    a: Point,
    b: Point,
) -> Result<Point, Rejection> {
    let ahead = origin + direction_from_degrees(angle_degrees);

    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dcx = ahead.x - origin.x;
    let dcy = ahead.y - origin.y;

    let det = dy * dcx - dx * dcy;
    if det == 0.0 {
        return Err(Rejection::Parallel);
    }

    let dc = a.y * b.x - a.x * b.y;
    let dcc = origin.y * ahead.x - origin.x * ahead.y;

    let x = (dcc * dx - dc * dcx) / det;
    let y = (dcc * dy - dc * dcy) / det;

    if !within_tolerant_bounds(x, a.x, b.x) || !within_tolerant_bounds(y, a.y, b.y) {
        return Err(Rejection::OutsideSegment);
    }

    if dcx * (x - origin.x) >= 0.0 && dcy * (y - origin.y) >= 0.0 {
        Ok(Point::new(x, y))
    } else {
        Err(Rejection::BehindOrigin)
    }
}

/// Scaled-candidate bound test on one axis
#[inline]
fn within_tolerant_bounds(value: f64, p: f64, q: f64) -> bool {
    let lo = p.min(q);
    let hi = p.max(q);
    !(lo > value * (1.0 + BOUND_TOLERANCE) || value * (1.0 - BOUND_TOLERANCE) > hi)
}
