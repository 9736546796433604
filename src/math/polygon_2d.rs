use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if the segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(d / len)
}

/// Returns the left-pointing (+90°) normal of a direction vector.
#[must_use]
pub fn left_normal(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Returns the left normal of `v` scaled to `offset` length, or `None`
/// for a zero-length input.
#[must_use]
pub fn scaled_left_normal(v: &Vector2, offset: f64) -> Option<Vector2> {
    let mag = v.norm();
    if mag < TOLERANCE {
        return None;
    }
    Some(Vector2::new(-v.y, v.x) * (offset / mag))
}

/// Midpoint of two points.
#[must_use]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    Point2::new(a.x + (b.x - a.x) / 2.0, a.y + (b.y - a.y) / 2.0)
}

/// Interior angle in degrees at `vertex`, normalized to `[0, 360)`.
///
/// `prev` and `next` are the ring neighbors in traversal order
/// (`prev → vertex → next`). For counter-clockwise rings this is the
/// interior angle; reflex (concave) corners exceed 180°.
#[must_use]
pub fn interior_angle_deg(prev: &Point2, vertex: &Point2, next: &Point2) -> f64 {
    let da = vertex - next;
    let db = prev - vertex;
    let cross = da.x * db.y - da.y * db.x;
    let dot = da.x * db.x + da.y * db.y;
    let degrees = 180.0 + cross.atan2(dot).to_degrees();
    if degrees >= 360.0 {
        degrees - 360.0
    } else {
        degrees
    }
}
