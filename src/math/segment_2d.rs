use super::{Point2, TRIM_EPS};

/// Which end of a trimmed segment the projected point becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimKeep {
    /// The projected point replaces the segment start.
    Start,
    /// The projected point replaces the segment end.
    End,
}

/// Projects `point` onto the segment `(a, b)` and trims one end toward
/// the projection.
///
/// When the projection parameter falls outside `(ε, 1]` the closest point
/// lies off the segment and the segment is returned unchanged. Zero-length
/// segments are likewise returned unchanged.
#[must_use]
pub fn trim_toward(a: &Point2, b: &Point2, point: &Point2, keep: TrimKeep) -> (Point2, Point2) {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq < TRIM_EPS * TRIM_EPS {
        return (*a, *b);
    }

    let u = ((point.x - a.x) * d.x + (point.y - a.y) * d.y) / len_sq;
    if u < TRIM_EPS || u > 1.0 {
        return (*a, *b);
    }

    let projected = Point2::new(a.x + u * d.x, a.y + u * d.y);
    match keep {
        TrimKeep::Start => (projected, *b),
        TrimKeep::End => (*a, projected),
    }
}

/// Returns the minimum distance from `point` to the segment `(a, b)`.
#[must_use]
pub fn point_to_segment_dist(point: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (point - a).norm();
    }

    let u = (((point.x - a.x) * d.x + (point.y - a.y) * d.y) / len_sq).clamp(0.0, 1.0);
    let closest = Point2::new(a.x + u * d.x, a.y + u * d.y);
    (point - closest).norm()
}
