use super::{Point2, TOLERANCE};

/// 2D line/line intersection via Bourke's parametric formula.
///
/// The first line passes through `p1` and `p2`, the second through `p3`
/// and `p4`. Returns `None` when either line is degenerate (coincident
/// endpoints) or the lines are parallel (zero denominator). When
/// `enforce_segments` is set, intersections whose parameter on either
/// line falls outside `[0, 1]` are rejected as well.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    p4: &Point2,
    enforce_segments: bool,
) -> Option<Point2> {
    if (p2 - p1).norm_squared() < TOLERANCE || (p4 - p3).norm_squared() < TOLERANCE {
        return None;
    }

    let denominator = (p4.y - p3.y) * (p2.x - p1.x) - (p4.x - p3.x) * (p2.y - p1.y);
    if denominator.abs() < TOLERANCE {
        return None;
    }

    let ua = ((p4.x - p3.x) * (p1.y - p3.y) - (p4.y - p3.y) * (p1.x - p3.x)) / denominator;
    let ub = ((p2.x - p1.x) * (p1.y - p3.y) - (p2.y - p1.y) * (p1.x - p3.x)) / denominator;

    if enforce_segments && (ua < 0.0 || ua > 1.0 || ub < 0.0 || ub > 1.0) {
        return None;
    }

    Some(Point2::new(
        p1.x + ua * (p2.x - p1.x),
        p1.y + ua * (p2.y - p1.y),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn perpendicular_crossing() {
        let hit = line_line_intersect_2d(
            &p(0.0, 0.0),
            &p(2.0, 0.0),
            &p(1.0, -1.0),
            &p(1.0, 1.0),
            false,
        )
        .unwrap();
        assert!((hit.x - 1.0).abs() < TOLERANCE);
        assert!(hit.y.abs() < TOLERANCE);
    }

    #[test]
    fn parallel_returns_none() {
        let hit = line_line_intersect_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(0.0, 1.0),
            &p(1.0, 1.0),
            false,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn degenerate_line_returns_none() {
        let hit = line_line_intersect_2d(
            &p(1.0, 1.0),
            &p(1.0, 1.0),
            &p(0.0, 0.0),
            &p(2.0, 0.0),
            false,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn unbounded_hit_beyond_segment() {
        // Segments do not touch, but their carrier lines cross at (4, 0).
        let hit = line_line_intersect_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(4.0, -1.0),
            &p(4.0, 1.0),
            false,
        )
        .unwrap();
        assert!((hit.x - 4.0).abs() < TOLERANCE);
        assert!(hit.y.abs() < TOLERANCE);
    }

    #[test]
    fn enforced_rejects_out_of_range() {
        let hit = line_line_intersect_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(4.0, -1.0),
            &p(4.0, 1.0),
            true,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn enforced_accepts_in_range() {
        let hit = line_line_intersect_2d(
            &p(0.0, 0.0),
            &p(2.0, 2.0),
            &p(0.0, 2.0),
            &p(2.0, 0.0),
            true,
        )
        .unwrap();
        assert!((hit.x - 1.0).abs() < TOLERANCE);
        assert!((hit.y - 1.0).abs() < TOLERANCE);
    }
}
