use crate::math::polygon_2d::interior_angle_deg;
use crate::math::segment_2d::{trim_toward, TrimKeep};
use crate::math::Point2;

/// Explicit convex/concave classification of a ring vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerKind {
    /// Interior angle of at most 180°.
    Convex,
    /// Reflex interior angle (over 180°).
    Concave,
}

/// Interior angle and classification of one ring vertex.
#[derive(Debug, Clone, Copy)]
pub struct Corner {
    /// Interior angle in degrees, in `[0, 360)`.
    pub degrees: f64,
    pub kind: CornerKind,
}

/// The trimmed endpoint pair bounding the usable span of one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutCorner {
    pub start: Point2,
    pub end: Point2,
}

/// Classifies every vertex of an open ring, once per polygon.
///
/// The first and last vertices have only one adjoining edge in the
/// traversal and are left unclassified (`None`).
#[must_use]
pub fn classify_corners(points: &[Point2]) -> Vec<Option<Corner>> {
    let n = points.len();
    (0..n)
        .map(|i| {
            if i == 0 || i + 1 >= n {
                return None;
            }
            let degrees = interior_angle_deg(&points[i - 1], &points[i], &points[i + 1]);
            let kind = if degrees <= 180.0 {
                CornerKind::Convex
            } else {
                CornerKind::Concave
            };
            Some(Corner { degrees, kind })
        })
        .collect()
}

/// Resolves the usable span of every edge by the two-step closest-point trim.
///
/// For edge `(a, b)` with offset counterparts `(c, d)`: the start is trimmed
/// toward `c`'s projection onto the edge, then the end toward `d`'s
/// projection onto the already-trimmed span. Off-segment projections leave
/// that end untouched, which lets adjoining edges hand off cleanly at shared
/// corners regardless of local convexity. A missing offset corner skips its
/// trim step.
#[must_use]
pub fn resolve_cut_corners(
    points: &[Point2],
    offset_points: &[Option<Point2>],
) -> Vec<CutCorner> {
    let mut cuts = Vec::with_capacity(points.len().saturating_sub(1));
    for i in 0..points.len().saturating_sub(1) {
        let (mut start, mut end) = (points[i], points[i + 1]);
        if let Some(c) = &offset_points[i] {
            (start, end) = trim_toward(&start, &end, c, TrimKeep::Start);
        }
        if let Some(d) = &offset_points[i + 1] {
            (start, end) = trim_toward(&start, &end, d, TrimKeep::End);
        }
        cuts.push(CutCorner { start, end });
    }
    cuts
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::coursing::offset::trace_offset;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]
    }

    #[test]
    fn square_interior_vertices_are_convex_right_angles() {
        // Ring closed by repeating the first vertex: vertices 1..=3 classify.
        let mut pts = square();
        pts.push(pts[0]);
        let corners = classify_corners(&pts);
        assert!(corners[0].is_none());
        assert!(corners[4].is_none());
        for corner in corners.iter().skip(1).take(3) {
            let c = corner.unwrap();
            assert_eq!(c.kind, CornerKind::Convex);
            assert!((c.degrees - 90.0).abs() < 1e-9, "degrees={}", c.degrees);
        }
    }

    #[test]
    fn notch_vertex_is_concave() {
        // M-shaped outline, CCW: the two notch vertices are reflex.
        let pts = vec![
            p(12.0, 0.0),
            p(12.0, 10.0),
            p(8.0, 6.0),
            p(4.0, 6.0),
            p(0.0, 10.0),
            p(0.0, 0.0),
        ];
        let corners = classify_corners(&pts);
        assert_eq!(corners[2].unwrap().kind, CornerKind::Concave);
        assert_eq!(corners[3].unwrap().kind, CornerKind::Concave);
        assert_eq!(corners[1].unwrap().kind, CornerKind::Convex);
    }

    #[test]
    fn square_edges_trim_to_offset_projections() {
        let pts = square();
        let offset = trace_offset(&pts, 1.0);
        let cuts = resolve_cut_corners(&pts, &offset);

        // Edge (0,0)→(10,0) with offset corners (1,1) and (9,1): the span
        // trims to (1,0)→(9,0).
        assert!((cuts[0].start.x - 1.0).abs() < TOLERANCE, "{:?}", cuts[0]);
        assert!(cuts[0].start.y.abs() < TOLERANCE);
        assert!((cuts[0].end.x - 9.0).abs() < TOLERANCE);
        assert!(cuts[0].end.y.abs() < TOLERANCE);
    }

    #[test]
    fn missing_offset_corner_skips_trim() {
        let pts = square();
        let mut offset = trace_offset(&pts, 1.0);
        offset[0] = None;
        let cuts = resolve_cut_corners(&pts, &offset);
        // Start of edge 0 stays at the raw vertex; end still trims.
        assert!(cuts[0].start.x.abs() < TOLERANCE);
        assert!((cuts[0].end.x - 9.0).abs() < TOLERANCE);
    }

    #[test]
    fn acute_corner_trims_deep_into_edge() {
        // Right isoceles triangle: the 45° corner's offset point projects far
        // from the vertex, shortening both adjoining spans.
        let pts = vec![p(0.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)];
        let offset = trace_offset(&pts, 1.0);
        let cuts = resolve_cut_corners(&pts, &offset);
        let vertex = p(10.0, 10.0);
        let gap = (cuts[0].end - vertex).norm();
        assert!(gap > 1.0, "expected a deep trim at the acute corner, gap={gap}");
    }
}
