use tracing::debug;

use crate::math::intersect_2d::line_line_intersect_2d;
use crate::math::polygon_2d::scaled_left_normal;
use crate::math::Point2;

/// Traces the offset of a closed ring, one offset vertex per input vertex.
///
/// Each offset vertex is the unbounded intersection of the two edge-lines
/// adjacent to the source vertex, each shifted by the left normal scaled to
/// `offset`. Counter-clockwise rings therefore offset inward. Unbounded
/// intersection is deliberate: the correct offset corner for sharp or wide
/// angles legitimately lies outside either source segment.
///
/// Parallel adjacent edges (a collinear vertex) have no offset corner and
/// yield `None` for that vertex.
#[must_use]
pub fn trace_offset(points: &[Point2], offset: f64) -> Vec<Option<Point2>> {
    let n = points.len();
    let mut result = Vec::with_capacity(n);

    for j in 0..n {
        let i = (j + n - 1) % n;
        let k = (j + 1) % n;

        let v1 = points[j] - points[i];
        let v2 = points[k] - points[j];

        let corner = match (
            scaled_left_normal(&v1, offset),
            scaled_left_normal(&v2, offset),
        ) {
            (Some(n1), Some(n2)) => line_line_intersect_2d(
                &(points[i] + n1),
                &(points[j] + n1),
                &(points[j] + n2),
                &(points[k] + n2),
                false,
            ),
            _ => None,
        };

        if corner.is_none() {
            debug!(vertex = j, "no valid offset corner");
        }
        result.push(corner);
    }

    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::segment_2d::point_to_segment_dist;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn ccw_square_offsets_inward() {
        let pts = vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)];
        let offset = trace_offset(&pts, 1.0);
        let expected = [p(1.0, 1.0), p(9.0, 1.0), p(9.0, 9.0), p(1.0, 9.0)];
        for (got, want) in offset.iter().zip(expected.iter()) {
            let got = got.unwrap();
            assert!((got.x - want.x).abs() < TOLERANCE, "got={got:?}");
            assert!((got.y - want.y).abs() < TOLERANCE, "got={got:?}");
        }
    }

    #[test]
    fn offset_edges_parallel_at_exact_distance() {
        // Regular hexagon, CCW, radius 5. Every offset vertex must sit at
        // perpendicular distance exactly `d` from both adjacent source edges.
        let d = 0.75;
        let n = 6;
        let pts: Vec<Point2> = (0..n)
            .map(|i| {
                let a = f64::from(i) * std::f64::consts::TAU / f64::from(n);
                p(5.0 * a.cos(), 5.0 * a.sin())
            })
            .collect();
        let offset = trace_offset(&pts, d);

        for j in 0..pts.len() {
            let c = offset[j].unwrap();
            let i = (j + pts.len() - 1) % pts.len();
            let k = (j + 1) % pts.len();
            let d_prev = point_to_segment_dist(&c, &pts[i], &pts[j]);
            let d_next = point_to_segment_dist(&c, &pts[j], &pts[k]);
            assert!((d_prev - d).abs() < 1e-9, "vertex {j}: d_prev={d_prev}");
            assert!((d_next - d).abs() < 1e-9, "vertex {j}: d_next={d_next}");
        }
    }

    #[test]
    fn collinear_vertex_yields_none() {
        // Middle vertex lies on a straight run: adjacent offset lines are
        // parallel and cannot intersect.
        let pts = vec![
            p(0.0, 0.0),
            p(5.0, 0.0),
            p(10.0, 0.0),
            p(10.0, 10.0),
            p(0.0, 10.0),
        ];
        let offset = trace_offset(&pts, 1.0);
        assert!(offset[1].is_none());
        assert!(offset[0].is_some());
        assert!(offset[3].is_some());
    }

    #[test]
    fn acute_corner_lies_beyond_segments() {
        // 45° corner of the right isoceles triangle: the offset corner is
        // pulled far from the vertex, well inside the triangle.
        let pts = vec![p(0.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)];
        let offset = trace_offset(&pts, 1.0);
        let c = offset[1].unwrap();
        let vertex = p(10.0, 10.0);
        assert!((c - vertex).norm() > 2.0, "offset corner too close: {c:?}");
        // Still at distance 1 from both adjoining edge lines.
        let d_prev = point_to_segment_dist(&c, &pts[0], &pts[1]);
        assert!((d_prev - 1.0).abs() < 1e-9, "d_prev={d_prev}");
    }
}
