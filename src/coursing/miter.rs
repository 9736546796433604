use tracing::debug;

use crate::brick::BrickInfo;
use crate::coursing::corners::CutCorner;
use crate::coursing::realize::{lay_on_line, MortarSlice};
use crate::math::intersect_2d::line_line_intersect_2d;
use crate::math::polygon_2d::{scaled_left_normal, segment_direction};
use crate::math::{Point2, Vector3};

/// Which adjoining edge of an acute corner is being re-cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiterSide {
    /// The edge leaving the vertex, toward the next ring vertex.
    Leading,
    /// The edge arriving at the vertex, from the previous ring vertex.
    Trailing,
}

/// Re-cuts the coursing joints adjoining one acute corner.
///
/// Walking back from the trimmed cut corner along `side`, candidate joints
/// at [`BrickInfo::joint_spacing`] intervals are intersected against the
/// diagonal from the ring vertex to its offset counterpart. Each hit
/// becomes a foreshortened mortar slice running from the candidate point to
/// the diagonal; candidates that miss the diagonal are dropped without
/// blocking the rest.
///
/// Returns the miter length of the last hit — the distance from the offset
/// corner to the intersection — or `0.0` when no candidate intersects.
/// The caller sizes the corner's own diagonal joint from the maximum over
/// both sides.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub(crate) fn recut_corner(
    vertex_index: usize,
    side: MiterSide,
    points: &[Point2],
    offset_points: &[Option<Point2>],
    cut_corners: &[CutCorner],
    brick: &BrickInfo,
    slices: &mut Vec<MortarSlice>,
) -> f64 {
    let i = vertex_index;
    let vertex = points[i];
    let Some(diagonal_start) = offset_points[i] else {
        debug!(vertex = i, "no offset corner, skipping miter");
        return 0.0;
    };

    let toward = match side {
        MiterSide::Leading => points[i + 1],
        MiterSide::Trailing => points[i - 1],
    };
    let Ok(dir) = segment_direction(&vertex, &toward) else {
        debug!(vertex = i, "zero-length adjoining edge, skipping miter");
        return 0.0;
    };
    let Some(perp) = scaled_left_normal(&(toward - vertex), brick.brick_width()) else {
        return 0.0;
    };

    let edge_len_a = (cut_corners[i - 1].end - vertex).norm();
    let edge_len_b = (cut_corners[i].start - vertex).norm();
    let iterations = ((edge_len_a.min(edge_len_b) / brick.brick_length()).ceil() as usize)
        .saturating_sub(1);

    // The leading side anchors at this edge's trimmed start and is inset by
    // a joint; the trailing side anchors at the previous edge's trimmed end
    // and is inset by a full wall depth.
    let (anchor, heading_base, inset) = match side {
        MiterSide::Leading => (cut_corners[i].start, cut_corners[i].start, brick.mortar_thickness()),
        MiterSide::Trailing => (cut_corners[i - 1].end, vertex, brick.brick_width()),
    };

    let mut miter_length = 0.0;
    for j in 1..=iterations {
        let cut_distance = j as f64 * brick.joint_spacing() - inset;
        let p1 = anchor - dir * cut_distance;
        let shifted = p1 + perp;

        let Some(hit) =
            line_line_intersect_2d(&vertex, &diagonal_start, &shifted, &p1, false)
        else {
            debug!(vertex = i, candidate = j, "miter candidate misses the diagonal");
            continue;
        };

        miter_length = (diagonal_start - hit).norm();
        slices.push(lay_on_line(
            &p1,
            &heading_base,
            Vector3::new(brick.brick_height(), (p1 - hit).norm(), brick.mortar_thickness()),
        ));
    }

    miter_length
}
