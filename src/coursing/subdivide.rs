use crate::brick::BrickInfo;
use crate::math::polygon_2d::{midpoint, segment_direction};
use crate::math::Point2;

/// Emits the ordered vertical-joint cut points across one trimmed edge span.
///
/// Returns an empty list when the span is not longer than one brick.
/// Otherwise points run from `start` through the midpoint to `end` at
/// [`BrickInfo::joint_spacing`] intervals, symmetric about the midpoint;
/// both span endpoints are the first and last entries.
///
/// Keystone handling: when the half-span remainder exceeds half a brick an
/// explicit midpoint cut is inserted, otherwise the last step on each half
/// is pulled to one brick-width from the midpoint so the two halves meet at
/// a consistent brick boundary instead of an arbitrary fractional brick.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn cut_points(start: &Point2, end: &Point2, brick: &BrickInfo) -> Vec<Point2> {
    let length = (end - start).norm();
    if length <= brick.brick_length() {
        return Vec::new();
    }
    let Ok(dir) = segment_direction(start, end) else {
        return Vec::new();
    };

    let halfway = length / 2.0;
    let mid = midpoint(start, end);
    let steps = (halfway / brick.brick_length()).floor() as usize;
    let keystone = brick.brick_width();
    let remainder = halfway - steps as f64 * brick.brick_length();
    let add_midpoint = remainder > brick.brick_length() / 2.0;
    let spacing = brick.joint_spacing();

    let mut result = Vec::with_capacity(2 * steps + 3);

    for i in 0..=steps {
        if i == steps && !add_midpoint {
            result.push(mid - dir * keystone);
        } else {
            result.push(start + dir * (i as f64 * spacing));
        }
    }

    if add_midpoint {
        result.push(mid);
    }

    for i in (0..=steps).rev() {
        if i == steps && !add_midpoint {
            result.push(mid + dir * keystone);
        } else {
            result.push(end - dir * (i as f64 * spacing));
        }
    }

    result
}

/// Midpoints of consecutive cut points: the joint set used by the
/// alternate course parity ("running bond" offset).
#[must_use]
pub fn trace_between(points: &[Point2]) -> Vec<Point2> {
    points
        .windows(2)
        .map(|w| midpoint(&w[0], &w[1]))
        .collect()
}
