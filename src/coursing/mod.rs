mod corners;
mod miter;
mod offset;
mod realize;
mod subdivide;

use tracing::{debug, trace};

pub use corners::{classify_corners, resolve_cut_corners, Corner, CornerKind, CutCorner};
pub use offset::trace_offset;
pub use realize::{lay_on_line, MortarSlice};
pub use subdivide::{cut_points, trace_between};

use crate::brick::BrickInfo;
use crate::error::{OperationError, Result};
use crate::kernel::CsgKernel;
use crate::math::polygon_2d::{left_normal, segment_direction};
use crate::math::{Point2, Vector3, TOLERANCE};
use miter::MiterSide;

/// Builds the brick-coursing cuts for one polygon wall.
///
/// Edges are coursed between consecutive supplied vertices; the closing
/// edge from the last vertex back to the first is never added implicitly
/// (callers repeat the first vertex to course it). The wall depth equals
/// the brick width, and the footprint must wind counter-clockwise for the
/// offset ring to land inside.
#[derive(Debug)]
pub struct BrickWall {
    points: Vec<Point2>,
    winding: bool,
    brick: BrickInfo,
    diagonal_compensation: f64,
}

impl BrickWall {
    /// Creates a new wall operation for one course.
    ///
    /// `winding` is the course-parity flag: flipping it swaps which edges
    /// use the raw cut points and which use the between-points sequence,
    /// producing the running-bond offset between stacked courses.
    #[must_use]
    pub fn new(points: Vec<Point2>, winding: bool, brick: BrickInfo) -> Self {
        let diagonal_compensation = brick.mortar_thickness();
        Self {
            points,
            winding,
            brick,
            diagonal_compensation,
        }
    }

    /// Overrides the extra length added to the corner diagonal joint when
    /// an acute corner's two adjoining spans are unequal. Defaults to the
    /// brick's mortar thickness; pass `0.0` to disable the compensation.
    #[must_use]
    pub fn with_diagonal_compensation(mut self, compensation: f64) -> Self {
        self.diagonal_compensation = compensation;
        self
    }

    /// Runs the pure-geometry pipeline, returning every mortar slice to be
    /// subtracted from the wall prism.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if fewer than 3 vertices
    /// are supplied. Degenerate corners and short edges are skipped
    /// silently, never reported as errors.
    pub fn mortar_slices(&self) -> Result<Vec<MortarSlice>> {
        Ok(self.compute()?.1)
    }

    /// Builds the final wall solid: the extruded boundary/offset ring with
    /// every mortar slice subtracted.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] on fewer than 3 vertices,
    /// or [`OperationError::Failed`] if the offset ring collapses to fewer
    /// than 3 usable corners.
    pub fn execute<K: CsgKernel>(&self, kernel: &mut K) -> Result<K::Solid> {
        let (offset_points, slices) = self.compute()?;

        let hole: Vec<Point2> = offset_points.iter().rev().filter_map(|p| *p).collect();
        if hole.len() < 3 {
            return Err(OperationError::Failed(
                "offset ring collapsed: not enough valid offset corners".to_owned(),
            )
            .into());
        }

        let mut solid = kernel.extrude_polygon(&self.points, &[hole], self.brick.brick_height());
        for slice in &slices {
            let cut = slice.realize(kernel);
            solid = kernel.subtract(solid, cut);
        }
        Ok(solid)
    }

    /// Debug mode: realizes the raw mortar slices without subtracting them
    /// from anything, for inspecting the cut layout.
    ///
    /// # Errors
    ///
    /// Same conditions as [`BrickWall::mortar_slices`].
    pub fn raw_slices<K: CsgKernel>(&self, kernel: &mut K) -> Result<Vec<K::Solid>> {
        let slices = self.mortar_slices()?;
        Ok(slices.iter().map(|s| s.realize(kernel)).collect())
    }

    fn compute(&self) -> Result<(Vec<Option<Point2>>, Vec<MortarSlice>)> {
        if self.points.len() < 3 {
            return Err(OperationError::InvalidInput(
                "at least 3 vertices are required for a wall footprint".to_owned(),
            )
            .into());
        }

        let offset_points = trace_offset(&self.points, self.brick.brick_width());
        let cut_corners = resolve_cut_corners(&self.points, &offset_points);
        let corners = classify_corners(&self.points);

        let mut slices = Vec::new();
        self.recut_acute_corners(&corners, &offset_points, &cut_corners, &mut slices);
        self.course_edges(&cut_corners, &mut slices);

        Ok((offset_points, slices))
    }

    /// Emits miter joints at every interior vertex whose interior angle is
    /// strictly under 90°.
    fn recut_acute_corners(
        &self,
        corners: &[Option<Corner>],
        offset_points: &[Option<Point2>],
        cut_corners: &[CutCorner],
        slices: &mut Vec<MortarSlice>,
    ) {
        for (i, corner) in corners.iter().enumerate() {
            let Some(corner) = corner else { continue };
            // Reflex corners never need a miter; convex ones only below 90°.
            if corner.kind == CornerKind::Concave || corner.degrees >= 90.0 {
                continue;
            }
            let Some(diagonal_start) = offset_points[i] else {
                debug!(vertex = i, "acute corner without offset point, skipping");
                continue;
            };

            let trailing = miter::recut_corner(
                i,
                MiterSide::Trailing,
                &self.points,
                offset_points,
                cut_corners,
                &self.brick,
                slices,
            );
            let leading = miter::recut_corner(
                i,
                MiterSide::Leading,
                &self.points,
                offset_points,
                cut_corners,
                &self.brick,
                slices,
            );

            let mut miter_length = trailing.max(leading);
            if miter_length <= 0.0 {
                continue;
            }

            // Unequal adjoining spans leave the corner joint one joint
            // short on the longer side; pad it by the configured amount.
            let edge_len_a = (cut_corners[i - 1].end - self.points[i]).norm();
            let edge_len_b = (cut_corners[i].start - self.points[i]).norm();
            if (edge_len_a - edge_len_b).abs() > TOLERANCE {
                miter_length += self.diagonal_compensation;
            }

            slices.push(lay_on_line(
                &diagonal_start,
                &self.points[i],
                Vector3::new(
                    self.brick.brick_height(),
                    self.brick.mortar_thickness(),
                    miter_length,
                ),
            ));
        }
    }

    /// Emits the regular coursing joints across every trimmed edge span.
    fn course_edges(&self, cut_corners: &[CutCorner], slices: &mut Vec<MortarSlice>) {
        for (i, span) in cut_corners.iter().enumerate() {
            let Ok(dir) = segment_direction(&span.start, &span.end) else {
                debug!(edge = i, "zero-length edge span, skipping");
                continue;
            };

            let raw = cut_points(&span.start, &span.end, &self.brick);
            // Parity rule: an edge uses the between-points sequence exactly
            // when its index parity matches the course parity.
            let use_between = (i % 2 == 1) == self.winding;
            let pts = if use_between { trace_between(&raw) } else { raw };
            trace!(edge = i, joints = pts.len(), use_between, "coursing edge");

            // Joint slabs extend from their cut point toward the span
            // midpoint, so the endpoint joints stay inside the trimmed span.
            // The midpoint entry itself belongs to the near-start half.
            let half = pts.len().div_ceil(2);
            for p in &pts[..half] {
                slices.push(lay_on_line(
                    p,
                    &(*p + dir),
                    Vector3::new(
                        self.brick.brick_height(),
                        self.brick.brick_width(),
                        self.brick.mortar_thickness(),
                    ),
                ));
            }
            for p in &pts[half..] {
                slices.push(lay_on_line(
                    p,
                    &(*p + left_normal(&dir)),
                    Vector3::new(
                        self.brick.brick_height(),
                        self.brick.mortar_thickness(),
                        self.brick.brick_width(),
                    ),
                ));
            }
        }
    }
}
