use tracing::debug;

use crate::brick::BrickInfo;
use crate::coursing::BrickWall;
use crate::error::{OperationError, Result};
use crate::kernel::CsgKernel;
use crate::math::{Point2, Vector3};

/// Stacks several courses of one wall footprint on top of each other.
///
/// Course `c` sits at `c * course_height + mortar_thickness` so a bed joint
/// underlies every course, and odd courses flip the coursing parity for the
/// running bond. Each course is returned as its own solid; combining them is
/// the caller's concern since walls are usually merged with the rest of a
/// scene anyway.
#[derive(Debug)]
pub struct CourseStack {
    points: Vec<Point2>,
    brick: BrickInfo,
    course_count: usize,
    diagonal_compensation: Option<f64>,
}

impl CourseStack {
    #[must_use]
    pub fn new(points: Vec<Point2>, brick: BrickInfo, course_count: usize) -> Self {
        Self {
            points,
            brick,
            course_count,
            diagonal_compensation: None,
        }
    }

    /// Forwards to [`BrickWall::with_diagonal_compensation`] on every course.
    #[must_use]
    pub fn with_diagonal_compensation(mut self, compensation: f64) -> Self {
        self.diagonal_compensation = Some(compensation);
        self
    }

    /// Builds every course and lifts it to its stacking height.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] for a zero course count, and
    /// propagates any per-course failure from [`BrickWall::execute`].
    pub fn execute<K: CsgKernel>(&self, kernel: &mut K) -> Result<Vec<K::Solid>> {
        if self.course_count == 0 {
            return Err(
                OperationError::InvalidInput("course count must be at least 1".to_owned()).into(),
            );
        }

        let mut courses = Vec::with_capacity(self.course_count);
        for c in 0..self.course_count {
            let mut wall = BrickWall::new(self.points.clone(), c % 2 == 1, self.brick);
            if let Some(compensation) = self.diagonal_compensation {
                wall = wall.with_diagonal_compensation(compensation);
            }
            let solid = wall.execute(kernel)?;

            #[allow(clippy::cast_precision_loss)]
            let z = c as f64 * self.brick.course_height() + self.brick.mortar_thickness();
            debug!(course = c, z, "stacked course");
            courses.push(kernel.translate(&Vector3::new(0.0, 0.0, z), solid));
        }
        Ok(courses)
    }
}
