use crate::error::{OperationError, Result};

/// Brick and mortar dimensions for one wall computation.
///
/// The derived `brick_length` is the running-bond coursing unit: two
/// width-units plus the half joint between them,
/// `2 * brick_width + mortar_thickness`. Passed explicitly through every
/// call so walls with different brick sizes can be computed concurrently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickInfo {
    brick_width: f64,
    brick_height: f64,
    mortar_thickness: f64,
    brick_length: f64,
}

impl BrickInfo {
    /// Creates a validated brick configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if any dimension is not
    /// strictly positive.
    pub fn new(brick_width: f64, brick_height: f64, mortar_thickness: f64) -> Result<Self> {
        if brick_width <= 0.0 || brick_height <= 0.0 || mortar_thickness <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "brick dimensions must be strictly positive \
                 (width={brick_width}, height={brick_height}, mortar={mortar_thickness})"
            ))
            .into());
        }
        Ok(Self {
            brick_width,
            brick_height,
            mortar_thickness,
            brick_length: 2.0 * brick_width + mortar_thickness,
        })
    }

    /// Brick width; also the wall depth and the inward offset distance.
    #[must_use]
    pub fn brick_width(&self) -> f64 {
        self.brick_width
    }

    /// Brick height; the extrusion height of one course.
    #[must_use]
    pub fn brick_height(&self) -> f64 {
        self.brick_height
    }

    /// Thickness of a mortar joint.
    #[must_use]
    pub fn mortar_thickness(&self) -> f64 {
        self.mortar_thickness
    }

    /// Length of one coursing unit: `2 * brick_width + mortar_thickness`.
    #[must_use]
    pub fn brick_length(&self) -> f64 {
        self.brick_length
    }

    /// Joint-to-joint spacing along a course.
    #[must_use]
    pub fn joint_spacing(&self) -> f64 {
        self.brick_length + self.mortar_thickness
    }

    /// Height of one course including its bed joint.
    #[must_use]
    pub fn course_height(&self) -> f64 {
        self.brick_height + self.mortar_thickness
    }
}
