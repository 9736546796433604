use std::f64::consts::FRAC_PI_2;

use crate::kernel::CsgKernel;
use crate::math::{Point2, Point3, Vector3};

/// One oriented mortar-joint cuboid, ready for subtraction from the wall
/// prism.
///
/// `azimuth` is the in-plane heading of the slice's long axis; the
/// inclination is fixed at 90° because wall joints are always vertical
/// cuts. This is the only place the engine lifts 2D coursing data into 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortarSlice {
    /// Anchor point of the slice, on the coursing plane (z = 0).
    pub position: Point3,
    /// Heading of the long axis, radians.
    pub azimuth: f64,
    /// Cuboid extents `(length, width, height)` before orientation.
    pub size: Vector3,
}

/// Orients a slice of `size` so its long axis points from `p1` to `p2`,
/// anchored at `p2`.
#[must_use]
pub fn lay_on_line(p2: &Point2, p1: &Point2, size: Vector3) -> MortarSlice {
    MortarSlice {
        position: Point3::new(p2.x, p2.y, 0.0),
        azimuth: (p2.y - p1.y).atan2(p2.x - p1.x),
        size,
    }
}

impl MortarSlice {
    /// Realizes this slice as a kernel solid: a corner-anchored cuboid
    /// rotated to the slice heading and translated to the anchor point.
    pub fn realize<K: CsgKernel>(&self, kernel: &mut K) -> K::Solid {
        let center = Point3::new(
            -self.size.x / 2.0,
            -self.size.y / 2.0,
            -self.size.z / 2.0,
        );
        let cuboid = kernel.cuboid(&self.size, &center);
        let oriented = kernel.rotate(&Vector3::new(0.0, FRAC_PI_2, self.azimuth), cuboid);
        kernel.translate(&self.position.coords, oriented)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn anchors_at_target_point() {
        let slice = lay_on_line(
            &Point2::new(3.0, 4.0),
            &Point2::new(2.0, 4.0),
            Vector3::new(0.75, 1.0, 0.05),
        );
        assert!((slice.position.x - 3.0).abs() < TOLERANCE);
        assert!((slice.position.y - 4.0).abs() < TOLERANCE);
        assert!(slice.position.z.abs() < TOLERANCE);
    }

    #[test]
    fn azimuth_follows_direction() {
        // p1 → p2 pointing along +y: azimuth is π/2.
        let slice = lay_on_line(
            &Point2::new(1.0, 5.0),
            &Point2::new(1.0, 2.0),
            Vector3::new(0.75, 1.0, 0.05),
        );
        assert!((slice.azimuth - FRAC_PI_2).abs() < TOLERANCE);
    }

    #[test]
    fn azimuth_negative_direction() {
        let slice = lay_on_line(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            Vector3::new(0.75, 1.0, 0.05),
        );
        assert!((slice.azimuth.abs() - std::f64::consts::PI).abs() < TOLERANCE);
    }
}
