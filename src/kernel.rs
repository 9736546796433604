use crate::math::{Point2, Point3, Vector3};

/// Contract the coursing engine expects from an external CSG kernel.
///
/// The engine is agnostic to the solid representation: [`CsgKernel::Solid`]
/// may be a mesh, a B-rep handle, or a CSG-tree node. Euler rotations apply
/// X, then Y, then Z, in radians. `subtract` must tolerate overlapping
/// subtrahends, since neighboring mortar slices may intersect near corners.
pub trait CsgKernel {
    /// Opaque solid handle owned by the kernel.
    type Solid;

    /// Axis-aligned box with extents `size`, centered at `center`.
    fn cuboid(&mut self, size: &Vector3, center: &Point3) -> Self::Solid;

    /// Extrudes a polygon (outer ring plus zero or more hole rings) along +Z
    /// by `height`.
    fn extrude_polygon(
        &mut self,
        outer: &[Point2],
        holes: &[Vec<Point2>],
        height: f64,
    ) -> Self::Solid;

    /// Boolean difference `a - b`.
    fn subtract(&mut self, a: Self::Solid, b: Self::Solid) -> Self::Solid;

    /// Translates a solid by `offset`.
    fn translate(&mut self, offset: &Vector3, solid: Self::Solid) -> Self::Solid;

    /// Rotates a solid around the origin by Euler angles `(x, y, z)`.
    fn rotate(&mut self, euler_xyz: &Vector3, solid: Self::Solid) -> Self::Solid;
}
