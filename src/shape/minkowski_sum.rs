use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{ShapeType, SupportMap};

/// The Minkowski sum of two convex shapes, each placed with its own local transform.
///
/// The margin of the sum is the sum of both margins.
#[derive(Copy, Clone, Debug)]
pub struct MinkowskiSum<'a, A: ?Sized, B: ?Sized> {
    /// The first shape involved in the sum.
    pub shape_a: &'a A,
    /// The transform of `shape_a` relative to the frame of the sum.
    pub transform_a: Isometry<Real>,
    /// The second shape involved in the sum.
    pub shape_b: &'a B,
    /// The transform of `shape_b` relative to the frame of the sum.
    pub transform_b: Isometry<Real>,
}

impl<'a, A: ?Sized + SupportMap, B: ?Sized + SupportMap> MinkowskiSum<'a, A, B> {
    /// The Minkowski sum of `shape_a` and `shape_b`, both expressed in the frame of the sum.
    pub fn new(shape_a: &'a A, shape_b: &'a B) -> Self {
        Self::with_transforms(shape_a, Isometry::identity(), shape_b, Isometry::identity())
    }

    /// The Minkowski sum of `shape_a` transformed by `transform_a` and `shape_b` transformed
    /// by `transform_b`.
    pub fn with_transforms(
        shape_a: &'a A,
        transform_a: Isometry<Real>,
        shape_b: &'a B,
        transform_b: Isometry<Real>,
    ) -> Self {
        MinkowskiSum {
            shape_a,
            transform_a,
            shape_b,
            transform_b,
        }
    }
}

impl<A: ?Sized + SupportMap, B: ?Sized + SupportMap> SupportMap for MinkowskiSum<'_, A, B> {
    fn local_support_point_without_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        let pa = self
            .shape_a
            .support_point_without_margin(&self.transform_a, dir);
        let pb = self
            .shape_b
            .support_point_without_margin(&self.transform_b, dir);
        pa + pb.coords
    }

    fn margin(&self) -> Real {
        self.shape_a.margin() + self.shape_b.margin()
    }

    fn local_bounding_radius(&self) -> Real {
        self.transform_a.translation.vector.norm()
            + self.shape_a.local_bounding_radius()
            + self.transform_b.translation.vector.norm()
            + self.shape_b.local_bounding_radius()
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::MinkowskiSum
    }
}
