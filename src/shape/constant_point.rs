use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{ShapeType, SupportMap};

/// A support mapping that is a single point.
///
/// This is a zero-radius sphere with no margin, used for instance to cast rays with the
/// shape-cast algorithms.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstantPoint(pub Point<Real>);

impl SupportMap for ConstantPoint {
    #[inline]
    fn local_support_point_without_margin(&self, _: &Vector<Real>) -> Point<Real> {
        self.0
    }

    #[inline]
    fn support_point_without_margin(&self, m: &Isometry<Real>, _: &Vector<Real>) -> Point<Real> {
        m * self.0
    }

    #[inline]
    fn support_point(&self, m: &Isometry<Real>, _: &Vector<Real>) -> Point<Real> {
        m * self.0
    }

    #[inline]
    fn local_bounding_radius(&self) -> Real {
        self.0.coords.norm()
    }

    #[inline]
    fn shape_type(&self) -> ShapeType {
        ShapeType::Point
    }
}
