use crate::math::{Point, Real, Vector};
use crate::shape::{ShapeType, SupportMap};

/// A Ball shape.
///
/// The whole radius is carried as the margin: the core of a ball is its center.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Ball {
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball with the given radius.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball { radius }
    }
}

impl SupportMap for Ball {
    #[inline]
    fn local_support_point_without_margin(&self, _: &Vector<Real>) -> Point<Real> {
        Point::origin()
    }

    #[inline]
    fn batch_local_support_points_without_margin(
        &self,
        dirs: &[Vector<Real>],
        out: &mut [Point<Real>],
    ) {
        out.iter_mut()
            .take(dirs.len())
            .for_each(|pt| *pt = Point::origin());
    }

    #[inline]
    fn margin(&self) -> Real {
        self.radius
    }

    #[inline]
    fn local_bounding_radius(&self) -> Real {
        self.radius
    }

    #[inline]
    fn shape_type(&self) -> ShapeType {
        ShapeType::Ball
    }
}
