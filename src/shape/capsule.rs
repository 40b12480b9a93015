use crate::math::{Point, Real, Vector};
use crate::shape::{ShapeType, SupportMap};

/// A capsule shape defined as a round segment aligned with the `y` axis.
///
/// The core of a capsule is its segment; the radius is carried as the margin.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Capsule {
    /// The half-length of the capsule's segment.
    pub half_height: Real,
    /// The radius of the capsule.
    pub radius: Real,
}

impl Capsule {
    /// Creates a new capsule aligned with the `y` axis.
    pub fn new(half_height: Real, radius: Real) -> Self {
        Self {
            half_height,
            radius,
        }
    }

    /// The two endpoints of this capsule's segment.
    pub fn segment(&self) -> [Point<Real>; 2] {
        [
            Point::new(0.0, -self.half_height, 0.0),
            Point::new(0.0, self.half_height, 0.0),
        ]
    }
}

impl SupportMap for Capsule {
    fn local_support_point_without_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        if dir.y < 0.0 {
            Point::new(0.0, -self.half_height, 0.0)
        } else {
            Point::new(0.0, self.half_height, 0.0)
        }
    }

    fn margin(&self) -> Real {
        self.radius
    }

    fn local_bounding_radius(&self) -> Real {
        self.half_height + self.radius
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Capsule
    }
}
