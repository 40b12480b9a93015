//! Support mapping based Cylinder shape.

use crate::math::{Point, Real, Vector};
use crate::shape::{ShapeType, SupportMap, DEFAULT_COLLISION_MARGIN};
use num::Zero;

/// Cylinder shape with its principal axis aligned with the `y` axis.
///
/// The margin is taken from the inside, so `half_height` and `radius` describe the outer
/// boundary.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Cylinder {
    /// The half-height of the cylinder.
    pub half_height: Real,
    /// The radius of the cylinder.
    pub radius: Real,
    margin: Real,
}

impl Cylinder {
    /// Creates a new cylinder with the default collision margin.
    ///
    /// # Arguments:
    /// * `half_height` - the half length of the cylinder along the `y` axis.
    /// * `radius` - the length of the cylinder along all other axis.
    pub fn new(half_height: Real, radius: Real) -> Cylinder {
        Self::with_margin(half_height, radius, DEFAULT_COLLISION_MARGIN)
    }

    /// Creates a new cylinder with a custom margin, clamped to `[0, min(half_height, radius)]`.
    pub fn with_margin(half_height: Real, radius: Real, margin: Real) -> Cylinder {
        assert!(half_height.is_sign_positive() && radius.is_sign_positive());

        Cylinder {
            half_height,
            radius,
            margin: margin.min(half_height).min(radius).max(0.0),
        }
    }
}

impl SupportMap for Cylinder {
    fn local_support_point_without_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        let core_radius = self.radius - self.margin;
        let core_half_height = self.half_height - self.margin;
        let mut vres = *dir;

        vres[1] = 0.0;

        if vres.normalize_mut().is_zero() {
            vres = Vector::x() * core_radius;
        } else {
            vres *= core_radius;
        }

        vres[1] = if dir[1] < 0.0 {
            -core_half_height
        } else {
            core_half_height
        };

        Point::from(vres)
    }

    fn margin(&self) -> Real {
        self.margin
    }

    fn local_bounding_radius(&self) -> Real {
        (self.half_height * self.half_height + self.radius * self.radius).sqrt()
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Cylinder
    }
}
