//! Support mapping based Cone shape.

use crate::math::{Point, Real, Vector};
use crate::shape::{ShapeType, SupportMap, DEFAULT_COLLISION_MARGIN};
use num::Zero;

/// Cone shape with its principal axis aligned with the `y` axis.
///
/// The apex is the point at `(0, half_height, 0)`. The margin inflates the cone.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Cone {
    /// The half-height of the cone.
    pub half_height: Real,
    /// The base radius of the cone.
    pub radius: Real,
    margin: Real,
}

impl Cone {
    /// Creates a new cone with the default collision margin.
    ///
    /// # Arguments:
    /// * `half_height` - the half length of the cone along the `y` axis.
    /// * `radius` - the length of the cone along all other axis.
    pub fn new(half_height: Real, radius: Real) -> Cone {
        Self::with_margin(half_height, radius, DEFAULT_COLLISION_MARGIN)
    }

    /// Creates a new cone with a custom margin, clamped to `[0, min(half_height, radius)]`.
    pub fn with_margin(half_height: Real, radius: Real, margin: Real) -> Cone {
        Cone {
            half_height,
            radius,
            margin: margin.min(half_height).min(radius).max(0.0),
        }
    }
}

impl SupportMap for Cone {
    fn local_support_point_without_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        let mut vres = *dir;

        vres[1] = 0.0;

        if vres.normalize_mut().is_zero() {
            vres = Vector::zeros();
            vres[1] = if dir[1] < 0.0 {
                -self.half_height
            } else {
                self.half_height
            };
        } else {
            vres *= self.radius;
            vres[1] = -self.half_height;

            if dir.dot(&vres) < dir[1] * self.half_height {
                vres = Vector::zeros();
                vres[1] = self.half_height
            }
        }

        Point::from(vres)
    }

    fn margin(&self) -> Real {
        self.margin
    }

    fn local_bounding_radius(&self) -> Real {
        (self.half_height * self.half_height + self.radius * self.radius).sqrt() + self.margin
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Cone
    }
}
