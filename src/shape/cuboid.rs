//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, Vector};
use crate::shape::{ShapeType, SupportMap, DEFAULT_COLLISION_MARGIN};
use crate::utils;

/// Shape of a box.
///
/// The margin is taken from the inside: the outer boundary of the cuboid (margin
/// included) matches `half_extents`, up to its rounded edges.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Cuboid {
    /// The half-extents of the cuboid, margin included.
    pub half_extents: Vector<Real>,
    margin: Real,
}

impl Cuboid {
    /// Creates a new box from its half-extents and the default collision margin.
    ///
    /// Half-extents are the box half-width along each axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Self::with_margin(half_extents, DEFAULT_COLLISION_MARGIN)
    }

    /// Creates a new box with a custom margin.
    ///
    /// The margin is clamped to `[0, min(half_extents)]`.
    #[inline]
    pub fn with_margin(half_extents: Vector<Real>, margin: Real) -> Cuboid {
        let margin = margin.min(half_extents.min()).max(0.0);
        Cuboid {
            half_extents,
            margin,
        }
    }

    /// The half-extents of the margin-less core of this cuboid.
    #[inline]
    pub fn core_half_extents(&self) -> Vector<Real> {
        self.half_extents - Vector::repeat(self.margin)
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point_without_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::copy_sign_to(dir, &self.core_half_extents()).into()
    }

    #[inline]
    fn margin(&self) -> Real {
        self.margin
    }

    #[inline]
    fn local_bounding_radius(&self) -> Real {
        self.half_extents.norm()
    }

    #[inline]
    fn shape_type(&self) -> ShapeType {
        ShapeType::Cuboid
    }
}
