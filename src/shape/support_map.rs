//! Traits for support mapping based shapes.

use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::ShapeType;

/// The collision margin given by default to shapes that are shrunk or inflated by one.
pub const DEFAULT_COLLISION_MARGIN: Real = 0.04;

/// Traits of convex shapes representable by a support mapping function.
///
/// A support function associates a direction to the point of the shape maximizing its
/// dot product with that direction. Shapes are split into a core, described by
/// [`SupportMap::local_support_point_without_margin`], and a margin: the actual shape is
/// the core dilated by a ball of radius [`SupportMap::margin`].
pub trait SupportMap {
    /// Evaluates the support function of the core of this shape, i.e., ignoring its margin.
    ///
    /// The direction does not need to be normalized and may be zero.
    fn local_support_point_without_margin(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Evaluates the margin-less support function for each direction of `dirs`.
    ///
    /// Only the first `min(dirs.len(), out.len())` elements of `out` are written.
    fn batch_local_support_points_without_margin(
        &self,
        dirs: &[Vector<Real>],
        out: &mut [Point<Real>],
    ) {
        for (dir, out) in dirs.iter().zip(out.iter_mut()) {
            *out = self.local_support_point_without_margin(dir);
        }
    }

    /// The margin this shape's core is dilated by.
    fn margin(&self) -> Real {
        0.0
    }

    /// The radius of a ball centered at the local origin and enclosing this shape,
    /// margin included.
    fn local_bounding_radius(&self) -> Real;

    /// The kind of this shape.
    fn shape_type(&self) -> ShapeType {
        ShapeType::Custom
    }

    /// Evaluates the support function of this shape, margin included.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let pt = self.local_support_point_without_margin(dir);
        let margin = self.margin();

        if margin != 0.0 {
            pt + margin_direction(dir) * margin
        } else {
            pt
        }
    }

    /// Evaluates the support function of the core of this shape transformed by `transform`.
    fn support_point_without_margin(
        &self,
        transform: &Isometry<Real>,
        dir: &Vector<Real>,
    ) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point_without_margin(&local_dir)
    }

    /// Evaluates the support function of this shape transformed by `transform`, margin included.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }
}

/// The unit direction a margin is applied along for the (possibly zero) direction `dir`.
#[inline]
fn margin_direction(dir: &Vector<Real>) -> Vector<Real> {
    dir.try_normalize(DEFAULT_EPSILON)
        .unwrap_or_else(|| Vector::repeat(-1.0).normalize())
}

impl<S: ?Sized + SupportMap> SupportMap for &S {
    #[inline]
    fn local_support_point_without_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        (**self).local_support_point_without_margin(dir)
    }

    #[inline]
    fn batch_local_support_points_without_margin(
        &self,
        dirs: &[Vector<Real>],
        out: &mut [Point<Real>],
    ) {
        (**self).batch_local_support_points_without_margin(dirs, out)
    }

    #[inline]
    fn margin(&self) -> Real {
        (**self).margin()
    }

    #[inline]
    fn local_bounding_radius(&self) -> Real {
        (**self).local_bounding_radius()
    }

    #[inline]
    fn shape_type(&self) -> ShapeType {
        (**self).shape_type()
    }
}
