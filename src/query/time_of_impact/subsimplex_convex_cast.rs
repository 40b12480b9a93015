//! Time of impact by ray casting on the Minkowski difference.

use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::motion::{ConstantLinearVelocityRigidMotion, RigidMotion};
use crate::query::gjk::{CSOPoint, VoronoiSimplex};
use crate::query::time_of_impact::{CastOptions, CastResult, ConvexCast};
use crate::query::QueryError;
use crate::shape::{ConstantPoint, SupportMap};

/// Computes the time of impact of two translating shapes by casting a ray against their
/// Minkowski difference.
///
/// Only the translational part of the motions is taken into account: both shapes keep the
/// rotation of their `from` transforms. The ray cast grows a simplex of the Minkowski
/// difference with the same Voronoi solver as GJK, moving the ray origin forward each time a
/// support plane separates it from the difference.
#[derive(Copy, Clone, Debug)]
pub struct SubsimplexConvexCast<'a, G1: ?Sized, G2: ?Sized> {
    shape_a: &'a G1,
    shape_b: &'a G2,
    options: CastOptions,
}

impl<'a, G1: ?Sized + SupportMap, G2: ?Sized + SupportMap> SubsimplexConvexCast<'a, G1, G2> {
    /// A subsimplex cast between `shape_a` and `shape_b` with the default options.
    pub fn new(shape_a: &'a G1, shape_b: &'a G2) -> Self {
        Self::with_options(shape_a, shape_b, CastOptions::default())
    }

    /// A subsimplex cast between `shape_a` and `shape_b`.
    pub fn with_options(shape_a: &'a G1, shape_b: &'a G2, options: CastOptions) -> Self {
        SubsimplexConvexCast {
            shape_a,
            shape_b,
            options,
        }
    }

    /// The options of this algorithm.
    pub fn options(&self) -> &CastOptions {
        &self.options
    }

    fn support(
        &self,
        pos_a: &Isometry<Real>,
        pos_b: &Isometry<Real>,
        dir: &Vector<Real>,
    ) -> CSOPoint {
        if self.options.ignore_margin {
            CSOPoint::from_shapes_without_margin(pos_a, self.shape_a, pos_b, self.shape_b, dir)
        } else {
            CSOPoint::from_shapes(pos_a, self.shape_a, pos_b, self.shape_b, dir)
        }
    }
}

impl<'a, G1: ?Sized + SupportMap, G2: ?Sized + SupportMap> ConvexCast
    for SubsimplexConvexCast<'a, G1, G2>
{
    fn calc_time_of_impact(
        &self,
        from_a: &Isometry<Real>,
        to_a: &Isometry<Real>,
        from_b: &Isometry<Real>,
        to_b: &Isometry<Real>,
    ) -> Result<Option<CastResult>, QueryError> {
        let motion_a = ConstantLinearVelocityRigidMotion::from_transforms(from_a, to_a);
        let motion_b = ConstantLinearVelocityRigidMotion::from_transforms(from_b, to_b);
        let r = motion_a.velocity - motion_b.velocity;

        let mut simplex = VoronoiSimplex::new();
        simplex.set_equal_vertex_threshold(self.options.gjk.equal_vertex_threshold);

        let mut pos_a = *from_a;
        let mut pos_b = *from_b;
        let mut lambda = 0.0;
        let mut normal = Vector::zeros();
        let mut v = self.support(&pos_a, &pos_b, &-r).point.coords;
        let mut dist2 = v.norm_squared();
        let mut num_iterations = 0;

        while dist2 > self.options.subsimplex_epsilon {
            num_iterations += 1;

            if num_iterations > self.options.max_iterations {
                log::debug!(
                    "Subsimplex convex cast: no convergence after {} iterations (lambda: {}).",
                    num_iterations,
                    lambda
                );
                return Err(QueryError::NoConvergence);
            }

            let mut w = self.support(&pos_a, &pos_b, &-v);
            let vdotw = v.dot(&w.point.coords);

            if vdotw > 0.0 {
                let vdotr = v.dot(&r);

                if vdotr >= -(DEFAULT_EPSILON * DEFAULT_EPSILON) {
                    return Ok(None);
                }

                let delta = -vdotw / vdotr;
                lambda += delta;

                if lambda > 1.0 {
                    return Ok(None);
                }

                pos_a = motion_a.position_at_time(lambda);
                pos_b = motion_b.position_at_time(lambda);

                // Keep the simplex expressed at the current ray origin.
                let shift_a = motion_a.velocity * delta;
                let shift_b = motion_b.velocity * delta;
                simplex.translate_origins(&shift_a, &shift_b);
                w = w.translate_origins(&shift_a, &shift_b);
                normal = v;
            }

            if !simplex.in_simplex(&w.point) {
                simplex.add_point(w);
            }

            match simplex.closest() {
                Some(closest) => {
                    v = closest;
                    dist2 = v.norm_squared();
                }
                None => dist2 = 0.0,
            }
        }

        let normal = normal
            .try_normalize(DEFAULT_EPSILON)
            .unwrap_or_else(Vector::zeros);

        if normal.dot(&r) >= -self.options.allowed_penetration {
            return Ok(None);
        }

        let (_, hit_point) = simplex.compute_points();

        Ok(Some(CastResult {
            fraction: lambda,
            normal,
            hit_point,
            hit_transform_a: pos_a,
            hit_transform_b: pos_b,
        }))
    }
}

/// Casts a ray from `from` to `to` against `shape` transformed by `pos`.
///
/// The fraction of the returned result is the fraction of the segment `[from, to]` traveled
/// before hitting the shape.
pub fn ray_cast<G: ?Sized + SupportMap>(
    pos: &Isometry<Real>,
    shape: &G,
    from: &Point<Real>,
    to: &Point<Real>,
    options: CastOptions,
) -> Result<Option<CastResult>, QueryError> {
    let point = ConstantPoint(Point::origin());
    let from_a = Isometry::translation(from.x, from.y, from.z);
    let to_a = Isometry::translation(to.x, to.y, to.z);
    SubsimplexConvexCast::with_options(&point, shape, options)
        .calc_time_of_impact(&from_a, &to_a, pos, pos)
}
