//! Time of impact by repeated GJK distance queries along the translation.

use crate::math::{Isometry, Real, DEFAULT_EPSILON};
use crate::motion::{ConstantLinearVelocityRigidMotion, RigidMotion};
use crate::query::time_of_impact::{CastOptions, CastResult, ConvexCast};
use crate::query::{GjkPairDetector, QueryError};
use crate::shape::SupportMap;

/// Computes the time of impact of two translating shapes by advancing along the relative
/// translation by the GJK distance projected on the separating normal.
///
/// Like [`SubsimplexConvexCast`](crate::query::SubsimplexConvexCast), both shapes keep the
/// rotation of their `from` transforms.
#[derive(Copy, Clone, Debug)]
pub struct GjkConvexCast<'a, G1: ?Sized, G2: ?Sized> {
    shape_a: &'a G1,
    shape_b: &'a G2,
    options: CastOptions,
}

impl<'a, G1: ?Sized + SupportMap, G2: ?Sized + SupportMap> GjkConvexCast<'a, G1, G2> {
    /// A GJK convex cast between `shape_a` and `shape_b` with the default options.
    pub fn new(shape_a: &'a G1, shape_b: &'a G2) -> Self {
        Self::with_options(shape_a, shape_b, CastOptions::default())
    }

    /// A GJK convex cast between `shape_a` and `shape_b`.
    pub fn with_options(shape_a: &'a G1, shape_b: &'a G2, options: CastOptions) -> Self {
        GjkConvexCast {
            shape_a,
            shape_b,
            options,
        }
    }

    /// The options of this algorithm.
    pub fn options(&self) -> &CastOptions {
        &self.options
    }
}

impl<'a, G1: ?Sized + SupportMap, G2: ?Sized + SupportMap> ConvexCast
    for GjkConvexCast<'a, G1, G2>
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
        let radius = self.options.radius_threshold;
        let mut detector =
            GjkPairDetector::without_penetration_solver(self.options.distance_options());

        let initial = detector.closest_points(from_a, self.shape_a, from_b, self.shape_b);
        let mut contact = match initial {
            Ok(Some(res)) if res.distance >= -radius => res,
            Ok(Some(_)) | Err(QueryError::Penetrating) => {
                return Err(QueryError::InitiallyPenetrating)
            }
            Ok(None) => return Ok(None),
            Err(err) => return Err(err),
        };

        let mut lambda = 0.0;
        let mut pos_a = *from_a;
        let mut pos_b = *from_b;
        let mut overlap_lambda: Option<Real> = None;
        let mut num_iterations = 0;

        while contact.distance > radius {
            num_iterations += 1;

            if num_iterations > self.options.max_iterations {
                log::debug!(
                    "GJK convex cast: no convergence after {} iterations (lambda: {}).",
                    num_iterations,
                    lambda
                );
                return Err(QueryError::NoConvergence);
            }

            let approach_speed = -r.dot(&contact.normal);

            if approach_speed <= DEFAULT_EPSILON {
                return Ok(None);
            }

            let mut next_lambda = lambda + contact.distance / approach_speed;

            if let Some(overlap_lambda) = overlap_lambda {
                if overlap_lambda - lambda <= DEFAULT_EPSILON {
                    break;
                }

                if next_lambda >= overlap_lambda {
                    next_lambda = (lambda + overlap_lambda) * 0.5;
                }
            }

            if next_lambda > 1.0 {
                if (next_lambda - 1.0) * approach_speed <= radius {
                    next_lambda = 1.0;
                } else {
                    return Ok(None);
                }
            }

            if next_lambda <= lambda {
                return Ok(None);
            }

            let next_pos_a = motion_a.position_at_time(next_lambda);
            let next_pos_b = motion_b.position_at_time(next_lambda);

            match detector.closest_points(&next_pos_a, self.shape_a, &next_pos_b, self.shape_b) {
                Ok(Some(res)) if res.distance >= -radius => {
                    lambda = next_lambda;
                    pos_a = next_pos_a;
                    pos_b = next_pos_b;
                    contact = res;
                }
                Ok(Some(_)) | Err(QueryError::Penetrating) => overlap_lambda = Some(next_lambda),
                Ok(None) => return Ok(None),
                Err(err) => return Err(err),
            }
        }

        if contact.normal.dot(&r) >= -self.options.allowed_penetration {
            return Ok(None);
        }

        Ok(Some(CastResult {
            fraction: lambda,
            normal: contact.normal,
            hit_point: contact.point_on_b,
            hit_transform_a: pos_a,
            hit_transform_b: pos_b,
        }))
    }
}
