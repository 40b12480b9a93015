//! Time of impact by conservative advancement.

use crate::math::{Isometry, Real, DEFAULT_EPSILON};
use crate::motion::{ConstantVelocityRigidMotion, RigidMotion};
use crate::query::time_of_impact::{CastOptions, CastResult, ConvexCast};
use crate::query::{ClosestPoints, GjkPairDetector, QueryError};
use crate::shape::SupportMap;

/// Computes the time of impact of two shapes under linear and angular motion by conservative
/// advancement.
///
/// Both shapes move with constant linear and angular velocities from their `from` transforms
/// to their `to` transforms. At each step the distance between the shapes is divided by an
/// upper bound of their approach speed, which gives a time the shapes can safely advance by
/// without touching. The fraction returned never exceeds the actual time of impact by more
/// than the contact distance threshold allows.
#[derive(Copy, Clone, Debug)]
pub struct ConservativeAdvancement<'a, G1: ?Sized, G2: ?Sized> {
    shape_a: &'a G1,
    shape_b: &'a G2,
    options: CastOptions,
}

impl<'a, G1: ?Sized + SupportMap, G2: ?Sized + SupportMap> ConservativeAdvancement<'a, G1, G2> {
    /// Conservative advancement between `shape_a` and `shape_b` with the default options.
    pub fn new(shape_a: &'a G1, shape_b: &'a G2) -> Self {
        Self::with_options(shape_a, shape_b, CastOptions::default())
    }

    /// Conservative advancement between `shape_a` and `shape_b`.
    pub fn with_options(shape_a: &'a G1, shape_b: &'a G2, options: CastOptions) -> Self {
        ConservativeAdvancement {
            shape_a,
            shape_b,
            options,
        }
    }

    /// The options of this algorithm.
    pub fn options(&self) -> &CastOptions {
        &self.options
    }

    fn advance(
        &self,
        from_a: &Isometry<Real>,
        to_a: &Isometry<Real>,
        from_b: &Isometry<Real>,
        to_b: &Isometry<Real>,
        mut on_step: impl FnMut(Real, &ClosestPoints),
    ) -> Result<Option<CastResult>, QueryError> {
        let motion_a = ConstantVelocityRigidMotion::from_transforms(from_a, to_a);
        let motion_b = ConstantVelocityRigidMotion::from_transforms(from_b, to_b);

        let max_angular_projected_velocity = motion_a.angvel.norm()
            * self.shape_a.local_bounding_radius()
            + motion_b.angvel.norm() * self.shape_b.local_bounding_radius();
        let rel_linvel = motion_b.linvel - motion_a.linvel;

        if rel_linvel.norm() + max_angular_projected_velocity == 0.0 {
            return Ok(None);
        }

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
        let mut dist = contact.distance + self.options.allowed_penetration;
        // The smallest fraction known to put the shapes in penetration.
        let mut overlap_lambda: Option<Real> = None;
        let mut num_iterations = 0;
        on_step(lambda, &contact);

        while dist > radius {
            num_iterations += 1;

            if num_iterations > self.options.max_iterations {
                log::debug!(
                    "Conservative advancement: no convergence after {} iterations \
                     (lambda: {}, distance: {}).",
                    num_iterations,
                    lambda,
                    dist
                );
                return Err(QueryError::NoConvergence);
            }

            let divisor = rel_linvel.dot(&contact.normal) + max_angular_projected_velocity;

            if divisor <= DEFAULT_EPSILON {
                // Moving apart.
                return Ok(None);
            }

            let mut next_lambda = lambda + dist / divisor;

            if let Some(overlap_lambda) = overlap_lambda {
                if overlap_lambda - lambda <= DEFAULT_EPSILON {
                    // The step cannot be shortened any further.
                    break;
                }

                if next_lambda >= overlap_lambda {
                    next_lambda = (lambda + overlap_lambda) * 0.5;
                }
            }

            if next_lambda > 1.0 {
                // Tolerate overshooting the end of the motion by less than the contact distance.
                if (next_lambda - 1.0) * divisor <= radius {
                    next_lambda = 1.0;
                } else {
                    return Ok(None);
                }
            }

            if next_lambda < 0.0 || next_lambda <= lambda {
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
                    dist = res.distance + self.options.allowed_penetration;
                    on_step(lambda, &contact);
                }
                Ok(Some(_)) | Err(QueryError::Penetrating) => {
                    // The step overshot into the other shape: retry with a shorter one.
                    overlap_lambda = Some(next_lambda);
                }
                Ok(None) => return Ok(None),
                Err(err) => return Err(err),
            }
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

impl<'a, G1: ?Sized + SupportMap, G2: ?Sized + SupportMap> ConvexCast
    for ConservativeAdvancement<'a, G1, G2>
{
    fn calc_time_of_impact(
        &self,
        from_a: &Isometry<Real>,
        to_a: &Isometry<Real>,
        from_b: &Isometry<Real>,
        to_b: &Isometry<Real>,
    ) -> Result<Option<CastResult>, QueryError> {
        self.advance(from_a, to_a, from_b, to_b, |_, _| {})
    }
}
