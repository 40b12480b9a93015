//! Penetration depth estimation by directional sampling of the Minkowski difference.

use crate::math::{Isometry, Point, Real, Translation, Vector};
use crate::query::gjk::{GjkOptions, GjkPairDetector};
use crate::query::penetration::{unit_sphere_direction, NUM_UNIT_SPHERE_DIRECTIONS};
use crate::query::QueryError;
use crate::shape::SupportMap;

/// The result of a penetration depth computation.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PenetrationDepth {
    /// The unit penetration direction, pointing from the second shape toward the first one.
    ///
    /// Translating the first shape by `normal * depth` brings both shapes into contact.
    pub normal: Vector<Real>,
    /// The deepest point of the first shape inside of the second one.
    pub point_on_a: Point<Real>,
    /// The deepest point of the second shape inside of the first one.
    pub point_on_b: Point<Real>,
    /// The penetration depth. Positive for overlapping shapes.
    pub depth: Real,
}

/// A solver computing the penetration depth of two overlapping convex shapes.
pub trait PenetrationDepthSolver {
    /// Computes the penetration depth of `shape_a` transformed by `pos_a` and `shape_b`
    /// transformed by `pos_b`.
    fn calc_penetration_depth<G1: ?Sized + SupportMap, G2: ?Sized + SupportMap>(
        &self,
        pos_a: &Isometry<Real>,
        shape_a: &G1,
        pos_b: &Isometry<Real>,
        shape_b: &G2,
    ) -> Result<PenetrationDepth, QueryError>;
}

/// Options of the [`MinkowskiPenetrationDepthSolver`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PenetrationOptions {
    /// Extra distance the first shape is pushed away by before the refinement query, so that
    /// the query runs on separated shapes.
    pub extra_separation: Real,
    /// Options of the GJK refinement query.
    pub gjk: GjkOptions,
}

impl Default for PenetrationOptions {
    fn default() -> Self {
        Self {
            extra_separation: 0.5,
            gjk: GjkOptions::default(),
        }
    }
}

impl PenetrationOptions {
    /// Sets the extra separation applied before the refinement query.
    pub fn with_extra_separation(mut self, extra_separation: Real) -> Self {
        self.extra_separation = extra_separation;
        self
    }

    /// Sets the options of the refinement query.
    pub fn with_gjk_options(mut self, gjk: GjkOptions) -> Self {
        self.gjk = gjk;
        self
    }
}

/// Estimates penetration depths by sampling the support function of the Minkowski difference
/// along a fixed set of directions.
///
/// The direction along which the shapes overlap the least is used to push the first shape
/// out of the second one, and a single GJK query on the separated pair refines the depth and
/// the witness points. The result is an upper bound of the exact depth whose quality depends
/// on how close the true penetration direction is to one of the sampled directions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MinkowskiPenetrationDepthSolver {
    /// The options of this solver.
    pub options: PenetrationOptions,
}

impl MinkowskiPenetrationDepthSolver {
    /// A solver with the given options.
    pub fn new(options: PenetrationOptions) -> Self {
        Self { options }
    }
}

impl PenetrationDepthSolver for MinkowskiPenetrationDepthSolver {
    fn calc_penetration_depth<G1: ?Sized + SupportMap, G2: ?Sized + SupportMap>(
        &self,
        pos_a: &Isometry<Real>,
        shape_a: &G1,
        pos_b: &Isometry<Real>,
        shape_b: &G2,
    ) -> Result<PenetrationDepth, QueryError> {
        let mut dirs_a = [Vector::zeros(); NUM_UNIT_SPHERE_DIRECTIONS];
        let mut dirs_b = [Vector::zeros(); NUM_UNIT_SPHERE_DIRECTIONS];
        let mut normals = [Vector::zeros(); NUM_UNIT_SPHERE_DIRECTIONS];

        for (i, normal) in normals.iter_mut().enumerate() {
            *normal = unit_sphere_direction(i);
            dirs_a[i] = pos_a.inverse_transform_vector(&-*normal);
            dirs_b[i] = pos_b.inverse_transform_vector(normal);
        }

        let mut supports_a = [Point::origin(); NUM_UNIT_SPHERE_DIRECTIONS];
        let mut supports_b = [Point::origin(); NUM_UNIT_SPHERE_DIRECTIONS];
        shape_a.batch_local_support_points_without_margin(&dirs_a, &mut supports_a);
        shape_b.batch_local_support_points_without_margin(&dirs_b, &mut supports_b);

        let mut best: Option<(Vector<Real>, Real)> = None;

        for i in 0..NUM_UNIT_SPHERE_DIRECTIONS {
            let world_a = pos_a * supports_a[i];
            let world_b = pos_b * supports_b[i];
            let delta = normals[i].dot(&(world_b - world_a));

            if delta.is_finite() && best.map_or(true, |(_, min_proj)| delta < min_proj) {
                best = Some((normals[i], delta));
            }
        }

        let Some((normal, mut min_proj)) = best else {
            log::debug!("Penetration depth: no sampling direction gave a finite projection.");
            return Err(QueryError::PenetrationSolverFailure);
        };

        if !self.options.gjk.ignore_margin {
            min_proj += shape_a.margin() + shape_b.margin();
        }

        if min_proj < 0.0 {
            // A sampled direction separates the shapes: there is nothing to measure.
            log::debug!("Penetration depth: the shapes are separated along {}.", normal);
            return Err(QueryError::PenetrationSolverFailure);
        }

        min_proj += self.options.extra_separation;

        let displaced_pos_a = Translation::from(normal * min_proj) * pos_a;
        let mut refine = GjkPairDetector::without_penetration_solver(self.options.gjk);
        refine.set_cached_separating_axis(normal);

        let res = match refine.closest_points(&displaced_pos_a, shape_a, pos_b, shape_b) {
            Ok(Some(res)) => res,
            Ok(None) => {
                log::debug!("Penetration depth: the refinement query found no contact.");
                return Err(QueryError::PenetrationSolverFailure);
            }
            Err(err) => {
                log::debug!("Penetration depth: the refinement query failed: {}", err);
                return Err(QueryError::PenetrationSolverFailure);
            }
        };

        let depth = min_proj - res.distance;

        if !depth.is_finite() {
            log::debug!("Penetration depth: non-finite corrected depth.");
            return Err(QueryError::PenetrationSolverFailure);
        }

        Ok(PenetrationDepth {
            normal,
            point_on_a: res.point_on_b - normal * depth,
            point_on_b: res.point_on_b,
            depth,
        })
    }
}
