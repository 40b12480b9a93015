//! The Gilbert-Johnson-Keerthi distance algorithm.
//!
//! GJK works on the Minkowski difference (or Configuration Space Obstacle) of two convex
//! shapes: it grows a simplex of support points of the difference until it finds the point
//! of the difference closest to the origin. That point is the vector joining the closest
//! points of both shapes. If the origin lies inside of the difference, the shapes overlap
//! and a [`PenetrationDepthSolver`] measures how deep.

use crate::math::{Isometry, Point, Real, Translation, Vector, DEFAULT_EPSILON};
use crate::query::gjk::{CSOPoint, VoronoiSimplex, DEFAULT_EQUAL_VERTEX_THRESHOLD};
use crate::query::penetration::{MinkowskiPenetrationDepthSolver, PenetrationDepthSolver};
use crate::query::{ClosestPoints, ContactResultCallback, QueryError};
use crate::shape::{ConstantPoint, SupportMap};
use arrayvec::ArrayVec;

/// Options of the GJK pair detector.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GjkOptions {
    /// If `true`, the margins of both shapes are treated as zero.
    pub ignore_margin: bool,
    /// Squared distance between the shapes, margins included, beyond which no contact is
    /// reported.
    pub max_distance_squared: Real,
    /// Relative tolerance on the squared distance used to detect convergence.
    pub rel_error2: Real,
    /// Maximum number of iterations before the query fails with [`QueryError::NoConvergence`].
    pub max_iterations: usize,
    /// Squared distance below which a support point is considered already part of the simplex.
    pub equal_vertex_threshold: Real,
    /// If `true`, nearly-touching cores whose GJK loop stopped on an invalid simplex or a
    /// vanishing separating axis are also sent to the penetration depth solver. Its result
    /// only replaces a negative GJK distance, and only if it is deeper.
    pub catch_degeneracies: bool,
    /// Distance between the cores below which `catch_degeneracies` applies.
    pub degenerate_penetration_threshold: Real,
    /// Overlap of the cores below which a simplex enclosing the origin is reported as a
    /// zero-distance contact instead of a penetration.
    pub touching_tolerance: Real,
}

impl Default for GjkOptions {
    fn default() -> Self {
        Self {
            ignore_margin: false,
            max_distance_squared: Real::MAX,
            rel_error2: 1.0e-6,
            max_iterations: 1000,
            equal_vertex_threshold: DEFAULT_EQUAL_VERTEX_THRESHOLD,
            catch_degeneracies: true,
            degenerate_penetration_threshold: 0.01,
            touching_tolerance: 1.0e-4,
        }
    }
}

impl GjkOptions {
    /// Sets whether margins are ignored.
    pub fn with_ignore_margin(mut self, ignore_margin: bool) -> Self {
        self.ignore_margin = ignore_margin;
        self
    }

    /// Sets the distance between the shapes, margins included, beyond which no contact is
    /// reported.
    pub fn with_max_distance(mut self, max_distance: Real) -> Self {
        self.max_distance_squared = max_distance * max_distance;
        self
    }

    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// The reason the last GJK loop stopped, when it was not a regular improvement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DegenerateSimplex {
    /// The new support point was already part of the simplex.
    RepeatedVertex,
    /// The new support point did not improve the distance at all.
    NoProgress,
    /// The simplex solver reported an invalid simplex.
    InvalidSimplex,
    /// The final separating axis was too short to be normalized reliably.
    ZeroSeparatingAxis,
    /// The simplex contains the origin.
    OriginEnclosed,
    /// The shapes are further apart than the maximum distance.
    BeyondMaxDistance,
    /// The relative improvement of the distance fell below the tolerance.
    RelativeErrorReached,
    /// The distance stopped decreasing by more than the machine epsilon.
    Plateau,
    /// The simplex became a full tetrahedron.
    FullSimplex,
}

/// The method that produced the last result of a GJK pair detector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum GjkMethod {
    /// No result was produced.
    #[default]
    None,
    /// The closest points were computed by GJK.
    Gjk,
    /// GJK ended with a separating axis too short to be used.
    DegenerateGjk,
    /// The result was computed by the penetration depth solver.
    PenetrationDepth,
}

/// Computes the closest points between two convex shapes with GJK.
///
/// The separating axis found by the last query is kept and used as the starting direction of
/// the next one, which speeds up queries on slowly moving pairs.
#[derive(Clone, Debug)]
pub struct GjkPairDetector<'a, P = MinkowskiPenetrationDepthSolver> {
    simplex: VoronoiSimplex,
    penetration_solver: Option<&'a P>,
    cached_separating_axis: Vector<Real>,
    options: GjkOptions,
    cur_iter: usize,
    degenerate_simplex: Option<DegenerateSimplex>,
    last_used_method: GjkMethod,
}

impl GjkPairDetector<'static> {
    /// A pair detector that reports [`QueryError::Penetrating`] when the cores of the shapes
    /// overlap instead of measuring the penetration depth.
    pub fn without_penetration_solver(options: GjkOptions) -> Self {
        GjkPairDetector::new(None, options)
    }
}

impl<'a, P: PenetrationDepthSolver> GjkPairDetector<'a, P> {
    /// Creates a pair detector relying on `penetration_solver` for overlapping shapes.
    pub fn new(penetration_solver: Option<&'a P>, options: GjkOptions) -> Self {
        let mut simplex = VoronoiSimplex::new();
        simplex.set_equal_vertex_threshold(options.equal_vertex_threshold);

        GjkPairDetector {
            simplex,
            penetration_solver,
            cached_separating_axis: Vector::y(),
            options,
            cur_iter: 0,
            degenerate_simplex: None,
            last_used_method: GjkMethod::None,
        }
    }

    /// The options of this pair detector.
    #[inline]
    pub fn options(&self) -> &GjkOptions {
        &self.options
    }

    /// The number of iterations performed by the last query.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.cur_iter
    }

    /// Why the last GJK loop stopped, if it stopped on a degenerate or converged state.
    #[inline]
    pub fn degenerate_simplex(&self) -> Option<DegenerateSimplex> {
        self.degenerate_simplex
    }

    /// The method that produced the last result.
    #[inline]
    pub fn last_used_method(&self) -> GjkMethod {
        self.last_used_method
    }

    /// The separating axis the next query starts from.
    ///
    /// It points from the second shape toward the first one and is not normalized.
    #[inline]
    pub fn cached_separating_axis(&self) -> Vector<Real> {
        self.cached_separating_axis
    }

    /// Sets the separating axis the next query starts from.
    #[inline]
    pub fn set_cached_separating_axis(&mut self, axis: Vector<Real>) {
        self.cached_separating_axis = axis;
    }

    /// Computes the closest points of `shape_a` and `shape_b` and reports them to `output`.
    ///
    /// Nothing is reported if the shapes are further apart than the maximum distance.
    pub fn get_closest_points<G1: ?Sized, G2: ?Sized>(
        &mut self,
        pos_a: &Isometry<Real>,
        shape_a: &G1,
        pos_b: &Isometry<Real>,
        shape_b: &G2,
        output: &mut dyn ContactResultCallback,
    ) -> Result<(), QueryError>
    where
        G1: SupportMap,
        G2: SupportMap,
    {
        if let Some(res) = self.closest_points(pos_a, shape_a, pos_b, shape_b)? {
            output.add_contact_point(&res.normal, &res.point_on_b, res.distance);
        }

        Ok(())
    }

    /// Computes the closest points of `shape_a` and `shape_b`.
    ///
    /// Returns `Ok(None)` if the shapes are further apart than the maximum distance. The
    /// distance is negative if the shapes overlap.
    pub fn closest_points<G1: ?Sized, G2: ?Sized>(
        &mut self,
        pos_a: &Isometry<Real>,
        shape_a: &G1,
        pos_b: &Isometry<Real>,
        shape_b: &G2,
    ) -> Result<Option<ClosestPoints>, QueryError>
    where
        G1: SupportMap,
        G2: SupportMap,
    {
        self.cur_iter = 0;
        self.degenerate_simplex = None;
        self.last_used_method = GjkMethod::None;

        // Work close to the origin to keep as much precision as possible.
        let position_offset = (pos_a.translation.vector + pos_b.translation.vector) * 0.5;
        let local_pos_a = Translation::from(-position_offset) * pos_a;
        let local_pos_b = Translation::from(-position_offset) * pos_b;

        let (margin_a, margin_b) = if self.options.ignore_margin {
            (0.0, 0.0)
        } else {
            (shape_a.margin(), shape_b.margin())
        };
        let margin = margin_a + margin_b;
        // The loop measures the cores, which are further apart than the shapes by `margin`.
        let max_core_distance = self.options.max_distance_squared.sqrt() + margin;
        let max_core_distance_squared = max_core_distance * max_core_distance;

        if self.cached_separating_axis.norm_squared() <= DEFAULT_EPSILON * DEFAULT_EPSILON
            || !self.cached_separating_axis.iter().all(|e| e.is_finite())
        {
            self.cached_separating_axis = Vector::y();
        }

        self.simplex.reset();

        let mut squared_distance = Real::MAX;
        let mut check_simplex = false;
        let mut result: Option<ClosestPoints> = None;
        let mut previous_axis;

        loop {
            previous_axis = self.cached_separating_axis;
            let cso = CSOPoint::from_shapes_without_margin(
                &local_pos_a,
                shape_a,
                &local_pos_b,
                shape_b,
                &-self.cached_separating_axis,
            );
            let w = cso.point;
            let delta = self.cached_separating_axis.dot(&w.coords);

            // The shapes are further apart than the maximum distance.
            if delta > 0.0 && delta * delta > squared_distance * max_core_distance_squared {
                self.degenerate_simplex = Some(DegenerateSimplex::BeyondMaxDistance);
                return Ok(None);
            }

            if self.simplex.in_simplex(&w) {
                self.degenerate_simplex = Some(DegenerateSimplex::RepeatedVertex);
                check_simplex = true;
                break;
            }

            let f0 = squared_distance - delta;
            let f1 = squared_distance * self.options.rel_error2;

            if f0 <= f1 {
                self.degenerate_simplex = Some(if f0 <= 0.0 {
                    DegenerateSimplex::NoProgress
                } else {
                    DegenerateSimplex::RelativeErrorReached
                });
                check_simplex = true;
                break;
            }

            self.simplex.add_point(cso);

            let Some(new_axis) = self.simplex.closest() else {
                log::debug!("GJK: the simplex solver reported an invalid simplex.");
                self.degenerate_simplex = Some(DegenerateSimplex::InvalidSimplex);
                check_simplex = true;
                break;
            };

            if new_axis.norm_squared() < self.options.rel_error2 {
                self.cached_separating_axis = new_axis;
                self.degenerate_simplex = Some(DegenerateSimplex::OriginEnclosed);
                check_simplex = true;
                break;
            }

            let previous_squared_distance = squared_distance;
            squared_distance = new_axis.norm_squared();

            if previous_squared_distance - squared_distance
                <= Real::EPSILON * previous_squared_distance
            {
                self.cached_separating_axis = self.simplex.backup_closest();
                self.degenerate_simplex = Some(DegenerateSimplex::Plateau);
                check_simplex = true;
                break;
            }

            self.cached_separating_axis = new_axis;

            self.cur_iter += 1;
            if self.cur_iter > self.options.max_iterations {
                log::debug!(
                    "GJK: no convergence after {} iterations (squared distance: {}).",
                    self.cur_iter,
                    squared_distance
                );
                return Err(QueryError::NoConvergence);
            }

            if self.simplex.full_simplex() {
                self.cached_separating_axis = self.simplex.backup_closest();
                self.degenerate_simplex = Some(DegenerateSimplex::FullSimplex);
                break;
            }
        }

        let origin_enclosed = matches!(
            self.degenerate_simplex,
            Some(DegenerateSimplex::OriginEnclosed | DegenerateSimplex::FullSimplex)
        );

        // What is left of the closest vector once the origin is enclosed is rounding noise.
        if check_simplex && !origin_enclosed {
            let (point_on_a, point_on_b) = self.simplex.compute_points();
            let axis = self.cached_separating_axis;
            let len_sq = axis.norm_squared();

            if len_sq < self.options.rel_error2 {
                self.degenerate_simplex = Some(DegenerateSimplex::ZeroSeparatingAxis);
            }

            if len_sq > DEFAULT_EPSILON * DEFAULT_EPSILON {
                let len = len_sq.sqrt();
                let normal = axis / len;
                self.last_used_method = GjkMethod::Gjk;
                result = Some(ClosestPoints {
                    point_on_a: point_on_a - normal * margin_a,
                    point_on_b: point_on_b + normal * margin_b,
                    normal,
                    distance: len - margin,
                });
            } else {
                self.last_used_method = GjkMethod::DegenerateGjk;
            }
        }

        if result.is_none() {
            if let Some((normal, separation)) =
                self.touching_axis(&local_pos_a, shape_a, &local_pos_b, shape_b, &previous_axis)
            {
                let core_distance = separation.max(0.0).min(self.cached_separating_axis.norm());
                let (point_on_a, point_on_b) = self.simplex.compute_points();
                self.cached_separating_axis = normal;
                self.last_used_method = GjkMethod::Gjk;
                result = Some(ClosestPoints {
                    point_on_a: point_on_a - normal * margin_a,
                    point_on_b: point_on_b + normal * margin_b,
                    normal,
                    distance: core_distance - margin,
                });
            }
        }

        // Only a loop that stopped without converging leaves a distance worth double-checking.
        let unreliable_gjk = matches!(
            self.degenerate_simplex,
            Some(DegenerateSimplex::InvalidSimplex | DegenerateSimplex::ZeroSeparatingAxis)
        );
        let catch_degenerate_penetration = self.options.catch_degeneracies
            && self.penetration_solver.is_some()
            && unreliable_gjk
            && result.map_or(false, |res| {
                res.distance + margin < self.options.degenerate_penetration_threshold
            });

        if result.is_none() || catch_degenerate_penetration {
            match self.penetration_solver {
                Some(solver) => {
                    let penetration =
                        solver.calc_penetration_depth(&local_pos_a, shape_a, &local_pos_b, shape_b);

                    match penetration {
                        Ok(penetration) => {
                            let mut normal = penetration.point_on_b - penetration.point_on_a;
                            let mut len_sq = normal.norm_squared();

                            if len_sq <= DEFAULT_EPSILON * DEFAULT_EPSILON {
                                normal = penetration.normal;
                                len_sq = normal.norm_squared();
                            }

                            if len_sq > DEFAULT_EPSILON * DEFAULT_EPSILON {
                                normal /= len_sq.sqrt();
                                let distance =
                                    -na::distance(&penetration.point_on_a, &penetration.point_on_b);

                                // Separated shapes keep their GJK distance.
                                let deeper = result.map_or(true, |res| {
                                    res.distance < 0.0 && distance < res.distance
                                });

                                if deeper {
                                    self.last_used_method = GjkMethod::PenetrationDepth;
                                    self.cached_separating_axis = normal;
                                    result = Some(ClosestPoints {
                                        point_on_a: penetration.point_on_a,
                                        point_on_b: penetration.point_on_b,
                                        normal,
                                        distance,
                                    });
                                }
                            }
                        }
                        Err(err) => {
                            log::debug!("GJK: the penetration depth solver failed: {}", err);

                            if result.is_none() {
                                return Err(err);
                            }
                        }
                    }
                }
                None if result.is_none() => {
                    return Err(if self.simplex.is_degenerate() {
                        QueryError::DegenerateSimplex
                    } else {
                        QueryError::Penetrating
                    });
                }
                None => {}
            }
        }

        let Some(res) = result else {
            log::debug!("GJK: degenerate simplex with no usable separating axis.");
            return Err(QueryError::DegenerateSimplex);
        };

        if res.distance > 0.0 && res.distance * res.distance > self.options.max_distance_squared {
            self.degenerate_simplex = Some(DegenerateSimplex::BeyondMaxDistance);
            return Ok(None);
        }

        Ok(Some(ClosestPoints {
            point_on_a: res.point_on_a + position_offset,
            point_on_b: res.point_on_b + position_offset,
            ..res
        }))
    }

    /// Searches for an axis along which the cores touch without overlapping by more than
    /// `touching_tolerance`.
    ///
    /// The candidates are the last axis the loop searched along, the last closest vector, and
    /// the normals of the faces of the final simplex. Returns the unit axis pointing from the
    /// second shape toward the first one, and the separation of the cores along it.
    fn touching_axis<G1: ?Sized, G2: ?Sized>(
        &self,
        pos_a: &Isometry<Real>,
        shape_a: &G1,
        pos_b: &Isometry<Real>,
        shape_b: &G2,
        previous_axis: &Vector<Real>,
    ) -> Option<(Vector<Real>, Real)>
    where
        G1: SupportMap,
        G2: SupportMap,
    {
        let mut candidates = ArrayVec::<Vector<Real>, 10>::new();
        candidates.push(*previous_axis);
        candidates.push(self.cached_separating_axis);

        let vertices = self.simplex.vertices();

        for i in 0..vertices.len() {
            for j in i + 1..vertices.len() {
                for k in j + 1..vertices.len() {
                    let ab = vertices[j].point - vertices[i].point;
                    let ac = vertices[k].point - vertices[i].point;
                    let n = ab.cross(&ac);
                    candidates.push(n);
                    candidates.push(-n);
                }
            }
        }

        let mut best: Option<(Vector<Real>, Real)> = None;

        for axis in candidates {
            let Some(axis) = axis.try_normalize(DEFAULT_EPSILON) else {
                continue;
            };
            let w = CSOPoint::from_shapes_without_margin(pos_a, shape_a, pos_b, shape_b, &-axis);
            let separation = axis.dot(&w.point.coords);

            if separation.is_finite() && best.map_or(true, |(_, sep)| separation > sep) {
                best = Some((axis, separation));
            }
        }

        best.filter(|(_, separation)| *separation >= -self.options.touching_tolerance)
    }
}

/// Computes the closest points between two convex shapes.
///
/// Overlapping shapes are handled by a [`MinkowskiPenetrationDepthSolver`]. Returns `Ok(None)`
/// if the shapes are further apart than `options.max_distance_squared.sqrt()`.
pub fn closest_points<G1: ?Sized, G2: ?Sized>(
    pos_a: &Isometry<Real>,
    shape_a: &G1,
    pos_b: &Isometry<Real>,
    shape_b: &G2,
    options: GjkOptions,
) -> Result<Option<ClosestPoints>, QueryError>
where
    G1: SupportMap,
    G2: SupportMap,
{
    let solver = MinkowskiPenetrationDepthSolver::default();
    let mut detector = GjkPairDetector::new(Some(&solver), options);
    detector.closest_points(pos_a, shape_a, pos_b, shape_b)
}

/// Computes the signed distance between two convex shapes.
///
/// The distance is negative if the shapes overlap. Returns `Ok(None)` if the shapes are
/// further apart than `options.max_distance_squared.sqrt()`.
pub fn distance<G1: ?Sized, G2: ?Sized>(
    pos_a: &Isometry<Real>,
    shape_a: &G1,
    pos_b: &Isometry<Real>,
    shape_b: &G2,
    options: GjkOptions,
) -> Result<Option<Real>, QueryError>
where
    G1: SupportMap,
    G2: SupportMap,
{
    Ok(closest_points(pos_a, shape_a, pos_b, shape_b, options)?.map(|res| res.distance))
}

/// The point of `shape` transformed by `pos` closest to `point`, and their distance.
///
/// The distance is negative if the point lies inside of the shape.
pub fn project_point<G: ?Sized + SupportMap>(
    pos: &Isometry<Real>,
    shape: &G,
    point: &Point<Real>,
) -> Result<Option<ClosestPoints>, QueryError> {
    closest_points(
        pos,
        shape,
        &Isometry::translation(point.x, point.y, point.z),
        &ConstantPoint(Point::origin()),
        GjkOptions::default(),
    )
}
