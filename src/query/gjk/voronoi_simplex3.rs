use crate::math::{Point, Real, Vector};
use crate::query::gjk::sub_simplex::{
    self, SubSimplexClosestResult, TetrahedronProjection, UsedVertices,
};
use crate::query::gjk::CSOPoint;
use arrayvec::ArrayVec;

/// Squared distance below which a new point is considered equal to a simplex vertex.
pub const DEFAULT_EQUAL_VERTEX_THRESHOLD: Real = 1.0e-4;

/// A simplex of dimension up to 3 using Voronoï regions for computing point projections.
///
/// The closest point of the simplex to the origin is computed lazily: it is cached until the
/// simplex is modified. Every time it is recomputed, the vertices that do not contribute to
/// the closest point are removed.
#[derive(Clone, Debug)]
pub struct VoronoiSimplex {
    vertices: ArrayVec<CSOPoint, 4>,
    last_w: Option<Point<Real>>,
    equal_vertex_threshold: Real,

    cached_bc: SubSimplexClosestResult,
    cached_p1: Point<Real>,
    cached_p2: Point<Real>,
    cached_v: Vector<Real>,
    cached_valid: bool,
    needs_update: bool,
}

impl Default for VoronoiSimplex {
    fn default() -> Self {
        Self::new()
    }
}

impl VoronoiSimplex {
    /// Creates a new empty simplex.
    pub fn new() -> VoronoiSimplex {
        VoronoiSimplex {
            vertices: ArrayVec::new(),
            last_w: None,
            equal_vertex_threshold: DEFAULT_EQUAL_VERTEX_THRESHOLD,
            cached_bc: SubSimplexClosestResult::default(),
            cached_p1: Point::origin(),
            cached_p2: Point::origin(),
            cached_v: Vector::zeros(),
            cached_valid: false,
            needs_update: true,
        }
    }

    /// Sets the squared distance below which [`Self::in_simplex`] considers two points equal.
    pub fn set_equal_vertex_threshold(&mut self, threshold: Real) {
        self.equal_vertex_threshold = threshold;
    }

    /// The squared distance below which [`Self::in_simplex`] considers two points equal.
    pub fn equal_vertex_threshold(&self) -> Real {
        self.equal_vertex_threshold
    }

    /// Removes all the vertices of this simplex.
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.last_w = None;
        self.cached_bc = SubSimplexClosestResult::default();
        self.cached_valid = false;
        self.needs_update = true;
    }

    /// Adds a vertex to this simplex.
    ///
    /// The point is ignored if the simplex is already full.
    pub fn add_point(&mut self, pt: CSOPoint) {
        self.last_w = Some(pt.point);
        self.needs_update = true;

        if self.vertices.try_push(pt).is_err() {
            log::debug!("Attempted to add a vertex to a full simplex.");
        }
    }

    /// Adds the vertex `w = p - q` to this simplex, with `p` and `q` its witness points.
    pub fn add_vertex(&mut self, w: Point<Real>, p: Point<Real>, q: Point<Real>) {
        self.add_point(CSOPoint::new_with_point(w, p, q))
    }

    /// The number of vertices of this simplex.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The `i`-th vertex of this simplex.
    #[inline]
    pub fn vertex(&self, i: usize) -> &CSOPoint {
        &self.vertices[i]
    }

    /// All the vertices of this simplex.
    #[inline]
    pub fn vertices(&self) -> &[CSOPoint] {
        &self.vertices
    }

    /// Does this simplex have four vertices?
    #[inline]
    pub fn full_simplex(&self) -> bool {
        self.vertices.is_full()
    }

    /// Does this simplex have no vertex?
    #[inline]
    pub fn empty_simplex(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The maximum squared length of the vertices of this simplex.
    pub fn max_vertex_length_sq(&self) -> Real {
        self.vertices
            .iter()
            .map(|v| v.point.coords.norm_squared())
            .fold(0.0, Real::max)
    }

    /// Removes the `i`-th vertex, replacing it with the last one.
    pub fn remove_vertex(&mut self, i: usize) {
        let _ = self.vertices.swap_remove(i);
        self.needs_update = true;
    }

    /// Removes the vertices that are not part of `used`.
    ///
    /// Removal goes from the last vertex to the first so the indices of `used` stay valid.
    pub fn reduce_vertices(&mut self, used: UsedVertices) {
        for i in (0..4).rev() {
            if self.vertices.len() > i && !used.contains(UsedVertices::vertex(i)) {
                self.remove_vertex(i);
            }
        }
    }

    /// Tests if `w` is already a vertex of this simplex, or the last point added to it.
    pub fn in_simplex(&self, w: &Point<Real>) -> bool {
        self.last_w == Some(*w)
            || self
                .vertices
                .iter()
                .any(|v| na::distance_squared(&v.point, w) <= self.equal_vertex_threshold)
    }

    /// The vector from the origin to the closest point of this simplex.
    ///
    /// Returns `None` if the simplex is empty or degenerate. If the simplex contains the
    /// origin, the returned vector is zero.
    pub fn closest(&mut self) -> Option<Vector<Real>> {
        if self.update_closest_vector_and_points() {
            Some(self.cached_v)
        } else {
            None
        }
    }

    /// The last closest vector computed, without updating it.
    #[inline]
    pub fn backup_closest(&self) -> Vector<Real> {
        self.cached_v
    }

    /// The points of the first and second shapes whose difference is the closest point of
    /// this simplex.
    pub fn compute_points(&mut self) -> (Point<Real>, Point<Real>) {
        let _ = self.update_closest_vector_and_points();
        (self.cached_p1, self.cached_p2)
    }

    /// The vertices used by the last closest point computation.
    #[inline]
    pub fn last_used_vertices(&self) -> UsedVertices {
        self.cached_bc.used_vertices
    }

    /// The barycentric coordinates of the last closest point computation, expressed in the
    /// vertex order prior to the reduction it triggered.
    #[inline]
    pub fn barycentric_coords(&self) -> [Real; 4] {
        self.cached_bc.barycentric_coords
    }

    /// Whether the last closest point computation found an affinely dependent simplex.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.cached_bc.degenerate
    }

    /// Moves the witness points of every vertex by `shift1` and `shift2`.
    ///
    /// The Minkowski difference points are moved by `shift1 - shift2`.
    pub fn translate_origins(&mut self, shift1: &Vector<Real>, shift2: &Vector<Real>) {
        let shift = shift1 - shift2;

        for v in self.vertices.iter_mut() {
            *v = v.translate_origins(shift1, shift2);
        }

        if let Some(w) = &mut self.last_w {
            *w += shift;
        }

        self.needs_update = true;
    }

    fn update_closest_vector_and_points(&mut self) -> bool {
        if !self.needs_update {
            return self.cached_valid;
        }

        self.cached_bc = SubSimplexClosestResult::default();
        self.needs_update = false;
        let origin = Point::origin();

        match self.vertices.len() {
            0 => self.cached_valid = false,
            1 => {
                let v = self.vertices[0];
                self.cached_p1 = v.orig1;
                self.cached_p2 = v.orig2;
                self.cached_v = self.cached_p1 - self.cached_p2;
                self.cached_bc.closest_point = v.point;
                self.cached_bc.used_vertices = UsedVertices::A;
                self.cached_bc.barycentric_coords = [1.0, 0.0, 0.0, 0.0];
                self.cached_valid = self.cached_bc.is_valid();
            }
            2 => {
                let [a, b] = [self.vertices[0], self.vertices[1]];
                let res = sub_simplex::closest_point_on_segment(&origin, &a.point, &b.point);
                let t = res.barycentric_coords[1];

                self.cached_p1 = a.orig1 + (b.orig1 - a.orig1) * t;
                self.cached_p2 = a.orig2 + (b.orig2 - a.orig2) * t;
                self.set_closest(res);
            }
            3 => {
                let [a, b, c] = [self.vertices[0], self.vertices[1], self.vertices[2]];
                let res =
                    sub_simplex::closest_point_on_triangle(&origin, &a.point, &b.point, &c.point);
                let [ba, bb, bc, _] = res.barycentric_coords;

                self.cached_p1 = Point::from(
                    a.orig1.coords * ba + b.orig1.coords * bb + c.orig1.coords * bc,
                );
                self.cached_p2 = Point::from(
                    a.orig2.coords * ba + b.orig2.coords * bb + c.orig2.coords * bc,
                );
                self.set_closest(res);
            }
            _ => {
                let [a, b, c, d] = [
                    self.vertices[0],
                    self.vertices[1],
                    self.vertices[2],
                    self.vertices[3],
                ];

                match sub_simplex::closest_point_on_tetrahedron(
                    &origin, &a.point, &b.point, &c.point, &d.point,
                ) {
                    TetrahedronProjection::Outside(res) => {
                        let [ba, bb, bc, bd] = res.barycentric_coords;
                        self.cached_p1 = Point::from(
                            a.orig1.coords * ba
                                + b.orig1.coords * bb
                                + c.orig1.coords * bc
                                + d.orig1.coords * bd,
                        );
                        self.cached_p2 = Point::from(
                            a.orig2.coords * ba
                                + b.orig2.coords * bb
                                + c.orig2.coords * bc
                                + d.orig2.coords * bd,
                        );
                        self.set_closest(res);
                    }
                    TetrahedronProjection::Inside => {
                        // The origin is enclosed: the shapes' cores intersect.
                        let coords = sub_simplex::tetrahedron_barycentric_coords(
                            &origin, &a.point, &b.point, &c.point, &d.point,
                        );
                        let [wa, wb, wc, wd] = coords;
                        self.cached_p1 = Point::from(
                            a.orig1.coords * wa
                                + b.orig1.coords * wb
                                + c.orig1.coords * wc
                                + d.orig1.coords * wd,
                        );
                        self.cached_p2 = Point::from(
                            a.orig2.coords * wa
                                + b.orig2.coords * wb
                                + c.orig2.coords * wc
                                + d.orig2.coords * wd,
                        );
                        self.cached_bc.closest_point = origin;
                        self.cached_bc.used_vertices = UsedVertices::all();
                        self.cached_bc.barycentric_coords = coords;
                        self.cached_v = Vector::zeros();
                        self.cached_valid = true;
                    }
                    TetrahedronProjection::Degenerate => {
                        log::debug!("Degenerate tetrahedron found by the Voronoi simplex solver.");
                        self.cached_bc.degenerate = true;
                        self.cached_valid = false;
                    }
                }
            }
        }

        self.cached_valid
    }

    fn set_closest(&mut self, res: SubSimplexClosestResult) {
        self.cached_v = self.cached_p1 - self.cached_p2;
        self.cached_bc = res;
        self.cached_valid = res.is_valid();
        self.reduce_vertices(res.used_vertices);
        self.needs_update = false;
    }
}
