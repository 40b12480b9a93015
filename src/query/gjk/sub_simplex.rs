//! Closest points between the origin-like query point and sub-simplices (segments,
//! triangles and tetrahedra), with Voronoi-region based vertex usage tracking.

use crate::math::{Point, Real};

/// Tolerance on the signed volume below which a tetrahedron is considered flat.
pub const DEGENERATE_TETRAHEDRON_EPSILON: Real = 1.0e-4;

bitflags::bitflags! {
    /// The vertices of a sub-simplex that contribute to its closest point.
    #[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct UsedVertices: u8 {
        /// The first vertex.
        const A = 1 << 0;
        /// The second vertex.
        const B = 1 << 1;
        /// The third vertex.
        const C = 1 << 2;
        /// The fourth vertex.
        const D = 1 << 3;
    }
}

impl UsedVertices {
    /// The flag of the `i`-th vertex.
    #[inline]
    pub fn vertex(i: usize) -> Self {
        Self::from_bits_truncate(1 << i)
    }
}

/// The closest point of a sub-simplex to a query point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SubSimplexClosestResult {
    /// The closest point of the sub-simplex.
    pub closest_point: Point<Real>,
    /// The vertices whose barycentric coordinate is involved in `closest_point`.
    pub used_vertices: UsedVertices,
    /// The barycentric coordinates of `closest_point`, one per input vertex.
    pub barycentric_coords: [Real; 4],
    /// Whether the sub-simplex was found to be degenerate.
    pub degenerate: bool,
}

impl Default for SubSimplexClosestResult {
    fn default() -> Self {
        Self {
            closest_point: Point::origin(),
            used_vertices: UsedVertices::empty(),
            barycentric_coords: [0.0; 4],
            degenerate: false,
        }
    }
}

impl SubSimplexClosestResult {
    fn vertex(closest_point: Point<Real>, i: usize) -> Self {
        let mut barycentric_coords = [0.0; 4];
        barycentric_coords[i] = 1.0;
        Self {
            closest_point,
            used_vertices: UsedVertices::vertex(i),
            barycentric_coords,
            degenerate: false,
        }
    }

    /// Whether all the barycentric coordinates are non-negative.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.barycentric_coords.iter().all(|b| *b >= 0.0)
    }

    /// The number of vertices used to express the closest point.
    #[inline]
    pub fn num_used_vertices(&self) -> usize {
        self.used_vertices.bits().count_ones() as usize
    }
}

/// Location of a point relative to the plane of a tetrahedron face.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaneSide {
    /// The point is on the same side as the opposite vertex (or on the plane).
    Inside,
    /// The point is on the side opposite to the opposite vertex.
    Outside,
    /// The tetrahedron is too flat to tell.
    Indeterminate,
}

/// Result of projecting a point on a tetrahedron.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TetrahedronProjection {
    /// The point lies outside of the tetrahedron; contains its closest point.
    Outside(SubSimplexClosestResult),
    /// The point lies inside of the tetrahedron.
    Inside,
    /// The tetrahedron is flat, no reliable answer could be computed.
    Degenerate,
}

/// Closest point to `p` on the segment `[a, b]`.
pub fn closest_point_on_segment(
    p: &Point<Real>,
    a: &Point<Real>,
    b: &Point<Real>,
) -> SubSimplexClosestResult {
    let ab = b - a;
    let ap = p - a;
    let mut t = ab.dot(&ap);
    let mut result = SubSimplexClosestResult::default();

    if t > 0.0 {
        let dot_ab = ab.norm_squared();

        if t < dot_ab {
            t /= dot_ab;
            result.used_vertices = UsedVertices::A | UsedVertices::B;
        } else {
            t = 1.0;
            result.used_vertices = UsedVertices::B;
        }
    } else {
        t = 0.0;
        result.used_vertices = UsedVertices::A;
    }

    result.barycentric_coords = [1.0 - t, t, 0.0, 0.0];
    result.closest_point = a + ab * t;
    result
}

/// Closest point to `p` on the triangle `(a, b, c)`.
pub fn closest_point_on_triangle(
    p: &Point<Real>,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> SubSimplexClosestResult {
    let ab = b - a;
    let ac = c - a;
    let ap = p - a;
    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);

    if d1 <= 0.0 && d2 <= 0.0 {
        return SubSimplexClosestResult::vertex(*a, 0);
    }

    let bp = p - b;
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);

    if d3 >= 0.0 && d4 <= d3 {
        return SubSimplexClosestResult::vertex(*b, 1);
    }

    let vc = d1 * d4 - d3 * d2;

    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let v = d1 / (d1 - d3);
        return SubSimplexClosestResult {
            closest_point: a + ab * v,
            used_vertices: UsedVertices::A | UsedVertices::B,
            barycentric_coords: [1.0 - v, v, 0.0, 0.0],
            degenerate: false,
        };
    }

    let cp = p - c;
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);

    if d6 >= 0.0 && d5 <= d6 {
        return SubSimplexClosestResult::vertex(*c, 2);
    }

    let vb = d5 * d2 - d1 * d6;

    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let w = d2 / (d2 - d6);
        return SubSimplexClosestResult {
            closest_point: a + ac * w,
            used_vertices: UsedVertices::A | UsedVertices::C,
            barycentric_coords: [1.0 - w, 0.0, w, 0.0],
            degenerate: false,
        };
    }

    let va = d3 * d6 - d5 * d4;

    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return SubSimplexClosestResult {
            closest_point: b + (c - b) * w,
            used_vertices: UsedVertices::B | UsedVertices::C,
            barycentric_coords: [0.0, 1.0 - w, w, 0.0],
            degenerate: false,
        };
    }

    // Inside the face region.
    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;

    SubSimplexClosestResult {
        closest_point: a + ab * v + ac * w,
        used_vertices: UsedVertices::A | UsedVertices::B | UsedVertices::C,
        barycentric_coords: [1.0 - v - w, v, w, 0.0],
        degenerate: false,
    }
}

/// Tests on which side of the plane `(a, b, c)` the point `p` lies, relative to `d`.
pub fn point_outside_of_plane(
    p: &Point<Real>,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
) -> PlaneSide {
    let normal = (b - a).cross(&(c - a));
    let sign_p = (p - a).dot(&normal);
    let sign_d = (d - a).dot(&normal);

    if sign_d * sign_d < DEGENERATE_TETRAHEDRON_EPSILON * DEGENERATE_TETRAHEDRON_EPSILON {
        PlaneSide::Indeterminate
    } else if sign_p * sign_d < 0.0 {
        PlaneSide::Outside
    } else {
        PlaneSide::Inside
    }
}

/// Closest point to `p` on the tetrahedron `(a, b, c, d)`.
pub fn closest_point_on_tetrahedron(
    p: &Point<Real>,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
) -> TetrahedronProjection {
    let sides = [
        point_outside_of_plane(p, a, b, c, d),
        point_outside_of_plane(p, a, c, d, b),
        point_outside_of_plane(p, a, d, b, c),
        point_outside_of_plane(p, b, d, c, a),
    ];

    if sides.contains(&PlaneSide::Indeterminate) {
        return TetrahedronProjection::Degenerate;
    }

    if !sides.contains(&PlaneSide::Outside) {
        return TetrahedronProjection::Inside;
    }

    let mut best: Option<(Real, SubSimplexClosestResult)> = None;
    let mut keep_best = |candidate: SubSimplexClosestResult| {
        let dist = na::distance_squared(&candidate.closest_point, p);
        if best.map(|(best_dist, _)| dist < best_dist).unwrap_or(true) {
            best = Some((dist, candidate));
        }
    };

    // Face ABC.
    if sides[0] == PlaneSide::Outside {
        let tri = closest_point_on_triangle(p, a, b, c);
        keep_best(tri);
    }

    // Face ACD: triangle vertices (A, C, D).
    if sides[1] == PlaneSide::Outside {
        let tri = closest_point_on_triangle(p, a, c, d);
        let [ba, bc, bd, _] = tri.barycentric_coords;
        keep_best(SubSimplexClosestResult {
            closest_point: tri.closest_point,
            used_vertices: remap_used(tri.used_vertices, [0, 2, 3]),
            barycentric_coords: [ba, 0.0, bc, bd],
            degenerate: false,
        });
    }

    // Face ADB: triangle vertices (A, D, B).
    if sides[2] == PlaneSide::Outside {
        let tri = closest_point_on_triangle(p, a, d, b);
        let [ba, bd, bb, _] = tri.barycentric_coords;
        keep_best(SubSimplexClosestResult {
            closest_point: tri.closest_point,
            used_vertices: remap_used(tri.used_vertices, [0, 3, 1]),
            barycentric_coords: [ba, bb, 0.0, bd],
            degenerate: false,
        });
    }

    // Face BDC: triangle vertices (B, D, C).
    if sides[3] == PlaneSide::Outside {
        let tri = closest_point_on_triangle(p, b, d, c);
        let [bb, bd, bc, _] = tri.barycentric_coords;
        keep_best(SubSimplexClosestResult {
            closest_point: tri.closest_point,
            used_vertices: remap_used(tri.used_vertices, [1, 3, 2]),
            barycentric_coords: [0.0, bb, bc, bd],
            degenerate: false,
        });
    }

    match best {
        Some((_, result)) => TetrahedronProjection::Outside(result),
        None => TetrahedronProjection::Degenerate,
    }
}

/// Barycentric coordinates of `p` relative to the tetrahedron `(a, b, c, d)`.
///
/// The tetrahedron must not be flat.
pub fn tetrahedron_barycentric_coords(
    p: &Point<Real>,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
) -> [Real; 4] {
    let volume = |a: &Point<Real>, b: &Point<Real>, c: &Point<Real>, d: &Point<Real>| {
        (b - a).cross(&(c - a)).dot(&(d - a))
    };
    let total = volume(a, b, c, d);
    let ba = volume(p, b, c, d) / total;
    let bb = volume(a, p, c, d) / total;
    let bc = volume(a, b, p, d) / total;
    [ba, bb, bc, 1.0 - ba - bb - bc]
}

/// Maps the used vertices of a triangle to the indices of the tetrahedron vertices it was
/// built from.
fn remap_used(tri_used: UsedVertices, ids: [usize; 3]) -> UsedVertices {
    let mut used = UsedVertices::empty();

    for (i, id) in ids.iter().enumerate() {
        if tri_used.contains(UsedVertices::vertex(i)) {
            used |= UsedVertices::vertex(*id);
        }
    }

    used
}
