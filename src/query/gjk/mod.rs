//! The GJK algorithm for distance computation.

pub use self::cso_point::CSOPoint;
pub use self::gjk_pair_detector::{
    closest_points, distance, project_point, DegenerateSimplex, GjkMethod, GjkOptions,
    GjkPairDetector,
};
pub use self::sub_simplex::{
    closest_point_on_segment, closest_point_on_tetrahedron, closest_point_on_triangle,
    point_outside_of_plane, tetrahedron_barycentric_coords, PlaneSide, SubSimplexClosestResult,
    TetrahedronProjection, UsedVertices, DEGENERATE_TETRAHEDRON_EPSILON,
};
pub use self::voronoi_simplex3::{VoronoiSimplex, DEFAULT_EQUAL_VERTEX_THRESHOLD};

mod cso_point;
mod gjk_pair_detector;
mod sub_simplex;
mod voronoi_simplex3;
