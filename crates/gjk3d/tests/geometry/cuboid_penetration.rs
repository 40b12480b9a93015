use approx::assert_relative_eq;
use gjk3d::math::{Isometry, Real, Vector};
use gjk3d::query::{
    self, GjkMethod, GjkOptions, GjkPairDetector, MinkowskiPenetrationDepthSolver,
    PenetrationDepthSolver, QueryError,
};
use gjk3d::shape::{Ball, Cuboid};
use oorandom::Rand32;

#[test]
fn coincident_cuboids() {
    let cuboid = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
    let res = query::closest_points(
        &Isometry::identity(),
        &cuboid,
        &Isometry::identity(),
        &cuboid,
        GjkOptions::default(),
    )
    .unwrap()
    .unwrap();

    assert_relative_eq!(res.distance, -2.0, epsilon = 1.0e-3);
    assert_relative_eq!(res.normal.norm(), 1.0, epsilon = 1.0e-4);
}

#[test]
fn cuboids_overlapping_along_y() {
    let mut rng = Rand32::new(99);
    let cuboid = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
    let solver = MinkowskiPenetrationDepthSolver::default();

    for _ in 0..100 {
        let depth = 0.1 + 1.2 * rng.rand_float() as Real;
        let offset_x = (rng.rand_float() as Real - 0.5) * 0.8;
        let offset_z = (rng.rand_float() as Real - 0.5) * 0.8;
        let pos_a = Isometry::translation(offset_x, 2.0 - depth, offset_z);
        let pos_b = Isometry::identity();

        let mut detector = GjkPairDetector::new(Some(&solver), GjkOptions::default());
        let res = detector
            .closest_points(&pos_a, &cuboid, &pos_b, &cuboid)
            .unwrap()
            .unwrap();

        assert_eq!(detector.last_used_method(), GjkMethod::PenetrationDepth);
        assert_relative_eq!(res.distance, -depth, epsilon = 1.0e-3);
        assert_relative_eq!(res.normal, Vector::y(), epsilon = 1.0e-3);
        assert_relative_eq!(res.point_on_b.y, 1.0, epsilon = 1.0e-3);
        assert_relative_eq!(res.point_on_a.y, 1.0 - depth, epsilon = 1.0e-3);
    }
}

#[test]
fn shallow_overlap_is_resolved_on_the_margins() {
    // The cores are still apart: GJK measures the overlap of the margins directly.
    let cuboid = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
    let pos_a = Isometry::translation(0.0, 0.0, 1.97);
    let res = query::closest_points(
        &pos_a,
        &cuboid,
        &Isometry::identity(),
        &cuboid,
        GjkOptions::default(),
    )
    .unwrap()
    .unwrap();

    assert_relative_eq!(res.distance, -0.03, epsilon = 1.0e-4);
    assert_relative_eq!(res.normal, Vector::z(), epsilon = 1.0e-4);
}

#[test]
fn solver_depth_matches_detector_distance() {
    let cuboid = Cuboid::new(Vector::new(2.0, 1.0, 1.0));
    let ball = Ball::new(0.5);
    let pos_a = Isometry::translation(0.3, 0.0, 1.1);
    let pos_b = Isometry::identity();

    let solver = MinkowskiPenetrationDepthSolver::default();
    let depth = solver
        .calc_penetration_depth(&pos_a, &ball, &pos_b, &cuboid)
        .unwrap();
    let res = query::closest_points(&pos_a, &ball, &pos_b, &cuboid, GjkOptions::default())
        .unwrap()
        .unwrap();

    assert_relative_eq!(depth.depth, 0.4, epsilon = 1.0e-3);
    assert_relative_eq!(res.distance, -depth.depth, epsilon = 1.0e-3);
    assert_relative_eq!(depth.normal, Vector::z(), epsilon = 1.0e-4);
}

#[test]
fn deep_overlap_without_solver() {
    let cuboid = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
    let mut detector = GjkPairDetector::without_penetration_solver(GjkOptions::default());
    let res = detector.closest_points(
        &Isometry::translation(0.2, 0.1, 0.0),
        &cuboid,
        &Isometry::identity(),
        &cuboid,
    );

    assert!(matches!(
        res,
        Err(QueryError::Penetrating) | Err(QueryError::DegenerateSimplex)
    ));
}
