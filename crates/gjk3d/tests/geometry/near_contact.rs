use approx::assert_relative_eq;
use gjk3d::math::{Isometry, Point, Real, Vector};
use gjk3d::query::{self, ConservativeAdvancement, ConvexCast, GjkConvexCast, GjkOptions};
use gjk3d::shape::{ConvexHull, Cuboid, Triangle};

fn zero_margin_cube() -> Cuboid {
    Cuboid::with_margin(Vector::new(1.0, 1.0, 1.0), 0.0)
}

// A tetrahedron with its face in the plane `x = 0`, its apex on the side of `side`.
fn zero_margin_tetrahedron(side: Real) -> ConvexHull {
    ConvexHull::with_margin(
        vec![
            Point::new(0.0, -1.0, -1.0),
            Point::new(0.0, 1.0, -1.0),
            Point::new(0.0, 0.0, 1.0),
            Point::new(side, 0.0, 0.0),
        ],
        0.0,
    )
    .unwrap()
}

#[test]
fn nearly_touching_cuboids_are_separated() {
    let cube = zero_margin_cube();

    for gap in [0.002, 0.005, 0.008] {
        for side in [1.0, -1.0] {
            let pos_a = Isometry::translation(side * (2.0 + gap), 0.0, 0.0);
            let res = query::closest_points(
                &pos_a,
                &cube,
                &Isometry::identity(),
                &cube,
                GjkOptions::default(),
            )
            .unwrap()
            .unwrap();

            assert_relative_eq!(res.distance, gap, epsilon = 1.0e-4);
            assert_relative_eq!(res.normal, Vector::x() * side, epsilon = 1.0e-3);
        }
    }
}

#[test]
fn nearly_touching_tetrahedra_are_separated() {
    let hull_a = zero_margin_tetrahedron(1.0);
    let hull_b = zero_margin_tetrahedron(-1.0);
    let pos_a = Isometry::translation(0.005, 0.0, 0.0);

    let dist = query::distance(
        &pos_a,
        &hull_a,
        &Isometry::identity(),
        &hull_b,
        GjkOptions::default(),
    )
    .unwrap()
    .unwrap();

    assert_relative_eq!(dist, 0.005, epsilon = 1.0e-4);
}

#[test]
fn tetrahedron_hovering_over_a_triangle() {
    let hull = zero_margin_tetrahedron(1.0);
    let triangle = Triangle::new(
        Point::new(0.0, -1.0, -1.0),
        Point::new(0.0, 1.0, -1.0),
        Point::new(0.0, 0.0, 1.0),
    );
    let pos_a = Isometry::translation(0.005, 0.0, 0.0);

    let res = query::closest_points(
        &pos_a,
        &hull,
        &Isometry::identity(),
        &triangle,
        GjkOptions::default(),
    )
    .unwrap()
    .unwrap();

    assert_relative_eq!(res.distance, 0.005, epsilon = 1.0e-4);
    assert_relative_eq!(res.normal, Vector::x(), epsilon = 1.0e-3);
}

#[test]
fn zero_margin_box_advancing_onto_a_static_box() {
    let cube = zero_margin_cube();
    let from_a = Isometry::translation(-3.0, 0.0, 0.0);
    let to_a = Isometry::translation(3.0, 0.0, 0.0);
    let identity = Isometry::identity();

    let res = ConservativeAdvancement::new(&cube, &cube)
        .calc_time_of_impact(&from_a, &to_a, &identity, &identity)
        .unwrap()
        .unwrap();

    assert_relative_eq!(res.fraction, 1.0 / 6.0, epsilon = 1.0e-3);
    assert_relative_eq!(res.hit_transform_a.translation.x, -2.0, epsilon = 1.0e-2);
    assert_relative_eq!(res.normal, -Vector::x(), epsilon = 1.0e-2);

    let res = GjkConvexCast::new(&cube, &cube)
        .calc_time_of_impact(&from_a, &to_a, &identity, &identity)
        .unwrap()
        .unwrap();

    assert_relative_eq!(res.fraction, 1.0 / 6.0, epsilon = 1.0e-3);
    assert_relative_eq!(res.hit_transform_a.translation.x, -2.0, epsilon = 1.0e-2);
}

#[test]
fn zero_margin_boxes_touching_at_the_end_of_the_motion() {
    let cube = zero_margin_cube();
    let res = ConservativeAdvancement::new(&cube, &cube)
        .calc_time_of_impact(
            &Isometry::translation(-3.0, 0.0, 0.0),
            &Isometry::translation(-1.0, 0.0, 0.0),
            &Isometry::translation(3.0, 0.0, 0.0),
            &Isometry::translation(1.0, 0.0, 0.0),
        )
        .unwrap()
        .unwrap();

    assert_relative_eq!(res.fraction, 1.0, epsilon = 1.0e-3);
    assert!(res.fraction <= 1.0);
    assert!(res.fraction > 0.0);
}
