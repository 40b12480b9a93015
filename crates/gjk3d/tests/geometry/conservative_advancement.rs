use approx::assert_relative_eq;
use gjk3d::math::{Isometry, Real, Vector};
use gjk3d::query::{
    self, CastOptions, ConservativeAdvancement, ConvexCast, GjkOptions, QueryError,
};
use gjk3d::shape::{Capsule, Cuboid, Cylinder};
use oorandom::Rand32;

#[test]
fn boxes_touching_at_the_end_of_the_motion() {
    let cuboid = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
    let cast = ConservativeAdvancement::new(&cuboid, &cuboid);
    let res = cast
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
    assert_relative_eq!(res.normal, -Vector::x(), epsilon = 1.0e-3);
}

#[test]
fn boxes_stopping_short_do_not_touch() {
    let cuboid = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
    let cast = ConservativeAdvancement::new(&cuboid, &cuboid);
    let res = cast.calc_time_of_impact(
        &Isometry::translation(-3.0, 0.0, 0.0),
        &Isometry::translation(-1.1, 0.0, 0.0),
        &Isometry::translation(3.0, 0.0, 0.0),
        &Isometry::translation(1.1, 0.0, 0.0),
    );

    assert_eq!(res, Ok(None));
}

#[test]
fn rotating_motions_stay_conservative() {
    let mut rng = Rand32::new(77);
    let capsule = Capsule::new(1.0, 0.3);
    let cylinder = Cylinder::new(0.5, 1.0);
    let radius = CastOptions::default().radius_threshold;
    let mut num_hits = 0;

    for _ in 0..50 {
        let mut rand = |min: Real, max: Real| min + (max - min) * rng.rand_float() as Real;

        let from_a = Isometry::new(
            Vector::new(-5.0, rand(-0.5, 0.5), rand(-0.5, 0.5)),
            Vector::new(rand(-1.0, 1.0), rand(-1.0, 1.0), rand(-1.0, 1.0)),
        );
        let to_a = Isometry::new(
            Vector::new(5.0, rand(-0.5, 0.5), rand(-0.5, 0.5)),
            Vector::new(rand(-3.0, 3.0), rand(-3.0, 3.0), rand(-3.0, 3.0)),
        );
        let from_b = Isometry::new(Vector::zeros(), Vector::new(rand(-1.0, 1.0), 0.0, 0.0));
        let to_b = Isometry::new(Vector::zeros(), Vector::new(0.0, rand(-1.0, 1.0), 0.0));

        let cast = ConservativeAdvancement::new(&capsule, &cylinder);
        let res = match cast.calc_time_of_impact(&from_a, &to_a, &from_b, &to_b) {
            Ok(res) => res,
            Err(QueryError::NoConvergence) => continue,
            Err(err) => panic!("unexpected error: {}", err),
        };

        if let Some(res) = res {
            num_hits += 1;
            assert!(res.fraction >= 0.0 && res.fraction <= 1.0);

            let dist = query::distance(
                &res.hit_transform_a,
                &capsule,
                &res.hit_transform_b,
                &cylinder,
                GjkOptions::default(),
            )
            .unwrap()
            .unwrap();
            assert!(dist >= -radius * 2.0, "penetration at the time of impact: {}", dist);
        }
    }

    assert!(num_hits > 0);
}

#[test]
fn spinning_in_place_hits_neighbor() {
    // A long box spinning around its center sweeps over a nearby box.
    let long_box = Cuboid::new(Vector::new(3.0, 0.2, 0.2));
    let small_box = Cuboid::new(Vector::new(0.5, 0.5, 0.5));
    let from_a = Isometry::identity();
    let to_a = Isometry::rotation(Vector::z() * 1.5);
    let pos_b = Isometry::translation(0.0, 2.0, 0.0);

    let res = ConservativeAdvancement::new(&long_box, &small_box)
        .calc_time_of_impact(&from_a, &to_a, &pos_b, &pos_b)
        .unwrap()
        .unwrap();

    assert!(res.fraction > 0.0 && res.fraction < 1.0);
    let dist = query::distance(
        &res.hit_transform_a,
        &long_box,
        &pos_b,
        &small_box,
        GjkOptions::default(),
    )
    .unwrap()
    .unwrap();
    assert!(dist >= -0.002 && dist <= 0.05);
}
