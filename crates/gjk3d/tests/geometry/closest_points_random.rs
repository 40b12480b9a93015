use approx::assert_relative_eq;
use gjk3d::math::{Isometry, Point, Real, Vector};
use gjk3d::query::{self, GjkOptions};
use gjk3d::shape::{Ball, Cuboid};
use oorandom::Rand32;

fn rand_range(rng: &mut Rand32, min: Real, max: Real) -> Real {
    min + (max - min) * rng.rand_float() as Real
}

fn rand_unit_vector(rng: &mut Rand32) -> Vector<Real> {
    loop {
        let v = Vector::new(
            rand_range(rng, -1.0, 1.0),
            rand_range(rng, -1.0, 1.0),
            rand_range(rng, -1.0, 1.0),
        );

        if let Some(v) = v.try_normalize(1.0e-3) {
            return v;
        }
    }
}

#[test]
fn separated_balls_report_exact_distance() {
    let mut rng = Rand32::new(42);

    for _ in 0..200 {
        let ball_a = Ball::new(rand_range(&mut rng, 0.1, 2.0));
        let ball_b = Ball::new(rand_range(&mut rng, 0.1, 2.0));
        let gap = rand_range(&mut rng, 0.05, 5.0);
        let dir = rand_unit_vector(&mut rng);
        let center_b = Vector::new(
            rand_range(&mut rng, -10.0, 10.0),
            rand_range(&mut rng, -10.0, 10.0),
            rand_range(&mut rng, -10.0, 10.0),
        );
        let center_a = center_b + dir * (ball_a.radius + ball_b.radius + gap);

        let pos_a = Isometry::new(center_a, rand_unit_vector(&mut rng));
        let pos_b = Isometry::new(center_b, rand_unit_vector(&mut rng));
        let res = query::closest_points(&pos_a, &ball_a, &pos_b, &ball_b, GjkOptions::default())
            .unwrap()
            .unwrap();

        assert!(res.distance > 0.0);
        assert_relative_eq!(res.distance, gap, epsilon = 1.0e-3);
        assert_relative_eq!(res.normal.norm(), 1.0, epsilon = 1.0e-4);
        assert_relative_eq!(res.normal, dir, epsilon = 1.0e-3);
        assert_relative_eq!(
            res.point_on_b,
            Point::from(center_b + dir * ball_b.radius),
            epsilon = 1.0e-2
        );
    }
}

#[test]
fn ball_facing_cuboid_face() {
    let mut rng = Rand32::new(7);
    let half_extents = Vector::new(1.0, 2.0, 0.5);
    let cuboid = Cuboid::new(half_extents);

    for _ in 0..200 {
        let ball = Ball::new(rand_range(&mut rng, 0.1, 1.0));
        let gap = rand_range(&mut rng, 0.05, 3.0);
        let axis = (rng.rand_u32() % 3) as usize;
        let sign = if rng.rand_u32() % 2 == 0 { 1.0 } else { -1.0 };

        let mut local_center = Vector::zeros();
        for i in 0..3 {
            local_center[i] = rand_range(&mut rng, -0.9, 0.9) * half_extents[i];
        }
        local_center[axis] = sign * (half_extents[axis] + ball.radius + gap);

        let pos_b = Isometry::new(
            Vector::new(
                rand_range(&mut rng, -5.0, 5.0),
                rand_range(&mut rng, -5.0, 5.0),
                rand_range(&mut rng, -5.0, 5.0),
            ),
            rand_unit_vector(&mut rng) * rand_range(&mut rng, 0.0, 3.0),
        );
        let center = pos_b * Point::from(local_center);
        let pos_a = Isometry::from_parts(center.coords.into(), pos_b.rotation);

        let mut local_normal = Vector::zeros();
        local_normal[axis] = sign;
        let expected_normal = pos_b * local_normal;

        let res = query::closest_points(&pos_a, &ball, &pos_b, &cuboid, GjkOptions::default())
            .unwrap()
            .unwrap();

        assert_relative_eq!(res.distance, gap, epsilon = 1.0e-3);
        assert_relative_eq!(res.normal, expected_normal, epsilon = 1.0e-3);
    }
}

#[test]
fn overlapping_balls_report_negative_distance() {
    let mut rng = Rand32::new(1234);

    for _ in 0..200 {
        let ball_a = Ball::new(rand_range(&mut rng, 0.5, 2.0));
        let ball_b = Ball::new(rand_range(&mut rng, 0.5, 2.0));
        let center_dist = rand_range(&mut rng, 0.1, 0.9) * (ball_a.radius + ball_b.radius);
        let dir = rand_unit_vector(&mut rng);

        let offset = dir * center_dist;
        let pos_a = Isometry::translation(offset.x, offset.y, offset.z);
        let pos_b = Isometry::identity();
        let res = query::closest_points(&pos_a, &ball_a, &pos_b, &ball_b, GjkOptions::default())
            .unwrap()
            .unwrap();

        assert!(res.distance < 0.0);
        assert_relative_eq!(
            res.distance,
            center_dist - ball_a.radius - ball_b.radius,
            epsilon = 1.0e-3
        );
        assert_relative_eq!(res.normal, dir, epsilon = 1.0e-3);
    }
}

#[test]
fn spheres_four_units_apart() {
    let ball = Ball::new(1.0);
    let dist = query::distance(
        &Isometry::translation(0.0, 0.0, 4.0),
        &ball,
        &Isometry::identity(),
        &ball,
        GjkOptions::default(),
    )
    .unwrap()
    .unwrap();

    assert_relative_eq!(dist, 2.0, epsilon = 1.0e-4);
}

#[test]
fn spheres_one_and_a_half_units_apart() {
    let ball = Ball::new(1.0);
    let res = query::closest_points(
        &Isometry::identity(),
        &ball,
        &Isometry::translation(1.5, 0.0, 0.0),
        &ball,
        GjkOptions::default(),
    )
    .unwrap()
    .unwrap();

    assert_relative_eq!(res.distance, -0.5, epsilon = 1.0e-4);
    assert_relative_eq!(res.normal, -Vector::x(), epsilon = 1.0e-4);
    assert_relative_eq!(res.point_on_b, Point::new(0.5, 0.0, 0.0), epsilon = 1.0e-4);
    assert_relative_eq!(res.point_on_a, Point::new(1.0, 0.0, 0.0), epsilon = 1.0e-4);
}
