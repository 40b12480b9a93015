use approx::assert_relative_eq;
use gjk3d::math::{Isometry, Real, Vector};
use gjk3d::query::{self, GjkOptions};
use gjk3d::shape::{Ball, Cone, Cuboid, MinkowskiSum, SupportMap};
use oorandom::Rand32;

#[test]
fn margins_add_up() {
    let cuboid = Cuboid::with_margin(Vector::new(1.0, 0.5, 2.0), 0.1);
    let ball = Ball::new(0.3);
    let sum = MinkowskiSum::new(&cuboid, &ball);

    assert_relative_eq!(sum.margin(), cuboid.margin() + ball.radius);
}

#[test]
fn supports_add_up() {
    let mut rng = Rand32::new(3);
    let cone = Cone::new(1.0, 0.5);
    let ball = Ball::new(0.25);
    let sum = MinkowskiSum::new(&cone, &ball);

    for _ in 0..100 {
        let dir = Vector::new(
            rng.rand_float() as Real - 0.5,
            rng.rand_float() as Real - 0.5,
            rng.rand_float() as Real - 0.5,
        );

        if dir.norm() < 1.0e-2 {
            continue;
        }

        let expected = cone.local_support_point(&dir) + dir.normalize() * ball.radius;
        assert_relative_eq!(sum.local_support_point(&dir), expected, epsilon = 1.0e-5);
    }
}

#[test]
fn swept_ball_distance() {
    // A cuboid dilated by a ball is as far from a plane-facing ball as the cuboid minus the radius.
    let cuboid = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
    let dilation = Ball::new(0.5);
    let sum = MinkowskiSum::new(&cuboid, &dilation);
    let ball = Ball::new(1.0);
    let pos_a = Isometry::translation(0.0, 5.0, 0.0);

    let dist = query::distance(&pos_a, &ball, &Isometry::identity(), &sum, GjkOptions::default())
        .unwrap()
        .unwrap();
    assert_relative_eq!(dist, 2.5, epsilon = 1.0e-4);
}
