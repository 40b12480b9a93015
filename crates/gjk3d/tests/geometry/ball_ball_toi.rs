use approx::assert_relative_eq;
use gjk3d::math::{Isometry, Real};
use gjk3d::query::{ConservativeAdvancement, ConvexCast, GjkConvexCast, SubsimplexConvexCast};
use gjk3d::shape::Ball;
use oorandom::Rand32;

fn head_on(cast: &dyn ConvexCast) -> Real {
    let pos_a = Isometry::identity();
    let to_a = Isometry::translation(0.0, 10.0, 0.0);
    let pos_b = Isometry::translation(0.0, 10.0, 0.0);

    cast.calc_time_of_impact(&pos_a, &to_a, &pos_b, &pos_b)
        .unwrap()
        .unwrap()
        .fraction
}

#[test]
fn ball_ball_toi() {
    let ball = Ball::new(0.5);

    assert_relative_eq!(
        head_on(&ConservativeAdvancement::new(&ball, &ball)),
        0.9,
        epsilon = 1.0e-3
    );
    assert_relative_eq!(
        head_on(&SubsimplexConvexCast::new(&ball, &ball)),
        0.9,
        epsilon = 1.0e-3
    );
    assert_relative_eq!(head_on(&GjkConvexCast::new(&ball, &ball)), 0.9, epsilon = 1.0e-3);
}

#[test]
fn approaching_balls_match_analytic_toi() {
    let mut rng = Rand32::new(11);

    for _ in 0..100 {
        let radius_a = 0.1 + rng.rand_float() as Real;
        let radius_b = 0.1 + rng.rand_float() as Real;
        let ball_a = Ball::new(radius_a);
        let ball_b = Ball::new(radius_b);
        let gap = 0.5 + 5.0 * rng.rand_float() as Real;
        let speed_a = 1.0 + 10.0 * rng.rand_float() as Real;
        let speed_b = 1.0 + 10.0 * rng.rand_float() as Real;

        let start_b = radius_a + radius_b + gap;
        let from_a = Isometry::identity();
        let to_a = Isometry::translation(speed_a, 0.0, 0.0);
        let from_b = Isometry::translation(start_b, 0.0, 0.0);
        let to_b = Isometry::translation(start_b - speed_b, 0.0, 0.0);
        let expected = gap / (speed_a + speed_b);

        let res = ConservativeAdvancement::new(&ball_a, &ball_b)
            .calc_time_of_impact(&from_a, &to_a, &from_b, &to_b)
            .unwrap();

        if expected <= 1.0 - 1.0e-3 {
            let res = res.unwrap();
            assert_relative_eq!(res.fraction, expected, epsilon = 1.0e-3);
            assert!(res.fraction <= expected + 1.0e-4);
        } else if expected > 1.0 + 1.0e-3 {
            assert!(res.is_none());
        }
    }
}
