use approx::assert_relative_eq;
use gjk3d::math::{Point, Real};
use gjk3d::query::gjk::{
    closest_point_on_segment, closest_point_on_tetrahedron, closest_point_on_triangle,
    SubSimplexClosestResult, TetrahedronProjection, UsedVertices, VoronoiSimplex,
};
use oorandom::Rand32;

fn rand_point(rng: &mut Rand32) -> Point<Real> {
    Point::new(
        rng.rand_float() as Real * 4.0 - 2.0,
        rng.rand_float() as Real * 4.0 - 2.0,
        rng.rand_float() as Real * 4.0 - 2.0,
    )
}

fn used_points(pts: &[Point<Real>], used: UsedVertices) -> Vec<Point<Real>> {
    pts.iter()
        .enumerate()
        .filter(|(i, _)| used.contains(UsedVertices::vertex(*i)))
        .map(|(_, pt)| *pt)
        .collect()
}

fn closest_on_subset(p: &Point<Real>, pts: &[Point<Real>]) -> Point<Real> {
    match pts {
        [a] => *a,
        [a, b] => closest_point_on_segment(p, a, b).closest_point,
        [a, b, c] => closest_point_on_triangle(p, a, b, c).closest_point,
        _ => unreachable!(),
    }
}

fn check_reduction(p: &Point<Real>, pts: &[Point<Real>], res: &SubSimplexClosestResult) {
    let used = used_points(pts, res.used_vertices);
    assert!(!used.is_empty());
    assert!(used.len() <= pts.len());
    assert_eq!(used.len(), res.num_used_vertices());

    let dist = na_distance(p, &res.closest_point);

    if used.len() < pts.len() {
        let reduced = closest_on_subset(p, &used);
        assert!(na_distance(p, &reduced) <= dist + 1.0e-4);
    }

    for (i, pt) in pts.iter().enumerate() {
        assert!(dist <= na_distance(p, pt) + 1.0e-4, "vertex {} is closer", i);
    }
}

fn na_distance(a: &Point<Real>, b: &Point<Real>) -> Real {
    (a - b).norm()
}

#[test]
fn reduction_never_increases_the_distance() {
    let mut rng = Rand32::new(2024);
    let p = Point::origin();

    for _ in 0..500 {
        let a = rand_point(&mut rng);
        let b = rand_point(&mut rng);
        let c = rand_point(&mut rng);
        let d = rand_point(&mut rng);

        let res = closest_point_on_segment(&p, &a, &b);
        assert!(res.num_used_vertices() <= 2);
        check_reduction(&p, &[a, b], &res);

        let res = closest_point_on_triangle(&p, &a, &b, &c);
        assert!(res.num_used_vertices() <= 3);
        check_reduction(&p, &[a, b, c], &res);

        let projection = closest_point_on_tetrahedron(&p, &a, &b, &c, &d);

        if let TetrahedronProjection::Outside(res) = projection {
            assert!(res.num_used_vertices() <= 4);
            check_reduction(&p, &[a, b, c, d], &res);
        }
    }
}

#[test]
fn closest_is_idempotent() {
    let mut rng = Rand32::new(5);

    for _ in 0..100 {
        let mut simplex = VoronoiSimplex::new();

        for _ in 0..3 {
            let pt = rand_point(&mut rng);
            simplex.add_vertex(pt, pt, Point::origin());
        }

        let first = simplex.closest();
        let first_points = simplex.compute_points();
        let second = simplex.closest();
        let second_points = simplex.compute_points();

        assert_eq!(first, second);
        assert_eq!(first_points, second_points);
    }
}

#[test]
fn coplanar_tetrahedron_is_degenerate() {
    let a = Point::new(1.0, 0.0, 1.0);
    let b = Point::new(-1.0, 0.0, 1.0);
    let c = Point::new(0.0, 1.0, 1.0);
    let d = Point::new(0.0, -1.0, 1.0);

    assert_eq!(
        closest_point_on_tetrahedron(&Point::origin(), &a, &b, &c, &d),
        TetrahedronProjection::Degenerate
    );

    let mut simplex = VoronoiSimplex::new();
    for pt in [a, b, c, d] {
        simplex.add_vertex(pt, pt, Point::origin());
    }

    assert_eq!(simplex.closest(), None);
    assert!(simplex.is_degenerate());
}

#[test]
fn simplex_shrinks_to_used_vertices() {
    let mut simplex = VoronoiSimplex::new();
    simplex.add_vertex(Point::new(1.0, 1.0, 0.0), Point::new(1.0, 1.0, 0.0), Point::origin());
    simplex.add_vertex(Point::new(1.0, -1.0, 0.0), Point::new(1.0, -1.0, 0.0), Point::origin());
    simplex.add_vertex(Point::new(5.0, 0.0, 0.0), Point::new(5.0, 0.0, 0.0), Point::origin());

    let v = simplex.closest().unwrap();
    assert_relative_eq!(v, gjk3d::math::Vector::x(), epsilon = 1.0e-6);
    assert_eq!(simplex.num_vertices(), 2);
    assert!(!simplex.is_degenerate());
}
