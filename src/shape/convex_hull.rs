use crate::math::{Point, Real, Vector};
use crate::shape::{ShapeType, SupportMap, DEFAULT_COLLISION_MARGIN};
use crate::utils;

/// The convex hull of a set of points.
///
/// The hull itself is never computed: its support function is the support function of the
/// point cloud. The margin inflates the hull.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexHull {
    points: Vec<Point<Real>>,
    margin: Real,
}

impl ConvexHull {
    /// Creates the convex hull of `points` with the default collision margin.
    ///
    /// Returns `None` if `points` is empty.
    pub fn new(points: Vec<Point<Real>>) -> Option<Self> {
        Self::with_margin(points, DEFAULT_COLLISION_MARGIN)
    }

    /// Creates the convex hull of `points` inflated by `margin`.
    ///
    /// Returns `None` if `points` is empty.
    pub fn with_margin(points: Vec<Point<Real>>, margin: Real) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        Some(ConvexHull {
            points,
            margin: margin.max(0.0),
        })
    }

    /// The points this convex hull is generated from.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }
}

impl SupportMap for ConvexHull {
    #[inline]
    fn local_support_point_without_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, &self.points)
    }

    #[inline]
    fn margin(&self) -> Real {
        self.margin
    }

    fn local_bounding_radius(&self) -> Real {
        self.points
            .iter()
            .map(|pt| pt.coords.norm())
            .fold(0.0, Real::max)
            + self.margin
    }

    #[inline]
    fn shape_type(&self) -> ShapeType {
        ShapeType::ConvexHull
    }
}
