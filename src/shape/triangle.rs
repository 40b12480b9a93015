//! Definition of the triangle shape and of the triangle hand-off used by mesh callers.

use crate::math::{Point, Real, Vector};
use crate::shape::{ShapeType, SupportMap};
use crate::utils;

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone, Default)]
#[repr(C)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Triangle::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }
}

impl SupportMap for Triangle {
    #[inline]
    fn local_support_point_without_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, &self.vertices())
    }

    fn local_bounding_radius(&self) -> Real {
        self.a
            .coords
            .norm()
            .max(self.b.coords.norm())
            .max(self.c.coords.norm())
    }

    #[inline]
    fn shape_type(&self) -> ShapeType {
        ShapeType::Triangle
    }
}

/// Receives the triangles of a concave shape, one at a time.
///
/// This is how concave shapes are decomposed into convex pieces by code built on top of
/// the convex queries of this crate: each triangle can be wrapped into a [`Triangle`] and
/// tested individually.
pub trait TriangleCallback {
    /// Processes the triangle `triangle_index` of the part `part_id`.
    fn process_triangle(&mut self, vertices: &[Point<Real>; 3], part_id: u32, triangle_index: u32);
}

impl<F: FnMut(&[Point<Real>; 3], u32, u32)> TriangleCallback for F {
    #[inline]
    fn process_triangle(&mut self, vertices: &[Point<Real>; 3], part_id: u32, triangle_index: u32) {
        self(vertices, part_id, triangle_index)
    }
}
