use crate::math::{Point, Real, Vector};

/// Closest points between two shapes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClosestPoints {
    /// The point of the first shape closest to the second shape (or deepest inside of it).
    pub point_on_a: Point<Real>,
    /// The point of the second shape closest to the first shape (or deepest inside of it).
    pub point_on_b: Point<Real>,
    /// The unit contact normal, pointing from the second shape toward the first one.
    pub normal: Vector<Real>,
    /// The signed distance between both shapes. Negative if they overlap.
    pub distance: Real,
}

impl ClosestPoints {
    /// Rebuilds the closest points from a contact point on the second shape.
    pub fn from_contact(
        normal_on_b: &Vector<Real>,
        point_on_b: &Point<Real>,
        distance: Real,
    ) -> Self {
        ClosestPoints {
            point_on_a: point_on_b + normal_on_b * distance,
            point_on_b: *point_on_b,
            normal: *normal_on_b,
            distance,
        }
    }

    /// Swaps the roles of both shapes.
    #[must_use]
    pub fn flipped(self) -> Self {
        ClosestPoints {
            point_on_a: self.point_on_b,
            point_on_b: self.point_on_a,
            normal: -self.normal,
            distance: self.distance,
        }
    }
}

/// The output sink of the GJK pair detector.
pub trait ContactResultCallback {
    /// Receives a contact point.
    ///
    /// `normal_on_b` is the unit normal pointing from the second shape toward the first one,
    /// `point_on_b` lies on the second shape, and `distance` is negative if the shapes overlap.
    fn add_contact_point(
        &mut self,
        normal_on_b: &Vector<Real>,
        point_on_b: &Point<Real>,
        distance: Real,
    );
}

impl<F: FnMut(&Vector<Real>, &Point<Real>, Real)> ContactResultCallback for F {
    #[inline]
    fn add_contact_point(
        &mut self,
        normal_on_b: &Vector<Real>,
        point_on_b: &Point<Real>,
        distance: Real,
    ) {
        self(normal_on_b, point_on_b, distance)
    }
}

/// A contact sink that keeps the contact with the smallest signed distance it received.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointCollector {
    /// The closest (or deepest) contact received so far.
    pub closest: Option<ClosestPoints>,
}

impl ContactResultCallback for PointCollector {
    fn add_contact_point(
        &mut self,
        normal_on_b: &Vector<Real>,
        point_on_b: &Point<Real>,
        distance: Real,
    ) {
        if self.closest.map_or(true, |res| distance < res.distance) {
            self.closest = Some(ClosestPoints::from_contact(normal_on_b, point_on_b, distance));
        }
    }
}
