use crate::math::{Isometry, Point, Real, Vector};
use crate::query::{GjkOptions, QueryError};

/// The fraction reported when nothing was hit over the whole motion.
pub const NO_HIT_FRACTION: Real = 1.0;

/// The result of a successful time of impact computation.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CastResult {
    /// The fraction of the motion, in `[0, 1]`, at which the shapes touch.
    pub fraction: Real,
    /// The contact normal at the time of impact, pointing from the second shape toward the
    /// first one.
    pub normal: Vector<Real>,
    /// The contact point on the second shape at the time of impact.
    pub hit_point: Point<Real>,
    /// The transform of the first shape at the time of impact.
    pub hit_transform_a: Isometry<Real>,
    /// The transform of the second shape at the time of impact.
    pub hit_transform_b: Isometry<Real>,
}

/// Options shared by the time of impact algorithms.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CastOptions {
    /// Maximum number of iterations before failing with [`QueryError::NoConvergence`].
    pub max_iterations: usize,
    /// Distance below which the shapes are considered in contact.
    pub radius_threshold: Real,
    /// Squared distance to the Minkowski difference below which a subsimplex cast stops.
    pub subsimplex_epsilon: Real,
    /// If `true`, the margins of both shapes are treated as zero.
    pub ignore_margin: bool,
    /// Penetration tolerated along the final contact normal before a hit is discarded.
    pub allowed_penetration: Real,
    /// Options of the GJK distance queries.
    pub gjk: GjkOptions,
}

impl Default for CastOptions {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            radius_threshold: 0.001,
            subsimplex_epsilon: 1.0e-4,
            ignore_margin: false,
            allowed_penetration: 0.0,
            gjk: GjkOptions::default(),
        }
    }
}

impl CastOptions {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the contact distance threshold.
    pub fn with_radius_threshold(mut self, radius_threshold: Real) -> Self {
        self.radius_threshold = radius_threshold;
        self
    }

    /// Sets whether margins are ignored.
    pub fn with_ignore_margin(mut self, ignore_margin: bool) -> Self {
        self.ignore_margin = ignore_margin;
        self
    }

    /// Sets the tolerated penetration along the final contact normal.
    pub fn with_allowed_penetration(mut self, allowed_penetration: Real) -> Self {
        self.allowed_penetration = allowed_penetration;
        self
    }

    /// The options of the GJK distance queries, with the margin handling of these options.
    pub(crate) fn distance_options(&self) -> GjkOptions {
        self.gjk.with_ignore_margin(self.ignore_margin)
    }
}

/// An algorithm computing the time of impact of two shapes moving over the unit time interval.
pub trait ConvexCast {
    /// Computes the first time the shapes touch while moving from `from_a` to `to_a` and from
    /// `from_b` to `to_b`.
    ///
    /// Returns `Ok(None)` if they do not touch during the motion.
    fn calc_time_of_impact(
        &self,
        from_a: &Isometry<Real>,
        to_a: &Isometry<Real>,
        from_b: &Isometry<Real>,
        to_b: &Isometry<Real>,
    ) -> Result<Option<CastResult>, QueryError>;
}
