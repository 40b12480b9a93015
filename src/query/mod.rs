//! Non-persistent narrow-phase queries between convex shapes.
//!
//! * [`closest_points()`] and [`distance()`] compute the closest points, or the signed
//!   distance, between two shapes with GJK, including penetrating configurations.
//! * [`GjkPairDetector`] is the reusable, warm-started version of the same query.
//! * [`MinkowskiPenetrationDepthSolver`] estimates the penetration depth of overlapping shapes.
//! * [`ConservativeAdvancement`], [`SubsimplexConvexCast`] and [`GjkConvexCast`] compute the
//!   time of impact of moving shapes.

pub use self::contact_callback::{ClosestPoints, ContactResultCallback, PointCollector};
pub use self::error::QueryError;
pub use self::gjk::{
    closest_points, distance, project_point, GjkMethod, GjkOptions, GjkPairDetector,
};
pub use self::penetration::{
    MinkowskiPenetrationDepthSolver, PenetrationDepth, PenetrationDepthSolver,
    PenetrationOptions,
};
pub use self::time_of_impact::{
    ray_cast, CastOptions, CastResult, ConservativeAdvancement, ConvexCast, GjkConvexCast,
    SubsimplexConvexCast, NO_HIT_FRACTION,
};

mod contact_callback;
mod error;
pub mod gjk;
pub mod penetration;
pub mod time_of_impact;
