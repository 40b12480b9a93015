//! Penetration depth computation for overlapping convex shapes.

pub use self::minkowski_penetration::{
    MinkowskiPenetrationDepthSolver, PenetrationDepth, PenetrationDepthSolver,
    PenetrationOptions,
};
pub use self::unit_sphere_directions::{unit_sphere_direction, NUM_UNIT_SPHERE_DIRECTIONS};

mod minkowski_penetration;
mod unit_sphere_directions;
