//! Shapes supported by the collision queries of this crate.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::cone::Cone;
pub use self::constant_point::ConstantPoint;
pub use self::convex_hull::ConvexHull;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::minkowski_sum::MinkowskiSum;
pub use self::shape::ShapeType;
pub use self::support_map::{SupportMap, DEFAULT_COLLISION_MARGIN};
pub use self::triangle::{Triangle, TriangleCallback};

mod ball;
mod capsule;
mod cone;
mod constant_point;
mod convex_hull;
mod cuboid;
mod cylinder;
mod minkowski_sum;
mod shape;
mod support_map;
mod triangle;
