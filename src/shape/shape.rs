/// Enum representing the type of a shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// A ball shape.
    Ball,
    /// A cuboid shape.
    Cuboid,
    /// A cylindrical shape.
    Cylinder,
    /// A conical shape.
    Cone,
    /// A capsule shape.
    Capsule,
    /// The convex hull of a point cloud.
    ConvexHull,
    /// A triangle shape.
    Triangle,
    /// A single point.
    Point,
    /// The Minkowski sum of two convex shapes.
    MinkowskiSum,
    /// A custom user-defined shape.
    Custom,
}
