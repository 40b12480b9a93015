use crate::math::{Real, Vector};

/// Number of sampling directions used by the directional penetration depth solver.
pub const NUM_UNIT_SPHERE_DIRECTIONS: usize = 42;

// Vertices of an icosahedron followed by the midpoints of its edges, projected on the unit sphere.
const UNIT_SPHERE_DIRECTIONS: [[Real; 3]; NUM_UNIT_SPHERE_DIRECTIONS] = [
    [0.000000, 0.000000, -1.000000],
    [0.723608, -0.525725, -0.447219],
    [-0.276388, -0.850649, -0.447219],
    [-0.894426, 0.000000, -0.447216],
    [-0.276388, 0.850649, -0.447220],
    [0.723608, 0.525725, -0.447219],
    [0.276388, -0.850649, 0.447220],
    [-0.723608, -0.525725, 0.447219],
    [-0.723608, 0.525725, 0.447219],
    [0.276388, 0.850649, 0.447219],
    [0.894426, 0.000000, 0.447216],
    [-0.000000, 0.000000, 1.000000],
    [0.425323, -0.309011, -0.850654],
    [-0.162456, -0.499995, -0.850654],
    [0.262869, -0.809012, -0.525738],
    [0.425323, 0.309011, -0.850654],
    [0.850648, -0.000000, -0.525736],
    [-0.525730, -0.000000, -0.850652],
    [-0.688190, -0.499997, -0.525736],
    [-0.162456, 0.499995, -0.850654],
    [-0.688190, 0.499997, -0.525736],
    [0.262869, 0.809012, -0.525738],
    [0.951058, 0.309013, 0.000000],
    [0.951058, -0.309013, 0.000000],
    [0.587786, -0.809017, 0.000000],
    [0.000000, -1.000000, 0.000000],
    [-0.587786, -0.809017, 0.000000],
    [-0.951058, -0.309013, -0.000000],
    [-0.951058, 0.309013, -0.000000],
    [-0.587786, 0.809017, -0.000000],
    [-0.000000, 1.000000, -0.000000],
    [0.587786, 0.809017, -0.000000],
    [0.688190, -0.499997, 0.525736],
    [-0.262869, -0.809012, 0.525738],
    [-0.850648, 0.000000, 0.525736],
    [-0.262869, 0.809012, 0.525738],
    [0.688190, 0.499997, 0.525736],
    [0.525730, 0.000000, 0.850652],
    [0.162456, -0.499995, 0.850654],
    [-0.425323, -0.309011, 0.850654],
    [-0.425323, 0.309011, 0.850654],
    [0.162456, 0.499995, 0.850654],
];

/// The `i`-th sampling direction, normalized.
///
/// # Panics
/// If `i >= NUM_UNIT_SPHERE_DIRECTIONS`.
#[inline]
pub fn unit_sphere_direction(i: usize) -> Vector<Real> {
    let [x, y, z] = UNIT_SPHERE_DIRECTIONS[i];
    Vector::new(x, y, z).normalize()
}
