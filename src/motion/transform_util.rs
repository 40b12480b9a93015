use crate::math::{Isometry, Real, Rotation, Translation, Vector};

/// Integrates `cur` over the duration `dt` with constant linear and angular velocities.
///
/// The rotation is integrated with the exponential map: the body turns by `|angvel| * dt`
/// around `angvel` regardless of how large that angle is.
pub fn integrate_transform(
    cur: &Isometry<Real>,
    linvel: &Vector<Real>,
    angvel: &Vector<Real>,
    dt: Real,
) -> Isometry<Real> {
    let translation = Translation::from(cur.translation.vector + linvel * dt);
    let rotation = Rotation::from_scaled_axis(angvel * dt) * cur.rotation;
    Isometry::from_parts(translation, rotation)
}

/// The rotation bringing `from` to `to`, as a unit axis and an angle in `[0, pi]`.
///
/// Returns the `x` axis with a zero angle if both rotations are equal.
pub fn calculate_diff_axis_angle(
    from: &Isometry<Real>,
    to: &Isometry<Real>,
) -> (Vector<Real>, Real) {
    let diff = to.rotation * from.rotation.inverse();

    match diff.axis_angle() {
        Some((axis, angle)) => (axis.into_inner(), angle),
        None => (Vector::x(), 0.0),
    }
}

/// The constant linear and angular velocities moving `from` to `to` in the time `dt`.
///
/// The angular velocity follows the shortest arc between both rotations.
pub fn calculate_velocity(
    from: &Isometry<Real>,
    to: &Isometry<Real>,
    dt: Real,
) -> (Vector<Real>, Vector<Real>) {
    let linvel = (to.translation.vector - from.translation.vector) / dt;
    let (axis, angle) = calculate_diff_axis_angle(from, to);
    (linvel, axis * (angle / dt))
}
