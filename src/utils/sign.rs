use crate::math::{Real, Vector};

/// Copies the sign of each component of `sign` to the absolute value of the
/// matching component of `magnitude`.
///
/// A zero component of `sign` (including `-0.0`) selects the positive value.
#[inline]
pub fn copy_sign_to(sign: &Vector<Real>, magnitude: &Vector<Real>) -> Vector<Real> {
    magnitude.zip_map(sign, |m, s| if s >= 0.0 { m.abs() } else { -m.abs() })
}
