use crate::math::{Isometry, Real, Vector};
use crate::motion::{calculate_velocity, integrate_transform};

/// A continuous rigid motion.
///
/// This is a function, assumed to be continuous, that, given a parameter `t` returns a direct
/// isometry. The time of impact queries sample it for `t` in `[0, 1]`.
pub trait RigidMotion {
    /// Get a position at the time `t`.
    fn position_at_time(&self, t: Real) -> Isometry<Real>;
}

impl RigidMotion for Isometry<Real> {
    fn position_at_time(&self, _: Real) -> Isometry<Real> {
        *self
    }
}

/// A motion from a starting isometry traveling at constant translational velocity.
///
/// The rotation stays the one of the starting isometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstantLinearVelocityRigidMotion {
    /// The time at which this parametrization begins. Can be negative.
    pub t0: Real,
    /// The starting isometry at `t = self.t0`.
    pub start: Isometry<Real>,
    /// The translational velocity of this motion.
    pub velocity: Vector<Real>,
}

impl ConstantLinearVelocityRigidMotion {
    /// Initialize a linear motion from a starting isometry and a translational velocity.
    pub fn new(t0: Real, start: Isometry<Real>, velocity: Vector<Real>) -> Self {
        ConstantLinearVelocityRigidMotion {
            t0,
            start,
            velocity,
        }
    }

    /// The motion translating `from` to the translation of `to` between `t = 0` and `t = 1`.
    ///
    /// The rotation of `to` is ignored.
    pub fn from_transforms(from: &Isometry<Real>, to: &Isometry<Real>) -> Self {
        Self::new(
            0.0,
            *from,
            to.translation.vector - from.translation.vector,
        )
    }
}

impl RigidMotion for ConstantLinearVelocityRigidMotion {
    fn position_at_time(&self, t: Real) -> Isometry<Real> {
        Isometry::from_parts(
            (self.start.translation.vector + self.velocity * (t - self.t0)).into(),
            self.start.rotation,
        )
    }
}

/// A motion from a starting isometry traveling at constant translational and rotational
/// velocity.
///
/// The rotation is applied around the origin of the moving frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstantVelocityRigidMotion {
    /// The time at which this parametrization begins. Can be negative.
    pub t0: Real,
    /// The starting isometry at `t = self.t0`.
    pub start: Isometry<Real>,
    /// The translational velocity of this motion.
    pub linvel: Vector<Real>,
    /// The angular velocity of this motion.
    pub angvel: Vector<Real>,
}

impl ConstantVelocityRigidMotion {
    /// Initialize a motion from a starting isometry and linear and angular velocities.
    pub fn new(
        t0: Real,
        start: Isometry<Real>,
        linvel: Vector<Real>,
        angvel: Vector<Real>,
    ) -> Self {
        ConstantVelocityRigidMotion {
            t0,
            start,
            linvel,
            angvel,
        }
    }

    /// The motion bringing `from` to `to` between `t = 0` and `t = 1`.
    pub fn from_transforms(from: &Isometry<Real>, to: &Isometry<Real>) -> Self {
        let (linvel, angvel) = calculate_velocity(from, to, 1.0);
        Self::new(0.0, *from, linvel, angvel)
    }
}

impl RigidMotion for ConstantVelocityRigidMotion {
    fn position_at_time(&self, t: Real) -> Isometry<Real> {
        integrate_transform(&self.start, &self.linvel, &self.angvel, t - self.t0)
    }
}
