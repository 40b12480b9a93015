//! Rigid motions and transform integration used by the time of impact queries.

pub use self::rigid_motion::{
    ConstantLinearVelocityRigidMotion, ConstantVelocityRigidMotion, RigidMotion,
};
pub use self::transform_util::{calculate_diff_axis_angle, calculate_velocity, integrate_transform};

mod rigid_motion;
mod transform_util;
