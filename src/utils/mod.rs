//! Various unsorted geometrical and logical operators.

pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};
pub use self::sign::copy_sign_to;

mod point_cloud_support_point;
mod sign;
