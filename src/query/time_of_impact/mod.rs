//! Time of impact of convex shapes moving between two transforms.
//!
//! Every algorithm implements [`ConvexCast`]: given the start and end transforms of both
//! shapes over the unit time interval, it computes the first fraction of the interval at
//! which the shapes touch.

pub use self::cast_result::{CastOptions, CastResult, ConvexCast, NO_HIT_FRACTION};
pub use self::conservative_advancement::ConservativeAdvancement;
pub use self::gjk_convex_cast::GjkConvexCast;
pub use self::subsimplex_convex_cast::{ray_cast, SubsimplexConvexCast};

mod cast_result;
mod conservative_advancement;
mod gjk_convex_cast;
mod subsimplex_convex_cast;
