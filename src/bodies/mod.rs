mod motion;
mod physics_body;
#[cfg(feature = "serialize")]
mod record;

pub use self::motion::{MotionState, DEFAULT_FRICTION, DEFAULT_MAX_VELOCITY};
pub use self::physics_body::PhysicsBody;
#[cfg(feature = "serialize")]
pub use self::record::BodyRecord;
