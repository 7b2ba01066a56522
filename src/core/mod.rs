pub mod world;
pub mod config;
pub mod storage;

pub use self::world::PhysicsWorld;
pub use self::config::SimulationConfig;
pub use self::storage::BodyStorage;

/// A unique identifier for a body in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) u32);
