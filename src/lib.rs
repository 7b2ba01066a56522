pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod collision;
pub mod debug_draw;

/// Re-export common types for easier usage
pub use crate::core::{PhysicsWorld, SimulationConfig, BodyHandle};
pub use crate::bodies::{PhysicsBody, MotionState};
pub use crate::shapes::{BodyType, ShapeGeometry};
pub use crate::collision::{CollisionCategory, CollisionIds};
pub use crate::math::{Vector2, Vector3, Transform};

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Inconsistent geometry: {0}")]
        InconsistentGeometry(String),

        #[cfg(feature = "serialize")]
        #[error("Deserialization error: {0}")]
        Deserialization(#[from] serde_json::Error),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
