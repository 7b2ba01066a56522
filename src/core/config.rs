use crate::math::Vector3;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for the physics simulation
///
/// Passed to every body update, so all bodies stepped with the same config
/// see the same gravity without any process-wide state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(default))]
pub struct SimulationConfig {
    /// Acceleration due to gravity, applied to bodies that opt in
    pub gravity: Vector3,

    /// The fixed time step for the simulation
    pub time_step: f32,

    /// The maximum number of substeps per call to `PhysicsWorld::step`
    pub max_substeps: u32,
}

impl SimulationConfig {
    /// Creates a config with the given gravity and default stepping
    pub fn with_gravity(gravity: Vector3) -> Self {
        Self {
            gravity,
            ..Self::default()
        }
    }

    /// Parses a config from JSON; missing keys keep their defaults
    #[cfg(feature = "serialize")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: Vector3::new(0.0, -9.81, 0.0),
            time_step: 1.0 / 60.0,
            max_substeps: 10,
        }
    }
}
