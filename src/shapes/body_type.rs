use crate::error::PhysicsError;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Which collision shape a body uses
///
/// Persisted as a stable integer: `0` for a box, `1` for a circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(try_from = "u8", into = "u8"))]
pub enum BodyType {
    /// Axis-aligned box described by width, height and four corners
    Box,

    /// Circle described by a radius
    #[default]
    Circle,
}

impl From<BodyType> for u8 {
    fn from(body_type: BodyType) -> Self {
        match body_type {
            BodyType::Box => 0,
            BodyType::Circle => 1,
        }
    }
}

impl TryFrom<u8> for BodyType {
    type Error = PhysicsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BodyType::Box),
            1 => Ok(BodyType::Circle),
            other => Err(PhysicsError::InvalidParameter(format!("unknown body type {}", other))),
        }
    }
}
