use serde::{Serialize, Deserialize};

use crate::bodies::PhysicsBody;
use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::shapes::{BodyType, ShapeGeometry};
use crate::Result;

/// Persisted form of a [`PhysicsBody`]
///
/// Holds the configured shape, limits and identifiers. Forces, velocity and
/// acceleration are runtime state and are not stored, so a loaded body
/// starts at rest. Every key is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BodyRecord {
    pub body_type: BodyType,
    pub center_offset: [f32; 2],
    pub bottom_left: [f32; 2],
    pub bottom_right: [f32; 2],
    pub top_left: [f32; 2],
    pub top_right: [f32; 2],
    pub width: f32,
    pub height: f32,
    pub radius: f32,
    pub max_velo: f32,
    pub friction: f32,
    pub gravity: bool,
    #[serde(rename = "BodyID")]
    pub body_id: u32,
    #[serde(rename = "CollideID")]
    pub collide_id: u32,
    pub is_dynamic: bool,
}

impl From<&PhysicsBody> for BodyRecord {
    fn from(body: &PhysicsBody) -> Self {
        Self {
            body_type: body.get_body_type(),
            center_offset: body.get_center_offset().into(),
            bottom_left: body.get_bottom_left().into(),
            bottom_right: body.get_bottom_right().into(),
            top_left: body.get_top_left().into(),
            top_right: body.get_top_right().into(),
            width: body.get_width(),
            height: body.get_height(),
            radius: body.get_radius(),
            max_velo: body.get_max_velocity(),
            friction: body.get_friction(),
            gravity: body.is_affected_by_gravity(),
            body_id: body.get_body_id(),
            collide_id: body.get_collide_id(),
            is_dynamic: body.is_dynamic(),
        }
    }
}

impl TryFrom<BodyRecord> for PhysicsBody {
    type Error = PhysicsError;

    fn try_from(record: BodyRecord) -> Result<Self> {
        let geometry = ShapeGeometry::from_parts(
            record.body_type,
            Vector2::from(record.center_offset),
            [
                Vector2::from(record.bottom_left),
                Vector2::from(record.bottom_right),
                Vector2::from(record.top_left),
                Vector2::from(record.top_right),
            ],
            record.width,
            record.height,
            record.radius,
        )?;

        let mut body = PhysicsBody::new(geometry, record.body_id, record.collide_id, record.is_dynamic);
        body.set_max_velocity(record.max_velo);
        body.set_friction(record.friction);
        body.set_affected_by_gravity(record.gravity);

        Ok(body)
    }
}

impl PhysicsBody {
    /// Returns the persisted form of this body
    pub fn to_record(&self) -> BodyRecord {
        BodyRecord::from(self)
    }

    /// Serializes the body as a JSON record
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_record())?)
    }

    /// Parses a body from a JSON record
    ///
    /// Missing keys, wrong value types, unknown body types and box corners
    /// that disagree with the stored dimensions are all errors.
    pub fn from_json(json: &str) -> Result<Self> {
        let record: BodyRecord = serde_json::from_str(json)?;
        PhysicsBody::try_from(record)
    }
}
