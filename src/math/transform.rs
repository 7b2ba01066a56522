use crate::math::{Vector2, Vector3};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// World placement of an entity: position, rotation about z and 2D scale
///
/// Bodies only read the transform. Whoever owns it (usually the entity, or
/// [`PhysicsWorld`](crate::core::PhysicsWorld)) writes the integrated
/// position back.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Transform {
    /// Position in world space
    pub position: Vector3,

    /// Rotation in radians, counter-clockwise about the z axis
    pub rotation: f32,

    /// Scale along x and y
    pub scale: Vector2,
}

impl Transform {
    /// Creates a new transform with the given position, rotation, and scale
    #[inline]
    pub fn new(position: Vector3, rotation: f32, scale: Vector2) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Creates a new identity transform (no translation, no rotation, unit scale)
    #[inline]
    pub fn identity() -> Self {
        Self::from_position(Vector3::zero())
    }

    /// Creates a new transform from just a position
    #[inline]
    pub fn from_position(position: Vector3) -> Self {
        Self {
            position,
            rotation: 0.0,
            scale: Vector2::new(1.0, 1.0),
        }
    }

    /// Transforms a local-space point into world space (scale, rotate, translate)
    #[inline]
    pub fn transform_point(&self, point: Vector2) -> Vector2 {
        let scaled = Vector2::new(point.x * self.scale.x, point.y * self.scale.y);
        scaled.rotate(self.rotation) + self.position.xy()
    }

    /// Moves the transform by `delta`
    #[inline]
    pub fn translate(&mut self, delta: Vector3) {
        self.position += delta;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
