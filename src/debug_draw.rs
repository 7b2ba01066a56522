//! Debug outlines for body shapes.
//!
//! Produces world-space line loops that a renderer can upload as-is. Whether
//! anything is drawn is a property of the renderer's configuration, not of
//! the bodies.

use crate::bodies::PhysicsBody;
use crate::math::{Transform, Vector2};
use crate::shapes::BodyType;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Settings for drawing body outlines
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct DebugDrawConfig {
    /// Whether body outlines are produced at all
    pub draw_bodies: bool,

    /// Number of points used to approximate a circle (at least 3)
    pub circle_segments: u32,
}

impl DebugDrawConfig {
    /// Returns the outline of `body` placed at `transform` as a closed line
    /// loop, or nothing when drawing is disabled
    pub fn outline(&self, body: &PhysicsBody, transform: &Transform) -> Vec<Vector2> {
        if !self.draw_bodies {
            return Vec::new();
        }

        let geometry = body.get_geometry();
        match geometry.get_body_type() {
            BodyType::Box => match geometry.world_corners(transform) {
                // Loop order around the box rather than storage order
                Some([bottom_left, bottom_right, top_left, top_right]) => {
                    vec![bottom_left, bottom_right, top_right, top_left]
                }
                None => Vec::new(),
            },
            BodyType::Circle => {
                let segments = self.circle_segments.max(3);
                let radius = geometry.get_radius();
                let center = geometry.get_center_offset();

                (0..segments)
                    .map(|i| {
                        let angle = std::f32::consts::TAU * i as f32 / segments as f32;
                        let local = center + Vector2::new(angle.cos(), angle.sin()) * radius;
                        transform.transform_point(local)
                    })
                    .collect()
            }
        }
    }
}

impl Default for DebugDrawConfig {
    fn default() -> Self {
        Self {
            draw_bodies: false,
            circle_segments: 24,
        }
    }
}
