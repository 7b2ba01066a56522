use crate::error::PhysicsError;
use crate::math::{Aabb, Transform, Vector2};
use crate::shapes::BodyType;
use crate::Result;

use approx::relative_eq;

/// Collision shape of a body in its local space
///
/// Only independent quantities are stored. The box corners are computed on
/// read from the width, height, center offset and the shift of the box
/// center away from the offset, so they cannot drift out of sync.
///
/// Degenerate dimensions (zero or negative) are accepted and simply produce
/// collapsed or inverted geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeGeometry {
    /// Which of the box or radius fields is active
    body_type: BodyType,

    /// Offset of the shape from the owning entity's anchor point
    center_offset: Vector2,

    /// Box width
    width: f32,

    /// Box height
    height: f32,

    /// Circle radius
    radius: f32,

    /// Box center relative to `center_offset`; non-zero only for boxes
    /// built from explicit corners that are not centered on the offset
    box_shift: Vector2,
}

impl ShapeGeometry {
    /// Creates a box centered on `center_offset`
    pub fn new_box(width: f32, height: f32, center_offset: Vector2) -> Self {
        Self {
            body_type: BodyType::Box,
            center_offset,
            width,
            height,
            radius: 0.0,
            box_shift: Vector2::zero(),
        }
    }

    /// Creates a box from its bottom-left and top-right corners
    ///
    /// The corners are kept where they are; `center_offset` is stored as the
    /// anchor that later offset changes move the box relative to.
    pub fn from_corners(bottom_left: Vector2, top_right: Vector2, center_offset: Vector2) -> Self {
        let mut geometry = Self::new_box(0.0, 0.0, center_offset);
        geometry.set_box_corners(bottom_left, top_right);
        geometry
    }

    /// Creates a circle centered on `center_offset`
    pub fn new_circle(radius: f32, center_offset: Vector2) -> Self {
        Self {
            body_type: BodyType::Circle,
            center_offset,
            width: 0.0,
            height: 0.0,
            radius,
            box_shift: Vector2::zero(),
        }
    }

    /// Rebuilds geometry from persisted fields, rejecting box corners that
    /// disagree with each other or with the stored width and height
    ///
    /// Corners are ignored for circles since the box is inactive there.
    pub fn from_parts(
        body_type: BodyType,
        center_offset: Vector2,
        corners: [Vector2; 4],
        width: f32,
        height: f32,
        radius: f32,
    ) -> Result<Self> {
        let mut geometry = Self {
            body_type,
            center_offset,
            width,
            height,
            radius,
            box_shift: Vector2::zero(),
        };

        if body_type == BodyType::Box {
            let [bottom_left, bottom_right, top_left, top_right] = corners;

            let tolerance = corner_tolerance(&corners, center_offset);
            let check = |field: &str, stored: f32, derived: f32| check_close(field, stored, derived, tolerance);

            check("bottom right x", bottom_right.x, top_right.x)?;
            check("bottom right y", bottom_right.y, bottom_left.y)?;
            check("top left x", top_left.x, bottom_left.x)?;
            check("top left y", top_left.y, top_right.y)?;
            check("width", width, top_right.x - bottom_left.x)?;
            check("height", height, top_right.y - bottom_left.y)?;

            geometry.box_shift = (bottom_left + top_right) * 0.5 - center_offset;
        }

        Ok(geometry)
    }

    /// Returns the shape kind
    pub fn get_body_type(&self) -> BodyType {
        self.body_type
    }

    /// Sets the shape kind; the inactive fields are kept as they are
    pub fn set_body_type(&mut self, body_type: BodyType) {
        self.body_type = body_type;
    }

    /// Returns the offset of the shape from the entity anchor
    pub fn get_center_offset(&self) -> Vector2 {
        self.center_offset
    }

    /// Moves the shape; the box travels with the offset
    pub fn set_center_offset(&mut self, center_offset: Vector2) {
        self.center_offset = center_offset;
    }

    pub fn get_width(&self) -> f32 {
        self.width
    }

    /// Resizes the box horizontally about its center
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn get_height(&self) -> f32 {
        self.height
    }

    /// Resizes the box vertically about its center
    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// Center of the box in local space
    pub fn box_center(&self) -> Vector2 {
        self.center_offset + self.box_shift
    }

    /// Box corners in the order bottom-left, bottom-right, top-left,
    /// top-right, regardless of which shape is active
    fn box_corners(&self) -> [Vector2; 4] {
        let center = self.box_center();
        let half_width = self.width * 0.5;
        let half_height = self.height * 0.5;

        [
            center + Vector2::new(-half_width, -half_height),
            center + Vector2::new(half_width, -half_height),
            center + Vector2::new(-half_width, half_height),
            center + Vector2::new(half_width, half_height),
        ]
    }

    /// Active box corners; a circle reports all zeros
    pub fn corners(&self) -> [Vector2; 4] {
        match self.body_type {
            BodyType::Box => self.box_corners(),
            BodyType::Circle => [Vector2::zero(); 4],
        }
    }

    pub fn get_bottom_left(&self) -> Vector2 {
        self.corners()[0]
    }

    pub fn get_bottom_right(&self) -> Vector2 {
        self.corners()[1]
    }

    pub fn get_top_left(&self) -> Vector2 {
        self.corners()[2]
    }

    pub fn get_top_right(&self) -> Vector2 {
        self.corners()[3]
    }

    /// Moves the bottom-left corner, keeping the top-right corner fixed
    pub fn set_bottom_left(&mut self, bottom_left: Vector2) {
        let [_, _, _, top_right] = self.box_corners();
        self.set_box_corners(bottom_left, top_right);
    }

    /// Moves the bottom-right corner, keeping the top-left corner fixed
    pub fn set_bottom_right(&mut self, bottom_right: Vector2) {
        let [_, _, top_left, _] = self.box_corners();
        self.set_box_corners(
            Vector2::new(top_left.x, bottom_right.y),
            Vector2::new(bottom_right.x, top_left.y),
        );
    }

    /// Moves the top-left corner, keeping the bottom-right corner fixed
    pub fn set_top_left(&mut self, top_left: Vector2) {
        let [_, bottom_right, _, _] = self.box_corners();
        self.set_box_corners(
            Vector2::new(top_left.x, bottom_right.y),
            Vector2::new(bottom_right.x, top_left.y),
        );
    }

    /// Moves the top-right corner, keeping the bottom-left corner fixed
    pub fn set_top_right(&mut self, top_right: Vector2) {
        let [bottom_left, _, _, _] = self.box_corners();
        self.set_box_corners(bottom_left, top_right);
    }

    fn set_box_corners(&mut self, bottom_left: Vector2, top_right: Vector2) {
        self.width = top_right.x - bottom_left.x;
        self.height = top_right.y - bottom_left.y;
        self.box_shift = (bottom_left + top_right) * 0.5 - self.center_offset;
    }

    /// Area of the active shape
    pub fn area(&self) -> f32 {
        match self.body_type {
            BodyType::Box => (self.width * self.height).abs(),
            BodyType::Circle => std::f32::consts::PI * self.radius * self.radius,
        }
    }

    /// Bounds of the active shape in local space
    pub fn local_bounds(&self) -> Aabb {
        match self.body_type {
            BodyType::Box => bounds_of(&self.box_corners(), self.box_center()),
            BodyType::Circle => {
                let radius = self.radius.abs();
                Aabb::from_center_half_extents(self.center_offset, Vector2::new(radius, radius))
            }
        }
    }

    /// Box corners in world space, or `None` for a circle
    pub fn world_corners(&self, transform: &Transform) -> Option<[Vector2; 4]> {
        match self.body_type {
            BodyType::Box => Some(self.box_corners().map(|corner| transform.transform_point(corner))),
            BodyType::Circle => None,
        }
    }

    /// Bounds of the active shape in world space
    pub fn world_bounds(&self, transform: &Transform) -> Aabb {
        match self.world_corners(transform) {
            Some(corners) => bounds_of(&corners, transform.transform_point(self.box_center())),
            None => {
                let scale = transform.scale.x.abs().max(transform.scale.y.abs());
                let radius = self.radius.abs() * scale;
                Aabb::from_center_half_extents(
                    transform.transform_point(self.center_offset),
                    Vector2::new(radius, radius),
                )
            }
        }
    }
}

impl Default for ShapeGeometry {
    fn default() -> Self {
        Self::new_circle(0.0, Vector2::zero())
    }
}

fn bounds_of(points: &[Vector2], fallback: Vector2) -> Aabb {
    Aabb::from_points(points).unwrap_or_else(|| Aabb::new(fallback, fallback))
}

/// Rounding allowance for persisted corners, in units of `f32::EPSILON`
/// times the largest coordinate involved
const CORNER_TOLERANCE_ULPS: f32 = 32.0;

/// Smallest absolute difference still treated as agreement
const MIN_CORNER_TOLERANCE: f32 = 1.0e-4;

/// Absolute tolerance for comparing corners that were rounded to `f32` at
/// their own magnitude
fn corner_tolerance(corners: &[Vector2; 4], center_offset: Vector2) -> f32 {
    let magnitude = corners
        .iter()
        .chain(std::iter::once(&center_offset))
        .flat_map(|point| [point.x.abs(), point.y.abs()])
        .fold(1.0, f32::max);

    (CORNER_TOLERANCE_ULPS * f32::EPSILON * magnitude).max(MIN_CORNER_TOLERANCE)
}

fn check_close(field: &str, stored: f32, derived: f32, tolerance: f32) -> Result<()> {
    if relative_eq!(stored, derived, epsilon = tolerance, max_relative = 1.0e-5) {
        Ok(())
    } else {
        Err(PhysicsError::InconsistentGeometry(format!(
            "{} is {} but the box corners imply {}",
            field, stored, derived
        )))
    }
}
