use crate::bodies::MotionState;
use crate::core::SimulationConfig;
use crate::math::{Aabb, Transform, Vector2, Vector3};
use crate::shapes::{BodyType, ShapeGeometry};

/// Physics state and collision shape attached to one game entity
///
/// A body is owned exclusively by its entity. Dynamic bodies integrate their
/// motion on every [`update`](Self::update); static bodies keep whatever
/// motion state they were given and never move.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhysicsBody {
    /// The body's collision shape
    geometry: ShapeGeometry,

    /// Forces and kinematic state
    motion: MotionState,

    /// The collision category of this body
    body_id: u32,

    /// The categories this body collides with
    collide_id: u32,

    /// Whether the body integrates motion
    dynamic: bool,

    /// Shape center in world space as of the last update
    world_center: Vector2,
}

impl PhysicsBody {
    /// Creates a body from an existing shape
    pub fn new(geometry: ShapeGeometry, body_id: u32, collide_id: u32, dynamic: bool) -> Self {
        Self {
            geometry,
            motion: MotionState::new(),
            body_id,
            collide_id,
            dynamic,
            world_center: geometry.get_center_offset(),
        }
    }

    /// Creates a box body centered on `center_offset`
    pub fn new_box(
        width: f32,
        height: f32,
        center_offset: Vector2,
        body_id: u32,
        collide_id: u32,
        dynamic: bool,
    ) -> Self {
        Self::new(ShapeGeometry::new_box(width, height, center_offset), body_id, collide_id, dynamic)
    }

    /// Creates a box body from its bottom-left and top-right corners
    pub fn from_corners(
        bottom_left: Vector2,
        top_right: Vector2,
        center_offset: Vector2,
        body_id: u32,
        collide_id: u32,
        dynamic: bool,
    ) -> Self {
        Self::new(
            ShapeGeometry::from_corners(bottom_left, top_right, center_offset),
            body_id,
            collide_id,
            dynamic,
        )
    }

    /// Creates a circle body centered on `center_offset`
    pub fn new_circle(radius: f32, center_offset: Vector2, body_id: u32, collide_id: u32, dynamic: bool) -> Self {
        Self::new(ShapeGeometry::new_circle(radius, center_offset), body_id, collide_id, dynamic)
    }

    /// Advances the body by one frame
    ///
    /// Records the shape's world center from `transform`, then, for dynamic
    /// bodies, integrates forces into acceleration and velocity. Writing the
    /// resulting `velocity * dt` into the transform is left to the caller.
    pub fn update(&mut self, transform: &Transform, config: &SimulationConfig, dt: f32) {
        self.world_center = transform.transform_point(self.geometry.get_center_offset());

        if !self.dynamic {
            return;
        }

        self.motion.integrate(config.gravity, dt);

        log::trace!(
            "body {} integrated over {}s: net force {}, velocity {}",
            self.body_id,
            dt,
            self.motion.get_net_force(),
            self.motion.get_velocity()
        );
    }

    /// Returns the shape
    pub fn get_geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    /// Returns the shape for in-place editing
    pub fn get_geometry_mut(&mut self) -> &mut ShapeGeometry {
        &mut self.geometry
    }

    /// Returns the motion state
    pub fn get_motion(&self) -> &MotionState {
        &self.motion
    }

    /// Returns the motion state for in-place editing
    pub fn get_motion_mut(&mut self) -> &mut MotionState {
        &mut self.motion
    }

    /// Shape center in world space as recorded by the last update
    pub fn get_world_center(&self) -> Vector2 {
        self.world_center
    }

    /// Bounds of the shape in world space
    pub fn world_bounds(&self, transform: &Transform) -> Aabb {
        self.geometry.world_bounds(transform)
    }

    // Forces and motion

    /// Adds to the force applied during the next update
    pub fn apply_force(&mut self, force: Vector3) {
        self.motion.apply_force(force);
    }

    pub fn get_force(&self) -> Vector3 {
        self.motion.get_force()
    }

    pub fn set_force(&mut self, force: Vector3) {
        self.motion.set_force(force);
    }

    pub fn get_frictional_force(&self) -> Vector3 {
        self.motion.get_frictional_force()
    }

    pub fn set_frictional_force(&mut self, force: Vector3) {
        self.motion.set_frictional_force(force);
    }

    pub fn get_net_force(&self) -> Vector3 {
        self.motion.get_net_force()
    }

    pub fn get_acceleration(&self) -> Vector3 {
        self.motion.get_acceleration()
    }

    pub fn set_acceleration(&mut self, acceleration: Vector3) {
        self.motion.set_acceleration(acceleration);
    }

    pub fn get_velocity(&self) -> Vector3 {
        self.motion.get_velocity()
    }

    pub fn set_velocity(&mut self, velocity: Vector3) {
        self.motion.set_velocity(velocity);
    }

    pub fn get_max_velocity(&self) -> f32 {
        self.motion.get_max_velocity()
    }

    pub fn set_max_velocity(&mut self, max_velocity: f32) {
        self.motion.set_max_velocity(max_velocity);
    }

    pub fn get_friction(&self) -> f32 {
        self.motion.get_friction()
    }

    pub fn set_friction(&mut self, friction: f32) {
        self.motion.set_friction(friction);
    }

    pub fn is_affected_by_gravity(&self) -> bool {
        self.motion.is_affected_by_gravity()
    }

    pub fn set_affected_by_gravity(&mut self, affected: bool) {
        self.motion.set_affected_by_gravity(affected);
    }

    pub fn get_mass(&self) -> f32 {
        self.motion.get_mass()
    }

    pub fn set_mass(&mut self, mass: f32) {
        self.motion.set_mass(mass);
    }

    // Shape

    pub fn get_body_type(&self) -> BodyType {
        self.geometry.get_body_type()
    }

    pub fn set_body_type(&mut self, body_type: BodyType) {
        self.geometry.set_body_type(body_type);
    }

    pub fn get_center_offset(&self) -> Vector2 {
        self.geometry.get_center_offset()
    }

    pub fn set_center_offset(&mut self, center_offset: Vector2) {
        self.geometry.set_center_offset(center_offset);
    }

    pub fn get_bottom_left(&self) -> Vector2 {
        self.geometry.get_bottom_left()
    }

    pub fn set_bottom_left(&mut self, corner: Vector2) {
        self.geometry.set_bottom_left(corner);
    }

    pub fn get_bottom_right(&self) -> Vector2 {
        self.geometry.get_bottom_right()
    }

    pub fn set_bottom_right(&mut self, corner: Vector2) {
        self.geometry.set_bottom_right(corner);
    }

    pub fn get_top_left(&self) -> Vector2 {
        self.geometry.get_top_left()
    }

    pub fn set_top_left(&mut self, corner: Vector2) {
        self.geometry.set_top_left(corner);
    }

    pub fn get_top_right(&self) -> Vector2 {
        self.geometry.get_top_right()
    }

    pub fn set_top_right(&mut self, corner: Vector2) {
        self.geometry.set_top_right(corner);
    }

    pub fn get_width(&self) -> f32 {
        self.geometry.get_width()
    }

    pub fn set_width(&mut self, width: f32) {
        self.geometry.set_width(width);
    }

    pub fn get_height(&self) -> f32 {
        self.geometry.get_height()
    }

    pub fn set_height(&mut self, height: f32) {
        self.geometry.set_height(height);
    }

    pub fn get_radius(&self) -> f32 {
        self.geometry.get_radius()
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.geometry.set_radius(radius);
    }

    // Identifiers

    pub fn get_body_id(&self) -> u32 {
        self.body_id
    }

    pub fn set_body_id(&mut self, body_id: u32) {
        self.body_id = body_id;
    }

    pub fn get_collide_id(&self) -> u32 {
        self.collide_id
    }

    pub fn set_collide_id(&mut self, collide_id: u32) {
        self.collide_id = collide_id;
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    pub fn set_dynamic(&mut self, dynamic: bool) {
        self.dynamic = dynamic;
    }
}
