use crate::math::Vector3;

/// Default per-axis velocity limit
pub const DEFAULT_MAX_VELOCITY: f32 = 20.0;

/// Default friction coefficient
pub const DEFAULT_FRICTION: f32 = 0.35;

/// Forces and kinematic state of a body, advanced once per frame
///
/// The applied force is an impulse-like input: gameplay code sets or
/// accumulates it before an update and the update consumes it. The
/// frictional force is supplied from outside and persists between frames;
/// the friction coefficient is stored for whoever computes that force and
/// is never folded in automatically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    /// Force applied by gameplay code for the coming step
    applied_force: Vector3,

    /// Force supplied by the caller's friction model
    frictional_force: Vector3,

    /// Sum of all contributions at the last integration
    net_force: Vector3,

    /// Acceleration from the last integration
    acceleration: Vector3,

    /// Current velocity
    velocity: Vector3,

    /// Configured mass; see `effective_mass`
    mass: f32,

    /// Per-axis velocity limit
    max_velocity: f32,

    /// Friction coefficient
    friction: f32,

    /// Whether the simulation's gravity acts on this body
    apply_gravity: bool,
}

impl MotionState {
    /// Creates a body at rest with default mass, friction and velocity limit
    pub fn new() -> Self {
        Self {
            applied_force: Vector3::zero(),
            frictional_force: Vector3::zero(),
            net_force: Vector3::zero(),
            acceleration: Vector3::zero(),
            velocity: Vector3::zero(),
            mass: 1.0,
            max_velocity: DEFAULT_MAX_VELOCITY,
            friction: DEFAULT_FRICTION,
            apply_gravity: false,
        }
    }

    /// Advances the state by `dt` seconds under the given gravity acceleration
    pub fn integrate(&mut self, gravity: Vector3, dt: f32) {
        let mass = self.effective_mass();

        let gravity_force = if self.apply_gravity {
            gravity * mass
        } else {
            Vector3::zero()
        };

        self.net_force = self.applied_force + self.frictional_force + gravity_force;
        self.acceleration = self.net_force / mass;
        self.velocity = (self.velocity + self.acceleration * dt).clamp_components(self.max_velocity);

        // Applied forces last exactly one step
        self.applied_force = Vector3::zero();
    }

    /// Adds to the force applied during the next step
    pub fn apply_force(&mut self, force: Vector3) {
        self.applied_force += force;
    }

    pub fn get_force(&self) -> Vector3 {
        self.applied_force
    }

    /// Replaces the force applied during the next step
    pub fn set_force(&mut self, force: Vector3) {
        self.applied_force = force;
    }

    pub fn get_frictional_force(&self) -> Vector3 {
        self.frictional_force
    }

    pub fn set_frictional_force(&mut self, force: Vector3) {
        self.frictional_force = force;
    }

    pub fn get_net_force(&self) -> Vector3 {
        self.net_force
    }

    pub fn get_acceleration(&self) -> Vector3 {
        self.acceleration
    }

    pub fn set_acceleration(&mut self, acceleration: Vector3) {
        self.acceleration = acceleration;
    }

    pub fn get_velocity(&self) -> Vector3 {
        self.velocity
    }

    /// Sets the velocity; the limit is applied on the next integration
    pub fn set_velocity(&mut self, velocity: Vector3) {
        self.velocity = velocity;
    }

    pub fn get_max_velocity(&self) -> f32 {
        self.max_velocity
    }

    pub fn set_max_velocity(&mut self, max_velocity: f32) {
        self.max_velocity = max_velocity;
    }

    pub fn get_friction(&self) -> f32 {
        self.friction
    }

    pub fn set_friction(&mut self, friction: f32) {
        self.friction = friction;
    }

    pub fn is_affected_by_gravity(&self) -> bool {
        self.apply_gravity
    }

    pub fn set_affected_by_gravity(&mut self, affected: bool) {
        self.apply_gravity = affected;
    }

    /// Returns the configured mass, which may be non-positive
    pub fn get_mass(&self) -> f32 {
        self.mass
    }

    /// Sets the mass
    ///
    /// Non-positive or non-finite values are stored as given but integrate
    /// as a unit mass.
    pub fn set_mass(&mut self, mass: f32) {
        if !(mass.is_finite() && mass > 0.0) {
            log::warn!("body mass {} is not positive; integrating with a mass of 1.0", mass);
        }
        self.mass = mass;
    }

    /// The mass used for integration: the configured mass when it is finite
    /// and positive, otherwise 1.0
    pub fn effective_mass(&self) -> f32 {
        if self.mass.is_finite() && self.mass > 0.0 {
            self.mass
        } else {
            1.0
        }
    }

    /// Brings the body to rest, dropping any pending applied force
    pub fn reset(&mut self) {
        self.applied_force = Vector3::zero();
        self.net_force = Vector3::zero();
        self.acceleration = Vector3::zero();
        self.velocity = Vector3::zero();
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::new()
    }
}
