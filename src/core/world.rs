use crate::bodies::PhysicsBody;
use crate::core::{BodyHandle, BodyStorage, SimulationConfig};
use crate::math::{Transform, Vector3, EPSILON};
use crate::Result;

/// A body together with the transform of the entity that owns it
#[derive(Debug, Clone)]
struct BodyEntry {
    body: PhysicsBody,
    transform: Transform,
}

/// Drives a set of bodies through fixed-size simulation steps
///
/// Plays the part of the game loop: every sub-step updates each body and
/// then moves its transform by `velocity * dt`.
pub struct PhysicsWorld {
    /// All bodies with their transforms
    bodies: BodyStorage<BodyEntry>,

    /// Configuration for the simulation
    config: SimulationConfig,

    /// The total elapsed simulation time
    time: f32,
}

impl PhysicsWorld {
    /// Creates a new physics world with default settings
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    /// Creates a new physics world with the given configuration
    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            bodies: BodyStorage::new(),
            config,
            time: 0.0,
        }
    }

    /// Returns the current simulation time
    pub fn get_time(&self) -> f32 {
        self.time
    }

    /// Sets the gravity acceleration shared by every body in this world
    pub fn set_gravity(&mut self, gravity: Vector3) {
        self.config.gravity = gravity;
    }

    /// Gets the current gravity acceleration
    pub fn get_gravity(&self) -> Vector3 {
        self.config.gravity
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns a mutable reference to the simulation configuration
    pub fn get_config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.config
    }

    /// Adds a body placed at `transform` and returns its handle
    pub fn add_body(&mut self, body: PhysicsBody, transform: Transform) -> BodyHandle {
        let handle = self.bodies.add(BodyEntry { body, transform });
        log::debug!("added body {:?}", handle);
        handle
    }

    /// Removes a body from the world
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<PhysicsBody> {
        let entry = self.bodies.remove(handle)?;
        log::debug!("removed body {:?}", handle);
        Ok(entry.body)
    }

    /// Gets a reference to a body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&PhysicsBody> {
        Ok(&self.bodies.get_body(handle)?.body)
    }

    /// Gets a mutable reference to a body by its handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut PhysicsBody> {
        Ok(&mut self.bodies.get_body_mut(handle)?.body)
    }

    /// Gets the transform of a body
    pub fn get_transform(&self, handle: BodyHandle) -> Result<Transform> {
        Ok(self.bodies.get_body(handle)?.transform)
    }

    /// Sets the transform of a body
    pub fn set_transform(&mut self, handle: BodyHandle, transform: Transform) -> Result<()> {
        self.bodies.get_body_mut(handle)?.transform = transform;
        Ok(())
    }

    /// Returns all body handles in the order they were added
    pub fn handles(&self) -> Vec<BodyHandle> {
        self.bodies.handles()
    }

    /// Returns the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Removes every body and resets the clock
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.time = 0.0;
    }

    /// Runs the simulation for `time_step` seconds in fixed sub-steps
    ///
    /// Non-finite or non-positive durations are ignored. The clock only
    /// advances by the time actually simulated, so time dropped by the
    /// sub-step cap is not counted.
    pub fn step(&mut self, time_step: f32) {
        if !(time_step.is_finite() && time_step > 0.0) {
            log::warn!("ignoring simulation step of {}s", time_step);
            return;
        }

        let fixed_step = if self.config.time_step > 0.0 {
            self.config.time_step
        } else {
            time_step
        };
        let max_steps = self.config.max_substeps;

        let mut remaining_time = time_step;
        let mut steps = 0;

        while remaining_time > EPSILON && steps < max_steps {
            let dt = fixed_step.min(remaining_time);

            self.step_simulation(dt);
            self.time += dt;

            remaining_time -= dt;
            steps += 1;
        }

        if remaining_time > EPSILON {
            log::debug!("dropped {}s of simulation after {} substeps", remaining_time, steps);
        }
    }

    /// Performs a single step of the physics simulation
    fn step_simulation(&mut self, dt: f32) {
        for (_, entry) in self.bodies.iter_mut() {
            entry.body.update(&entry.transform, &self.config, dt);

            if entry.body.is_dynamic() {
                entry.transform.translate(entry.body.get_velocity() * dt);
            }
        }
    }

    /// Serializes every body as a JSON array of records, in handle order
    #[cfg(feature = "serialize")]
    pub fn save_bodies(&self) -> Result<String> {
        let mut records = Vec::with_capacity(self.bodies.len());
        for handle in self.bodies.handles() {
            records.push(self.bodies.get_body(handle)?.body.to_record());
        }

        Ok(serde_json::to_string_pretty(&records)?)
    }

    /// Adds every body from a JSON array of records, each at the origin
    ///
    /// All records are validated before any body is added, so a bad record
    /// leaves the world untouched.
    #[cfg(feature = "serialize")]
    pub fn load_bodies(&mut self, json: &str) -> Result<Vec<BodyHandle>> {
        let records: Vec<crate::bodies::BodyRecord> = serde_json::from_str(json)?;
        let bodies = records
            .into_iter()
            .map(PhysicsBody::try_from)
            .collect::<Result<Vec<_>>>()?;

        log::debug!("loaded {} bodies", bodies.len());

        Ok(bodies
            .into_iter()
            .map(|body| self.add_body(body, Transform::identity()))
            .collect())
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
