//! Public API for the headless snake world.
//!
//! Runs the same steering and lean math as `SnakeHeadController`, but over
//! ECS entities instead of engine nodes. Used by tests, the demo, the
//! benchmark and Godot's `SnakeSimulation` class.
//!
//! ## Fixed Timestep
//!
//! `step(dt)` accumulates time and runs whole fixed ticks (60 Hz by default).
//! Long frames are capped at `max_ticks_per_step` ticks; the rest of the
//! backlog is dropped.

use crate::components::*;
use crate::lean::LeanParams;
use crate::steering::{SteeringParams, TurnInput};
use crate::systems::*;
use crate::world::Snapshot;
use bevy_ecs::prelude::*;
use tracing::{debug, warn};

/// The headless simulation world container.
pub struct SnakeWorld {
    world: World,
    schedule: Schedule,
    tick: u64,
    time: f32,
    /// Accumulated time for fixed timestep.
    time_accumulator: f32,
}

impl SnakeWorld {
    /// Create a new empty world at the default rate.
    pub fn new() -> Self {
        Self::with_config(SimConfig::default())
    }

    pub fn with_config(config: SimConfig) -> Self {
        let mut world = World::new();
        world.insert_resource(DeltaTime(config.fixed_timestep));
        world.insert_resource(config);

        let mut schedule = Schedule::default();
        schedule.add_systems((steering_system, movement_system, lean_system).chain());

        Self {
            world,
            schedule,
            tick: 0,
            time: 0.0,
            time_accumulator: 0.0,
        }
    }

    /// Spawn a snake head. Returns `false` if the id is already taken.
    pub fn spawn_snake(&mut self, id: u32, pose: Pose, params: SteeringParams) -> bool {
        if self.find(id).is_some() {
            warn!(id, "snake id already in use");
            return false;
        }
        self.world.spawn(SnakeBundle::new(id, pose, params));
        true
    }

    /// Give a snake a camera rig. Returns `false` for unknown ids.
    pub fn attach_rig(&mut self, id: u32, params: LeanParams) -> bool {
        match self.find(id) {
            Some(entity) => {
                self.world.entity_mut(entity).insert(CameraRig::new(params));
                true
            }
            None => false,
        }
    }

    /// Remove a snake's camera rig. Returns `false` if it had none.
    pub fn detach_rig(&mut self, id: u32) -> bool {
        match self.find(id) {
            Some(entity) => self.world.entity_mut(entity).take::<CameraRig>().is_some(),
            None => false,
        }
    }

    /// Set the analog input applied from the next tick on.
    pub fn set_axis_input(&mut self, id: u32, left: f32, right: f32) -> bool {
        self.set_input(id, SteerInput { left, right })
    }

    /// Set digital input; pressed maps to full strength.
    pub fn set_button_input(&mut self, id: u32, left: bool, right: bool) -> bool {
        let to_strength = |pressed: bool| if pressed { 1.0 } else { 0.0 };
        self.set_input(
            id,
            SteerInput {
                left: to_strength(left),
                right: to_strength(right),
            },
        )
    }

    /// Set input from either mode.
    pub fn apply_input(&mut self, id: u32, input: TurnInput) -> bool {
        match input {
            TurnInput::Axis { left, right } => self.set_axis_input(id, left, right),
            TurnInput::Buttons { left, right } => self.set_button_input(id, left, right),
        }
    }

    fn set_input(&mut self, id: u32, input: SteerInput) -> bool {
        let Some(entity) = self.find(id) else {
            return false;
        };
        match self.world.get_mut::<SteerInput>(entity) {
            Some(mut current) => {
                *current = input;
                true
            }
            None => false,
        }
    }

    fn find(&mut self, id: u32) -> Option<Entity> {
        let mut query = self.world.query::<(Entity, &SnakeId)>();
        query
            .iter(&self.world)
            .find(|(_, snake_id)| snake_id.0 == id)
            .map(|(e, _)| e)
    }

    /// Step the world forward by `dt` seconds of wall time.
    pub fn step(&mut self, dt: f32) {
        let (fixed_dt, max_ticks) = self
            .world
            .get_resource::<SimConfig>()
            .map(|c| (c.fixed_timestep, c.max_ticks_per_step))
            .unwrap_or((1.0 / 60.0, 8));

        self.time_accumulator += dt.max(0.0);

        let mut ran = 0;
        while self.time_accumulator >= fixed_dt {
            if ran == max_ticks {
                debug!(backlog = self.time_accumulator, "dropping simulation backlog");
                self.time_accumulator = 0.0;
                break;
            }
            self.fixed_update(fixed_dt);
            self.time_accumulator -= fixed_dt;
            ran += 1;
        }
    }

    /// Run a single fixed timestep update.
    fn fixed_update(&mut self, dt: f32) {
        if let Some(mut dt_res) = self.world.get_resource_mut::<DeltaTime>() {
            dt_res.0 = dt;
        }

        self.schedule.run(&mut self.world);

        self.tick += 1;
        self.time += dt;
    }

    pub fn snapshot(&mut self) -> Snapshot {
        Snapshot::from_world(&mut self.world, self.tick, self.time)
    }

    /// Get the snapshot as a JSON string.
    pub fn snapshot_json(&mut self) -> String {
        self.snapshot().to_json().unwrap_or_else(|_| "{}".to_string())
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn current_time(&self) -> f32 {
        self.time
    }

    pub fn snake_count(&mut self) -> usize {
        let mut query = self.world.query::<&SnakeId>();
        query.iter(&self.world).count()
    }
}

impl Default for SnakeWorld {
    fn default() -> Self {
        Self::new()
    }
}
