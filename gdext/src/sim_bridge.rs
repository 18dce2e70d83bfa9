//! SnakeSimulation - Godot class that wraps the headless snake world.
//!
//! Useful for AI snakes, replays and tests that should not need physics bodies.
//!
//! ## Flat Buffer Format
//!
//! `get_snapshot_buffer()` returns a `PackedFloat32Array`:
//!
//! ```text
//! [0] = snake_count
//! For each snake i (offset = 1 + i * 10):
//!   [+0] id, [+1] x, [+2] y, [+3] z, [+4] yaw,
//!   [+5] vx, [+6] vz, [+7] turn, [+8] has_rig, [+9] lean
//! ```
//!
//! See `sim/src/godot_bridge.rs` for the authoritative format documentation.

use godot::builtin::PackedFloat32Array;
use godot::prelude::*;
use snake_sim::godot_bridge::{snapshot_to_flatbuffer, HEADER_SIZE, SNAKE_STRIDE};
use snake_sim::systems::{SimConfig, SimRate};
use snake_sim::{LeanAxis, LeanParams, Pose, SnakeConfig, SnakeWorld, SteeringParams};

/// Headless snake world exposed to GDScript.
///
/// Usage in GDScript:
/// ```gdscript
/// var sim = SnakeSimulation.new()
/// sim.spawn_snake(0, Vector3.ZERO, 0.0, true)
///
/// func _physics_process(delta):
///     sim.set_axis_input(0, Input.get_action_strength("snake_left"), 0.0)
///     sim.step(delta)
///     var buffer = sim.get_snapshot_buffer()
/// ```
#[derive(GodotClass)]
#[class(base=RefCounted)]
pub struct SnakeSimulation {
    base: Base<RefCounted>,
    sim: SnakeWorld,
}

#[godot_api]
impl IRefCounted for SnakeSimulation {
    /// Initialize at Godot's default 60 Hz physics rate.
    fn init(base: Base<RefCounted>) -> Self {
        Self {
            base,
            sim: SnakeWorld::with_config(SimConfig::with_rate(SimRate::Physics60Hz)),
        }
    }
}

#[godot_api]
impl SnakeSimulation {
    // ========================================================================
    // SIMULATION CONTROL
    // ========================================================================

    /// Step the world forward by `delta` seconds (fixed timestep inside).
    #[func]
    fn step(&mut self, delta: f64) {
        self.sim.step(delta as f32);
    }

    #[func]
    fn get_tick(&self) -> i64 {
        self.sim.current_tick() as i64
    }

    #[func]
    fn get_time(&self) -> f64 {
        self.sim.current_time() as f64
    }

    // ========================================================================
    // SPAWNING API
    // ========================================================================

    /// Spawn a snake with default tuning. Returns `false` if `snake_id` is taken.
    #[func]
    fn spawn_snake(&mut self, snake_id: i32, position: Vector3, yaw: f32, with_rig: bool) -> bool {
        self.spawn_with(snake_id, position, yaw, with_rig, &SnakeConfig::default())
    }

    /// Spawn a snake with the classic (button, lagging camera) tuning.
    #[func]
    fn spawn_classic_snake(&mut self, snake_id: i32, position: Vector3, yaw: f32, with_rig: bool) -> bool {
        self.spawn_with(snake_id, position, yaw, with_rig, &SnakeConfig::classic())
    }

    /// Spawn a snake with explicit tuning.
    #[func]
    fn spawn_tuned_snake(
        &mut self,
        snake_id: i32,
        position: Vector3,
        yaw: f32,
        speed: f32,
        turn_speed: f32,
    ) -> bool {
        let pose = Pose::new(position.x, position.y, position.z, yaw);
        self.sim
            .spawn_snake(snake_id as u32, pose, SteeringParams { speed, turn_speed })
    }

    /// Attach a camera rig. `roll_axis` false leans the rig's yaw instead.
    #[func]
    fn attach_rig(&mut self, snake_id: i32, lean_amount: f32, smoothing_rate: f32, roll_axis: bool) -> bool {
        let axis = if roll_axis { LeanAxis::Roll } else { LeanAxis::Yaw };
        self.sim.attach_rig(
            snake_id as u32,
            LeanParams {
                lean_amount,
                smoothing_rate,
                axis,
            },
        )
    }

    #[func]
    fn detach_rig(&mut self, snake_id: i32) -> bool {
        self.sim.detach_rig(snake_id as u32)
    }

    // ========================================================================
    // INPUT API
    // ========================================================================

    #[func]
    fn set_axis_input(&mut self, snake_id: i32, left: f32, right: f32) -> bool {
        self.sim.set_axis_input(snake_id as u32, left, right)
    }

    #[func]
    fn set_button_input(&mut self, snake_id: i32, left: bool, right: bool) -> bool {
        self.sim.set_button_input(snake_id as u32, left, right)
    }

    // ========================================================================
    // SNAPSHOT API
    // ========================================================================

    #[func]
    fn get_snapshot_json(&mut self) -> GString {
        GString::from(self.sim.snapshot_json().as_str())
    }

    /// Flat snapshot; see module documentation for the layout.
    #[func]
    fn get_snapshot_buffer(&mut self) -> PackedFloat32Array {
        let snapshot = self.sim.snapshot();
        let buffer = snapshot_to_flatbuffer(&snapshot);
        PackedFloat32Array::from(buffer.as_slice())
    }

    /// Number of f32 values per snake in the buffer (10).
    #[func]
    fn get_snake_stride(&self) -> i32 {
        SNAKE_STRIDE as i32
    }

    /// Number of f32 values before snake data (1).
    #[func]
    fn get_header_size(&self) -> i32 {
        HEADER_SIZE as i32
    }

    #[func]
    fn get_snake_count(&mut self) -> i32 {
        self.sim.snake_count() as i32
    }
}

impl SnakeSimulation {
    fn spawn_with(
        &mut self,
        snake_id: i32,
        position: Vector3,
        yaw: f32,
        with_rig: bool,
        config: &SnakeConfig,
    ) -> bool {
        let id = snake_id as u32;
        let pose = Pose::new(position.x, position.y, position.z, yaw);
        if !self.sim.spawn_snake(id, pose, config.steering()) {
            godot_warn!("[SnakeSimulation] snake {} already exists", snake_id);
            return false;
        }
        if with_rig {
            self.sim.attach_rig(id, config.lean);
        }
        true
    }
}
