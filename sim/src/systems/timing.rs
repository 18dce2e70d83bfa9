//! Fixed-timestep configuration and the per-tick delta resource.

use bevy_ecs::prelude::*;

/// Preset tick rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimRate {
    Slow20Hz,
    Normal30Hz,
    /// Godot's default physics rate.
    Physics60Hz,
}

impl SimRate {
    pub fn hz(self) -> f32 {
        match self {
            SimRate::Slow20Hz => 20.0,
            SimRate::Normal30Hz => 30.0,
            SimRate::Physics60Hz => 60.0,
        }
    }

    pub fn timestep(self) -> f32 {
        1.0 / self.hz()
    }
}

/// Configuration for the headless world.
#[derive(Resource, Debug, Clone)]
pub struct SimConfig {
    /// Fixed timestep in seconds (e.g., 1/60 for 60 Hz).
    pub fixed_timestep: f32,
    /// Upper bound on fixed ticks run by a single `step` call.
    pub max_ticks_per_step: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::with_rate(SimRate::Physics60Hz)
    }
}

impl SimConfig {
    pub fn with_rate(rate: SimRate) -> Self {
        Self {
            fixed_timestep: rate.timestep(),
            max_ticks_per_step: 8,
        }
    }
}

/// Resource containing the delta time for the current tick.
#[derive(Resource, Default)]
pub struct DeltaTime(pub f32);
