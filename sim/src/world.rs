//! Snapshot types for the headless snake world.
//!
//! The `Snapshot` struct provides a serializable view of every snake
//! that can be sent to Godot or written to disk.

use crate::components::*;
use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Snapshot of a single snake head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnakeSnapshot {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub yaw: f32,
    pub vx: f32,
    pub vy: f32,
    pub vz: f32,
    pub turn: f32,
    /// Rig lean on its configured axis; absent when the snake has no rig.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lean: Option<f32>,
}

/// Complete world snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current simulation tick.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub time: f32,
    /// Snakes ordered by id.
    pub snakes: Vec<SnakeSnapshot>,
}

impl Snapshot {
    /// Create a snapshot from the ECS world.
    pub fn from_world(world: &mut World, tick: u64, time: f32) -> Self {
        let mut query = world.query::<(
            &SnakeId,
            &Pose,
            &Velocity,
            &Turn,
            Option<&CameraRig>,
        )>();

        let mut snakes: Vec<SnakeSnapshot> = query
            .iter(world)
            .map(|(id, pose, vel, turn, rig)| SnakeSnapshot {
                id: id.0,
                x: pose.x,
                y: pose.y,
                z: pose.z,
                yaw: pose.yaw,
                vx: vel.vx,
                vy: vel.vy,
                vz: vel.vz,
                turn: turn.0,
                lean: rig.map(CameraRig::lean),
            })
            .collect();
        snakes.sort_by_key(|s| s.id);

        Self { tick, time, snakes }
    }

    pub fn snake(&self, id: u32) -> Option<&SnakeSnapshot> {
        self.snakes.iter().find(|s| s.id == id)
    }

    /// Serialize snapshot to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize snapshot to pretty JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
