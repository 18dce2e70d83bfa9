//! ECS components and plain math types for the snake simulation.
//!
//! Components are pure data containers attached to entities.
//! All steering and lean logic lives in `steering`, `lean` and the systems.

use crate::lean::LeanParams;
use crate::steering::SteeringParams;
use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

// ============================================================================
// MATH
// ============================================================================

/// 3D vector in Godot's convention (y up, -z forward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn with_y(self, y: f32) -> Self {
        Self { y, ..self }
    }

    pub fn with_z(self, z: f32) -> Self {
        Self { z, ..self }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

// ============================================================================
// IDENTITY
// ============================================================================

/// Unique identifier for a snake in the headless world.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnakeId(pub u32);

// ============================================================================
// SPATIAL COMPONENTS
// ============================================================================

/// Position and heading of a snake head. `yaw` is rotation about +y in radians.
#[derive(Component, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub yaw: f32,
}

impl Pose {
    pub fn new(x: f32, y: f32, z: f32, yaw: f32) -> Self {
        Self { x, y, z, yaw }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// 3D velocity in units per second.
#[derive(Component, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: f32,
    pub vy: f32,
    pub vz: f32,
}

impl Velocity {
    pub fn from_vec3(v: Vec3) -> Self {
        Self {
            vx: v.x,
            vy: v.y,
            vz: v.z,
        }
    }

    pub fn magnitude(&self) -> f32 {
        Vec3::new(self.vx, self.vy, self.vz).length()
    }
}

// ============================================================================
// STEERING COMPONENTS
// ============================================================================

/// Steering parameters, constant after spawn.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Steering(pub SteeringParams);

/// Raw axis strengths polled for the current tick.
#[derive(Component, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SteerInput {
    pub left: f32,
    pub right: f32,
}

/// Turn value produced by the last steering pass. Overwritten every tick.
#[derive(Component, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Turn(pub f32);

// ============================================================================
// CAMERA RIG
// ============================================================================

/// Camera rig attached to a snake head. Entities without one skip the lean pass.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct CameraRig {
    /// Euler rotation of the rig relative to the head.
    pub rotation: Vec3,
    pub params: LeanParams,
}

impl CameraRig {
    pub fn new(params: LeanParams) -> Self {
        Self {
            rotation: Vec3::ZERO,
            params,
        }
    }

    /// Current value on the configured lean axis.
    pub fn lean(&self) -> f32 {
        self.params.axis.read(self.rotation)
    }
}

// ============================================================================
// BUNDLES
// ============================================================================

/// Everything a steerable snake head needs.
#[derive(Bundle)]
pub struct SnakeBundle {
    pub id: SnakeId,
    pub pose: Pose,
    pub velocity: Velocity,
    pub steering: Steering,
    pub input: SteerInput,
    pub turn: Turn,
}

impl SnakeBundle {
    pub fn new(id: u32, pose: Pose, params: SteeringParams) -> Self {
        Self {
            id: SnakeId(id),
            pose,
            velocity: Velocity::default(),
            steering: Steering(params),
            input: SteerInput::default(),
            turn: Turn::default(),
        }
    }
}
