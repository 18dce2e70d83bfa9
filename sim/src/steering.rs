//! Steering math: turn input to yaw increment and forward velocity.
//!
//! Everything here is a total function over numeric input. Nothing clamps
//! `turn`; whatever range the input source produces is propagated.

use crate::components::Vec3;
use serde::{Deserialize, Serialize};

/// Steering constants of a snake head.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteeringParams {
    /// Forward speed in units per second.
    pub speed: f32,
    /// Yaw rate in radians per second per unit of turn.
    pub turn_speed: f32,
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self {
            speed: 10.0,
            turn_speed: 3.0,
        }
    }
}

/// One tick of polled turn input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurnInput {
    /// Analog action strengths, nominally in [0, 1].
    Axis { left: f32, right: f32 },
    /// Digital pressed states.
    Buttons { left: bool, right: bool },
}

impl TurnInput {
    /// Signed turn value, positive to the left.
    pub fn turn(&self) -> f32 {
        match *self {
            TurnInput::Axis { left, right } => left - right,
            TurnInput::Buttons { left, right } => {
                let l = if left { 1.0 } else { 0.0 };
                let r = if right { 1.0 } else { 0.0 };
                l - r
            }
        }
    }
}

/// Result of one steering pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringOutput {
    pub turn: f32,
    pub yaw_delta: f32,
    pub velocity: Vec3,
}

/// Yaw added this tick: `turn * turn_speed * delta`.
#[inline]
pub fn yaw_increment(turn: f32, turn_speed: f32, delta: f32) -> f32 {
    turn * turn_speed * delta
}

/// Third basis column of a pure yaw rotation.
#[inline]
pub fn basis_z_from_yaw(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, yaw.cos())
}

/// Local forward is -z, scaled to `speed`.
#[inline]
pub fn forward_velocity(basis_z: Vec3, speed: f32) -> Vec3 {
    -basis_z * speed
}

/// Full steering pass for a body whose orientation is a yaw angle.
pub fn steer(params: &SteeringParams, input: TurnInput, yaw: f32, delta: f32) -> SteeringOutput {
    let turn = input.turn();
    let yaw_delta = yaw_increment(turn, params.turn_speed, delta);
    let velocity = forward_velocity(basis_z_from_yaw(yaw + yaw_delta), params.speed);
    SteeringOutput {
        turn,
        yaw_delta,
        velocity,
    }
}
