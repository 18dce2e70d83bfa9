//! Camera-rig lean: first-order approach of one rig axis toward `turn * lean_amount`.

use crate::components::Vec3;
use serde::{Deserialize, Serialize};

/// Which rig rotation component leans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeanAxis {
    /// Tilt about the forward axis (rotation.z).
    #[default]
    Roll,
    /// Swing about the vertical axis (rotation.y), a lagging camera.
    Yaw,
}

impl LeanAxis {
    pub fn read(self, rotation: Vec3) -> f32 {
        match self {
            LeanAxis::Roll => rotation.z,
            LeanAxis::Yaw => rotation.y,
        }
    }

    pub fn write(self, rotation: Vec3, value: f32) -> Vec3 {
        match self {
            LeanAxis::Roll => rotation.with_z(value),
            LeanAxis::Yaw => rotation.with_y(value),
        }
    }
}

/// Lean tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeanParams {
    /// Target lean per unit of turn.
    pub lean_amount: f32,
    /// Approach rate in 1/s.
    pub smoothing_rate: f32,
    pub axis: LeanAxis,
}

impl Default for LeanParams {
    fn default() -> Self {
        Self {
            lean_amount: 0.2,
            smoothing_rate: 5.0,
            axis: LeanAxis::Roll,
        }
    }
}

/// Move `current` toward `target` by `rate * delta` of the gap.
///
/// The factor is clamped to [0, 1] so a long frame lands on the target
/// instead of overshooting it. A NaN factor leaves `current` unchanged.
#[inline]
pub fn smooth_toward(current: f32, target: f32, rate: f32, delta: f32) -> f32 {
    let factor = rate * delta;
    if factor.is_nan() {
        return current;
    }
    current + (target - current) * factor.clamp(0.0, 1.0)
}

/// New rig rotation after one tick. Only `params.axis` changes.
pub fn apply_lean(rotation: Vec3, turn: f32, params: &LeanParams, delta: f32) -> Vec3 {
    let target = turn * params.lean_amount;
    let current = params.axis.read(rotation);
    let next = smooth_toward(current, target, params.smoothing_rate, delta);
    params.axis.write(rotation, next)
}
