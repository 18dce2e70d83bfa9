//! Godot Integration Bridge
//!
//! Flat `f32` encoding of a `Snapshot` for transfer into a `PackedFloat32Array`.
//!
//! # Buffer Layout (Version 1.0)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │ HEADER (1 element)                                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │ [0] snake_count (as f32)                                        │
//! ├─────────────────────────────────────────────────────────────────┤
//! │ For each snake i (offset = 1 + i * SNAKE_STRIDE):               │
//! │   [+0] id       - Snake ID (u32 as f32)                         │
//! │   [+1] x        - X position (world units)                      │
//! │   [+2] y        - Y position (world units)                      │
//! │   [+3] z        - Z position (world units)                      │
//! │   [+4] yaw      - Heading (radians)                             │
//! │   [+5] vx       - X velocity (units/sec)                        │
//! │   [+6] vz       - Z velocity (units/sec)                        │
//! │   [+7] turn     - Turn input of the last tick                   │
//! │   [+8] has_rig  - 1.0 if a camera rig is attached, else 0.0     │
//! │   [+9] lean     - Rig lean (0.0 without a rig)                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage from Godot (GDScript)
//!
//! ```gdscript
//! func parse_snapshot(buffer: PackedFloat32Array):
//!     var stride = sim.get_snake_stride()
//!     for i in range(int(buffer[0])):
//!         var offset = 1 + i * stride
//!         var pos = Vector3(buffer[offset + 1], buffer[offset + 2], buffer[offset + 3])
//!         var yaw = buffer[offset + 4]
//! ```
//!
//! Snakes appear in snapshot order (ascending id), so output is deterministic.

use crate::world::Snapshot;

/// Number of f32 values per snake.
///
/// **Part of the FFI contract. Do not change without versioning.**
pub const SNAKE_STRIDE: usize = 10;

/// Number of f32 values in the buffer header.
pub const HEADER_SIZE: usize = 1;

pub const FIELD_ID: usize = 0;
pub const FIELD_X: usize = 1;
pub const FIELD_Y: usize = 2;
pub const FIELD_Z: usize = 3;
pub const FIELD_YAW: usize = 4;
pub const FIELD_VX: usize = 5;
pub const FIELD_VZ: usize = 6;
pub const FIELD_TURN: usize = 7;
pub const FIELD_HAS_RIG: usize = 8;
pub const FIELD_LEAN: usize = 9;

/// Convert a snapshot to a flat buffer for Godot.
pub fn snapshot_to_flatbuffer(snapshot: &Snapshot) -> Vec<f32> {
    let snake_count = snapshot.snakes.len();
    let buffer_size = calculate_buffer_size(snake_count);

    let mut buffer = Vec::with_capacity(buffer_size);
    buffer.push(snake_count as f32);

    for snake in &snapshot.snakes {
        buffer.extend_from_slice(&[
            snake.id as f32,
            snake.x,
            snake.y,
            snake.z,
            snake.yaw,
            snake.vx,
            snake.vz,
            snake.turn,
            if snake.lean.is_some() { 1.0 } else { 0.0 },
            snake.lean.unwrap_or(0.0),
        ]);
    }

    debug_assert_eq!(buffer.len(), buffer_size, "Buffer size mismatch");
    buffer
}

#[inline]
pub fn calculate_buffer_size(snake_count: usize) -> usize {
    HEADER_SIZE + snake_count * SNAKE_STRIDE
}

/// Parse the snake count from a flat buffer. `None` if the buffer is empty.
#[inline]
pub fn parse_snake_count(buffer: &[f32]) -> Option<usize> {
    buffer.first().map(|&count| count as usize)
}

#[inline]
pub const fn snake_offset(snake_index: usize) -> usize {
    HEADER_SIZE + snake_index * SNAKE_STRIDE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SnakeWorld;
    use crate::components::Pose;
    use crate::lean::LeanParams;
    use crate::steering::SteeringParams;

    #[test]
    fn test_empty_world() {
        let mut sim = SnakeWorld::new();
        let buffer = snapshot_to_flatbuffer(&sim.snapshot());
        assert_eq!(buffer, vec![0.0]);
    }

    #[test]
    fn test_layout() {
        let mut sim = SnakeWorld::new();
        sim.spawn_snake(7, Pose::new(1.0, 2.0, 3.0, 0.5), SteeringParams::default());
        sim.spawn_snake(4, Pose::new(-1.0, 0.0, 8.0, 0.0), SteeringParams::default());
        sim.attach_rig(7, LeanParams::default());

        let buffer = snapshot_to_flatbuffer(&sim.snapshot());

        assert_eq!(buffer.len(), calculate_buffer_size(2));
        assert_eq!(parse_snake_count(&buffer), Some(2));

        // Sorted by id.
        let first = snake_offset(0);
        assert_eq!(buffer[first + FIELD_ID], 4.0);
        assert_eq!(buffer[first + FIELD_Z], 8.0);
        assert_eq!(buffer[first + FIELD_HAS_RIG], 0.0);
        assert_eq!(buffer[first + FIELD_LEAN], 0.0);

        let second = snake_offset(1);
        assert_eq!(buffer[second + FIELD_ID], 7.0);
        assert_eq!(buffer[second + FIELD_X], 1.0);
        assert_eq!(buffer[second + FIELD_Y], 2.0);
        assert_eq!(buffer[second + FIELD_YAW], 0.5);
        assert_eq!(buffer[second + FIELD_HAS_RIG], 1.0);
    }

    #[test]
    fn test_determinism() {
        let build = || {
            let mut sim = SnakeWorld::new();
            sim.spawn_snake(1, Pose::default(), SteeringParams::default());
            sim.spawn_snake(2, Pose::new(10.0, 0.0, 0.0, 1.0), SteeringParams::default());
            sim.set_axis_input(2, 0.3, 0.9);
            for _ in 0..20 {
                sim.step(0.02);
            }
            snapshot_to_flatbuffer(&sim.snapshot())
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_parse_snake_count() {
        assert_eq!(parse_snake_count(&[]), None);
        assert_eq!(parse_snake_count(&[3.0]), Some(3));
    }

    #[test]
    fn test_field_offsets_are_valid() {
        assert_eq!(SNAKE_STRIDE, FIELD_LEAN + 1);
        assert!(FIELD_HAS_RIG < SNAKE_STRIDE);
    }
}
