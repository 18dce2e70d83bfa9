//! Steering and movement systems.

use super::timing::DeltaTime;
use crate::components::*;
use crate::steering::{steer, TurnInput};
use bevy_ecs::prelude::*;

/// System that turns polled input into yaw and a forward velocity.
pub fn steering_system(
    dt: Res<DeltaTime>,
    mut query: Query<(&SteerInput, &Steering, &mut Pose, &mut Velocity, &mut Turn)>,
) {
    let delta = dt.0;
    for (input, steering, mut pose, mut vel, mut turn) in query.iter_mut() {
        let out = steer(
            &steering.0,
            TurnInput::Axis {
                left: input.left,
                right: input.right,
            },
            pose.yaw,
            delta,
        );
        pose.yaw += out.yaw_delta;
        *vel = Velocity::from_vec3(out.velocity);
        turn.0 = out.turn;
    }
}

/// System that applies velocity to position.
/// Stands in for the engine's `move_and_slide`; there is nothing to collide with.
pub fn movement_system(dt: Res<DeltaTime>, mut query: Query<(&mut Pose, &Velocity)>) {
    let delta = dt.0;
    for (mut pose, vel) in query.iter_mut() {
        pose.x += vel.vx * delta;
        pose.y += vel.vy * delta;
        pose.z += vel.vz * delta;
    }
}
