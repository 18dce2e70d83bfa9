//! Camera-rig lean system.

use super::timing::DeltaTime;
use crate::components::*;
use crate::lean::apply_lean;
use bevy_ecs::prelude::*;

/// System that eases each rig toward `turn * lean_amount`.
/// Snakes without a `CameraRig` are not matched and keep steering normally.
pub fn lean_system(dt: Res<DeltaTime>, mut query: Query<(&Turn, &mut CameraRig)>) {
    let delta = dt.0;
    for (turn, mut rig) in query.iter_mut() {
        let params = rig.params;
        rig.rotation = apply_lean(rig.rotation, turn.0, &params, delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lean::LeanParams;

    #[test]
    fn test_lean_eases_toward_target() {
        let mut world = World::new();
        world.insert_resource(DeltaTime(0.1));
        world.spawn((Turn(-1.0), CameraRig::new(LeanParams::default())));

        let mut schedule = Schedule::default();
        schedule.add_systems(lean_system);
        schedule.run(&mut world);

        let mut query = world.query::<&CameraRig>();
        let rig = query.single(&world);
        assert!((rig.lean() + 0.1).abs() < 1e-6);
        assert_eq!(rig.rotation.x, 0.0);
        assert_eq!(rig.rotation.y, 0.0);
    }
}
