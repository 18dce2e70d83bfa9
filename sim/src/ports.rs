//! Host capabilities consumed by the scripts.
//!
//! The engine owns every node these traits describe. The GDExtension crate
//! implements them over `Gd<T>` handles; tests implement them with plain structs.

use crate::components::Vec3;

/// Per-entity lifecycle driven by the host.
pub trait Script<H> {
    /// Called once when the node enters the tree.
    fn on_ready(&mut self, host: &mut H);

    /// Called every tick with the elapsed seconds.
    fn on_tick(&mut self, host: &mut H, delta: f64);
}

/// Named input actions.
pub trait InputSource {
    fn action_strength(&self, action: &str) -> f32;
    fn is_action_pressed(&self, action: &str) -> bool;
}

/// Engine frame statistics.
pub trait ClockSource {
    fn frames_per_second(&self) -> f64;
}

/// A node whose Euler rotation can be read and written.
pub trait RigNode {
    fn rotation(&self) -> Vec3;
    fn set_rotation(&mut self, rotation: Vec3);
}

/// A kinematic character body with collision-aware movement.
pub trait KinematicBody {
    type Rig: RigNode;

    fn rotation(&self) -> Vec3;
    fn set_rotation(&mut self, rotation: Vec3);

    /// Third column of the global basis.
    fn basis_z(&self) -> Vec3;

    fn set_velocity(&mut self, velocity: Vec3);

    /// Moves by the current velocity, resolving collisions. May change position.
    fn move_and_slide(&mut self);

    /// Child lookup by node path. `None` when the node is missing or of the wrong type.
    fn lookup_child(&self, name: &str) -> Option<Self::Rig>;
}

/// Text sink on screen.
pub trait TextLabel {
    fn set_text(&mut self, text: &str);
}

/// A canvas that may own a label.
pub trait HudCanvas {
    type Label: TextLabel;

    fn lookup_child(&self, name: &str) -> Option<Self::Label>;
}
