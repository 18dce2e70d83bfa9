//! Engine-backed implementations of the core's host traits.

use godot::classes::{CharacterBody3D, Engine, Input, Label, Node, Node3D};
use godot::prelude::*;
use snake_sim::{
    ClockSource, HudCanvas, InputSource, KinematicBody, RigNode, TextLabel, Vec3,
};

pub fn to_godot(v: Vec3) -> Vector3 {
    Vector3::new(v.x, v.y, v.z)
}

pub fn from_godot(v: Vector3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

/// The `Input` singleton.
pub struct GodotInput(Gd<Input>);

impl GodotInput {
    pub fn singleton() -> Self {
        Self(Input::singleton())
    }
}

impl InputSource for GodotInput {
    fn action_strength(&self, action: &str) -> f32 {
        self.0.get_action_strength(action)
    }

    fn is_action_pressed(&self, action: &str) -> bool {
        self.0.is_action_pressed(action)
    }
}

/// Frame rate from the `Engine` singleton.
pub struct EngineClock;

impl ClockSource for EngineClock {
    fn frames_per_second(&self) -> f64 {
        Engine::singleton().get_frames_per_second()
    }
}

/// Any `Node3D` used as a camera rig.
pub struct GodotRig(Gd<Node3D>);

impl RigNode for GodotRig {
    fn rotation(&self) -> Vec3 {
        from_godot(self.0.get_rotation())
    }

    fn set_rotation(&mut self, rotation: Vec3) {
        self.0.set_rotation(to_godot(rotation));
    }
}

/// Handle to the snake head's own `CharacterBody3D` base.
pub struct GodotBody(pub Gd<CharacterBody3D>);

impl KinematicBody for GodotBody {
    type Rig = GodotRig;

    fn rotation(&self) -> Vec3 {
        from_godot(self.0.get_rotation())
    }

    fn set_rotation(&mut self, rotation: Vec3) {
        self.0.set_rotation(to_godot(rotation));
    }

    fn basis_z(&self) -> Vec3 {
        from_godot(self.0.get_global_transform().basis.col_c())
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.0.set_velocity(to_godot(velocity));
    }

    fn move_and_slide(&mut self) {
        self.0.move_and_slide();
    }

    fn lookup_child(&self, name: &str) -> Option<GodotRig> {
        self.0.try_get_node_as::<Node3D>(name).map(GodotRig)
    }
}

/// A `Label` node.
pub struct GodotLabel(Gd<Label>);

impl TextLabel for GodotLabel {
    fn set_text(&mut self, text: &str) {
        self.0.set_text(text);
    }
}

/// Any node that may parent the FPS label.
pub struct GodotCanvas(pub Gd<Node>);

impl HudCanvas for GodotCanvas {
    type Label = GodotLabel;

    fn lookup_child(&self, name: &str) -> Option<GodotLabel> {
        self.0.try_get_node_as::<Label>(name).map(GodotLabel)
    }
}
