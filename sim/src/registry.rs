//! Classes the extension exposes to Godot, and the virtuals each one binds.

/// Descriptor for one exposed script class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptClass {
    /// Class name as seen by Godot.
    pub name: &'static str,
    /// Engine class it extends.
    pub base: &'static str,
    /// Engine virtuals the class overrides.
    pub callbacks: &'static [&'static str],
}

pub const SNAKE_HEAD: ScriptClass = ScriptClass {
    name: "SnakeHead",
    base: "CharacterBody3D",
    callbacks: &["_ready", "_physics_process"],
};

pub const HUD: ScriptClass = ScriptClass {
    name: "HUD",
    base: "CanvasLayer",
    callbacks: &["_ready", "_process"],
};

pub const SNAKE_SIMULATION: ScriptClass = ScriptClass {
    name: "SnakeSimulation",
    base: "RefCounted",
    callbacks: &[],
};

/// Registered at scene-level initialization, in this order.
pub const SCRIPT_CLASSES: &[ScriptClass] = &[SNAKE_HEAD, HUD, SNAKE_SIMULATION];

pub fn find_class(name: &str) -> Option<&'static ScriptClass> {
    SCRIPT_CLASSES.iter().find(|c| c.name == name)
}
