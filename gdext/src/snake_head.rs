//! `SnakeHead` - a `CharacterBody3D` steered by the `snake_left`/`snake_right` actions.
//!
//! Usage in a scene:
//! ```text
//! SnakeHead (CharacterBody3D)
//! ├── CollisionShape3D
//! └── SpringArm3D        <- leaned into turns; optional
//!     └── Camera3D
//! ```

use crate::host::{GodotBody, GodotInput};
use godot::classes::{CharacterBody3D, FileAccess, ICharacterBody3D};
use godot::prelude::*;
use snake_sim::{ExportedTuning, Script, SnakeConfig, SnakeHeadController};

#[derive(GodotClass)]
#[class(base=CharacterBody3D)]
pub struct SnakeHead {
    base: Base<CharacterBody3D>,
    /// Forward speed in units per second.
    #[export]
    speed: f32,
    /// Yaw rate in radians per second at full input.
    #[export]
    turn_speed: f32,
    /// Camera rig lean at full input, in radians.
    #[export]
    lean_amount: f32,
    /// Use `ui_left`/`ui_right` buttons and a lagging camera instead of analog roll.
    /// Tuning fields left at their defaults take the classic values.
    #[export]
    classic_controls: bool,
    /// Optional JSON config. When set it replaces the exported values above.
    #[export(file = "*.json")]
    config_path: GString,
    controller: SnakeHeadController<GodotInput>,
}

#[godot_api]
impl ICharacterBody3D for SnakeHead {
    fn init(base: Base<CharacterBody3D>) -> Self {
        let tuning = ExportedTuning::default();
        Self {
            base,
            speed: tuning.speed,
            turn_speed: tuning.turn_speed,
            lean_amount: tuning.lean_amount,
            classic_controls: tuning.classic,
            config_path: GString::new(),
            controller: SnakeHeadController::new(SnakeConfig::default(), GodotInput::singleton()),
        }
    }

    fn ready(&mut self) {
        let config = self.resolve_config();
        self.controller.set_config(config);
        let mut body = GodotBody(self.base().clone());
        self.controller.on_ready(&mut body);
        godot_print!("[SnakeHead] Ready");
    }

    fn physics_process(&mut self, delta: f64) {
        let mut body = GodotBody(self.base().clone());
        self.controller.on_tick(&mut body, delta);
    }
}

#[godot_api]
impl SnakeHead {
    /// Physics ticks since the head became ready.
    #[func]
    fn get_frame(&self) -> i64 {
        self.controller.frame() as i64
    }

    fn resolve_config(&self) -> SnakeConfig {
        let tuning = ExportedTuning {
            classic: self.classic_controls,
            speed: self.speed,
            turn_speed: self.turn_speed,
            lean_amount: self.lean_amount,
        };
        let text = (!self.config_path.is_empty())
            .then(|| FileAccess::get_file_as_string(&self.config_path).to_string());

        let resolved = SnakeConfig::resolve(&tuning, text.as_deref());
        for warning in &resolved.warnings {
            godot_warn!("[SnakeHead] config ignored: {}", warning);
        }
        if resolved.from_file {
            godot_print!("[SnakeHead] Loaded config from {}", self.config_path);
        }
        resolved.config
    }
}
