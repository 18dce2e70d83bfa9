//! `HUD` - a `CanvasLayer` that shows the engine frame rate in its `FPSLabel` child.

use crate::host::{EngineClock, GodotCanvas, GodotLabel};
use godot::classes::{CanvasLayer, ICanvasLayer};
use godot::prelude::*;
use snake_sim::{FpsHud, HudConfig, Script};

#[derive(GodotClass)]
#[class(base=CanvasLayer, rename=HUD)]
pub struct Hud {
    base: Base<CanvasLayer>,
    hud: FpsHud<EngineClock, GodotLabel>,
}

#[godot_api]
impl ICanvasLayer for Hud {
    fn init(base: Base<CanvasLayer>) -> Self {
        Self {
            base,
            hud: FpsHud::new(HudConfig::default(), EngineClock),
        }
    }

    fn ready(&mut self) {
        let mut canvas = GodotCanvas(self.base().clone().upcast());
        self.hud.on_ready(&mut canvas);
        godot_print!("[HUD] Ready");
    }

    fn process(&mut self, delta: f64) {
        let mut canvas = GodotCanvas(self.base().clone().upcast());
        self.hud.on_tick(&mut canvas, delta);
    }
}
