//! FPS readout.

use crate::config::HudConfig;
use crate::ports::{ClockSource, HudCanvas, Script, TextLabel};
use tracing::warn;

pub fn format_fps(fps: f64) -> String {
    format!("FPS: {:.0}", fps)
}

/// Writes the engine frame rate into a label every frame.
pub struct FpsHud<C, L> {
    config: HudConfig,
    clock: C,
    label: Option<L>,
}

impl<C: ClockSource, L> FpsHud<C, L> {
    pub fn new(config: HudConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            label: None,
        }
    }

    pub fn has_label(&self) -> bool {
        self.label.is_some()
    }
}

impl<C, H> Script<H> for FpsHud<C, H::Label>
where
    C: ClockSource,
    H: HudCanvas,
{
    fn on_ready(&mut self, canvas: &mut H) {
        self.label = canvas.lookup_child(&self.config.label_node);
        if self.label.is_none() {
            warn!(node = %self.config.label_node, "FPS label not found, HUD disabled");
        }
    }

    fn on_tick(&mut self, _canvas: &mut H, _delta: f64) {
        if let Some(label) = self.label.as_mut() {
            label.set_text(&format_fps(self.clock.frames_per_second()));
        }
    }
}
