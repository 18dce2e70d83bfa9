//! Snake Pilot - GDExtension bindings
//!
//! Exposes the snake head controller, the FPS HUD and the headless
//! snake world to Godot 4 via GDExtension.

use godot::prelude::*;
use snake_sim::registry::SCRIPT_CLASSES;
use tracing_subscriber::EnvFilter;

mod host;
mod hud;
mod sim_bridge;
mod snake_head;

/// GDExtension entry point.
struct SnakeExtension;

#[gdextension(entry_symbol = snake_init)]
unsafe impl ExtensionLibrary for SnakeExtension {
    fn on_level_init(level: InitLevel) {
        if level == InitLevel::Scene {
            init_logging();
            for class in SCRIPT_CLASSES {
                let callbacks = if class.callbacks.is_empty() {
                    "no virtuals".to_string()
                } else {
                    class.callbacks.join(", ")
                };
                godot_print!("[GDExtension] {} extends {} ({})", class.name, class.base, callbacks);
            }
            tracing::info!(classes = SCRIPT_CLASSES.len(), "snake-pilot extension initialized");
        }
    }

    fn on_level_deinit(level: InitLevel) {
        if level == InitLevel::Scene {
            godot_print!("[GDExtension] Deinitialization");
        }
    }
}

/// Route core `tracing` events to stderr. `RUST_LOG` overrides the `info` default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        // Already installed, e.g. after a hot reload.
        godot_warn!("[GDExtension] tracing subscriber not installed: {}", err);
    }
}
