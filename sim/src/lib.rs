//! Snake Pilot - Steering Core
//!
//! Engine-independent logic behind the `SnakeHead` and `HUD` Godot classes:
//! steering, camera-rig lean and the FPS readout, written against small host
//! traits so it runs under test without an engine. Also provides a headless
//! `bevy_ecs` world that runs the same math over many snakes.

pub mod api;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod godot_bridge;
pub mod hud;
pub mod lean;
pub mod ports;
pub mod registry;
pub mod steering;
pub mod systems;
pub mod world;

pub use api::SnakeWorld;
pub use components::*;
pub use config::{ExportedTuning, HudConfig, InputMode, ResolvedConfig, SnakeConfig};
pub use controller::{SnakeHeadController, TickReport};
pub use error::ConfigError;
pub use hud::{format_fps, FpsHud};
pub use lean::{LeanAxis, LeanParams};
pub use ports::*;
pub use steering::{SteeringParams, TurnInput};
pub use world::{SnakeSnapshot, Snapshot};
