//! ECS systems for the headless snake world.
//!
//! Systems run chained, once per fixed tick:
//! - `steering_system` - input to yaw and forward velocity
//! - `movement_system` - velocity to position
//! - `lean_system` - eases camera rigs toward the turn

pub mod camera;
pub mod movement;
pub mod timing;

pub use camera::*;
pub use movement::*;
pub use timing::*;
