//! Snake head controller: steering, forward movement and camera-rig lean.
//!
//! Per physics tick:
//! 1. Poll the two turn actions and compute `turn`.
//! 2. Add `turn * turn_speed * delta` to the body's yaw.
//! 3. Set velocity to `-basis_z * speed` and call `move_and_slide`.
//! 4. Lean the camera rig toward `turn * lean_amount`, if the rig exists.

use crate::components::Vec3;
use crate::config::{InputMode, SnakeConfig};
use crate::lean::apply_lean;
use crate::ports::{InputSource, KinematicBody, RigNode, Script};
use crate::steering::{forward_velocity, yaw_increment, TurnInput};
use tracing::{debug, info, warn};

/// What one tick did. Returned for callers that want to observe it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub turn: f32,
    pub yaw_delta: f32,
    pub velocity: Vec3,
    /// New rig rotation, `None` when the rig was missing.
    pub rig_rotation: Option<Vec3>,
}

/// Controller for a `CharacterBody3D` snake head.
pub struct SnakeHeadController<I> {
    config: SnakeConfig,
    input: I,
    frame: u64,
    rig_missing_reported: bool,
}

impl<I: InputSource> SnakeHeadController<I> {
    pub fn new(config: SnakeConfig, input: I) -> Self {
        Self {
            config,
            input,
            frame: 0,
            rig_missing_reported: false,
        }
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SnakeConfig) {
        self.config = config;
    }

    /// Physics ticks since the last `on_ready`.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    fn poll_turn(&self) -> TurnInput {
        let (left, right) = (&self.config.left_action, &self.config.right_action);
        match self.config.input_mode {
            InputMode::Axis => TurnInput::Axis {
                left: self.input.action_strength(left),
                right: self.input.action_strength(right),
            },
            InputMode::Buttons => TurnInput::Buttons {
                left: self.input.is_action_pressed(left),
                right: self.input.is_action_pressed(right),
            },
        }
    }

    /// Run one physics tick against `body`.
    pub fn tick<B: KinematicBody>(&mut self, body: &mut B, delta: f64) -> TickReport {
        self.frame += 1;
        // A non-finite delta would poison the body and rig rotations.
        let delta = if delta.is_finite() { delta as f32 } else { 0.0 };
        let turn = self.poll_turn().turn();

        let yaw_delta = yaw_increment(turn, self.config.turn_speed, delta);
        let rotation = body.rotation();
        body.set_rotation(rotation.with_y(rotation.y + yaw_delta));

        let velocity = forward_velocity(body.basis_z(), self.config.speed);
        body.set_velocity(velocity);
        body.move_and_slide();

        let interval = self.config.debug_log_interval;
        if interval > 0 && self.frame % interval == 0 {
            debug!(
                frame = self.frame,
                turn,
                vx = velocity.x,
                vz = velocity.z,
                "snake head tick"
            );
        }

        let rig_rotation = match body.lookup_child(&self.config.rig_node) {
            Some(mut rig) => {
                self.rig_missing_reported = false;
                let next = apply_lean(rig.rotation(), turn, &self.config.lean, delta);
                rig.set_rotation(next);
                Some(next)
            }
            None => {
                if !self.rig_missing_reported {
                    warn!(node = %self.config.rig_node, "camera rig not found, skipping lean");
                    self.rig_missing_reported = true;
                }
                None
            }
        };

        TickReport {
            turn,
            yaw_delta,
            velocity,
            rig_rotation,
        }
    }
}

impl<I: InputSource, B: KinematicBody> Script<B> for SnakeHeadController<I> {
    fn on_ready(&mut self, _body: &mut B) {
        self.frame = 0;
        self.rig_missing_reported = false;
        info!(
            speed = self.config.speed,
            turn_speed = self.config.turn_speed,
            lean_amount = self.config.lean.lean_amount,
            "snake head ready"
        );
    }

    fn on_tick(&mut self, body: &mut B, delta: f64) {
        self.tick(body, delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steering::basis_z_from_yaw;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Default)]
    pub struct FakeInput {
        pub strengths: HashMap<String, f32>,
        pub pressed: HashMap<String, bool>,
    }

    impl FakeInput {
        pub fn axis(left: f32, right: f32) -> Self {
            let mut input = Self::default();
            input.strengths.insert("snake_left".into(), left);
            input.strengths.insert("snake_right".into(), right);
            input
        }
    }

    impl InputSource for FakeInput {
        fn action_strength(&self, action: &str) -> f32 {
            self.strengths.get(action).copied().unwrap_or(0.0)
        }

        fn is_action_pressed(&self, action: &str) -> bool {
            self.pressed.get(action).copied().unwrap_or(false)
        }
    }

    #[derive(Clone, Default)]
    pub struct FakeRig(pub Rc<RefCell<Vec3>>);

    impl RigNode for FakeRig {
        fn rotation(&self) -> Vec3 {
            *self.0.borrow()
        }

        fn set_rotation(&mut self, rotation: Vec3) {
            *self.0.borrow_mut() = rotation;
        }
    }

    /// Body whose basis is derived from its yaw, moving without obstacles.
    #[derive(Default)]
    pub struct FakeBody {
        pub rotation: Vec3,
        pub position: Vec3,
        pub velocity: Vec3,
        pub slides: u32,
        pub rig: Option<FakeRig>,
    }

    impl KinematicBody for FakeBody {
        type Rig = FakeRig;

        fn rotation(&self) -> Vec3 {
            self.rotation
        }

        fn set_rotation(&mut self, rotation: Vec3) {
            self.rotation = rotation;
        }

        fn basis_z(&self) -> Vec3 {
            basis_z_from_yaw(self.rotation.y)
        }

        fn set_velocity(&mut self, velocity: Vec3) {
            self.velocity = velocity;
        }

        fn move_and_slide(&mut self) {
            self.slides += 1;
            self.position = self.position + self.velocity * (1.0 / 60.0);
        }

        fn lookup_child(&self, name: &str) -> Option<FakeRig> {
            if name == "SpringArm3D" {
                self.rig.clone()
            } else {
                None
            }
        }
    }

    fn body_with_rig() -> FakeBody {
        FakeBody {
            rig: Some(FakeRig::default()),
            ..Default::default()
        }
    }

    #[test]
    fn test_turn_left_scenario() {
        let mut controller = SnakeHeadController::new(SnakeConfig::default(), FakeInput::axis(1.0, 0.0));
        let mut body = body_with_rig();
        controller.on_ready(&mut body);

        let report = controller.tick(&mut body, 0.1);

        assert_eq!(report.turn, 1.0);
        assert!((report.yaw_delta - 0.3).abs() < 1e-6);
        assert!((body.rotation.y - 0.3).abs() < 1e-6);
        assert!((body.velocity.length() - 10.0).abs() < 1e-4);
        assert_eq!(body.slides, 1);
    }

    #[test]
    fn test_velocity_uses_rotated_basis() {
        let mut controller = SnakeHeadController::new(SnakeConfig::default(), FakeInput::axis(0.0, 0.0));
        let mut body = FakeBody {
            rotation: Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
            ..Default::default()
        };
        controller.tick(&mut body, 1.0 / 60.0);
        // Yaw of +90 degrees faces -x.
        assert!((body.velocity.x + 10.0).abs() < 1e-4);
        assert!(body.velocity.z.abs() < 1e-4);
    }

    #[test]
    fn test_rotation_keeps_pitch_and_roll() {
        let mut controller = SnakeHeadController::new(SnakeConfig::default(), FakeInput::axis(0.0, 1.0));
        let mut body = FakeBody {
            rotation: Vec3::new(0.25, 0.0, -0.5),
            ..Default::default()
        };
        controller.tick(&mut body, 0.1);
        assert_eq!(body.rotation.x, 0.25);
        assert_eq!(body.rotation.z, -0.5);
        assert!((body.rotation.y + 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_lean_moves_rig_roll() {
        let mut controller = SnakeHeadController::new(SnakeConfig::default(), FakeInput::axis(1.0, 0.0));
        let mut body = body_with_rig();
        let rig = body.rig.clone().unwrap();
        rig.0.borrow_mut().x = -0.3;

        let report = controller.tick(&mut body, 0.1);

        let rot = *rig.0.borrow();
        assert_eq!(report.rig_rotation, Some(rot));
        assert_eq!(rot.x, -0.3);
        assert!((rot.z - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_missing_rig_skips_lean_only() {
        let mut controller = SnakeHeadController::new(SnakeConfig::default(), FakeInput::axis(1.0, 0.0));
        let mut body = FakeBody::default();

        for _ in 0..3 {
            let report = controller.tick(&mut body, 0.1);
            assert_eq!(report.rig_rotation, None);
        }

        assert!((body.rotation.y - 0.9).abs() < 1e-5);
        assert!((body.velocity.length() - 10.0).abs() < 1e-4);
        assert_eq!(body.slides, 3);
    }

    #[test]
    fn test_rig_name_comes_from_config() {
        let config = SnakeConfig {
            rig_node: "CameraPivot".into(),
            ..Default::default()
        };
        let mut controller = SnakeHeadController::new(config, FakeInput::axis(1.0, 0.0));
        let mut body = body_with_rig();
        let report = controller.tick(&mut body, 0.1);
        assert_eq!(report.rig_rotation, None);
    }

    #[test]
    fn test_buttons_mode() {
        let mut input = FakeInput::default();
        input.pressed.insert("ui_left".into(), true);
        let mut controller = SnakeHeadController::new(SnakeConfig::classic(), input);
        let mut body = body_with_rig();
        let rig = body.rig.clone().unwrap();

        let report = controller.tick(&mut body, 0.5);

        assert_eq!(report.turn, 1.0);
        assert!((body.rotation.y - 1.0).abs() < 1e-6);
        // Classic lean swings the rig's y, roll untouched.
        let rot = *rig.0.borrow();
        assert_eq!(rot.z, 0.0);
        assert!((rot.y - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_turn_is_not_carried_between_ticks() {
        let mut controller = SnakeHeadController::new(SnakeConfig::default(), FakeInput::axis(1.0, 0.0));
        let mut body = body_with_rig();
        controller.tick(&mut body, 0.1);

        controller.input = FakeInput::axis(0.0, 0.0);
        let report = controller.tick(&mut body, 0.1);
        assert_eq!(report.turn, 0.0);
        assert_eq!(report.yaw_delta, 0.0);
    }

    #[test]
    fn test_on_ready_resets_frame_counter() {
        let mut controller = SnakeHeadController::new(SnakeConfig::default(), FakeInput::default());
        let mut body = FakeBody::default();
        controller.on_tick(&mut body, 0.016);
        controller.on_tick(&mut body, 0.016);
        assert_eq!(controller.frame(), 2);
        controller.on_ready(&mut body);
        assert_eq!(controller.frame(), 0);
    }

    #[test]
    fn test_missing_rig_warning_rearms_when_rig_returns() {
        let mut controller = SnakeHeadController::new(SnakeConfig::default(), FakeInput::axis(1.0, 0.0));
        let mut body = FakeBody::default();
        assert!(!controller.rig_missing_reported);

        controller.tick(&mut body, 0.1);
        assert!(controller.rig_missing_reported);
        controller.tick(&mut body, 0.1);
        assert!(controller.rig_missing_reported);

        body.rig = Some(FakeRig::default());
        let report = controller.tick(&mut body, 0.1);
        assert!(report.rig_rotation.is_some());
        assert!(!controller.rig_missing_reported);

        body.rig = None;
        controller.tick(&mut body, 0.1);
        assert!(controller.rig_missing_reported);
    }

    #[test]
    fn test_non_finite_delta_leaves_rotations_finite() {
        let mut controller = SnakeHeadController::new(SnakeConfig::default(), FakeInput::axis(1.0, 0.0));
        let mut body = body_with_rig();
        let rig = body.rig.clone().unwrap();

        let report = controller.tick(&mut body, f64::NAN);

        assert_eq!(report.yaw_delta, 0.0);
        assert_eq!(body.rotation, Vec3::ZERO);
        assert_eq!(*rig.0.borrow(), Vec3::ZERO);
        assert!((body.velocity.length() - 10.0).abs() < 1e-4);
    }
}
