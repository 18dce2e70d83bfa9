//! Tuning for snake heads and the HUD, loadable from JSON.

use crate::error::ConfigError;
use crate::lean::{LeanAxis, LeanParams};
use crate::steering::SteeringParams;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How turn input is polled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// `action_strength` on both actions.
    #[default]
    Axis,
    /// `is_action_pressed` on both actions.
    Buttons,
}

/// Snake head configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    pub speed: f32,
    pub turn_speed: f32,
    pub input_mode: InputMode,
    pub left_action: String,
    pub right_action: String,
    /// Path of the camera rig child.
    pub rig_node: String,
    pub lean: LeanParams,
    /// Physics ticks between debug log lines. 0 disables.
    pub debug_log_interval: u64,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            speed: 10.0,
            turn_speed: 3.0,
            input_mode: InputMode::Axis,
            left_action: "snake_left".to_string(),
            right_action: "snake_right".to_string(),
            rig_node: "SpringArm3D".to_string(),
            lean: LeanParams::default(),
            debug_log_interval: 120,
        }
    }
}

impl SnakeConfig {
    /// Digital `ui_left`/`ui_right` steering with a lagging camera yaw.
    pub fn classic() -> Self {
        Self {
            turn_speed: 2.0,
            input_mode: InputMode::Buttons,
            left_action: "ui_left".to_string(),
            right_action: "ui_right".to_string(),
            lean: LeanParams {
                lean_amount: 0.2,
                smoothing_rate: 3.0,
                axis: LeanAxis::Yaw,
            },
            ..Self::default()
        }
    }

    pub fn steering(&self) -> SteeringParams {
        SteeringParams {
            speed: self.speed,
            turn_speed: self.turn_speed,
        }
    }

    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "speed must be finite and non-negative, got {}",
                self.speed
            )));
        }
        if !self.turn_speed.is_finite() {
            return Err(ConfigError::Invalid("turn_speed must be finite".into()));
        }
        if !self.lean.lean_amount.is_finite() {
            return Err(ConfigError::Invalid("lean.lean_amount must be finite".into()));
        }
        if !self.lean.smoothing_rate.is_finite() || self.lean.smoothing_rate < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "lean.smoothing_rate must be finite and non-negative, got {}",
                self.lean.smoothing_rate
            )));
        }
        for (field, value) in [
            ("left_action", &self.left_action),
            ("right_action", &self.right_action),
            ("rig_node", &self.rig_node),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }
}

/// Tuning set on the node in the editor.
///
/// A field overrides the preset only when it differs from the plain default,
/// so an untouched node with `classic` set keeps the classic tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportedTuning {
    pub classic: bool,
    pub speed: f32,
    pub turn_speed: f32,
    pub lean_amount: f32,
}

impl Default for ExportedTuning {
    fn default() -> Self {
        let config = SnakeConfig::default();
        Self {
            classic: false,
            speed: config.speed,
            turn_speed: config.turn_speed,
            lean_amount: config.lean.lean_amount,
        }
    }
}

/// Outcome of [`SnakeConfig::resolve`].
#[derive(Debug)]
pub struct ResolvedConfig {
    pub config: SnakeConfig,
    /// True when a JSON document replaced the exported tuning.
    pub from_file: bool,
    /// Problems that were recovered from, in the order they occurred.
    pub warnings: Vec<ConfigError>,
}

impl SnakeConfig {
    pub fn preset(classic: bool) -> Self {
        if classic {
            Self::classic()
        } else {
            Self::default()
        }
    }

    /// Apply the exported fields that were changed from their defaults.
    pub fn with_exported(mut self, tuning: &ExportedTuning) -> Self {
        let defaults = ExportedTuning::default();
        if tuning.speed != defaults.speed {
            self.speed = tuning.speed;
        }
        if tuning.turn_speed != defaults.turn_speed {
            self.turn_speed = tuning.turn_speed;
        }
        if tuning.lean_amount != defaults.lean_amount {
            self.lean.lean_amount = tuning.lean_amount;
        }
        self
    }

    /// Build the effective config for a snake head.
    ///
    /// Preset, then exported overrides. Invalid overrides fall back to the
    /// preset. A valid `json` document replaces the result; an empty or
    /// invalid one is reported and ignored.
    pub fn resolve(tuning: &ExportedTuning, json: Option<&str>) -> ResolvedConfig {
        let preset = Self::preset(tuning.classic);
        let mut warnings = Vec::new();

        let tuned = preset.clone().with_exported(tuning);
        let config = match tuned.validate() {
            Ok(()) => tuned,
            Err(err) => {
                warnings.push(err);
                preset
            }
        };

        let Some(text) = json else {
            return ResolvedConfig {
                config,
                from_file: false,
                warnings,
            };
        };
        if text.trim().is_empty() {
            warnings.push(ConfigError::Invalid("config file is missing or empty".into()));
            return ResolvedConfig {
                config,
                from_file: false,
                warnings,
            };
        }
        match Self::from_json_str(text) {
            Ok(loaded) => ResolvedConfig {
                config: loaded,
                from_file: true,
                warnings,
            },
            Err(err) => {
                warnings.push(err);
                ResolvedConfig {
                    config,
                    from_file: false,
                    warnings,
                }
            }
        }
    }
}

/// HUD configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub label_node: String,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            label_node: "FPSLabel".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SnakeConfig::default();
        assert_eq!(config.speed, 10.0);
        assert_eq!(config.turn_speed, 3.0);
        assert_eq!(config.lean.lean_amount, 0.2);
        assert_eq!(config.lean.smoothing_rate, 5.0);
        assert_eq!(config.left_action, "snake_left");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = SnakeConfig::from_json_str(r#"{"speed": 4.5, "lean": {"axis": "yaw"}}"#).unwrap();
        assert_eq!(config.speed, 4.5);
        assert_eq!(config.turn_speed, 3.0);
        assert_eq!(config.lean.axis, LeanAxis::Yaw);
        assert_eq!(config.lean.smoothing_rate, 5.0);
        assert_eq!(config.rig_node, "SpringArm3D");
    }

    #[test]
    fn test_buttons_mode_parses() {
        let config = SnakeConfig::from_json_str(r#"{"input_mode": "buttons"}"#).unwrap();
        assert_eq!(config.input_mode, InputMode::Buttons);
    }

    #[test]
    fn test_rejects_negative_speed() {
        let err = SnakeConfig::from_json_str(r#"{"speed": -1.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_empty_action() {
        let err = SnakeConfig::from_json_str(r#"{"left_action": " "}"#).unwrap_err();
        assert!(err.to_string().contains("left_action"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SnakeConfig::from_json_str("{speed:").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SnakeConfig::from_file("/nonexistent/snake.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_classic_preset() {
        let config = SnakeConfig::classic();
        assert_eq!(config.input_mode, InputMode::Buttons);
        assert_eq!(config.turn_speed, 2.0);
        assert_eq!(config.lean.axis, LeanAxis::Yaw);
        let json = config.to_json_pretty().unwrap();
        assert_eq!(SnakeConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_resolve_untouched_node_uses_preset() {
        let resolved = SnakeConfig::resolve(&ExportedTuning::default(), None);
        assert_eq!(resolved.config, SnakeConfig::default());
        assert!(!resolved.from_file);
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn test_resolve_classic_keeps_classic_turn_speed() {
        let tuning = ExportedTuning {
            classic: true,
            ..Default::default()
        };
        let resolved = SnakeConfig::resolve(&tuning, None);
        assert_eq!(resolved.config, SnakeConfig::classic());
        assert_eq!(resolved.config.turn_speed, 2.0);
    }

    #[test]
    fn test_resolve_changed_fields_override_preset() {
        let tuning = ExportedTuning {
            classic: true,
            speed: 14.0,
            turn_speed: 1.5,
            lean_amount: 0.2,
        };
        let config = SnakeConfig::resolve(&tuning, None).config;
        assert_eq!(config.speed, 14.0);
        assert_eq!(config.turn_speed, 1.5);
        assert_eq!(config.input_mode, InputMode::Buttons);
        assert_eq!(config.lean.axis, LeanAxis::Yaw);
    }

    #[test]
    fn test_resolve_invalid_override_falls_back_to_preset() {
        let tuning = ExportedTuning {
            classic: true,
            speed: -3.0,
            ..Default::default()
        };
        let resolved = SnakeConfig::resolve(&tuning, None);
        assert_eq!(resolved.config, SnakeConfig::classic());
        assert_eq!(resolved.warnings.len(), 1);
        assert!(resolved.warnings[0].to_string().contains("speed"));
    }

    #[test]
    fn test_resolve_json_replaces_exported() {
        let tuning = ExportedTuning {
            speed: 20.0,
            ..Default::default()
        };
        let resolved = SnakeConfig::resolve(&tuning, Some(r#"{"turn_speed": 4.0}"#));
        assert!(resolved.from_file);
        assert!(resolved.warnings.is_empty());
        assert_eq!(resolved.config.turn_speed, 4.0);
        assert_eq!(resolved.config.speed, 10.0);
    }

    #[test]
    fn test_resolve_empty_json_keeps_exported() {
        let tuning = ExportedTuning {
            speed: 20.0,
            ..Default::default()
        };
        let resolved = SnakeConfig::resolve(&tuning, Some("  "));
        assert!(!resolved.from_file);
        assert_eq!(resolved.config.speed, 20.0);
        assert_eq!(resolved.warnings.len(), 1);
    }

    #[test]
    fn test_resolve_bad_json_keeps_exported() {
        let tuning = ExportedTuning {
            classic: true,
            ..Default::default()
        };
        let resolved = SnakeConfig::resolve(&tuning, Some(r#"{"speed": -1.0}"#));
        assert!(!resolved.from_file);
        assert_eq!(resolved.config, SnakeConfig::classic());
        assert!(matches!(resolved.warnings.as_slice(), [ConfigError::Invalid(_)]));
    }
}
