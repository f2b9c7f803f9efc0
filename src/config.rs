//! Scene configuration
//!
//! Every tunable constant of the scene lives here. The defaults reproduce the
//! look of the reference animation; hosts may override any subset through YAML:
//!
//! ```yaml
//! max_depth: 8
//! zoom:
//!   duration: 5.0
//! falling_leaves:
//!   max_count: 80
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::animation::Easing;
use crate::color::Rgb;

/// Hard ceiling on recursion depth regardless of configuration
pub const MAX_SUPPORTED_DEPTH: u32 = 16;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Fractal depth of a fully grown tree
    pub max_depth: u32,
    /// Growth progress added per frame
    pub growth_speed: f64,
    /// Global time added per frame; also the zoom clock step
    pub time_step: f64,
    pub colors: ColorConfig,
    pub zoom: ZoomConfig,
    pub falling_leaves: FallingLeafConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub background: Rgb,
    pub trunk: Rgb,
    /// Override for the depth-0 segment, darker than the gradient start
    pub root: Rgb,
    pub leaf_green: Rgb,
    pub leaf_edge: Rgb,
    pub leaf_autumn: Rgb,
    /// Tint a falling leaf reaches as it fades out
    pub fall_highlight: Rgb,
    pub fall_edge: Rgb,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Seconds of zoom time for the whole in-and-out animation
    pub duration: f64,
    /// Peak extra magnification (peak zoom is `1 + scale`)
    pub scale: f64,
    /// Focus height at peak zoom, as a fraction of the viewport height
    pub focus_top_ratio: f64,
    pub easing: Easing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FallingLeafConfig {
    pub max_count: usize,
    pub gravity: f64,
    pub fade_rate: f64,
    /// Fixed integration step for the fall
    pub step: f64,
    pub horizontal_damping: f64,
    pub spin_damping: f64,
    /// Distance below the viewport after which a leaf is culled
    pub exit_margin: f64,
    /// Chance per visited leaf per frame of detaching
    pub spawn_probability: f64,
    /// Growth progress that must be exceeded before leaves detach
    pub spawn_growth_threshold: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            max_depth: 9,
            growth_speed: 0.0006,
            time_step: 0.016,
            colors: ColorConfig::default(),
            zoom: ZoomConfig::default(),
            falling_leaves: FallingLeafConfig::default(),
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: Rgb::BLACK,
            trunk: Rgb::new(70.0, 40.0, 20.0),
            root: Rgb::new(40.0, 22.0, 10.0),
            leaf_green: Rgb::new(144.0, 238.0, 144.0),
            leaf_edge: Rgb::new(40.0, 110.0, 60.0),
            leaf_autumn: Rgb::new(184.0, 134.0, 11.0),
            fall_highlight: Rgb::new(255.0, 215.0, 0.0),
            fall_edge: Rgb::new(134.0, 86.0, 32.0),
        }
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            duration: 7.0,
            scale: 0.35,
            focus_top_ratio: 0.25,
            easing: Easing::SinePulse,
        }
    }
}

impl Default for FallingLeafConfig {
    fn default() -> Self {
        Self {
            max_count: 45,
            gravity: 0.6,
            fade_rate: 0.0008,
            step: 0.016,
            horizontal_damping: 0.6,
            spin_damping: 0.55,
            exit_margin: 120.0,
            spawn_probability: 0.0008,
            spawn_growth_threshold: 0.97,
        }
    }
}

impl SceneConfig {
    /// Parse from YAML string, filling omitted fields with defaults
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 || self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(invalid(
                "max_depth",
                format!("must be in 1..={}, got {}", MAX_SUPPORTED_DEPTH, self.max_depth),
            ));
        }
        positive("growth_speed", self.growth_speed)?;
        positive("time_step", self.time_step)?;
        positive("zoom.duration", self.zoom.duration)?;
        non_negative("zoom.scale", self.zoom.scale)?;
        unit_interval("zoom.focus_top_ratio", self.zoom.focus_top_ratio)?;
        if !self.zoom.easing.is_round_trip() {
            return Err(invalid(
                "zoom.easing",
                format!("{:?} does not return the camera to rest", self.zoom.easing),
            ));
        }

        let leaves = &self.falling_leaves;
        non_negative("falling_leaves.gravity", leaves.gravity)?;
        positive("falling_leaves.fade_rate", leaves.fade_rate)?;
        positive("falling_leaves.step", leaves.step)?;
        non_negative("falling_leaves.exit_margin", leaves.exit_margin)?;
        unit_interval("falling_leaves.spawn_probability", leaves.spawn_probability)?;
        unit_interval("falling_leaves.spawn_growth_threshold", leaves.spawn_growth_threshold)?;
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive, got {}", value)))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must not be negative, got {}", value)))
    }
}

fn unit_interval(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, format!("must be within [0, 1], got {}", value)))
    }
}
