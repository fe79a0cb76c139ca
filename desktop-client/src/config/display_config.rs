use snake_common::config::Validate;
use snake_common::games::snake::{DisplayModePreference, DisplayThreshold};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub mode: DisplayModePreference,
    pub windowed_threshold: DisplayThreshold,
    pub score_font_size: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: DisplayModePreference::Auto,
            windowed_threshold: DisplayThreshold::default(),
            score_font_size: 24.0,
        }
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.windowed_threshold.width == 0 || self.windowed_threshold.height == 0 {
            return Err("windowed_threshold dimensions must be greater than 0".to_string());
        }
        if !(6.0..=128.0).contains(&self.score_font_size) {
            return Err("score_font_size must be between 6 and 128".to_string());
        }
        Ok(())
    }
}
