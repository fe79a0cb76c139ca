use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{FieldSize, Point};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeSettings {
    pub field_width: u32,
    pub field_height: u32,
    pub box_size: u32,
    pub initial_speed: u32,
    pub speed_ramp_on_eat: bool,
    pub ignore_repeated_direction: bool,
    pub start_x: i32,
    pub start_y: i32,
}

impl SnakeSettings {
    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.field_width as i32, self.field_height as i32)
    }

    pub fn start_position(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    /// Same settings played on a field of a different size, e.g. a fullscreen display.
    /// The start position is clamped so the head begins inside the new field.
    pub fn with_field(&self, width: u32, height: u32) -> Self {
        let max_x = width.saturating_sub(self.box_size).max(1) as i32;
        let max_y = height.saturating_sub(self.box_size).max(1) as i32;
        Self {
            field_width: width,
            field_height: height,
            start_x: self.start_x.clamp(0, max_x),
            start_y: self.start_y.clamp(0, max_y),
            ..self.clone()
        }
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            field_width: 1024,
            field_height: 768,
            box_size: 10,
            initial_speed: 3,
            speed_ramp_on_eat: true,
            ignore_repeated_direction: true,
            start_x: 300,
            start_y: 300,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.box_size == 0 {
            return Err("box_size must be greater than 0".to_string());
        }
        if self.field_width <= self.box_size || self.field_height <= self.box_size {
            return Err("field dimensions must be larger than box_size".to_string());
        }
        if self.field_width > 16384 || self.field_height > 16384 {
            return Err("field dimensions must not exceed 16384".to_string());
        }
        if self.initial_speed == 0 {
            return Err("initial_speed must be greater than 0".to_string());
        }
        if self.initial_speed > self.box_size {
            return Err("initial_speed must not exceed box_size".to_string());
        }
        if self.start_x < 0 || self.start_x >= self.field_width as i32 {
            return Err("start_x must lie inside the field".to_string());
        }
        if self.start_y < 0 || self.start_y >= self.field_height as i32 {
            return Err("start_y must lie inside the field".to_string());
        }
        Ok(())
    }
}
