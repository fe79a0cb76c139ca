use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    Windowed,
    Fullscreen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DisplayModePreference {
    #[default]
    Auto,
    Windowed,
    Fullscreen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayThreshold {
    pub width: u32,
    pub height: u32,
}

impl Default for DisplayThreshold {
    fn default() -> Self {
        Self {
            width: 1248,
            height: 768,
        }
    }
}

/// Auto mode picks a window only when the monitor is larger than the threshold in both
/// dimensions. An unknown monitor size gets a window.
pub fn select_display_mode(
    preference: DisplayModePreference,
    monitor_size: Option<(u32, u32)>,
    threshold: DisplayThreshold,
) -> DisplayMode {
    match preference {
        DisplayModePreference::Windowed => DisplayMode::Windowed,
        DisplayModePreference::Fullscreen => DisplayMode::Fullscreen,
        DisplayModePreference::Auto => match monitor_size {
            Some((width, height)) if width > threshold.width && height > threshold.height => {
                DisplayMode::Windowed
            }
            Some(_) => DisplayMode::Fullscreen,
            None => DisplayMode::Windowed,
        },
    }
}
