mod canvas;
mod display;
mod follower;
mod food;
mod game_state;
mod input;
mod rectangle;
mod settings;
mod snake;
mod types;

pub use canvas::Canvas;
pub use display::{DisplayMode, DisplayModePreference, DisplayThreshold, select_display_mode};
pub use follower::{Pivot, Segment, Trail, follow_segments};
pub use food::FoodSpawner;
pub use game_state::{SCORE_TEXT_X, SCORE_TEXT_Y, SnakeGame};
pub use input::{InputEvent, Key};
pub use rectangle::Rectangle;
pub use settings::SnakeSettings;
pub use snake::Snake;
pub use types::{
    COLOR_BACKGROUND, COLOR_FOOD, COLOR_SNAKE, COLOR_TEXT, Color, Direction, FieldSize,
    GameStatus, Point, StopReason,
};
