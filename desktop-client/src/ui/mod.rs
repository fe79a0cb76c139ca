mod game;

pub use game::SnakeGameUi;
