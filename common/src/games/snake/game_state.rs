use crate::games::SessionRng;
use crate::{debug_log, log};
use super::canvas::Canvas;
use super::food::FoodSpawner;
use super::input::{InputEvent, Key};
use super::rectangle::Rectangle;
use super::settings::SnakeSettings;
use super::snake::Snake;
use super::types::{COLOR_BACKGROUND, COLOR_TEXT, FieldSize, GameStatus, StopReason};

pub const SCORE_TEXT_X: i32 = 10;
pub const SCORE_TEXT_Y: i32 = 10;

pub struct SnakeGame {
    snake: Snake,
    food: Rectangle,
    spawner: FoodSpawner,
    field_size: FieldSize,
    speed_ramp_on_eat: bool,
    status: GameStatus,
}

impl SnakeGame {
    pub fn new(settings: &SnakeSettings, rng: SessionRng) -> Self {
        let field_size = settings.field_size();
        let box_size = settings.box_size as i32;
        let mut spawner = FoodSpawner::new(rng, box_size);
        let food = spawner.spawn(&field_size);
        let snake = Snake::new(
            settings.start_position(),
            box_size,
            settings.initial_speed as i32,
            settings.ignore_repeated_direction,
        );

        log!(
            "Snake game started on {}x{} field (seed {}), food at ({}, {})",
            field_size.width,
            field_size.height,
            spawner.seed(),
            food.x,
            food.y
        );

        Self {
            snake,
            food,
            spawner,
            field_size,
            speed_ramp_on_eat: settings.speed_ramp_on_eat,
            status: GameStatus::Running,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Rectangle {
        &self.food
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> usize {
        self.snake.score()
    }

    /// Runs one frame of game logic over the events gathered since the previous frame.
    /// Once stopped, further ticks change nothing.
    pub fn tick<I>(&mut self, events: I) -> GameStatus
    where
        I: IntoIterator<Item = InputEvent>,
    {
        if !self.status.is_running() {
            return self.status;
        }

        // Turns within one frame are checked against the heading the frame started with,
        // so two quick presses cannot fold the head back over the body.
        let frame_heading = self.snake.direction;

        for event in events {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => {
                    return self.stop(StopReason::Quit);
                }
                InputEvent::KeyDown(key) => {
                    if let Some(direction) = key.direction()
                        && !direction.is_opposite(&frame_heading)
                        && self.snake.set_direction(direction)
                    {
                        debug_log!(
                            "Turned {:?} at ({}, {})",
                            direction,
                            self.snake.head.x,
                            self.snake.head.y
                        );
                    }
                }
            }
        }

        self.snake.advance();

        if self.snake.check_wall(&self.field_size) {
            return self.stop(StopReason::WallCollision);
        }

        if self.snake.check_food(&self.food) {
            self.eat();
        }

        self.snake.follow();
        self.status
    }

    fn eat(&mut self) {
        let at = self.snake.head.position();
        self.snake.grow(at);
        if self.speed_ramp_on_eat {
            self.snake.accelerate();
        }
        self.food = self.spawner.spawn(&self.field_size);

        log!(
            "Ate food at ({}, {}). Score: {}, speed: {}, next food at ({}, {})",
            at.x,
            at.y,
            self.snake.score(),
            self.snake.speed,
            self.food.x,
            self.food.y
        );
    }

    fn stop(&mut self, reason: StopReason) -> GameStatus {
        self.status = GameStatus::Stopped(reason);
        log!(
            "Game over ({:?}) with head at ({}, {}). Final score: {}",
            reason,
            self.snake.head.x,
            self.snake.head.y,
            self.snake.score()
        );
        self.status
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.clear(COLOR_BACKGROUND);
        self.food.draw(canvas);
        self.snake.draw(canvas);
        canvas.draw_text(
            SCORE_TEXT_X,
            SCORE_TEXT_Y,
            &format!("SCORE: {}", self.score()),
            COLOR_TEXT,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::canvas::recording::{DrawOp, RecordingCanvas};
    use crate::games::snake::types::{COLOR_FOOD, COLOR_SNAKE, Direction, Point};

    fn create_game(seed: u64) -> SnakeGame {
        let mut game = SnakeGame::new(&SnakeSettings::default(), SessionRng::new(seed));
        // Park the food far from the start so that tests decide when the snake eats.
        game.food = Rectangle::new(Point::new(900, 700), 10, COLOR_FOOD);
        game
    }

    fn key(key: Key) -> InputEvent {
        InputEvent::KeyDown(key)
    }

    #[test]
    fn test_first_tick_without_input_keeps_head_still() {
        let mut game = create_game(1);
        let status = game.tick([]);
        assert_eq!(status, GameStatus::Running);
        assert_eq!(game.snake().head.position(), Point::new(300, 300));
    }

    #[test]
    fn test_right_moves_head_by_speed() {
        let mut game = create_game(1);
        game.tick([key(Key::Right)]);
        assert_eq!(game.snake().head.position(), Point::new(303, 300));
    }

    #[test]
    fn test_wall_hit_stops_game() {
        let mut game = create_game(1);
        game.snake.head.set_position(Point::new(1017, 300));
        assert_eq!(game.tick([key(Key::Right)]), GameStatus::Running);
        assert_eq!(game.snake().head.x, 1020);

        assert_eq!(game.tick([]), GameStatus::Running);
        assert_eq!(game.snake().head.x, 1023);

        assert_eq!(game.tick([]), GameStatus::Stopped(StopReason::WallCollision));
        assert_eq!(game.snake().head.x, 1026);
    }

    #[test]
    fn test_stopped_game_ignores_further_ticks() {
        let mut game = create_game(1);
        assert_eq!(game.tick([InputEvent::Quit]), GameStatus::Stopped(StopReason::Quit));
        let head = game.snake().head.position();
        assert_eq!(game.tick([key(Key::Down)]), GameStatus::Stopped(StopReason::Quit));
        assert_eq!(game.snake().head.position(), head);
        assert_eq!(game.snake().direction, Direction::None);
    }

    #[test]
    fn test_escape_quits_before_later_events() {
        let mut game = create_game(1);
        let status = game.tick([key(Key::Escape), key(Key::Right)]);
        assert_eq!(status, GameStatus::Stopped(StopReason::Quit));
        assert_eq!(game.snake().direction, Direction::None);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut game = create_game(1);
        assert_eq!(game.tick([key(Key::Other)]), GameStatus::Running);
        assert_eq!(game.snake().direction, Direction::None);
    }

    #[test]
    fn test_eating_food_grows_and_respawns() {
        let mut game = create_game(3);
        game.food = Rectangle::new(Point::new(300, 300), 10, COLOR_FOOD);

        game.tick([]);

        assert_eq!(game.score(), 1);
        assert_ne!(game.food().position(), Point::new(300, 300));
        let field = game.field_size();
        assert!((0..=field.width).contains(&game.food().x));
        assert!((0..=field.height).contains(&game.food().y));
        assert_eq!(game.snake().speed, 4);
    }

    #[test]
    fn test_speed_stays_without_ramp() {
        let settings = SnakeSettings { speed_ramp_on_eat: false, ..SnakeSettings::default() };
        let mut game = SnakeGame::new(&settings, SessionRng::new(3));
        game.food = Rectangle::new(Point::new(300, 300), 10, COLOR_FOOD);
        game.tick([]);
        assert_eq!(game.score(), 1);
        assert_eq!(game.snake().speed, 3);
    }

    #[test]
    fn test_each_meal_adds_exactly_one_segment() {
        let mut game = create_game(11);
        game.tick([key(Key::Right)]);
        for expected in 1..=5 {
            let head = game.snake().head.position();
            let next = head.moved(Direction::Right, game.snake().speed);
            game.food = Rectangle::new(next, 10, COLOR_FOOD);
            game.tick([]);
            assert_eq!(game.score(), expected);
        }
    }

    #[test]
    fn test_opposite_key_in_game_keeps_heading() {
        let mut game = create_game(1);
        game.tick([key(Key::Right)]);
        let pivot = game.snake().pivot;
        game.tick([key(Key::Left)]);
        assert_eq!(game.snake().direction, Direction::Right);
        assert_eq!(game.snake().pivot, pivot);
        assert_eq!(game.snake().head.position(), Point::new(306, 300));
    }

    #[test]
    fn test_draw_order_and_score_text() {
        let mut game = create_game(1);
        game.snake.grow(Point::new(290, 300));
        game.tick([key(Key::Right)]);

        let mut canvas = RecordingCanvas::default();
        game.draw(&mut canvas);

        assert_eq!(canvas.ops.len(), 5);
        assert_eq!(canvas.ops[0], DrawOp::Clear(COLOR_BACKGROUND));
        assert_eq!(canvas.ops[1], DrawOp::Square { x: 900, y: 700, size: 10, color: COLOR_FOOD });
        assert_eq!(canvas.ops[2], DrawOp::Square { x: 303, y: 300, size: 10, color: COLOR_SNAKE });
        assert_eq!(canvas.ops[3], DrawOp::Square { x: 293, y: 300, size: 10, color: COLOR_SNAKE });
        assert_eq!(
            canvas.ops[4],
            DrawOp::Text {
                x: SCORE_TEXT_X,
                y: SCORE_TEXT_Y,
                text: "SCORE: 1".to_string(),
                color: COLOR_TEXT,
            }
        );
    }

    /// Walks `distance` units of path length back from the last point of `path`.
    fn point_behind_on_path(path: &[Point], distance: i32) -> Option<Point> {
        let mut remaining = distance;
        for pair in path.windows(2).rev() {
            let (from, to) = (pair[1], pair[0]);
            let leg = from.manhattan_distance(&to);
            if remaining <= leg {
                let dx = (to.x - from.x).signum();
                let dy = (to.y - from.y).signum();
                return Some(Point::new(from.x + dx * remaining, from.y + dy * remaining));
            }
            remaining -= leg;
        }
        None
    }

    #[test]
    fn test_tail_traces_head_path_through_turns() {
        let mut game = create_game(21);
        let mut head_path = vec![game.snake().head.position()];

        game.tick([key(Key::Right)]);
        head_path.push(game.snake().head.position());
        for _ in 0..12 {
            game.tick([]);
            head_path.push(game.snake().head.position());
        }
        for _ in 0..3 {
            let at = game.snake.head.position();
            game.snake.grow(at);
        }

        let script = [
            (vec![key(Key::Down)], 4),
            (vec![key(Key::Left)], 2),
            (vec![key(Key::Up)], 1),
            (vec![key(Key::Down), key(Key::Left)], 5),
            (vec![key(Key::Up)], 2),
            (vec![key(Key::Right)], 3),
        ];
        for (presses, frames) in script {
            game.tick(presses);
            head_path.push(game.snake().head.position());
            for _ in 1..frames {
                game.tick([]);
                head_path.push(game.snake().head.position());
            }

            assert!(game.status().is_running());
            for (index, segment) in game.snake().segments.iter().enumerate() {
                let distance = 10 * (index as i32 + 1);
                assert_eq!(
                    Some(segment.body.position()),
                    point_behind_on_path(&head_path, distance),
                    "segment {} is not {} units behind the head",
                    index,
                    distance
                );
            }
        }
    }

    #[test]
    fn test_two_presses_in_one_frame_cannot_reverse() {
        let mut game = create_game(1);
        game.tick([key(Key::Right)]);
        for _ in 0..5 {
            game.tick([]);
        }

        game.tick([key(Key::Up), key(Key::Left)]);

        assert_eq!(game.snake().direction, Direction::Up);
        assert_eq!(game.snake().last_direction, Direction::Right);
        assert_eq!(game.snake().trail().len(), 1);
        assert_eq!(game.snake().head.position(), Point::new(318, 297));
    }

    #[test]
    fn test_later_press_in_frame_still_applies() {
        let mut game = create_game(1);
        game.tick([key(Key::Right)]);

        game.tick([key(Key::Up), key(Key::Right)]);

        assert_eq!(game.snake().direction, Direction::Right);
        assert_eq!(game.snake().last_direction, Direction::Up);
        assert_eq!(game.snake().head.position(), Point::new(306, 300));
    }
}
