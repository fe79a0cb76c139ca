use super::canvas::Canvas;
use super::follower::{Pivot, Segment, Trail, follow_segments};
use super::rectangle::Rectangle;
use super::types::{COLOR_SNAKE, Direction, FieldSize, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    pub head: Rectangle,
    pub segments: Vec<Segment>,
    pub direction: Direction,
    pub last_direction: Direction,
    pub pivot: Option<Point>,
    pub speed: i32,
    trail: Trail,
    ignore_repeated_direction: bool,
}

impl Snake {
    pub fn new(
        start_pos: Point,
        box_size: i32,
        speed: i32,
        ignore_repeated_direction: bool,
    ) -> Self {
        Self {
            head: Rectangle::new(start_pos, box_size, COLOR_SNAKE),
            segments: Vec::new(),
            direction: Direction::None,
            last_direction: Direction::None,
            pivot: None,
            speed,
            trail: Trail::new(),
            ignore_repeated_direction,
        }
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Returns whether the turn was accepted. Reversals are always refused; re-pressing
    /// the current heading is refused when `ignore_repeated_direction` is set.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if requested == Direction::None || requested.is_opposite(&self.direction) {
            return false;
        }
        if self.ignore_repeated_direction && requested == self.direction {
            return false;
        }

        let at = self.head.position();
        self.last_direction = self.direction;
        self.direction = requested;
        self.pivot = Some(at);
        // Leaving the idle start is not a corner: nothing was travelled before it.
        if self.last_direction != Direction::None {
            self.trail.push(Pivot {
                point: at,
                incoming: self.last_direction,
            });
        }
        for segment in &mut self.segments {
            segment.has_pivoted = false;
        }
        true
    }

    pub fn advance(&mut self) {
        if self.direction == Direction::None {
            return;
        }
        let next = self.head.position().moved(self.direction, self.speed);
        self.head.set_position(next);
    }

    /// The head may overhang the field by one box on the near edges before this reports a
    /// hit.
    pub fn check_wall(&self, field_size: &FieldSize) -> bool {
        let size = self.head.size();
        let Point { x, y } = self.head.position();
        x <= -size || x >= field_size.width || y <= -size || y >= field_size.height
    }

    pub fn check_food(&self, food: &Rectangle) -> bool {
        food.contains(self.head.x, self.head.y)
    }

    pub fn grow(&mut self, at: Point) {
        let body = Rectangle::new(at, self.head.size(), COLOR_SNAKE);
        self.segments.push(Segment::new(body));
    }

    pub fn accelerate(&mut self) {
        self.speed += 1;
    }

    pub fn follow(&mut self) {
        follow_segments(&self.head, self.direction, &mut self.trail, &mut self.segments);
    }

    pub fn score(&self) -> usize {
        self.segments.len()
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        self.head.draw(canvas);
        for segment in &self.segments {
            segment.body.draw(canvas);
        }
    }
}
