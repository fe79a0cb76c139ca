use super::canvas::Canvas;
use super::types::{Color, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    size: i32,
    color: Color,
}

impl Rectangle {
    pub fn new(position: Point, size: i32, color: Color) -> Self {
        Self {
            x: position.x,
            y: position.y,
            size,
            color,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Hit test against a box that extends `size` in every direction from `(x, y)`,
    /// twice the drawn footprint.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        (self.x - self.size..=self.x + self.size).contains(&px)
            && (self.y - self.size..=self.y + self.size).contains(&py)
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.fill_square(self.x, self.y, self.size, self.color);
    }
}
