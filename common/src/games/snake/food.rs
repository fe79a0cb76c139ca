use crate::games::SessionRng;
use super::rectangle::Rectangle;
use super::types::{COLOR_FOOD, FieldSize, Point};

/// Places food anywhere in the field, including on top of the snake.
pub struct FoodSpawner {
    rng: SessionRng,
    box_size: i32,
}

impl FoodSpawner {
    pub fn new(rng: SessionRng, box_size: i32) -> Self {
        Self { rng, box_size }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn spawn(&mut self, field_size: &FieldSize) -> Rectangle {
        let x = self.rng.random_range(0..=field_size.width);
        let y = self.rng.random_range(0..=field_size.height);
        Rectangle::new(Point::new(x, y), self.box_size, COLOR_FOOD)
    }
}
