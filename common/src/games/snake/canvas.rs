use super::types::Color;

/// Drawing surface supplied by the host for one frame.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_square(&mut self, x: i32, y: i32, size: i32, color: Color);
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color);
}
