use eframe::egui;
use snake_common::games::snake::{Canvas, Color, InputEvent, Key, SnakeGame};

/// Draws game frames with an egui painter. One game unit maps to one egui point.
struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    font: egui::FontId,
}

fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

impl Canvas for PainterCanvas<'_> {
    fn clear(&mut self, color: Color) {
        self.painter.rect_filled(self.painter.clip_rect(), 0.0, to_color32(color));
    }

    fn fill_square(&mut self, x: i32, y: i32, size: i32, color: Color) {
        let rect = egui::Rect::from_min_size(
            self.origin + egui::vec2(x as f32, y as f32),
            egui::vec2(size as f32, size as f32),
        );
        self.painter.rect_filled(rect, 0.0, to_color32(color));
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        self.painter.text(
            self.origin + egui::vec2(x as f32, y as f32),
            egui::Align2::LEFT_TOP,
            text,
            self.font.clone(),
            to_color32(color),
        );
    }
}

pub struct SnakeGameUi {
    score_font_size: f32,
}

impl SnakeGameUi {
    pub fn new(score_font_size: f32) -> Self {
        Self { score_font_size }
    }

    /// Key presses of this frame in arrival order, followed by `Quit` if the window is
    /// being closed.
    pub fn collect_input(&self, ctx: &egui::Context) -> Vec<InputEvent> {
        ctx.input(|i| {
            let mut events: Vec<InputEvent> = i
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key { key, pressed: true, repeat: false, .. } => {
                        Some(InputEvent::KeyDown(map_key(*key)))
                    }
                    _ => None,
                })
                .collect();

            if i.viewport().close_requested() {
                events.push(InputEvent::Quit);
            }
            events
        })
    }

    pub fn render(&self, ui: &mut egui::Ui, game: &SnakeGame) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let mut canvas = PainterCanvas {
            painter: &painter,
            origin: response.rect.min,
            font: egui::FontId::proportional(self.score_font_size),
        };
        game.draw(&mut canvas);
    }
}

fn map_key(key: egui::Key) -> Key {
    match key {
        egui::Key::ArrowLeft | egui::Key::A => Key::Left,
        egui::Key::ArrowRight | egui::Key::D => Key::Right,
        egui::Key::ArrowUp | egui::Key::W => Key::Up,
        egui::Key::ArrowDown | egui::Key::S => Key::Down,
        egui::Key::Escape => Key::Escape,
        _ => Key::Other,
    }
}
