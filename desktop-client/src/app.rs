use eframe::egui;
use snake_common::games::SessionRng;
use snake_common::games::snake::{DisplayMode, GameStatus, SnakeGame, select_display_mode};
use snake_common::log;

use crate::config::Config;
use crate::ui::SnakeGameUi;

/// Frames to wait for the windowing backend to report the monitor size before giving up
/// and treating it as unknown.
const MONITOR_WAIT_FRAMES: u32 = 5;

pub struct SnakeApp {
    config: Config,
    rng: Option<SessionRng>,
    game: Option<SnakeGame>,
    game_ui: SnakeGameUi,
    monitor_wait_frames: u32,
    close_sent: bool,
}

impl SnakeApp {
    pub fn new(config: Config, rng: SessionRng) -> Self {
        let game_ui = SnakeGameUi::new(config.display.score_font_size);
        Self {
            config,
            rng: Some(rng),
            game: None,
            game_ui,
            monitor_wait_frames: 0,
            close_sent: false,
        }
    }

    fn monitor_size(ctx: &egui::Context) -> Option<(u32, u32)> {
        ctx.input(|i| i.viewport().monitor_size)
            .map(|size| (size.x as u32, size.y as u32))
    }

    fn start_game(&mut self, ctx: &egui::Context, monitor: Option<(u32, u32)>) -> SnakeGame {
        let mode = select_display_mode(
            self.config.display.mode,
            monitor,
            self.config.display.windowed_threshold,
        );
        log!("Display mode {:?} (monitor size {:?})", mode, monitor);

        let settings = match mode {
            DisplayMode::Fullscreen => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
                match monitor {
                    Some((width, height)) => self.config.game.with_field(width, height),
                    None => self.config.game.clone(),
                }
            }
            DisplayMode::Windowed => self.config.game.clone(),
        };

        // The game starts once, so the session RNG from main is always still here.
        let rng = self.rng.take().unwrap_or_else(SessionRng::from_random);
        SnakeGame::new(&settings, rng)
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.game.is_none() {
            let monitor = Self::monitor_size(ctx);
            if monitor.is_none() && self.monitor_wait_frames < MONITOR_WAIT_FRAMES {
                self.monitor_wait_frames += 1;
                ctx.request_repaint();
                return;
            }
            self.game = Some(self.start_game(ctx, monitor));
        }

        let Some(game) = self.game.as_mut() else {
            return;
        };

        let events = self.game_ui.collect_input(ctx);
        let status = game.tick(events);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.game_ui.render(ui, game));

        match status {
            GameStatus::Running => ctx.request_repaint(),
            GameStatus::Stopped(_) if !self.close_sent => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                self.close_sent = true;
            }
            GameStatus::Stopped(_) => {}
        }
    }
}
