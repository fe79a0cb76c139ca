mod app;
mod config;
mod ui;

use clap::Parser;
use eframe::egui;
use snake_common::games::SessionRng;
use snake_common::games::snake::DisplayModePreference;
use snake_common::{log, logger};

use app::SnakeApp;
use config::{CONFIG_FILE, get_config_manager};

#[derive(Parser)]
#[command(name = "snake", about = "Single-player Snake")]
struct Args {
    /// Path to the YAML config; defaults apply when the file does not exist
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, conflicts_with = "fullscreen")]
    windowed: bool,

    #[arg(long)]
    fullscreen: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let mut config = get_config_manager(&args.config).get_config()?;
    if args.windowed {
        config.display.mode = DisplayModePreference::Windowed;
    } else if args.fullscreen {
        config.display.mode = DisplayModePreference::Fullscreen;
    }

    let rng = args.seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    log!("Using config {} with seed {}", args.config, rng.seed());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.game.field_width as f32, config.game.field_height as f32])
            .with_resizable(false)
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(config, rng)))),
    )?;

    log!("Snake exited");

    Ok(())
}
