use std::fs::File;

use balloon_defense::config::{CONFIG_FILE, GameConfig};
use balloon_defense::tui::run_tui;
use env_logger::{Env, Target};

const LOG_FILE: &str = "balloon-defense.log";

/// Log to a file; stderr would tear the terminal UI.
fn init_logging() {
    let log_path = std::env::var("BALLOON_DEFENSE_LOG").unwrap_or_else(|_| LOG_FILE.to_string());
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));

    match File::create(&log_path) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }

    builder.init();
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| CONFIG_FILE.to_string());
    let config = GameConfig::load_or_default(&config_path)?;

    log::info!(
        "Starting on a {}x{} playfield at {} ticks/s",
        config.playfield.width,
        config.playfield.height,
        config.playfield.tick_rate
    );

    run_tui(config)
}
