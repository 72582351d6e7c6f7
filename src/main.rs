#![allow(non_snake_case)]

mod app;
mod browser;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use arcade_shelf_core::GalleryConfig;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Global configuration, loaded once at startup
static CONFIG: OnceLock<GalleryConfig> = OnceLock::new();

/// Get the startup configuration (defaults if not loaded)
pub fn get_config() -> GalleryConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Default config location: <config dir>/arcade-shelf/config.toml
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("arcade-shelf")
        .join("config.toml")
}

/// Arcade Shelf - a gallery of your games
#[derive(Parser, Debug)]
#[command(name = "arcade-shelf-desktop")]
#[command(about = "Arcade Shelf - keep links to your games on one shelf")]
struct Args {
    /// Config file (defaults to <config dir>/arcade-shelf/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "arcade_shelf_core=trace")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn load_config(path: &Path) -> anyhow::Result<GalleryConfig> {
    GalleryConfig::load_from(path)
        .with_context(|| format!("Failed to load config file: {:?}", path))
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let args = Args::parse();
    let config_path = args.config.clone().unwrap_or_else(default_config_path);

    // Config is read before logging starts, so keep the error until then
    let (config, config_error) = match load_config(&config_path) {
        Ok(config) => (config, None),
        Err(e) => (GalleryConfig::default(), Some(e)),
    };

    let level = args
        .log_level
        .clone()
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| "info".to_string());
    init_tracing(&level);

    if let Some(e) = config_error {
        tracing::error!("{:#}; continuing with defaults", e);
    }

    tracing::info!(
        "Starting Arcade Shelf with config {:?} ({} seed games)",
        config_path,
        config.seeds.len()
    );

    let window = config.window.clone();
    let _ = CONFIG.set(config);

    // Configure desktop window
    let desktop = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&window.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window.width, window.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .launch(app::App);
}
