//! TOML configuration for Arcade Shelf.
//!
//! Every field is optional. A missing file yields the defaults, which seed
//! no games.
//!
//! ```toml
//! log_level = "debug"
//! empty_message = "Shelf is empty"
//!
//! [toast]
//! display_ms = 3000
//! exit_ms = 500
//!
//! [window]
//! title = "Arcade Shelf"
//!
//! [[seed]]
//! name = "Snake"
//! link = "https://games.test/snake"
//! thumbnail = "https://games.test/snake.png"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GalleryError, GalleryResult};
use crate::notify::ToastTimings;
use crate::types::GameForm;
use crate::view::RenderAssets;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Arcade Shelf".to_string(),
            width: 1100.0,
            height: 860.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// tracing filter used when RUST_LOG is unset
    pub log_level: Option<String>,
    /// Replaces the built-in placeholder thumbnail
    pub placeholder_image: Option<String>,
    /// Replaces the built-in empty-shelf message
    pub empty_message: Option<String>,
    pub toast: ToastTimings,
    pub window: WindowConfig,
    /// Games added at startup when the shelf is empty
    #[serde(rename = "seed")]
    pub seeds: Vec<GameForm>,
}

impl GalleryConfig {
    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load_from(path: &Path) -> GalleryResult<Self> {
        if !path.exists() {
            tracing::debug!(?path, "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        tracing::info!(?path, seeds = config.seeds.len(), "loaded config");
        Ok(config)
    }

    /// Parse and check a config document
    pub fn parse(content: &str) -> GalleryResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> GalleryResult<()> {
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(GalleryError::Config(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }

    /// Renderer assets with configured overrides applied
    pub fn render_assets(&self) -> RenderAssets {
        let mut assets = RenderAssets::default();
        if let Some(ref image) = self.placeholder_image {
            assets.placeholder_image = image.clone();
        }
        if let Some(ref message) = self.empty_message {
            assets.empty_message = message.clone();
        }
        assets
    }
}
