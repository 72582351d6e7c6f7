//! View model for the game grid.
//!
//! [`render`] is a pure function of the store contents. It produces a typed
//! tree that the UI layer turns into elements, so no markup is ever built
//! from strings.

use crate::types::{Game, GameId};

/// Placeholder thumbnail: a gamepad on a dark tile, 280x180.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='280' height='180' viewBox='0 0 280 180'%3E%3Crect fill='%232a2a2a' width='280' height='180'/%3E%3Ctext x='50%25' y='50%25' dominant-baseline='middle' text-anchor='middle' font-family='sans-serif' font-size='24' fill='%23ff1493'%3E%F0%9F%8E%AE%3C/text%3E%3C/svg%3E";

/// Shown instead of cards when the shelf is empty
pub const EMPTY_MESSAGE: &str = "No games added yet. Add your first game below!";

/// Label of the link control on each card
pub const LINK_LABEL: &str = "Play now \u{2192}";

/// Static assets the renderer needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderAssets {
    pub placeholder_image: String,
    pub empty_message: String,
}

impl Default for RenderAssets {
    fn default() -> Self {
        Self {
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            empty_message: EMPTY_MESSAGE.to_string(),
        }
    }
}

/// One card in the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: GameId,
    pub title: String,
    /// Thumbnail to try first
    pub image_src: String,
    /// Swapped in if `image_src` fails to load
    pub fallback_src: String,
    pub link: String,
    pub link_label: &'static str,
}

impl CardView {
    /// Whether the card starts out on the placeholder image
    pub fn uses_placeholder(&self) -> bool {
        self.image_src == self.fallback_src
    }
}

/// Full contents of the grid container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    /// No games; show the informational message
    Empty { message: String },
    /// One card per game, in store order
    Cards(Vec<CardView>),
}

impl GridView {
    pub fn card_count(&self) -> usize {
        match self {
            GridView::Empty { .. } => 0,
            GridView::Cards(cards) => cards.len(),
        }
    }

    /// Identifiers of the rendered cards, in order
    pub fn card_ids(&self) -> Vec<GameId> {
        match self {
            GridView::Empty { .. } => Vec::new(),
            GridView::Cards(cards) => cards.iter().map(|c| c.id).collect(),
        }
    }
}

/// Build the grid for the given games.
pub fn render(games: &[Game], assets: &RenderAssets) -> GridView {
    tracing::debug!(count = games.len(), "rendering game grid");

    if games.is_empty() {
        return GridView::Empty {
            message: assets.empty_message.clone(),
        };
    }

    GridView::Cards(games.iter().map(|g| card(g, assets)).collect())
}

fn card(game: &Game, assets: &RenderAssets) -> CardView {
    CardView {
        id: game.id,
        title: game.name.clone(),
        image_src: game
            .thumbnail_src()
            .unwrap_or(&assets.placeholder_image)
            .to_string(),
        fallback_src: assets.placeholder_image.clone(),
        link: game.link.clone(),
        link_label: LINK_LABEL,
    }
}
