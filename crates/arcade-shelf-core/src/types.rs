//! Core types for Arcade Shelf

use serde::{Deserialize, Serialize};

/// Unique identifier for a game in the shelf
///
/// Derived from the creation timestamp in milliseconds. The store bumps
/// ties so ids stay strictly increasing and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub i64);

impl GameId {
    /// Create a GameId from a raw value
    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "game_{}", self.0)
    }
}

/// A game on the shelf
///
/// Only constructed through validation, so `name` is trimmed and non-empty
/// and `link` parses as an absolute URL. Links are kept as the user typed
/// them (trimmed), not in `url`'s normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Unique identifier for the game
    pub id: GameId,
    /// Display name, trimmed
    pub name: String,
    /// Where the game is played
    pub link: String,
    /// Thumbnail image; `None` renders the placeholder
    pub thumbnail: Option<String>,
}

impl Game {
    /// Thumbnail as a string, if one was given
    pub fn thumbnail_src(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }
}

/// Raw input from the add-game form, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameForm {
    pub name: String,
    pub link: String,
    #[serde(default)]
    pub thumbnail: String,
}

impl GameForm {
    pub fn new(
        name: impl Into<String>,
        link: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
            thumbnail: thumbnail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_id_display() {
        let id = GameId::from_raw(1_700_000_000_000);
        assert_eq!(format!("{}", id), "game_1700000000000");
    }

    #[test]
    fn test_game_id_ordering() {
        assert!(GameId::from_raw(1) < GameId::from_raw(2));
    }

    #[test]
    fn test_thumbnail_src() {
        let mut game = Game {
            id: GameId::from_raw(1),
            name: "Snake".to_string(),
            link: "https://games.test/snake".to_string(),
            thumbnail: None,
        };
        assert!(game.thumbnail_src().is_none());

        game.thumbnail = Some("https://games.test/snake.png".to_string());
        assert_eq!(game.thumbnail_src(), Some("https://games.test/snake.png"));
    }

    #[test]
    fn test_form_default_is_empty() {
        let form = GameForm::default();
        assert!(form.name.is_empty());
        assert!(form.link.is_empty());
        assert!(form.thumbnail.is_empty());
    }
}
