//! Submission validation.
//!
//! Turns a raw [`GameForm`] into a [`ValidGame`] or a [`SubmitError`].
//! Rules run in order and the first failure wins:
//!
//! 1. name, trimmed, must be non-empty
//! 2. link, trimmed, must be non-empty
//! 3. link must parse as an absolute URL
//!
//! The thumbnail never fails validation. An empty or unparseable value is
//! dropped and the renderer shows the placeholder instead.

use url::Url;

use crate::error::{Field, SubmitError};
use crate::types::{Game, GameForm, GameId};

/// A form that passed validation, waiting for an identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidGame {
    pub name: String,
    pub link: String,
    pub thumbnail: Option<String>,
}

impl ValidGame {
    /// Attach an identifier, producing a storable game
    pub fn into_game(self, id: GameId) -> Game {
        Game {
            id,
            name: self.name,
            link: self.link,
            thumbnail: self.thumbnail,
        }
    }
}

/// Validate a submitted form.
pub fn validate(form: &GameForm) -> Result<ValidGame, SubmitError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(SubmitError::MissingField(Field::Name));
    }

    let link = form.link.trim();
    if link.is_empty() {
        return Err(SubmitError::MissingField(Field::Link));
    }

    // Url::parse only accepts absolute URLs; relative input is an error.
    // The parsed form is discarded so the link keeps the user's spelling.
    if let Err(e) = Url::parse(link) {
        tracing::debug!(%e, "rejecting malformed link");
        return Err(SubmitError::MalformedLink(link.to_string()));
    }

    Ok(ValidGame {
        name: name.to_string(),
        link: link.to_string(),
        thumbnail: parse_thumbnail(&form.thumbnail),
    })
}

fn parse_thumbnail(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match Url::parse(raw) {
        Ok(_) => Some(raw.to_string()),
        Err(e) => {
            tracing::warn!(%e, thumbnail = raw, "ignoring invalid thumbnail, placeholder will be used");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_is_missing_field() {
        let form = GameForm::new("", "https://x.test", "");
        assert_eq!(validate(&form), Err(SubmitError::MissingField(Field::Name)));
    }

    #[test]
    fn test_whitespace_name_is_missing_field() {
        let form = GameForm::new("   \t", "https://x.test", "");
        assert_eq!(validate(&form), Err(SubmitError::MissingField(Field::Name)));
    }

    #[test]
    fn test_empty_link_is_missing_field() {
        let form = GameForm::new("Game", "  ", "");
        assert_eq!(validate(&form), Err(SubmitError::MissingField(Field::Link)));
    }

    #[test]
    fn test_name_checked_before_link() {
        let form = GameForm::new("", "not a url", "");
        assert_eq!(validate(&form), Err(SubmitError::MissingField(Field::Name)));
    }

    #[test]
    fn test_malformed_link() {
        let form = GameForm::new("Game", "not a url", "");
        assert!(matches!(validate(&form), Err(SubmitError::MalformedLink(_))));
    }

    #[test]
    fn test_relative_link_is_malformed() {
        let form = GameForm::new("Game", "/games/snake", "");
        assert!(matches!(validate(&form), Err(SubmitError::MalformedLink(_))));
    }

    #[test]
    fn test_name_and_link_are_trimmed() {
        let form = GameForm::new(" Game ", "  https://x.test/g ", "");
        let valid = validate(&form).unwrap();
        assert_eq!(valid.name, "Game");
        assert_eq!(valid.link, "https://x.test/g");
        assert!(valid.thumbnail.is_none());
    }

    #[test]
    fn test_link_kept_as_typed() {
        let form = GameForm::new("Game", " https://X.test ", " https://IMG.test/a.png ");
        let valid = validate(&form).unwrap();
        // Url would normalize these to lowercase hosts with a trailing slash
        assert_eq!(valid.link, "https://X.test");
        assert_eq!(valid.thumbnail.as_deref(), Some("https://IMG.test/a.png"));
    }

    #[test]
    fn test_file_link_is_accepted() {
        let form = GameForm::new("Snake", "file:///home/me/snake/index.html", "");
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_valid_thumbnail_kept() {
        let form = GameForm::new("Game", "https://x.test/g", "https://x.test/g.png");
        let valid = validate(&form).unwrap();
        assert_eq!(valid.thumbnail.as_deref(), Some("https://x.test/g.png"));
    }

    #[test]
    fn test_invalid_thumbnail_dropped() {
        let form = GameForm::new("Game", "https://x.test/g", "cover.png");
        let valid = validate(&form).unwrap();
        assert!(valid.thumbnail.is_none());
    }

    #[test]
    fn test_into_game_attaches_id() {
        let form = GameForm::new("Game", "https://x.test/g", "");
        let game = validate(&form).unwrap().into_game(GameId::from_raw(7));
        assert_eq!(game.id, GameId::from_raw(7));
        assert_eq!(game.name, "Game");
    }
}
