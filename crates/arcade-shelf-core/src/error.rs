//! Error types for Arcade Shelf

use thiserror::Error;

use crate::types::GameId;

/// Which required form field was left empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Link,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Link => "link",
        }
    }
}

/// Rejection reasons for a game submission.
///
/// Checked in order; the first failing rule is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Name or link was empty after trimming
    #[error("Missing field: {}", .0.as_str())]
    MissingField(Field),

    /// Link was present but did not parse as an absolute URL
    #[error("Malformed link: {0}")]
    MalformedLink(String),

    /// Input was valid but the store could not take it
    #[error("Store rejected game: {0}")]
    Store(String),
}

impl SubmitError {
    /// Message shown to the user in the error toast.
    ///
    /// Both missing-field cases share one message.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::MissingField(_) => "Please fill in the game's name and link!",
            SubmitError::MalformedLink(_) => "Please enter a valid link (start with https://)",
            SubmitError::Store(_) => "Could not add the game, please try again",
        }
    }
}

/// Main error type for Arcade Shelf operations
#[derive(Error, Debug)]
pub enum GalleryError {
    /// An entry with this identifier is already in the store
    #[error("Duplicate game id: {0}")]
    DuplicateId(GameId),

    /// No identifier above the last issued one is representable
    #[error("Game ids exhausted after {0}")]
    IdsExhausted(GameId),

    /// Configuration value out of range or inconsistent
    #[error("Config error: {0}")]
    Config(String),

    /// Configuration file is not valid TOML for the expected shape
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;
