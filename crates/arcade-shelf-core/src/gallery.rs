//! Gallery session: store, renderer and notifier wired together.
//!
//! Every user action goes through here:
//! validate → mutate store → re-render → notify.
//!
//! ```ignore
//! let mut gallery = Gallery::new(RenderAssets::default());
//! gallery.submit(&GameForm::new("Snake", "https://games.test/snake", ""))?;
//! let grid = gallery.view();
//! ```

use crate::error::{GalleryError, SubmitError};
use crate::notify::{Notifier, Toast, ToastId, ToastKind};
use crate::store::GameStore;
use crate::types::{Game, GameForm, GameId};
use crate::validate::validate;
use crate::view::{render, GridView, RenderAssets};

pub const ADDED_MESSAGE: &str = "Game added successfully!";
pub const REMOVED_MESSAGE: &str = "Game removed successfully!";
pub const CONFIRM_DELETE_PROMPT: &str = "Are you sure you want to remove this game?";

/// Answer to the delete confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(yes: bool) -> Self {
        if yes {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

/// One session's worth of games plus the toast they produce
#[derive(Debug, Default, Clone)]
pub struct Gallery {
    store: GameStore,
    notifier: Notifier,
    assets: RenderAssets,
}

impl Gallery {
    pub fn new(assets: RenderAssets) -> Self {
        Self {
            store: GameStore::new(),
            notifier: Notifier::new(),
            assets,
        }
    }

    /// Seed the store if empty. See [`GameStore::initialize`].
    pub fn initialize(&mut self, seeds: &[GameForm]) -> usize {
        self.store.initialize(seeds)
    }

    /// Handle a form submission.
    ///
    /// On success the game is appended and a success toast shown. On
    /// failure an error toast is shown and the store is untouched.
    pub fn submit(&mut self, form: &GameForm) -> Result<GameId, SubmitError> {
        match self.try_add(form) {
            Ok(id) => {
                self.notifier.notify(ADDED_MESSAGE, ToastKind::Success);
                Ok(id)
            }
            Err(e) => {
                self.notifier.notify(e.user_message(), ToastKind::Error);
                Err(e)
            }
        }
    }

    fn try_add(&mut self, form: &GameForm) -> Result<GameId, SubmitError> {
        let valid = validate(form).map_err(|e| {
            tracing::debug!(error = %e, "submission rejected");
            e
        })?;

        let store_error = |e: GalleryError| {
            tracing::error!(error = %e, "failed to store game");
            SubmitError::Store(e.to_string())
        };

        let id = self.store.next_id().map_err(store_error)?;
        let game = valid.into_game(id);
        let name = game.name.clone();
        self.store.append(game).map_err(store_error)?;

        tracing::info!(%id, %name, "game added");
        Ok(id)
    }

    /// Handle a delete request after the user answered the prompt.
    ///
    /// Declining changes nothing and shows nothing. Returns whether a game
    /// was removed.
    pub fn delete(&mut self, id: GameId, confirmation: Confirmation) -> bool {
        if confirmation == Confirmation::Declined {
            tracing::debug!(%id, "delete declined");
            return false;
        }

        match self.store.remove_by_id(id) {
            Some(game) => {
                tracing::info!(%id, name = %game.name, "game removed");
                self.notifier.notify(REMOVED_MESSAGE, ToastKind::Success);
                true
            }
            None => {
                tracing::warn!(%id, "delete requested for unknown game");
                false
            }
        }
    }

    /// Render the current store contents
    pub fn view(&self) -> GridView {
        render(self.store.list(), &self.assets)
    }

    pub fn games(&self) -> &[Game] {
        self.store.list()
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.notifier.current()
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        self.notifier.notify(message, kind)
    }

    pub fn begin_toast_exit(&mut self, id: ToastId) -> bool {
        self.notifier.begin_exit(id)
    }

    pub fn dismiss_toast(&mut self, id: ToastId) -> bool {
        self.notifier.dismiss(id)
    }
}
