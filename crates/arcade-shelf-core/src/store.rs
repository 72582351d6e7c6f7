//! In-memory game store.
//!
//! An ordered list of games for the lifetime of one session. Insertion
//! order is preserved and identifiers are unique.

use crate::error::{GalleryError, GalleryResult};
use crate::types::{Game, GameForm, GameId};
use crate::validate::validate;

/// Ordered, session-scoped collection of games
#[derive(Debug, Default, Clone)]
pub struct GameStore {
    games: Vec<Game>,
    last_id: Option<GameId>,
}

impl GameStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store, but only if it is empty.
    ///
    /// Seeds go through the same validation as user submissions; invalid
    /// ones are skipped. Calling this again once the store holds anything
    /// is a no-op. Returns the number of games added.
    pub fn initialize(&mut self, seeds: &[GameForm]) -> usize {
        if !self.games.is_empty() {
            return 0;
        }

        let mut added = 0;
        for seed in seeds {
            match validate(seed) {
                Ok(valid) => {
                    let id = match self.next_id() {
                        Ok(id) => id,
                        Err(e) => {
                            tracing::warn!(error = %e, "stopping seeding early");
                            break;
                        }
                    };
                    self.games.push(valid.into_game(id));
                    added += 1;
                }
                Err(e) => {
                    tracing::warn!(name = %seed.name, error = %e, "skipping invalid seed game");
                }
            }
        }

        if added > 0 {
            tracing::info!(count = added, "seeded game store");
        }
        added
    }

    /// Issue the next identifier from the current clock.
    pub fn next_id(&mut self) -> GalleryResult<GameId> {
        self.next_id_at(chrono::Utc::now().timestamp_millis())
    }

    /// Issue an identifier for the given millisecond timestamp.
    ///
    /// Ids are strictly increasing: a timestamp at or before the last
    /// issued id is bumped to `last + 1`. Once `i64::MAX` has been issued
    /// or appended, no further id exists and this fails without changing
    /// the store.
    pub fn next_id_at(&mut self, now_ms: i64) -> GalleryResult<GameId> {
        let raw = match self.last_id {
            Some(last) if now_ms <= last.as_i64() => last
                .as_i64()
                .checked_add(1)
                .ok_or(GalleryError::IdsExhausted(last))?,
            _ => now_ms,
        };
        let id = GameId::from_raw(raw);
        self.last_id = Some(id);
        Ok(id)
    }

    /// Append a game to the end of the list
    pub fn append(&mut self, game: Game) -> GalleryResult<()> {
        if self.contains(game.id) {
            return Err(GalleryError::DuplicateId(game.id));
        }
        if self.last_id.map_or(true, |last| game.id > last) {
            self.last_id = Some(game.id);
        }
        self.games.push(game);
        Ok(())
    }

    /// Remove the game with the given id.
    ///
    /// Absent ids are not an error; `None` is returned and nothing changes.
    pub fn remove_by_id(&mut self, id: GameId) -> Option<Game> {
        let index = self.games.iter().position(|g| g.id == id)?;
        Some(self.games.remove(index))
    }

    /// Current games in insertion order
    pub fn list(&self) -> &[Game] {
        &self.games
    }

    pub fn get(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn contains(&self, id: GameId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
