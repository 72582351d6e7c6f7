//! Arcade Shelf Core Library
//!
//! Session-scoped game gallery: store, validation, view model and toasts.
//!
//! ## Overview
//!
//! Users add games (name, link, optional thumbnail), see them as cards, and
//! remove them again. Nothing is persisted; the shelf lives as long as the
//! window. This crate holds everything with invariants so it can be tested
//! without a UI:
//!
//! - [`GameStore`]: ordered list with unique, timestamp-derived ids
//! - [`validate`](validate::validate): form rules, first failure wins
//! - [`render`]: pure function from games to a typed [`GridView`]
//! - [`Notifier`]: one visible toast, last request wins
//! - [`Gallery`]: the above wired together per user action
//!
//! ## Quick Start
//!
//! ```ignore
//! use arcade_shelf_core::{Confirmation, Gallery, GameForm, RenderAssets};
//!
//! let mut gallery = Gallery::new(RenderAssets::default());
//! let id = gallery.submit(&GameForm::new("Snake", "https://games.test/snake", ""))?;
//! assert_eq!(gallery.view().card_count(), 1);
//!
//! gallery.delete(id, Confirmation::Confirmed);
//! assert_eq!(gallery.view().card_count(), 0);
//! ```

pub mod config;
pub mod error;
pub mod gallery;
pub mod notify;
pub mod store;
pub mod types;
pub mod validate;
pub mod view;

// Re-exports
pub use config::{GalleryConfig, WindowConfig};
pub use error::{Field, GalleryError, GalleryResult, SubmitError};
pub use gallery::{Confirmation, Gallery, CONFIRM_DELETE_PROMPT};
pub use notify::{Notifier, Toast, ToastId, ToastKind, ToastPhase, ToastTimings};
pub use store::GameStore;
pub use types::*;
pub use view::{render, CardView, GridView, RenderAssets};
