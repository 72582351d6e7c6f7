//! Gallery context provider for Arcade Shelf.
//!
//! Provides the session [`Gallery`] and toast timings to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut gallery = use_gallery();
//! gallery.write().submit(&form);
//! schedule_toast_expiry(gallery, use_toast_timings());
//! ```

use arcade_shelf_core::{Gallery, GalleryConfig, ToastTimings};
use dioxus::prelude::*;

/// Get the configuration loaded at startup.
pub fn get_config() -> GalleryConfig {
    crate::get_config()
}

/// Hook to access the gallery session from context.
///
/// All reads and writes happen on the UI thread inside event handlers, so
/// a plain Signal is enough.
pub fn use_gallery() -> Signal<Gallery> {
    use_context::<Signal<Gallery>>()
}

/// Hook to access the configured toast timings.
pub fn use_toast_timings() -> ToastTimings {
    use_context::<ToastTimings>()
}

/// Retire the currently visible toast after its lifetime.
///
/// Waits out the display time, starts the exit animation, then removes it.
/// Both steps are keyed by toast id, so if a newer toast replaced this one
/// in the meantime they do nothing.
pub fn schedule_toast_expiry(mut gallery: Signal<Gallery>, timings: ToastTimings) {
    let Some(id) = gallery.peek().toast().map(|t| t.id) else {
        return;
    };

    spawn(async move {
        tokio::time::sleep(timings.display()).await;
        gallery.write().begin_toast_exit(id);

        tokio::time::sleep(timings.exit()).await;
        gallery.write().dismiss_toast(id);
    });
}
