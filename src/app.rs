use dioxus::prelude::*;

use arcade_shelf_core::Gallery;

use crate::context::get_config;
use crate::pages::Shelf;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The shelf: game grid and add-game form
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Shelf {},
}

/// Root application component.
///
/// Provides global styles, the gallery session, and routing.
#[component]
pub fn App() -> Element {
    let config = get_config();
    let timings = config.toast;

    // The session owns the store; it lives as long as the window
    let gallery: Signal<Gallery> = use_signal(|| {
        let mut gallery = Gallery::new(config.render_assets());
        gallery.initialize(&config.seeds);
        gallery
    });

    use_context_provider(|| gallery);
    use_context_provider(|| timings);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
