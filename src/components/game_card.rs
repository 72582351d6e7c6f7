//! Game Card Component
//!
//! One game on the shelf: thumbnail, name, and a play link.

use arcade_shelf_core::{CardView, GameId};
use arcade_shelf_ui::DeleteButton;
use dioxus::prelude::*;

use crate::browser::open_link;

/// Single game card.
///
/// Clicking anywhere on the card opens the game. The delete button and the
/// play link stop propagation so they never also trigger the card.
///
/// # Props
///
/// * `card` - View data for this game
/// * `on_delete` - Called with the game id when the × is clicked
#[component]
pub fn GameCard(card: CardView, on_delete: EventHandler<GameId>) -> Element {
    let mut image_failed = use_signal(|| false);

    let id = card.id;
    let link = card.link.clone();

    let image_src = if image_failed() {
        card.fallback_src.clone()
    } else {
        card.image_src.clone()
    };

    rsx! {
        div {
            class: "game-card",
            onclick: move |_| open_link(&link),

            DeleteButton {
                label: "Remove game".to_string(),
                onclick: move |_| on_delete.call(id),
            }

            img {
                class: "game-image",
                src: "{image_src}",
                alt: "{card.title}",
                onerror: move |_| {
                    // Swap once; the placeholder itself failing must not loop
                    if !image_failed() {
                        tracing::debug!(%id, "thumbnail failed to load, using placeholder");
                        image_failed.set(true);
                    }
                },
            }

            h3 { "{card.title}" }

            a {
                class: "game-link",
                href: "{card.link}",
                target: "_blank",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                "{card.link_label}"
            }
        }
    }
}
