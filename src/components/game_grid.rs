//! Game Grid Component
//!
//! Renders a [`GridView`]: the empty-shelf message or one card per game.

use arcade_shelf_core::{GameId, GridView};
use dioxus::prelude::*;

use super::GameCard;

/// Grid of game cards.
///
/// The whole grid is rebuilt from `view` on every store change. Cards are
/// keyed by game id.
///
/// # Example
///
/// ```ignore
/// GameGrid {
///     view: gallery.read().view(),
///     on_delete: move |id| delete_game(id),
/// }
/// ```
#[component]
pub fn GameGrid(view: GridView, on_delete: EventHandler<GameId>) -> Element {
    let body = match view {
        GridView::Empty { message } => rsx! {
            div { class: "games-empty",
                p { "{message}" }
            }
        },
        GridView::Cards(cards) => rsx! {
            for card in cards {
                GameCard {
                    key: "{card.id}",
                    card: card.clone(),
                    on_delete: on_delete,
                }
            }
        },
    };

    rsx! {
        div { id: "gamesGrid", class: "games-grid", {body} }
    }
}
