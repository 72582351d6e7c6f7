//! The Shelf - main application view.
//!
//! Game grid on top, add-game form below, toast in the corner.

use arcade_shelf_core::{Confirmation, GameId, CONFIRM_DELETE_PROMPT};
use dioxus::desktop::{use_window, DesktopContext};
use dioxus::prelude::*;
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

use crate::components::{AddGameForm, GameGrid, ToastHost};
use crate::context::{schedule_toast_expiry, use_gallery, use_toast_timings};

/// Ask the user to confirm a removal with a native yes/no dialog.
///
/// The dialog is parented to the shelf window, so it stays on top of it
/// and blocks input to it until answered.
async fn confirm_delete(desktop: DesktopContext) -> Confirmation {
    let answer = AsyncMessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Remove game")
        .set_description(CONFIRM_DELETE_PROMPT)
        .set_buttons(MessageButtons::YesNo)
        .set_parent(&desktop.window)
        .show()
        .await;

    confirmation_from(answer)
}

/// Only an explicit Yes confirms; closing the dialog declines.
fn confirmation_from(answer: MessageDialogResult) -> Confirmation {
    Confirmation::from(matches!(answer, MessageDialogResult::Yes))
}

/// Main application view component.
#[component]
pub fn Shelf() -> Element {
    let mut gallery = use_gallery();
    let timings = use_toast_timings();
    let desktop = use_window();

    // Handler for removing a game
    let delete_game = move |id: GameId| {
        let desktop = desktop.clone();
        spawn(async move {
            let confirmation = confirm_delete(desktop).await;
            if gallery.write().delete(id, confirmation) {
                schedule_toast_expiry(gallery, timings);
            }
        });
    };

    let view = gallery.read().view();

    rsx! {
        main { class: "shelf",
            header { class: "shelf-header",
                h1 { class: "page-title", "Arcade Shelf" }
                p { class: "tagline", "All your games, one click away" }
            }

            section { class: "section",
                h2 { class: "section-header", "My games" }
                GameGrid { view: view, on_delete: delete_game }
            }

            section { class: "section",
                h2 { class: "section-header", "Add a game" }
                AddGameForm {}
            }

            ToastHost {}
        }
    }
}
