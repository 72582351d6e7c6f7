//! Add Game Form
//!
//! Name, link and optional thumbnail. Submits to the gallery session,
//! which validates and shows the resulting toast.

use arcade_shelf_core::GameForm;
use arcade_shelf_ui::{Button, Input};
use dioxus::prelude::*;

use crate::context::{schedule_toast_expiry, use_gallery, use_toast_timings};

/// Form for adding a game to the shelf.
///
/// Enter in any field submits. On success the fields are cleared; on
/// failure they are kept so the user can fix them.
#[component]
pub fn AddGameForm() -> Element {
    let mut gallery = use_gallery();
    let timings = use_toast_timings();

    let mut name = use_signal(String::new);
    let mut link = use_signal(String::new);
    let mut thumbnail = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let form = GameForm::new(name(), link(), thumbnail());
        let result = gallery.write().submit(&form);
        schedule_toast_expiry(gallery, timings);

        if result.is_ok() {
            name.set(String::new());
            link.set(String::new());
            thumbnail.set(String::new());
        }
    };

    rsx! {
        form { id: "addGameForm", class: "add-game-form", onsubmit: on_submit,
            Input {
                id: "gameName".to_string(),
                label: "Game name".to_string(),
                placeholder: "e.g. Snake".to_string(),
                value: name(),
                oninput: move |s| name.set(s),
            }
            Input {
                id: "gameUrl".to_string(),
                label: "Game link".to_string(),
                placeholder: "https://...".to_string(),
                value: link(),
                oninput: move |s| link.set(s),
            }
            Input {
                id: "gameImage".to_string(),
                label: "Thumbnail URL".to_string(),
                hint: "optional".to_string(),
                placeholder: "https://.../cover.png".to_string(),
                value: thumbnail(),
                oninput: move |s| thumbnail.set(s),
            }
            Button {
                button_type: "submit".to_string(),
                "Add game"
            }
        }
    }
}
