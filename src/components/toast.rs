//! Toast Host Component
//!
//! Shows the gallery's single visible toast in the top-right corner.

use arcade_shelf_core::{Toast, ToastKind, ToastPhase};
use dioxus::prelude::*;

use crate::context::use_gallery;
use crate::theme::colors;

/// CSS classes for a toast in the given state
fn toast_class(kind: ToastKind, phase: ToastPhase) -> String {
    let leaving = match phase {
        ToastPhase::Shown => "",
        ToastPhase::Leaving => " leaving",
    };
    format!("notification notification--{}{}", kind.as_str(), leaving)
}

fn toast_background(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => colors::TOAST_SUCCESS_BG,
        ToastKind::Error => colors::TOAST_ERROR_BG,
    }
}

/// Renders the current toast, if any.
///
/// Keyed by toast id, so a replacing toast mounts fresh and replays the
/// slide-in animation.
#[component]
pub fn ToastHost() -> Element {
    let gallery = use_gallery();
    let toast: Option<Toast> = gallery.read().toast().cloned();

    let Some(toast) = toast else {
        return rsx! {};
    };

    let class = toast_class(toast.kind, toast.phase);
    let background = toast_background(toast.kind);

    rsx! {
        div {
            key: "{toast.id}",
            class: "{class}",
            role: "status",
            style: "background: {background};",
            "{toast.message}"
        }
    }
}
