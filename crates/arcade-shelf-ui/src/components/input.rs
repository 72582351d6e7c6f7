//! Input Field Components
//!
//! Labelled text inputs for the add-game form.
//! Features:
//! - Dark background with pink border
//! - Pink glow on focus
//! - Optional hint after the label

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id; also ties the label to the input
    pub id: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Hint shown after the label (e.g., "optional")
    #[props(default)]
    pub hint: Option<String>,
}

/// Text input field
///
/// Always `type="text"` with no `required` attribute; callers validate on
/// submit.
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "gameName".to_string(),
///         value: name(),
///         oninput: move |s| name.set(s),
///         label: "Game name".to_string(),
///         placeholder: "e.g. Snake".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", " ({hint})" }
                    }
                }
            }
            input {
                id: "{props.id}",
                class: "input-field",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
