//! Button Components
//!
//! - Button: form submission, pink gradient
//! - IconButton / DeleteButton: compact actions on top of a card

use dioxus::prelude::*;

/// Join a base class with optional extra classes
pub fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
}

/// Primary button, pink gradient with a glow on hover
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         button_type: "submit".to_string(),
///         "Add game"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: "btn-primary",
            r#type: "{props.button_type}",
            {props.children}
        }
    }
}

/// Icon button for compact actions
///
/// Clicks never reach enclosing elements, so an icon button can sit on
/// top of a clickable card without triggering it.
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers, also used as tooltip
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_classes("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            title: "{props.aria_label}",
            "aria-label": "{props.aria_label}",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                props.onclick.call(());
            },
            {props.children}
        }
    }
}

/// Remove button with × icon, placed in a card corner
#[component]
pub fn DeleteButton(onclick: EventHandler<()>, #[props(default = "Remove".to_string())] label: String) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: label,
            class: "delete-btn".to_string(),
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_classes_handles_extra() {
        assert_eq!(join_classes("icon-btn", None), "icon-btn");
        assert_eq!(join_classes("icon-btn", Some("")), "icon-btn");
        assert_eq!(join_classes("icon-btn", Some("delete-btn")), "icon-btn delete-btn");
    }
}
