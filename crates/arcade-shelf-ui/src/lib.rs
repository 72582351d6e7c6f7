//! Arcade Shelf UI Components
//!
//! Reusable Dioxus building blocks for the shelf window, styled by the
//! neon-pink stylesheet shipped with the app:
//! - **Pink (#ff1493)**: primary actions, card borders, link accents
//! - **Light pink (#ff69b4)**: hover glow, secondary text
//! - **Crimson (#dc143c)**: destructive actions and error toasts
//! - **Charcoal (#1a1a1a)**: background

pub mod components;

pub use components::*;
