//! Color constants for the neon-pink shelf palette.
//!
//! Mirrors the custom properties declared in [`super::styles`]; used where a
//! color has to be set inline.

// === PINK (Primary, Accents) ===
pub const PINK_PRIMARY: &str = "#ff1493";
pub const PINK_LIGHT: &str = "#ff69b4";
pub const CRIMSON: &str = "#dc143c";

// === TOASTS ===
pub const TOAST_SUCCESS_BG: &str = "linear-gradient(135deg, #ff1493, #ff69b4)";
pub const TOAST_ERROR_BG: &str = "linear-gradient(135deg, #ff1493, #dc143c)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_gradients_use_palette() {
        assert!(TOAST_SUCCESS_BG.contains(PINK_PRIMARY));
        assert!(TOAST_SUCCESS_BG.contains(PINK_LIGHT));
        assert!(TOAST_ERROR_BG.contains(CRIMSON));
    }
}
