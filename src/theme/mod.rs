//! Visual theme: global stylesheet and palette.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
