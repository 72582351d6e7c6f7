//! Page components for Arcade Shelf.

mod shelf;

pub use shelf::Shelf;
