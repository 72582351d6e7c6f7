//! Form controls shared by the shelf views.

mod button;
mod input;

pub use button::*;
pub use input::*;
