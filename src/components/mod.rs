//! UI Components for Arcade Shelf.

mod add_game_form;
mod game_card;
mod game_grid;
mod toast;

pub use add_game_form::AddGameForm;
pub use game_card::GameCard;
pub use game_grid::GameGrid;
pub use toast::ToastHost;
