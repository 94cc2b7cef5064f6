mod action;
mod view;

pub use action::{DrawSource, PlayerAction};
pub use view::{CardView, GameView, PlayerView};
