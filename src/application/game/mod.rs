mod create_game;
mod get_game;
mod join_game;
mod perform_action;

pub use create_game::{CreateGame, CreateGameError, CreateGameInput};
pub use get_game::{GetGame, GetGameError};
pub use join_game::{JoinGame, JoinGameError, JoinGameInput};
pub use perform_action::{PerformAction, PerformActionError, PerformActionInput};
