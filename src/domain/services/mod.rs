pub mod deck;
pub mod engine;
pub mod penalties;
pub mod scoring;

pub use engine::{apply_action, create_game, seat_player, EngineError, AUTO_FILL_BOTS, HAND_SIZE};
