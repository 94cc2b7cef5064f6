//! Automated player decision-making

mod heuristic;

pub use heuristic::HeuristicStrategy;

use crate::domain::entities::{Card, Game};
use crate::domain::value_objects::DrawSource;

/// Decision for one automated turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotMove {
    Drop,
    Draw(DrawSource),
}

/// Bot strategy trait. Strategies see the full unmasked game state; the
/// masking projection only applies to human-facing snapshots.
pub trait BotStrategy: Send + Sync {
    /// Choose drop vs. draw (and the draw source) for the seat's turn
    fn decide(&self, game: &Game, seat_index: usize) -> BotMove;

    /// Choose which card to discard after drawing
    fn choose_discard(&self, hand: &[Card]) -> String;
}
