//! Heuristic bot strategy
//!
//! Drops on a cheap hand, takes the discard when it helps, otherwise draws
//! blind and sheds the most expensive card that is not protecting a
//! potential spread.

use super::{BotMove, BotStrategy};
use crate::domain::entities::{Card, Game};
use crate::domain::services::deck::{hand_value, is_spread};
use crate::domain::value_objects::DrawSource;

pub struct HeuristicStrategy;

impl HeuristicStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeuristicStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl BotStrategy for HeuristicStrategy {
    fn decide(&self, game: &Game, seat_index: usize) -> BotMove {
        let player = &game.players[seat_index];

        if player.can_drop && should_drop(&player.hand) {
            return BotMove::Drop;
        }

        if let Some(top) = game.discard_pile.first() {
            if would_improve(&player.hand, top) {
                return BotMove::Draw(DrawSource::Discard);
            }
        }

        BotMove::Draw(DrawSource::Deck)
    }

    fn choose_discard(&self, hand: &[Card]) -> String {
        let mut by_value: Vec<&Card> = hand.iter().collect();
        by_value.sort_by(|a, b| b.value().cmp(&a.value()));

        for card in &by_value {
            if !is_part_of_potential_spread(card, hand) {
                return card.id();
            }
        }

        // every card protects a potential spread: shed the most expensive
        by_value[0].id()
    }
}

/// Drop on 15 or less outright; with a made spread in hand, drop on 25 or
/// less. Exhaustive 3-combination scan - hands never exceed 6 cards.
pub fn should_drop(hand: &[Card]) -> bool {
    let value = hand_value(hand);

    if value <= 15 {
        return true;
    }

    for i in 0..hand.len().saturating_sub(2) {
        for j in (i + 1)..hand.len() - 1 {
            for k in (j + 1)..hand.len() {
                if is_spread(&[hand[i], hand[j], hand[k]]) {
                    return value <= 25;
                }
            }
        }
    }

    false
}

/// A candidate improves the hand if it completes a spread with any held
/// pair, or simply undercuts the current worst card.
pub fn would_improve(hand: &[Card], candidate: &Card) -> bool {
    for i in 0..hand.len().saturating_sub(1) {
        for j in (i + 1)..hand.len() {
            if is_spread(&[hand[i], hand[j], *candidate]) {
                return true;
            }
        }
    }

    match hand.iter().map(|c| c.value()).max() {
        Some(max) => candidate.value() < max,
        None => false,
    }
}

/// A card is worth keeping if another card shares its rank, or a same-suit
/// card lies within two points of it.
pub fn is_part_of_potential_spread(card: &Card, hand: &[Card]) -> bool {
    let others = hand
        .iter()
        .filter(|c| c.rank != card.rank || c.suit != card.suit);

    for other in others {
        if other.rank == card.rank {
            return true;
        }
        if other.suit == card.suit && other.value().abs_diff(card.value()) <= 2 {
            return true;
        }
    }

    false
}
