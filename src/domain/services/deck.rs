//! Deck construction, shuffling and hand analysis

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::entities::{Card, Rank, Suit};

/// Build the 40-card Tonk deck (no 8s, 9s or 10s), face down and shuffled
pub fn build_deck<R: Rng>(rng: &mut R) -> Vec<Card> {
    let mut deck = Vec::with_capacity(40);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    deck.shuffle(rng);
    deck
}

/// Shuffle an arbitrary pile in place; used to rebuild the draw pile from
/// the discard pile
pub fn reshuffle<R: Rng>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

/// Total point value of a hand
pub fn hand_value(cards: &[Card]) -> u32 {
    cards.iter().map(|c| c.value()).sum()
}

/// A spread is three cards of the same rank (set), or three cards of the
/// same suit with strictly consecutive values (run).
pub fn is_spread(cards: &[Card]) -> bool {
    if cards.len() < 3 {
        return false;
    }

    if cards.iter().all(|c| c.rank == cards[0].rank) {
        return true;
    }

    if !cards.iter().all(|c| c.suit == cards[0].suit) {
        return false;
    }

    let mut values: Vec<u32> = cards.iter().map(|c| c.value()).collect();
    values.sort_unstable();
    values.windows(2).all(|w| w[1] == w[0] + 1)
}
