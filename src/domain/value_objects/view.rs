//! Viewer-facing game snapshots
//!
//! Masking is a projection applied at the boundary: automated players' cards
//! are replaced with an unknown placeholder, canonical state is untouched.

use serde::Serialize;

use crate::domain::entities::{Card, Game, GameStatus, Player};

/// A card as a human viewer may see it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: String,
    pub rank: String,
    pub suit: String,
    pub value: u32,
    pub is_hidden: bool,
}

impl CardView {
    fn revealed(card: &Card) -> Self {
        Self {
            id: card.id(),
            rank: card.rank.as_str().to_string(),
            suit: card.suit.as_str().to_string(),
            value: card.value(),
            is_hidden: card.is_hidden,
        }
    }

    fn masked() -> Self {
        Self {
            id: "?".to_string(),
            rank: "?".to_string(),
            suit: "?".to_string(),
            value: 0,
            is_hidden: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub id: String,
    pub username: String,
    pub avatar: String,
    pub hand: Vec<CardView>,
    pub score: u32,
    pub is_dropped: bool,
    pub can_drop: bool,
    pub penalties: u32,
    pub is_ai: bool,
}

impl PlayerView {
    fn from_player(player: &Player) -> Self {
        let hand = player
            .hand
            .iter()
            .map(|card| {
                if player.is_ai {
                    CardView::masked()
                } else {
                    CardView::revealed(card)
                }
            })
            .collect();

        Self {
            id: player.id.clone(),
            username: player.username.clone(),
            avatar: player.avatar.clone(),
            hand,
            score: player.score,
            is_dropped: player.is_dropped,
            can_drop: player.can_drop,
            penalties: player.penalties,
            is_ai: player.is_ai,
        }
    }
}

/// Full game snapshot for a human observer. Deck cards are reported only by
/// count; the discard pile is face up.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: String,
    pub players: Vec<PlayerView>,
    pub current_player_index: usize,
    pub deck_size: usize,
    pub discard_pile: Vec<CardView>,
    pub status: GameStatus,
    pub stake: u32,
    pub pot: u32,
    pub winner: Option<String>,
    pub winning_multiplier: u32,
    pub last_action_at: i64,
}

impl GameView {
    /// Project the canonical game state into a human-safe snapshot
    pub fn for_viewer(game: &Game) -> Self {
        Self {
            id: game.id.clone(),
            players: game.players.iter().map(PlayerView::from_player).collect(),
            current_player_index: game.current_player_index,
            deck_size: game.deck.len(),
            discard_pile: game.discard_pile.iter().map(CardView::revealed).collect(),
            status: game.status,
            stake: game.stake,
            pot: game.pot,
            winner: game.winner.clone(),
            winning_multiplier: game.winning_multiplier,
            last_action_at: game.last_action_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Rank, Suit};

    #[test]
    fn test_masking_hides_bot_cards_only() {
        let mut game = Game::new("g1".into(), 5);
        let mut human = Player::human("u1".into(), "alice".into(), "a.svg".into());
        let mut card = Card::new(Rank::King, Suit::Hearts);
        card.reveal();
        human.hand.push(card);
        game.players.push(human);

        let mut bot = Player::automated(1);
        bot.hand.push(Card::new(Rank::Ace, Suit::Spades));
        game.players.push(bot);

        let view = GameView::for_viewer(&game);
        assert_eq!(view.players[0].hand[0].rank, "K");
        assert_eq!(view.players[1].hand[0].rank, "?");
        assert_eq!(view.players[1].hand[0].value, 0);
        assert!(view.players[1].hand[0].is_hidden);

        // projection never mutates canonical state
        assert_eq!(game.players[1].hand[0].rank, Rank::Ace);
    }
}
