//! Turn-skip penalty bookkeeping
//!
//! A player who hits an opponent's potential spread loses drop eligibility
//! for a number of turns. `would_hit_spread` is the trigger predicate; the
//! action path does not currently call it (see DESIGN.md), so penalties are
//! only ever ticked down, never applied, until product wires the trigger.

use crate::domain::entities::{Card, Player};

/// Record an infraction: first hit locks the player for 2 turns, every
/// further hit while locked adds 1. Dropping is disabled immediately.
pub fn apply_penalty(player: &mut Player) {
    if player.penalties == 0 {
        player.penalties = 2;
    } else {
        player.penalties += 1;
    }
    player.can_drop = false;
}

/// Tick every player's penalty counter once per completed turn. A player
/// reaching 0 regains drop eligibility.
pub fn tick_penalties(players: &mut [Player]) {
    for player in players.iter_mut() {
        if player.penalties > 0 {
            player.penalties -= 1;
            if player.penalties == 0 {
                player.can_drop = true;
            }
        }
    }
}

/// Whether playing `card` against `player` hits a potential spread: two or
/// more same-rank cards already held, or two same-suit cards sitting in an
/// adjacent-pair completion window around the card's value.
pub fn would_hit_spread(card: &Card, player: &Player) -> bool {
    let same_rank = player
        .hand
        .iter()
        .filter(|c| c.rank == card.rank)
        .count();
    if same_rank >= 2 {
        return true;
    }

    let mut values: Vec<u32> = player
        .hand
        .iter()
        .filter(|c| c.suit == card.suit)
        .map(|c| c.value())
        .collect();
    if values.len() >= 2 {
        values.sort_unstable();
        let v = card.value();
        for pair in values.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            // card completes the middle, top or bottom of a run
            if (a + 1 == v && b == v + 1)
                || (a + 2 == v && b + 1 == v)
                || (a == v + 1 && b == v + 2)
            {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Rank, Suit};

    fn player_with(cards: &[(Rank, Suit)]) -> Player {
        let mut player = Player::automated(1);
        for &(rank, suit) in cards {
            player.hand.push(Card::new(rank, suit));
        }
        player
    }

    #[test]
    fn test_first_penalty_is_two_turns() {
        let mut player = Player::automated(1);
        apply_penalty(&mut player);
        assert_eq!(player.penalties, 2);
        assert!(!player.can_drop);

        apply_penalty(&mut player);
        assert_eq!(player.penalties, 3);
    }

    #[test]
    fn test_tick_restores_drop_eligibility() {
        let mut players = vec![Player::automated(1), Player::automated(2)];
        apply_penalty(&mut players[0]);

        tick_penalties(&mut players);
        assert_eq!(players[0].penalties, 1);
        assert!(!players[0].can_drop);

        tick_penalties(&mut players);
        assert_eq!(players[0].penalties, 0);
        assert!(players[0].can_drop);

        // untouched player stays at zero
        assert_eq!(players[1].penalties, 0);
        assert!(players[1].can_drop);
    }

    #[test]
    fn test_would_hit_spread_same_rank_pair() {
        let player = player_with(&[
            (Rank::Five, Suit::Hearts),
            (Rank::Five, Suit::Clubs),
            (Rank::King, Suit::Spades),
        ]);
        let card = Card::new(Rank::Five, Suit::Diamonds);
        assert!(would_hit_spread(&card, &player));
    }

    #[test]
    fn test_would_hit_spread_run_windows() {
        // holding 3h and 5h: a 4h completes the middle
        let player = player_with(&[(Rank::Three, Suit::Hearts), (Rank::Five, Suit::Hearts)]);
        assert!(would_hit_spread(&Card::new(Rank::Four, Suit::Hearts), &player));

        // holding 2h and 3h: a 4h extends the top
        let player = player_with(&[(Rank::Two, Suit::Hearts), (Rank::Three, Suit::Hearts)]);
        assert!(would_hit_spread(&Card::new(Rank::Four, Suit::Hearts), &player));

        // holding 5h and 6h: a 4h extends the bottom
        let player = player_with(&[(Rank::Five, Suit::Hearts), (Rank::Six, Suit::Hearts)]);
        assert!(would_hit_spread(&Card::new(Rank::Four, Suit::Hearts), &player));
    }

    #[test]
    fn test_would_hit_spread_negatives() {
        // wrong suit
        let player = player_with(&[(Rank::Three, Suit::Clubs), (Rank::Five, Suit::Clubs)]);
        assert!(!would_hit_spread(&Card::new(Rank::Four, Suit::Hearts), &player));

        // single same-suit card is not a forming pair
        let player = player_with(&[(Rank::Three, Suit::Hearts), (Rank::King, Suit::Clubs)]);
        assert!(!would_hit_spread(&Card::new(Rank::Four, Suit::Hearts), &player));

        // one same-rank card is not enough
        let player = player_with(&[(Rank::Five, Suit::Hearts), (Rank::King, Suit::Clubs)]);
        assert!(!would_hit_spread(&Card::new(Rank::Five, Suit::Spades), &player));
    }
}
