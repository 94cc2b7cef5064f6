//! Special payout rules evaluated on the winning hand

use crate::domain::entities::Player;
use crate::domain::services::deck::hand_value;

/// Payout multiplier for the winning player's hand.
///
/// "Deal 50" pays double; 11-and-under pays triple; 41 on the first turn
/// pays triple. No call site currently supplies `is_first_turn` - the
/// engine always passes `false`, so the 41 rule only fires if wired up by
/// a future caller.
pub fn special_payout_multiplier(player: &Player, is_first_turn: bool) -> u32 {
    let value = hand_value(&player.hand);

    if value == 50 {
        return 2;
    }

    if is_first_turn && value == 41 {
        return 3;
    }

    if value <= 11 {
        return 3;
    }

    1
}
