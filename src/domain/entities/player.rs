use serde::{Deserialize, Serialize};

use crate::domain::entities::card::Hand;

/// A seated player, human or automated
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub username: String,
    pub avatar: String,
    pub hand: Hand,
    /// Hand value locked in at drop time; meaningful only once `is_dropped`
    pub score: u32,
    pub is_dropped: bool,
    pub can_drop: bool,
    /// Turn-skip penalty counter; while > 0 the player may not drop
    pub penalties: u32,
    pub is_ai: bool,
}

impl Player {
    /// Create a new human player with an empty hand
    pub fn human(id: String, username: String, avatar: String) -> Self {
        Self {
            id,
            username,
            avatar,
            hand: Hand::new(),
            score: 0,
            is_dropped: false,
            can_drop: true,
            penalties: 0,
            is_ai: false,
        }
    }

    /// Create an automated player for the given bot seat number
    pub fn automated(seat_number: usize) -> Self {
        Self {
            id: format!("ai-{}", seat_number),
            username: format!("AI Player {}", seat_number),
            avatar: format!(
                "https://avatars.dicebear.com/api/bottts/ai{}.svg",
                seat_number
            ),
            hand: Hand::new(),
            score: 0,
            is_dropped: false,
            can_drop: true,
            penalties: 0,
            is_ai: true,
        }
    }
}
