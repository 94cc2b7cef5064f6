use serde::{Deserialize, Serialize};

use crate::domain::entities::{Card, Player};

/// Stakes a game may be created with
pub const VALID_STAKES: [u32; 5] = [1, 5, 10, 20, 50];

/// Maximum seats at a table
pub const MAX_SEATS: usize = 4;

/// Games are retained for 24 hours after their last action
pub const GAME_RETENTION_SECS: i64 = 24 * 60 * 60;

/// Game lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Waiting,
    Playing,
    Ended,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Waiting => "waiting",
            GameStatus::Playing => "playing",
            GameStatus::Ended => "ended",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "waiting" => Some(GameStatus::Waiting),
            "playing" => Some(GameStatus::Playing),
            "ended" => Some(GameStatus::Ended),
            _ => None,
        }
    }
}

/// Game aggregate. All mutation goes through the engine; the `version`
/// counter backs the repository's optimistic single-writer check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub players: Vec<Player>,
    pub current_player_index: usize,
    /// Draw pile; top of the pile is the end of the vec
    pub deck: Vec<Card>,
    /// Discard pile; index 0 is the most recent discard
    pub discard_pile: Vec<Card>,
    pub status: GameStatus,
    pub stake: u32,
    pub pot: u32,
    pub winner: Option<String>,
    pub winning_multiplier: u32,
    pub version: u64,
    pub created_at: i64,
    pub last_action_at: i64,
}

impl Game {
    pub fn new(id: String, stake: u32) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id,
            players: Vec::with_capacity(MAX_SEATS),
            current_player_index: 0,
            deck: Vec::with_capacity(40),
            discard_pile: Vec::with_capacity(40),
            status: GameStatus::Waiting,
            stake,
            pot: 0,
            winner: None,
            winning_multiplier: 1,
            version: 1,
            created_at: now,
            last_action_at: now,
        }
    }

    #[inline]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    #[inline]
    pub fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current_player_index]
    }

    /// Seat index of the player with the given id
    pub fn seat_of(&self, player_id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id == player_id)
    }

    pub fn is_seated(&self, player_id: &str) -> bool {
        self.seat_of(player_id).is_some()
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= MAX_SEATS
    }

    pub fn all_dropped(&self) -> bool {
        self.players.iter().all(|p| p.is_dropped)
    }

    /// Advance the turn pointer to the next non-dropped seat (circular).
    /// Leaves the pointer in place if every seat has dropped.
    pub fn advance_turn(&mut self) {
        let seat_count = self.players.len();
        let mut next = (self.current_player_index + 1) % seat_count;
        let mut attempts = 0;
        while self.players[next].is_dropped && attempts < seat_count {
            next = (next + 1) % seat_count;
            attempts += 1;
        }
        self.current_player_index = next;
    }

    pub fn touch(&mut self) {
        self.last_action_at = chrono::Utc::now().timestamp();
    }

    /// Whether the retention window has elapsed
    pub fn is_expired(&self, now: i64) -> bool {
        now - self.last_action_at >= GAME_RETENTION_SECS
    }
}
