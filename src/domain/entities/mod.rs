mod card;
mod game;
mod player;

pub use card::{Card, Hand, Rank, Suit};
pub use game::{Game, GameStatus, GAME_RETENTION_SECS, MAX_SEATS, VALID_STAKES};
pub use player::Player;
