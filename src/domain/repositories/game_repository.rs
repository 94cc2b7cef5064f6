use async_trait::async_trait;

use crate::domain::entities::Game;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Already exists: {0}")]
    AlreadyExists(String),
    /// A concurrent writer got there first; reload and retry
    #[error("Version conflict on game {0}")]
    Conflict(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Game persistence trait. One opaque record per game; the version check on
/// `save` is what enforces the single-writer-per-game requirement across
/// concurrent action requests.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Load a game by id
    async fn find_by_id(&self, id: &str) -> Result<Option<Game>, RepositoryError>;

    /// Store a brand-new game
    async fn insert(&self, game: &Game) -> Result<(), RepositoryError>;

    /// Persist a mutated game. The caller must have bumped `game.version`;
    /// saving over a record whose stored version is not exactly one behind
    /// fails with `Conflict`.
    async fn save(&self, game: &Game) -> Result<(), RepositoryError>;

    /// Drop games whose retention window has elapsed; returns how many
    /// records were removed
    async fn purge_expired(&self, now: i64) -> Result<usize, RepositoryError>;
}
