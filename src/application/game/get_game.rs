use std::sync::Arc;

use crate::domain::repositories::{GameRepository, RepositoryError};
use crate::domain::value_objects::GameView;

/// Get game use case: load a game and project it into a human-safe
/// snapshot with automated hands masked.
pub struct GetGame<R: GameRepository> {
    games: Arc<R>,
}

impl<R: GameRepository> GetGame<R> {
    pub fn new(games: Arc<R>) -> Self {
        Self { games }
    }

    pub async fn execute(&self, game_id: &str) -> Result<GameView, GetGameError> {
        let game = self
            .games
            .find_by_id(game_id)
            .await?
            .ok_or(GetGameError::GameNotFound)?;

        Ok(GameView::for_viewer(&game))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GetGameError {
    #[error("Game not found")]
    GameNotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
