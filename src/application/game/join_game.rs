use std::sync::Arc;

use crate::domain::entities::{Game, GameStatus, Player};
use crate::domain::repositories::{GameRepository, Ledger, LedgerError, RepositoryError};
use crate::domain::services::engine;

/// Join game input
pub struct JoinGameInput {
    pub game_id: String,
    pub user_id: String,
    pub username: String,
    pub avatar: String,
}

/// Join game use case: seat a human in a waiting game, debiting the table
/// stake. Filling the last seat starts play.
pub struct JoinGame<R: GameRepository, L: Ledger> {
    games: Arc<R>,
    ledger: Arc<L>,
}

impl<R: GameRepository, L: Ledger> JoinGame<R, L> {
    pub fn new(games: Arc<R>, ledger: Arc<L>) -> Self {
        Self { games, ledger }
    }

    pub async fn execute(&self, input: JoinGameInput) -> Result<Game, JoinGameError> {
        let mut game = self
            .games
            .find_by_id(&input.game_id)
            .await?
            .ok_or(JoinGameError::GameNotFound)?;

        if game.status != GameStatus::Waiting {
            return Err(JoinGameError::GameNotJoinable);
        }
        if game.is_seated(&input.user_id) {
            return Err(JoinGameError::AlreadySeated);
        }
        if game.is_full() {
            return Err(JoinGameError::GameFull);
        }

        self.ledger
            .debit(&input.user_id, game.stake)
            .await
            .map_err(map_ledger_error)?;

        let player = Player::human(input.user_id.clone(), input.username, input.avatar);
        engine::seat_player(&mut game, player);
        game.version += 1;

        if let Err(err) = self.games.save(&game).await {
            // lost the save race: undo the debit before surfacing the error
            if let Err(refund_err) = self.ledger.credit(&input.user_id, game.stake).await {
                tracing::error!(
                    user_id = %input.user_id,
                    game_id = %game.id,
                    error = %refund_err,
                    "failed to refund stake after join save failure"
                );
            }
            return Err(err.into());
        }

        Ok(game)
    }
}

fn map_ledger_error(err: LedgerError) -> JoinGameError {
    match err {
        LedgerError::InsufficientBalance => JoinGameError::InsufficientBalance,
        other => JoinGameError::Ledger(other),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JoinGameError {
    #[error("Game not found")]
    GameNotFound,
    #[error("Game already in progress or ended")]
    GameNotJoinable,
    #[error("User already in game")]
    AlreadySeated,
    #[error("Game is full")]
    GameFull,
    #[error("Insufficient balance")]
    InsufficientBalance,
    #[error("Ledger error: {0}")]
    Ledger(LedgerError),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
