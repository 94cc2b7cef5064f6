use std::sync::Arc;

use crate::domain::entities::{Game, Player, VALID_STAKES};
use crate::domain::repositories::{GameRepository, Ledger, LedgerError, RepositoryError};
use crate::domain::services::engine;

/// Create game input
pub struct CreateGameInput {
    pub user_id: String,
    pub username: String,
    pub avatar: String,
    pub stake: u32,
    /// Fill the remaining seats with bots and start immediately
    pub auto_fill: bool,
    /// Deterministic shuffle for tests; entropy when absent
    pub seed: Option<u64>,
}

/// Create game use case: validate the stake, take it from the creator's
/// balance, deal a fresh table and persist it.
pub struct CreateGame<R: GameRepository, L: Ledger> {
    games: Arc<R>,
    ledger: Arc<L>,
}

impl<R: GameRepository, L: Ledger> CreateGame<R, L> {
    pub fn new(games: Arc<R>, ledger: Arc<L>) -> Self {
        Self { games, ledger }
    }

    pub async fn execute(&self, input: CreateGameInput) -> Result<Game, CreateGameError> {
        if !VALID_STAKES.contains(&input.stake) {
            return Err(CreateGameError::InvalidStake(input.stake));
        }

        self.ledger
            .debit(&input.user_id, input.stake)
            .await
            .map_err(map_ledger_error)?;

        let human = Player::human(input.user_id.clone(), input.username, input.avatar);
        let game = engine::create_game(
            uuid::Uuid::new_v4().to_string(),
            human,
            input.stake,
            input.auto_fill,
            input.seed,
        );

        if let Err(err) = self.games.insert(&game).await {
            // the stake must not vanish with the game record
            if let Err(refund_err) = self.ledger.credit(&input.user_id, input.stake).await {
                tracing::error!(
                    user_id = %input.user_id,
                    stake = input.stake,
                    error = %refund_err,
                    "failed to refund stake after game insert failure"
                );
            }
            return Err(err.into());
        }

        Ok(game)
    }
}

fn map_ledger_error(err: LedgerError) -> CreateGameError {
    match err {
        LedgerError::InsufficientBalance => CreateGameError::InsufficientBalance,
        other => CreateGameError::Ledger(other),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CreateGameError {
    #[error("Invalid stake amount: {0}")]
    InvalidStake(u32),
    #[error("Insufficient balance")]
    InsufficientBalance,
    #[error("Ledger error: {0}")]
    Ledger(LedgerError),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
