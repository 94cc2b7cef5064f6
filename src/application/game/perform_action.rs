use std::sync::Arc;

use crate::domain::entities::{Game, GameStatus};
use crate::domain::repositories::{GameRepository, Ledger, RepositoryError};
use crate::domain::services::engine::{self, EngineError};
use crate::domain::value_objects::PlayerAction;
use crate::infrastructure::bot::{BotStrategy, HeuristicStrategy};

/// Perform action input
pub struct PerformActionInput {
    pub game_id: String,
    pub user_id: String,
    pub action: PlayerAction,
}

/// Perform action use case: run one validated action through the state
/// machine (including the automated-turn cascade), persist the result and
/// settle the pot when the game ends on a human winner.
pub struct PerformAction<R: GameRepository, L: Ledger> {
    games: Arc<R>,
    ledger: Arc<L>,
    strategy: Arc<dyn BotStrategy>,
}

impl<R: GameRepository, L: Ledger> PerformAction<R, L> {
    pub fn new(games: Arc<R>, ledger: Arc<L>) -> Self {
        Self::with_strategy(games, ledger, Arc::new(HeuristicStrategy::new()))
    }

    pub fn with_strategy(games: Arc<R>, ledger: Arc<L>, strategy: Arc<dyn BotStrategy>) -> Self {
        Self {
            games,
            ledger,
            strategy,
        }
    }

    pub async fn execute(&self, input: PerformActionInput) -> Result<Game, PerformActionError> {
        let mut game = self
            .games
            .find_by_id(&input.game_id)
            .await?
            .ok_or(PerformActionError::GameNotFound)?;

        let was_playing = game.status == GameStatus::Playing;

        match engine::apply_action(&mut game, self.strategy.as_ref(), &input.user_id, &input.action)
        {
            Ok(()) => {}
            Err(err @ EngineError::CascadeOverflow(_)) => {
                return Err(PerformActionError::Internal(err))
            }
            Err(err) => return Err(PerformActionError::Rejected(err)),
        }

        // persist before paying out so a ledger failure can never erase the
        // win record
        game.version += 1;
        self.games.save(&game).await?;

        if was_playing && game.status == GameStatus::Ended {
            self.settle_pot(&game).await?;
        }

        Ok(game)
    }

    async fn settle_pot(&self, game: &Game) -> Result<(), PerformActionError> {
        let winner_id = match &game.winner {
            Some(id) => id,
            None => return Ok(()),
        };
        let winner = match game.players.iter().find(|p| p.id == *winner_id) {
            Some(player) if !player.is_ai => player,
            _ => return Ok(()),
        };

        let winnings = game.pot * game.winning_multiplier;
        if let Err(err) = self.ledger.credit(&winner.id, winnings).await {
            tracing::error!(
                game_id = %game.id,
                winner = %winner.id,
                winnings,
                error = %err,
                "winner payout failed; win record is persisted, credit must be retried"
            );
            return Err(PerformActionError::PayoutFailed {
                winner: winner.id.clone(),
                amount: winnings,
            });
        }

        tracing::info!(
            game_id = %game.id,
            winner = %winner.id,
            winnings,
            multiplier = game.winning_multiplier,
            "pot paid out"
        );
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PerformActionError {
    #[error("Game not found")]
    GameNotFound,
    /// Validation failure; nothing was mutated or persisted
    #[error("Action rejected: {0}")]
    Rejected(EngineError),
    /// Engine invariant violation; treat as fatal, not user error
    #[error("Internal engine failure: {0}")]
    Internal(EngineError),
    /// The game ended and was saved, but the winner credit failed
    #[error("Payout of {amount} to {winner} failed")]
    PayoutFailed { winner: String, amount: u32 },
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Card, Player, Rank, Suit};
    use crate::domain::value_objects::DrawSource;
    use crate::infrastructure::memory::{InMemoryGameRepository, InMemoryLedger};

    async fn seeded_table(games: &InMemoryGameRepository) -> Game {
        let human = Player::human("u1".into(), "alice".into(), "a.svg".into());
        let game = engine::create_game("g1".into(), human, 5, true, Some(21));
        games.insert(&game).await.unwrap();
        game
    }

    fn action(action: PlayerAction) -> PerformActionInput {
        PerformActionInput {
            game_id: "g1".into(),
            user_id: "u1".into(),
            action,
        }
    }

    #[tokio::test]
    async fn test_action_persists_new_version() {
        let games = Arc::new(InMemoryGameRepository::new());
        let ledger = Arc::new(InMemoryLedger::new());
        seeded_table(&games).await;

        let use_case = PerformAction::new(games.clone(), ledger);
        let game = use_case
            .execute(action(PlayerAction::Draw {
                source: DrawSource::Deck,
            }))
            .await
            .unwrap();

        assert_eq!(game.version, 2);
        let stored = games.find_by_id("g1").await.unwrap().unwrap();
        assert_eq!(stored.version, 2);
        assert_eq!(stored.players[0].hand.len(), 6);
    }

    #[tokio::test]
    async fn test_rejected_action_persists_nothing() {
        let games = Arc::new(InMemoryGameRepository::new());
        let ledger = Arc::new(InMemoryLedger::new());
        seeded_table(&games).await;

        let use_case = PerformAction::new(games.clone(), ledger);
        let err = use_case
            .execute(PerformActionInput {
                game_id: "g1".into(),
                user_id: "ai-1".into(),
                action: PlayerAction::Drop,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PerformActionError::Rejected(EngineError::NotYourTurn)
        ));
        let stored = games.find_by_id("g1").await.unwrap().unwrap();
        assert_eq!(stored.version, 1);
    }

    #[tokio::test]
    async fn test_human_winner_is_credited_exactly_once() {
        let games = Arc::new(InMemoryGameRepository::new());
        let ledger = Arc::new(InMemoryLedger::new());
        ledger.set_balance("u1", 0).await;

        // hand-built endgame: three bots already dropped with scores the
        // human's 46-point hand undercuts
        let human = Player::human("u1".into(), "alice".into(), "a.svg".into());
        let mut game = engine::create_game("g1".into(), human, 10, true, Some(21));
        for (seat, score) in [(1usize, 47u32), (2, 52), (3, 48)] {
            game.players[seat].is_dropped = true;
            game.players[seat].score = score;
        }
        game.players[0].hand.clear();
        for card in [
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::King, Suit::Clubs),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Six, Suit::Diamonds),
        ] {
            game.players[0].hand.push(card);
        }
        game.current_player_index = 0;
        games.insert(&game).await.unwrap();

        let use_case = PerformAction::new(games.clone(), ledger.clone());
        let game = use_case.execute(action(PlayerAction::Drop)).await.unwrap();

        assert_eq!(game.status, GameStatus::Ended);
        assert_eq!(game.winner.as_deref(), Some("u1"));
        assert_eq!(game.players[0].score, 46);
        assert_eq!(game.winning_multiplier, 1);
        // pot 40 x 1, credited exactly once
        assert_eq!(ledger.balance("u1").await, Some(40));

        // replaying the drop is a clean rejection with no second credit
        let err = use_case.execute(action(PlayerAction::Drop)).await.unwrap_err();
        assert!(matches!(
            err,
            PerformActionError::Rejected(EngineError::GameNotActive)
        ));
        assert_eq!(ledger.balance("u1").await, Some(40));
    }

    #[tokio::test]
    async fn test_bot_winner_gets_no_ledger_credit() {
        let games = Arc::new(InMemoryGameRepository::new());
        let ledger = Arc::new(InMemoryLedger::new());
        ledger.set_balance("u1", 0).await;

        let human = Player::human("u1".into(), "alice".into(), "a.svg".into());
        let mut game = engine::create_game("g1".into(), human, 10, true, Some(21));
        for (seat, score) in [(1usize, 12u32), (2, 52), (3, 48)] {
            game.players[seat].is_dropped = true;
            game.players[seat].score = score;
        }
        // human's 47-point hand loses to the bot's 12
        game.players[0].hand.clear();
        for card in [
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::King, Suit::Clubs),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Diamonds),
        ] {
            game.players[0].hand.push(card);
        }
        games.insert(&game).await.unwrap();

        let use_case = PerformAction::new(games.clone(), ledger.clone());
        let game = use_case.execute(action(PlayerAction::Drop)).await.unwrap();

        assert_eq!(game.status, GameStatus::Ended);
        assert_eq!(game.winner.as_deref(), Some("ai-1"));
        assert_eq!(ledger.balance("u1").await, Some(0));
    }
}
