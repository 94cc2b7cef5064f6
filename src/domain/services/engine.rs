//! Game state machine
//!
//! Owns every mutation of a `Game`: dealing, the draw/discard/drop protocol,
//! and the synchronous automated-turn cascade that runs until control comes
//! back to a human seat or the game ends. Callers must serialize
//! `apply_action` per game id; the engine assumes exclusive access for the
//! duration of one call.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::entities::{Card, Game, GameStatus, Player};
use crate::domain::services::deck::{build_deck, hand_value, reshuffle};
use crate::domain::services::penalties::tick_penalties;
use crate::domain::services::scoring::special_payout_multiplier;
use crate::domain::value_objects::{DrawSource, PlayerAction};
use crate::infrastructure::bot::{BotMove, BotStrategy};

/// Cards dealt to each seat
pub const HAND_SIZE: usize = 5;

/// Automated seats created when a game is auto-filled
pub const AUTO_FILL_BOTS: usize = 3;

/// Cascade iterations allowed per seat before the engine declares the
/// state corrupt. Once every human has dropped the cascade legitimately
/// runs to game end, so the ceiling must cover a full bots-only endgame.
const CASCADE_CAP_PER_SEAT: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Game not in progress")]
    GameNotActive,
    #[error("Not your turn")]
    NotYourTurn,
    #[error("Card not in hand")]
    CardNotInHand,
    #[error("No cards to draw")]
    NoCardsToDraw,
    #[error("Cannot drop due to penalties")]
    CannotDrop,
    /// Internal invariant violation, never a user input problem
    #[error("Automated turn cascade exceeded {0} iterations")]
    CascadeOverflow(usize),
}

/// Create a game for one human seat: fresh shuffled deck, five cards per
/// seat, one revealed card seeding the discard pile. With `auto_fill` the
/// table is completed with bots and play starts immediately; otherwise the
/// game waits for joins.
pub fn create_game(game_id: String, human: Player, stake: u32, auto_fill: bool, seed: Option<u64>) -> Game {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut game = Game::new(game_id, stake);
    game.deck = build_deck(&mut rng);

    game.players.push(human);
    if auto_fill {
        for i in 1..=AUTO_FILL_BOTS {
            game.players.push(Player::automated(i));
        }
    }

    for player in game.players.iter_mut() {
        for _ in 0..HAND_SIZE {
            if let Some(mut card) = game.deck.pop() {
                if !player.is_ai {
                    card.reveal();
                }
                player.hand.push(card);
            }
        }
    }

    if let Some(mut seed_card) = game.deck.pop() {
        seed_card.reveal();
        game.discard_pile.push(seed_card);
    }

    game.pot = stake * game.players.len() as u32;
    game.status = if auto_fill {
        GameStatus::Playing
    } else {
        GameStatus::Waiting
    };

    tracing::info!(
        game_id = %game.id,
        stake,
        seats = game.players.len(),
        status = game.status.as_str(),
        "game created"
    );

    game
}

/// Seat a joining human in a waiting game: deal five revealed cards and
/// grow the pot. Filling the last seat starts play.
pub fn seat_player(game: &mut Game, mut player: Player) {
    for _ in 0..HAND_SIZE {
        if let Some(mut card) = game.deck.pop() {
            card.reveal();
            player.hand.push(card);
        }
    }

    game.players.push(player);
    game.pot += game.stake;

    if game.is_full() {
        game.status = GameStatus::Playing;
    }
    game.touch();
}

/// Validate and apply one action for the seat holding the turn, then run
/// automated turns until a human seat is up or the game ends.
pub fn apply_action(
    game: &mut Game,
    strategy: &dyn BotStrategy,
    seat_id: &str,
    action: &PlayerAction,
) -> Result<(), EngineError> {
    if game.status != GameStatus::Playing {
        return Err(EngineError::GameNotActive);
    }
    if game.current_player().id != seat_id {
        return Err(EngineError::NotYourTurn);
    }

    match action {
        PlayerAction::Draw { source } => {
            // drawing does not end the turn and does not tick penalties
            let mut card = draw_card(game, *source)?;
            card.reveal();
            game.current_player_mut().hand.push(card);
            game.touch();
        }
        PlayerAction::Discard { card_id } => {
            let seat = game.current_player_index;
            let position = game.players[seat]
                .hand
                .iter()
                .position(|c| c.matches_id(card_id))
                .ok_or(EngineError::CardNotInHand)?;

            let mut card = game.players[seat].hand.remove(position);
            card.reveal();
            game.discard_pile.insert(0, card);

            game.advance_turn();
            tick_penalties(&mut game.players);
            game.touch();
            run_automated_turns(game, strategy)?;
        }
        PlayerAction::Drop => {
            if !game.current_player().can_drop {
                return Err(EngineError::CannotDrop);
            }

            drop_current_player(game);
            game.touch();
            if game.status == GameStatus::Playing {
                game.advance_turn();
                tick_penalties(&mut game.players);
                run_automated_turns(game, strategy)?;
            }
        }
    }

    Ok(())
}

/// Pop a card from the chosen pile, rebuilding the draw pile from the
/// discard pile first when it has run dry. The most recent discard always
/// stays behind as the visible top.
fn draw_card(game: &mut Game, source: DrawSource) -> Result<Card, EngineError> {
    if game.deck.is_empty() && !game.discard_pile.is_empty() {
        let top = game.discard_pile.remove(0);
        game.deck.append(&mut game.discard_pile);
        let mut rng = rand::thread_rng();
        reshuffle(&mut game.deck, &mut rng);
        game.discard_pile.push(top);
    }

    let card = match source {
        DrawSource::Discard if !game.discard_pile.is_empty() => Some(game.discard_pile.remove(0)),
        DrawSource::Discard => None,
        DrawSource::Deck => game.deck.pop(),
    };

    card.ok_or(EngineError::NoCardsToDraw)
}

/// Mark the current player dropped with their hand value as score; if that
/// was the last active seat, settle the game.
fn drop_current_player(game: &mut Game) {
    let seat = game.current_player_index;
    game.players[seat].is_dropped = true;
    game.players[seat].score = hand_value(&game.players[seat].hand);

    if game.all_dropped() {
        finish_game(game);
    }
}

/// End the game: lowest score wins, earliest seat breaking ties, payout
/// multiplier taken from the winning hand. The first-turn multiplier flag
/// has no caller supplying it, so it is always false here.
fn finish_game(game: &mut Game) {
    game.status = GameStatus::Ended;

    let mut winner_seat = 0;
    for (seat, player) in game.players.iter().enumerate() {
        if player.score < game.players[winner_seat].score {
            winner_seat = seat;
        }
    }

    let winner = &game.players[winner_seat];
    game.winning_multiplier = special_payout_multiplier(winner, false);
    game.winner = Some(winner.id.clone());

    tracing::info!(
        game_id = %game.id,
        winner = %winner.id,
        score = winner.score,
        multiplier = game.winning_multiplier,
        "game ended"
    );
}

/// Drive consecutive automated turns. Each iteration either drops a seat or
/// completes a draw-then-discard turn, so the loop terminates; the explicit
/// cap turns state corruption into a hard error instead of a spin.
fn run_automated_turns(game: &mut Game, strategy: &dyn BotStrategy) -> Result<(), EngineError> {
    let cap = game.players.len() * CASCADE_CAP_PER_SEAT;
    let mut iterations = 0;

    while game.status == GameStatus::Playing && game.current_player().is_ai {
        iterations += 1;
        if iterations > cap {
            tracing::error!(game_id = %game.id, cap, "automated turn cascade exceeded cap");
            return Err(EngineError::CascadeOverflow(cap));
        }

        if game.current_player().is_dropped {
            game.advance_turn();
            continue;
        }

        let seat = game.current_player_index;
        match strategy.decide(game, seat) {
            BotMove::Drop => {
                drop_current_player(game);
                game.touch();
                if game.status == GameStatus::Playing {
                    game.advance_turn();
                    tick_penalties(&mut game.players);
                }
            }
            BotMove::Draw(source) => {
                // bot cards stay face down; the engine sees them regardless
                let card = draw_card(game, source)?;
                game.players[seat].hand.push(card);

                let discard_id = strategy.choose_discard(&game.players[seat].hand);
                let position = game.players[seat]
                    .hand
                    .iter()
                    .position(|c| c.matches_id(&discard_id))
                    .ok_or(EngineError::CardNotInHand)?;
                let mut discarded = game.players[seat].hand.remove(position);
                discarded.reveal();
                game.discard_pile.insert(0, discarded);

                game.advance_turn();
                tick_penalties(&mut game.players);
                game.touch();
            }
        }
    }

    Ok(())
}
