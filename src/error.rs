//! Error taxonomy for the auction engine.
//!
//! Every failure is raised synchronously to the immediate caller; the
//! engine never retries. A strategy breaking the bid contract is a
//! programming defect, not a recoverable game condition.

use thiserror::Error;

use crate::core::{Card, Suit};
use crate::engine::{GameId, GamePhase};

/// All errors the engine and registry can produce.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GameError {
    /// A game was constructed with 0 or more than 3 players. Only three
    /// bidding suits exist; diamonds are reserved for the prize deck.
    #[error("game requires 1 to 3 players, got {0}")]
    InvalidPlayerCount(usize),

    /// A bidding deck was requested for the reserved diamond suit.
    #[error("no bidding deck for suit {0}")]
    InvalidSuit(Suit),

    /// An operation was invoked in a phase that forbids it.
    #[error("{operation} is not allowed while the game is {phase}")]
    IllegalState {
        operation: &'static str,
        phase: GamePhase,
    },

    /// A strategy returned a card it did not hold, or failed to remove
    /// exactly that card from its hand. Fatal: the round is aborted.
    #[error("player {player} produced an invalid bid: {card}")]
    InvalidBid { player: String, card: Card },

    /// Two players were registered under the same name.
    #[error("duplicate player name {0:?}")]
    DuplicatePlayer(String),

    /// A registry lookup used an unknown game identifier.
    #[error("no game with id {0}")]
    GameNotFound(GameId),
}
