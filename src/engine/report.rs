//! Side-effect-free status and history types.
//!
//! Everything here is an immutable snapshot the engine hands out to
//! observers. None of these types carry `Card` values from a live hand;
//! `game_status` never reveals hands at all, and `player_status` reveals
//! ranks only under the visibility rules of [`AuctionGame::player_status`].
//!
//! [`AuctionGame::player_status`]: crate::engine::AuctionGame::player_status

use serde::{Deserialize, Serialize};

use crate::core::card::{Rank, Suit};

use super::game::{GameId, GamePhase};

/// Public per-player line in a game status: never includes hand contents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub suit: Suit,
    pub score: f64,
}

/// Snapshot of a game's lifecycle position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameStatus {
    pub id: GameId,
    pub phase: GamePhase,
    /// Completed rounds, 0-based.
    pub round: usize,
    pub players: Vec<PlayerSummary>,
}

/// Per-player view with visibility-controlled hand information.
///
/// `available_ranks` is `Some` only for the requesting player's own
/// entry, or for every entry when the query asked to reveal all.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub name: String,
    pub suit: Suit,
    pub score: f64,
    pub cards_left: usize,
    pub available_ranks: Option<Vec<Rank>>,
}

/// One player's committed bid in a resolved round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedBid {
    pub player: String,
    pub rank: Rank,
}

/// Immutable record of one resolved round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number, 1-based.
    pub round: u32,
    /// Rank (= point value) of the auctioned diamond.
    pub diamond: Rank,
    /// Every player's bid, in registration order.
    pub bids: Vec<RecordedBid>,
    /// Names of the players who bid the maximum rank.
    pub winners: Vec<String>,
    /// Points each winner received: diamond value / winner count.
    pub points_each: f64,
}

/// One line of the final standings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub player: String,
    pub score: f64,
}

/// Final result of a finished game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub id: GameId,
    /// Sorted by score descending; equal scores keep registration order.
    pub standings: Vec<Standing>,
    /// The complete round-history log.
    pub history: Vec<RoundRecord>,
}
