//! The auction engine: round state machine, scoring, and game registry.
//!
//! - [`game`]: the per-game state machine and round-resolution algorithm
//! - [`report`]: immutable status, standings, and history types
//! - [`registry`]: id-keyed management of concurrent independent games

pub mod game;
pub mod registry;
pub mod report;

pub use game::{AuctionGame, GameId, GamePhase};
pub use registry::GameRegistry;
pub use report::{
    GameOutcome, GameStatus, PlayerStatus, PlayerSummary, RecordedBid, RoundRecord, Standing,
};
