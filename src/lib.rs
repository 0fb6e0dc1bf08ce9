//! # diamonds
//!
//! A sealed-bid auction engine for the Diamonds card game.
//!
//! Each round a diamond of a given value is revealed, every player
//! secretly commits one card from their private suit-hand as a bid, and
//! the highest rank wins the diamond's value — split evenly on ties.
//! A full game auctions the whole 13-card diamond deck.
//!
//! ## Design Principles
//!
//! 1. **Strategy-Agnostic**: The engine holds bidding strategies behind
//!    the [`Strategy`] trait and never inspects the concrete variant.
//!
//! 2. **Owned Randomness**: Every game owns a seedable [`GameRng`];
//!    randomized strategies receive theirs at construction. A supplied
//!    seed reproduces suit assignment, deck order, and strategy choices.
//!
//! 3. **Synchronous Rounds**: Player decisions run strictly
//!    sequentially within a round; games are independent of each other.
//!
//! ## Modules
//!
//! - `core`: cards, decks, hands, player seats, RNG
//! - `strategy`: the `Strategy` trait and concrete bots
//! - `engine`: the auction state machine, reports, and game registry
//! - `experiments`: headless batch matchups with descriptive stats
//! - `error`: the crate-wide error taxonomy
//!
//! ## Example
//!
//! ```
//! use diamonds::{ConservativeStrategy, GameRegistry, Player, ThresholdStrategy};
//!
//! let mut registry = GameRegistry::new();
//! let players = vec![
//!     Player::new("Ada", Box::new(ThresholdStrategy::new())),
//!     Player::new("Grace", Box::new(ConservativeStrategy::new())),
//! ];
//!
//! let id = registry.create_game(players, Some(42)).unwrap();
//! registry.run_to_end(id).unwrap();
//!
//! let outcome = registry.result(id).unwrap();
//! assert_eq!(outcome.history.len(), 13);
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod experiments;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    diamond_deck, suit_deck, Card, GameRng, Hand, Player, Rank, RoundContext, RoundMemory, Suit,
    DECK_SIZE,
};

pub use crate::engine::{
    AuctionGame, GameId, GameOutcome, GamePhase, GameRegistry, GameStatus, PlayerStatus,
    PlayerSummary, RecordedBid, RoundRecord, Standing,
};

pub use crate::error::GameError;

pub use crate::experiments::{
    play_matchup, GameScore, MatchWinner, MatchupConfig, MatchupReport, MatchupSummary,
};

pub use crate::strategy::{
    ConservativeStrategy, MirrorBluffStrategy, MirrorStrategy, RandomStrategy, ScriptedStrategy,
    Strategy, ThresholdStrategy,
};
