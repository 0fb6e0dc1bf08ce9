//! Batch experiment harness.
//!
//! Runs strategy matchups headlessly and aggregates descriptive
//! statistics. Reports are serde-serializable; persisting or plotting
//! them is left to callers.

pub mod matchup;

pub use matchup::{
    play_matchup, GameScore, MatchWinner, MatchupConfig, MatchupReport, MatchupSummary,
};
