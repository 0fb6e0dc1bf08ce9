//! Bidding strategies: the decision seam between engine and participants.
//!
//! The engine calls [`Strategy::play`] once per player per round and is
//! polymorphic over any implementation. Concrete strategies live in
//! [`bots`]; interactive (human-driven) strategies belong to front ends,
//! not to this crate's library surface.

pub mod bots;
pub mod traits;

pub use bots::{
    ConservativeStrategy, MirrorBluffStrategy, MirrorStrategy, RandomStrategy, ScriptedStrategy,
    ThresholdStrategy,
};
pub use traits::Strategy;
