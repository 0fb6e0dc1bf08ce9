//! Core value types: cards, decks, hands, players, RNG.
//!
//! This module contains the leaf building blocks the auction engine is
//! assembled from. Nothing here knows about game phases or scoring.

pub mod card;
pub mod hand;
pub mod player;
pub mod rng;

pub use card::{diamond_deck, suit_deck, Card, Rank, Suit, DECK_SIZE};
pub use hand::Hand;
pub use player::{Player, RoundContext, RoundMemory};
pub use rng::GameRng;
