//! A player's private suit-hand.
//!
//! The hand is a rank-keyed, owned collection with pop-to-remove
//! semantics: it starts as a full 13-card suit deck and shrinks by
//! exactly one card per round as bids are committed. Keying by rank
//! makes a duplicate rank unrepresentable, and the map's ordering gives
//! ascending rank enumeration for free.

use std::collections::BTreeMap;

use crate::core::card::{suit_deck, Card, Rank, Suit};
use crate::error::GameError;

/// An owned hand of cards, at most one per rank.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    cards: BTreeMap<Rank, Card>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Deal the full 13-card deck of a bidding suit.
    ///
    /// Fails with `GameError::InvalidSuit` for the diamond suit.
    pub fn full(suit: Suit) -> Result<Self, GameError> {
        let cards = suit_deck(suit)?
            .into_iter()
            .map(|card| (card.rank, card))
            .collect();
        Ok(Self { cards })
    }

    /// The ranks currently in hand, ascending.
    #[must_use]
    pub fn available_ranks(&self) -> Vec<Rank> {
        self.cards.keys().copied().collect()
    }

    /// Check whether a rank is still in hand.
    #[must_use]
    pub fn contains(&self, rank: Rank) -> bool {
        self.cards.contains_key(&rank)
    }

    /// Remove and return the card of the given rank, if held.
    pub fn take(&mut self, rank: Rank) -> Option<Card> {
        self.cards.remove(&rank)
    }

    /// The lowest rank in hand, if any.
    #[must_use]
    pub fn lowest(&self) -> Option<Rank> {
        self.cards.keys().next().copied()
    }

    /// The highest rank in hand, if any.
    #[must_use]
    pub fn highest(&self) -> Option<Rank> {
        self.cards.keys().next_back().copied()
    }

    /// Number of cards left.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.cards.len()
    }

    /// Check whether the hand is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
