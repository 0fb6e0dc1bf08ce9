//! Player seat state and the per-round bidding contract.
//!
//! A `Player` pairs engine-owned seat state (name, assigned suit, hand,
//! score, history) with a boxed [`Strategy`] that makes the actual
//! bidding decision. The engine never inspects which concrete strategy
//! sits behind the box.
//!
//! ## The bid contract
//!
//! A strategy must remove exactly one card from its hand and return it.
//! [`Player::play`] enforces this after every delegation: the returned
//! card's rank must have been in the hand immediately before the call,
//! must be gone afterwards, no other card may have moved, and the card
//! must belong to the player's assigned suit. Any violation is a fatal
//! `GameError::InvalidBid`.

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, Rank, Suit};
use crate::core::hand::Hand;
use crate::error::GameError;
use crate::strategy::Strategy;

/// Read-only round context handed to strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundContext {
    /// Round number, 1-based.
    pub round: u32,
    /// Rounds remaining, including the current one.
    pub remaining: u32,
}

/// One completed round from a single player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundMemory {
    /// The diamond that was up for auction.
    pub diamond: Card,
    /// The card this player committed.
    pub played: Card,
    /// Points this player gained (0 when outbid).
    pub points: f64,
}

/// A participant in an auction game.
///
/// Created by the caller with a name and a strategy; the engine assigns
/// the suit and deals the hand at game construction.
pub struct Player {
    name: String,
    suit: Option<Suit>,
    hand: Hand,
    score: f64,
    history: Vec<RoundMemory>,
    strategy: Box<dyn Strategy>,
}

impl Player {
    /// Create a player with the given name and bidding strategy.
    #[must_use]
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            suit: None,
            hand: Hand::empty(),
            score: 0.0,
            history: Vec::new(),
            strategy,
        }
    }

    /// The player's name, unique within a game.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The assigned bidding suit. `None` only before game construction.
    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }

    /// Cumulative score. Starts at 0 and never decreases.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Number of cards left in hand.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.hand.cards_left()
    }

    /// The ranks currently in hand, ascending.
    #[must_use]
    pub fn available_ranks(&self) -> Vec<Rank> {
        self.hand.available_ranks()
    }

    /// This player's round-by-round history, one entry per completed round.
    #[must_use]
    pub fn history(&self) -> &[RoundMemory] {
        &self.history
    }

    /// Assign the bidding suit and deal the full suit hand.
    ///
    /// Called exactly once per game, before the first round.
    pub(crate) fn assign_suit(&mut self, suit: Suit) -> Result<(), GameError> {
        self.hand = Hand::full(suit)?;
        self.suit = Some(suit);
        Ok(())
    }

    /// Ask the strategy for a bid and enforce the bid contract.
    pub(crate) fn play(&mut self, diamond: Card, ctx: &RoundContext) -> Result<Card, GameError> {
        let before = self.hand.available_ranks();
        let card = self.strategy.play(&mut self.hand, diamond, ctx);

        let legal = before.contains(&card.rank)
            && !self.hand.contains(card.rank)
            && self.hand.cards_left() + 1 == before.len()
            && self.suit == Some(card.suit);
        if !legal {
            log::warn!("player {} broke the bid contract with {}", self.name, card);
            return Err(GameError::InvalidBid {
                player: self.name.clone(),
                card,
            });
        }
        Ok(card)
    }

    /// Add points won this round.
    pub(crate) fn award(&mut self, points: f64) {
        self.score += points;
    }

    /// Record a resolved round and notify the strategy.
    ///
    /// Notification only: the strategy hook receives no hand and cannot
    /// mutate one.
    pub(crate) fn observe_round_result(
        &mut self,
        diamond: Card,
        played: Card,
        points: f64,
        ctx: &RoundContext,
    ) {
        self.history.push(RoundMemory {
            diamond,
            played,
            points,
        });
        self.strategy.observe(diamond, played, points, ctx);
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("suit", &self.suit)
            .field("score", &self.score)
            .field("cards", &self.hand.cards_left())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::DECK_SIZE;

    const CTX: RoundContext = RoundContext {
        round: 1,
        remaining: 13,
    };

    fn diamond(rank: u8) -> Card {
        Card::new(Suit::Diamonds, Rank::new(rank).unwrap())
    }

    /// Well-behaved: pops the lowest rank.
    struct Lowest;

    impl Strategy for Lowest {
        fn play(&mut self, hand: &mut Hand, _diamond: Card, _ctx: &RoundContext) -> Card {
            let rank = hand.lowest().expect("hand not empty");
            hand.take(rank).expect("lowest rank is present")
        }
    }

    /// Broken: fabricates a card without touching the hand.
    struct Fabricator;

    impl Strategy for Fabricator {
        fn play(&mut self, _hand: &mut Hand, _diamond: Card, _ctx: &RoundContext) -> Card {
            Card::new(Suit::Hearts, Rank::ACE)
        }
    }

    /// Broken: removes two cards and returns one of them.
    struct DoubleDipper;

    impl Strategy for DoubleDipper {
        fn play(&mut self, hand: &mut Hand, _diamond: Card, _ctx: &RoundContext) -> Card {
            let low = hand.lowest().expect("hand not empty");
            hand.take(low);
            let next = hand.lowest().expect("hand not empty");
            hand.take(next).expect("rank is present")
        }
    }

    /// Broken: returns a card of a foreign suit while removing its own.
    struct SuitForger;

    impl Strategy for SuitForger {
        fn play(&mut self, hand: &mut Hand, _diamond: Card, _ctx: &RoundContext) -> Card {
            let rank = hand.lowest().expect("hand not empty");
            hand.take(rank);
            Card::new(Suit::Diamonds, rank)
        }
    }

    #[test]
    fn test_assign_suit_deals_full_hand() {
        let mut player = Player::new("A", Box::new(Lowest));
        assert_eq!(player.suit(), None);
        assert_eq!(player.cards_left(), 0);

        player.assign_suit(Suit::Clubs).unwrap();
        assert_eq!(player.suit(), Some(Suit::Clubs));
        assert_eq!(player.cards_left(), DECK_SIZE);
        assert_eq!(player.available_ranks().len(), DECK_SIZE);
    }

    #[test]
    fn test_play_removes_exactly_one() {
        let mut player = Player::new("A", Box::new(Lowest));
        player.assign_suit(Suit::Hearts).unwrap();

        let card = player.play(diamond(5), &CTX).unwrap();
        assert_eq!(card, Card::new(Suit::Hearts, Rank::ACE));
        assert_eq!(player.cards_left(), DECK_SIZE - 1);
        assert!(!player.available_ranks().contains(&Rank::ACE));
    }

    #[test]
    fn test_fabricated_bid_is_rejected() {
        let mut player = Player::new("A", Box::new(Fabricator));
        player.assign_suit(Suit::Hearts).unwrap();

        let err = player.play(diamond(5), &CTX).unwrap_err();
        assert!(matches!(err, GameError::InvalidBid { ref player, .. } if player == "A"));
    }

    #[test]
    fn test_double_removal_is_rejected() {
        let mut player = Player::new("A", Box::new(DoubleDipper));
        player.assign_suit(Suit::Spades).unwrap();

        let err = player.play(diamond(5), &CTX).unwrap_err();
        assert!(matches!(err, GameError::InvalidBid { .. }));
    }

    #[test]
    fn test_foreign_suit_bid_is_rejected() {
        let mut player = Player::new("A", Box::new(SuitForger));
        player.assign_suit(Suit::Clubs).unwrap();

        let err = player.play(diamond(5), &CTX).unwrap_err();
        assert!(matches!(err, GameError::InvalidBid { .. }));
    }

    #[test]
    fn test_observe_appends_history() {
        let mut player = Player::new("A", Box::new(Lowest));
        player.assign_suit(Suit::Hearts).unwrap();

        let played = player.play(diamond(7), &CTX).unwrap();
        player.award(3.5);
        player.observe_round_result(diamond(7), played, 3.5, &CTX);

        assert_eq!(player.score(), 3.5);
        assert_eq!(player.history().len(), 1);
        let memory = player.history()[0];
        assert_eq!(memory.diamond, diamond(7));
        assert_eq!(memory.played, played);
        assert_eq!(memory.points, 3.5);
    }
}
