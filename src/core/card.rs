//! Card value types and deck construction.
//!
//! A `Card` is an immutable (suit, rank) pair. The DIAMONDS suit is
//! reserved for the prize deck; the other three suits are bidding suits,
//! one per player. Rank alone determines bid strength — the suit only
//! says whose card it is.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Number of cards in a single-suit deck, and therefore rounds in a game.
pub const DECK_SIZE: usize = 13;

/// The four card suits.
///
/// `Diamonds` is the prize suit: its cards are auctioned, never bid.
/// The remaining three suits are assigned to players as bidding hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suit {
    Diamonds,
    Hearts,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Hearts, Suit::Clubs, Suit::Spades];

    /// The three suits players may bid with.
    pub const BIDDING: [Suit; 3] = [Suit::Hearts, Suit::Clubs, Suit::Spades];

    /// Check whether this suit may be dealt as a player hand.
    #[must_use]
    pub const fn is_bidding(self) -> bool {
        !matches!(self, Suit::Diamonds)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        };
        write!(f, "{}", name)
    }
}

/// Card rank, Ace-low: 1 (Ace) through 13 (King).
///
/// The rank of a diamond is also its point value.
///
/// ```
/// use diamonds::core::Rank;
///
/// assert_eq!(Rank::new(7).map(Rank::value), Some(7));
/// assert_eq!(Rank::new(0), None);
/// assert_eq!(Rank::new(14), None);
/// assert_eq!(format!("{}", Rank::KING), "K");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    /// The lowest rank.
    pub const ACE: Rank = Rank(1);
    /// The highest rank.
    pub const KING: Rank = Rank(13);

    /// Create a rank, rejecting values outside 1..=13.
    #[must_use]
    pub fn new(value: u8) -> Option<Rank> {
        (Rank::ACE.0..=Rank::KING.0)
            .contains(&value)
            .then_some(Rank(value))
    }

    /// The scalar value of this rank (1..=13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The point value a diamond of this rank is worth.
    #[must_use]
    pub fn points(self) -> f64 {
        f64::from(self.0)
    }

    /// Iterate over every rank, ascending.
    pub fn all() -> impl Iterator<Item = Rank> {
        (Rank::ACE.0..=Rank::KING.0).map(Rank)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "A"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            n => write!(f, "{}", n),
        }
    }
}

/// An immutable playing card.
///
/// Equality, ordering, and hashing are by (suit, rank).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Build the 13-card diamond prize deck, ranks ascending.
#[must_use]
pub fn diamond_deck() -> Vec<Card> {
    Rank::all().map(|rank| Card::new(Suit::Diamonds, rank)).collect()
}

/// Build the 13-card bidding deck for a non-diamond suit, ranks ascending.
///
/// Returns `GameError::InvalidSuit` when asked for the reserved diamond
/// suit — diamonds are auctioned, never dealt as a hand.
pub fn suit_deck(suit: Suit) -> Result<Vec<Card>, GameError> {
    if !suit.is_bidding() {
        return Err(GameError::InvalidSuit(suit));
    }
    Ok(Rank::all().map(|rank| Card::new(suit, rank)).collect())
}
