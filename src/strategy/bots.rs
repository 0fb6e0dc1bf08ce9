//! Concrete bidding strategies.
//!
//! Every randomized strategy owns an injected [`GameRng`], handed in at
//! construction. Nothing here touches global randomness, so a matchup
//! seeded once replays identically.

use std::collections::VecDeque;

use crate::core::card::{Card, Rank};
use crate::core::hand::Hand;
use crate::core::player::RoundContext;
use crate::core::rng::GameRng;

use super::traits::Strategy;

/// Pop a uniformly random rank from the hand.
fn take_random(hand: &mut Hand, rng: &mut GameRng) -> Card {
    let ranks = hand.available_ranks();
    let rank = *rng.choose(&ranks).expect("hand is never empty during a round");
    hand.take(rank).expect("chosen rank is in hand")
}

/// Pop the lowest rank from the hand.
fn take_lowest(hand: &mut Hand) -> Card {
    let rank = hand.lowest().expect("hand is never empty during a round");
    hand.take(rank).expect("lowest rank is in hand")
}

/// Bids a uniformly random card.
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    fn play(&mut self, hand: &mut Hand, _diamond: Card, _ctx: &RoundContext) -> Card {
        take_random(hand, &mut self.rng)
    }
}

/// Bids the diamond's own rank when still held, otherwise random.
pub struct MirrorStrategy {
    rng: GameRng,
}

impl MirrorStrategy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Strategy for MirrorStrategy {
    fn play(&mut self, hand: &mut Hand, diamond: Card, _ctx: &RoundContext) -> Card {
        match hand.take(diamond.rank) {
            Some(card) => card,
            None => take_random(hand, &mut self.rng),
        }
    }
}

/// Bids the cheapest rank that still meets the diamond's value, or the
/// lowest rank when nothing in hand reaches it.
#[derive(Default)]
pub struct ThresholdStrategy;

impl ThresholdStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for ThresholdStrategy {
    fn play(&mut self, hand: &mut Hand, diamond: Card, _ctx: &RoundContext) -> Card {
        let covering = hand
            .available_ranks()
            .into_iter()
            .find(|&rank| rank >= diamond.rank);
        match covering {
            Some(rank) => hand.take(rank).expect("rank drawn from available set"),
            None => take_lowest(hand),
        }
    }
}

/// Always bids the lowest rank, saving high cards for nothing in
/// particular.
#[derive(Default)]
pub struct ConservativeStrategy;

impl ConservativeStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for ConservativeStrategy {
    fn play(&mut self, hand: &mut Hand, _diamond: Card, _ctx: &RoundContext) -> Card {
        take_lowest(hand)
    }
}

/// Mirrors the diamond's rank, but sometimes bluffs with a random card
/// instead.
pub struct MirrorBluffStrategy {
    rng: GameRng,
    bluff_chance: f64,
}

impl MirrorBluffStrategy {
    /// Default bluffing probability.
    pub const DEFAULT_BLUFF_CHANCE: f64 = 0.3;

    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            rng,
            bluff_chance: Self::DEFAULT_BLUFF_CHANCE,
        }
    }

    /// Override the bluffing probability.
    #[must_use]
    pub fn with_bluff_chance(mut self, chance: f64) -> Self {
        self.bluff_chance = chance;
        self
    }
}

impl Strategy for MirrorBluffStrategy {
    fn play(&mut self, hand: &mut Hand, diamond: Card, _ctx: &RoundContext) -> Card {
        if hand.contains(diamond.rank) && !self.rng.gen_bool(self.bluff_chance) {
            return hand.take(diamond.rank).expect("rank checked present");
        }
        take_random(hand, &mut self.rng)
    }
}

/// Plays a fixed rank sequence; for replays and deterministic tests.
///
/// When the script runs dry or names a rank no longer in hand, falls
/// back to the lowest available rank.
pub struct ScriptedStrategy {
    script: VecDeque<Rank>,
}

impl ScriptedStrategy {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = Rank>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl Strategy for ScriptedStrategy {
    fn play(&mut self, hand: &mut Hand, _diamond: Card, _ctx: &RoundContext) -> Card {
        if let Some(card) = self.script.pop_front().and_then(|rank| hand.take(rank)) {
            return card;
        }
        take_lowest(hand)
    }
}
