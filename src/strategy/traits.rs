//! The bidding-strategy trait.

use crate::core::card::Card;
use crate::core::hand::Hand;
use crate::core::player::RoundContext;

/// A bidding strategy — the engine's sole extension point.
///
/// The engine is strategy-agnostic: it holds `Box<dyn Strategy>` and
/// never inspects the concrete type. Implementations may be stateful;
/// the engine invokes them strictly sequentially within a round.
///
/// ## Contract
///
/// `play` must remove exactly one card from `hand` (via [`Hand::take`])
/// and return it. Returning a card that was not in the hand, or removing
/// zero or more than one card, is a fatal contract violation the engine
/// reports as `GameError::InvalidBid`.
pub trait Strategy {
    /// Choose and commit a bid for the diamond currently up for auction.
    fn play(&mut self, hand: &mut Hand, diamond: Card, ctx: &RoundContext) -> Card;

    /// Notification after the round resolves: the diamond, this player's
    /// own card, and the points gained (0 when outbid).
    ///
    /// Default is a no-op. Adaptive strategies can override to track
    /// opponents; the hook cannot mutate the hand.
    fn observe(&mut self, diamond: Card, played: Card, points: f64, ctx: &RoundContext) {
        let _ = (diamond, played, points, ctx);
    }
}
