//! The auction state machine.
//!
//! One `AuctionGame` runs 13 sealed-bid rounds over a shuffled diamond
//! deck. Each round every player secretly commits one card from their
//! suit-hand; the highest rank takes the diamond's value, split evenly
//! on ties.
//!
//! ## Lifecycle
//!
//! ```text
//! CREATED ──start()──▶ RUNNING ──deck exhausted──▶ FINISHED
//!    │                    │
//!    └────abandon()───────┴──▶ ABANDONED
//! ```
//!
//! `FINISHED` and `ABANDONED` are absorbing: no transition leaves them.
//!
//! ## Randomness
//!
//! A game owns one [`GameRng`], used at construction for the suit
//! permutation and the diamond shuffle. With a supplied seed the whole
//! game is reproducible; the deck is fixed at creation and never
//! reshuffled.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

use crate::core::card::{diamond_deck, Card, Suit};
use crate::core::player::{Player, RoundContext};
use crate::core::rng::GameRng;
use crate::error::GameError;

use super::report::{
    GameOutcome, GameStatus, PlayerStatus, PlayerSummary, RecordedBid, RoundRecord, Standing,
};

/// Unique game identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(Uuid);

impl GameId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle phase of an auction game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    Created,
    Running,
    Finished,
    Abandoned,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Created => "CREATED",
            GamePhase::Running => "RUNNING",
            GamePhase::Finished => "FINISHED",
            GamePhase::Abandoned => "ABANDONED",
        };
        write!(f, "{}", name)
    }
}

/// A single sealed-bid auction game.
pub struct AuctionGame {
    id: GameId,
    phase: GamePhase,
    /// Completed rounds; also the index of the next diamond.
    round_index: usize,
    /// Shuffled once at construction, then only read by index.
    diamonds: Vec<Card>,
    players: Vec<Player>,
    history: Vec<RoundRecord>,
}

impl AuctionGame {
    /// Create a game in the `CREATED` phase.
    ///
    /// Accepts 1 to 3 players (the fourth suit is reserved for the
    /// diamonds). Shuffles the three bidding suits, assigns them to the
    /// players in registration order, and shuffles the diamond deck —
    /// all from one RNG, so a supplied seed reproduces the entire game.
    pub fn new(players: Vec<Player>, seed: Option<u64>) -> Result<Self, GameError> {
        let count = players.len();
        if count == 0 || count > Suit::BIDDING.len() {
            return Err(GameError::InvalidPlayerCount(count));
        }
        for (i, player) in players.iter().enumerate() {
            if players[..i].iter().any(|p| p.name() == player.name()) {
                return Err(GameError::DuplicatePlayer(player.name().to_string()));
            }
        }

        let mut rng = seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy);

        let mut players = players;
        let mut suits = Suit::BIDDING;
        rng.shuffle(&mut suits);
        for (player, suit) in players.iter_mut().zip(suits) {
            player.assign_suit(suit)?;
        }

        let mut diamonds = diamond_deck();
        rng.shuffle(&mut diamonds);

        let id = GameId::generate();
        log::debug!("created game {} with {} players (seed {})", id, count, rng.seed());

        Ok(Self {
            id,
            phase: GamePhase::Created,
            round_index: 0,
            diamonds,
            players,
            history: Vec::new(),
        })
    }

    /// The game's unique identifier.
    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    /// The current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Completed rounds, 0-based.
    #[must_use]
    pub fn round_index(&self) -> usize {
        self.round_index
    }

    /// Total rounds in this game (the diamond-deck length).
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.diamonds.len()
    }

    /// The round-history log so far.
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub(crate) fn players(&self) -> &[Player] {
        &self.players
    }

    /// Begin play: `CREATED → RUNNING`.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::Created {
            return Err(GameError::IllegalState {
                operation: "start",
                phase: self.phase,
            });
        }
        self.phase = GamePhase::Running;
        log::debug!("game {} started", self.id);
        Ok(())
    }

    /// Resolve one auction round. Legal only while `RUNNING`.
    ///
    /// Returns whether the game is still running; `Ok(false)` once the
    /// diamond deck is exhausted and the game moved to `FINISHED`.
    pub fn step(&mut self) -> Result<bool, GameError> {
        if self.phase != GamePhase::Running {
            return Err(GameError::IllegalState {
                operation: "step",
                phase: self.phase,
            });
        }
        if self.round_index >= self.diamonds.len() {
            self.phase = GamePhase::Finished;
            return Ok(false);
        }

        let diamond = self.diamonds[self.round_index];
        let ctx = RoundContext {
            round: self.round_index as u32 + 1,
            remaining: (self.diamonds.len() - self.round_index) as u32,
        };

        // Sequential by contract: strategies may be stateful, and no
        // isolation is provided against concurrent hand mutation.
        let mut bids: SmallVec<[Card; 3]> = SmallVec::new();
        for player in &mut self.players {
            bids.push(player.play(diamond, &ctx)?);
        }

        let top = bids
            .iter()
            .map(|card| card.rank)
            .max()
            .expect("player count checked at construction");
        let winners: SmallVec<[usize; 3]> = bids
            .iter()
            .enumerate()
            .filter(|(_, card)| card.rank == top)
            .map(|(i, _)| i)
            .collect();
        let points_each = diamond.rank.points() / winners.len() as f64;

        for (i, player) in self.players.iter_mut().enumerate() {
            let gained = if winners.contains(&i) { points_each } else { 0.0 };
            player.award(gained);
            player.observe_round_result(diamond, bids[i], gained, &ctx);
        }

        let record = RoundRecord {
            round: ctx.round,
            diamond: diamond.rank,
            bids: self
                .players
                .iter()
                .zip(&bids)
                .map(|(player, card)| RecordedBid {
                    player: player.name().to_string(),
                    rank: card.rank,
                })
                .collect(),
            winners: winners
                .iter()
                .map(|&i| self.players[i].name().to_string())
                .collect(),
            points_each,
        };
        log::trace!(
            "game {} round {}: {} to {:?}, {} each",
            self.id,
            record.round,
            diamond,
            record.winners,
            points_each
        );
        self.history.push(record);
        self.round_index += 1;

        if self.round_index >= self.diamonds.len() {
            self.phase = GamePhase::Finished;
            log::debug!("game {} finished after {} rounds", self.id, self.round_index);
            return Ok(false);
        }
        Ok(true)
    }

    /// Start if still `CREATED`, then step until no longer `RUNNING`.
    pub fn run_to_end(&mut self) -> Result<(), GameError> {
        if self.phase == GamePhase::Created {
            self.start()?;
        }
        while self.phase == GamePhase::Running {
            self.step()?;
        }
        Ok(())
    }

    /// Force-transition to `ABANDONED` from `CREATED` or `RUNNING`.
    /// No-op once `FINISHED` or already `ABANDONED`.
    pub fn abandon(&mut self) {
        if matches!(self.phase, GamePhase::Created | GamePhase::Running) {
            self.phase = GamePhase::Abandoned;
            log::debug!("game {} abandoned at round {}", self.id, self.round_index);
        }
    }

    /// Snapshot of identifier, phase, round index, and per-player
    /// {name, suit, score}. Never exposes hands.
    #[must_use]
    pub fn game_status(&self) -> GameStatus {
        GameStatus {
            id: self.id,
            phase: self.phase,
            round: self.round_index,
            players: self
                .players
                .iter()
                .map(|player| PlayerSummary {
                    name: player.name().to_string(),
                    suit: player.suit().expect("suit assigned at construction"),
                    score: player.score(),
                })
                .collect(),
        }
    }

    /// Per-player view for `requester`.
    ///
    /// Every entry carries suit, score, and cards left; `available_ranks`
    /// is populated only for the requester's own entry, or for all
    /// entries when `reveal_all` is set (administrative observers only —
    /// never exposed to an opposing player).
    #[must_use]
    pub fn player_status(&self, requester: &str, reveal_all: bool) -> Vec<PlayerStatus> {
        self.players
            .iter()
            .map(|player| {
                let reveal = reveal_all || player.name() == requester;
                PlayerStatus {
                    name: player.name().to_string(),
                    suit: player.suit().expect("suit assigned at construction"),
                    score: player.score(),
                    cards_left: player.cards_left(),
                    available_ranks: reveal.then(|| player.available_ranks()),
                }
            })
            .collect()
    }

    /// Final standings and the complete round history.
    ///
    /// Legal only once `FINISHED`. Standings are sorted by score
    /// descending; equal scores keep registration order (stable sort).
    pub fn result(&self) -> Result<GameOutcome, GameError> {
        if self.phase != GamePhase::Finished {
            return Err(GameError::IllegalState {
                operation: "result",
                phase: self.phase,
            });
        }
        let mut standings: Vec<Standing> = self
            .players
            .iter()
            .map(|player| Standing {
                player: player.name().to_string(),
                score: player.score(),
            })
            .collect();
        standings.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(GameOutcome {
            id: self.id,
            standings,
            history: self.history.clone(),
        })
    }
}

impl std::fmt::Debug for AuctionGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuctionGame")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("round", &self.round_index)
            .field("players", &self.players)
            .finish()
    }
}
