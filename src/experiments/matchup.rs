//! Headless A-vs-B matchup runner.
//!
//! Runs many seeded games between two strategies and aggregates
//! descriptive statistics. Game `i` of a matchup uses seed
//! `seed_base + i`, and each strategy draws its randomness from a fork
//! of that seed, so a whole matchup replays from its config alone.

use serde::{Deserialize, Serialize};

use crate::core::player::Player;
use crate::core::rng::GameRng;
use crate::engine::game::AuctionGame;
use crate::error::GameError;
use crate::strategy::Strategy;

/// Seat names used inside matchup games; report labels are separate.
const SEAT_A: &str = "A";
const SEAT_B: &str = "B";

/// Configuration for a matchup run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchupConfig {
    /// Number of games to play.
    pub games: usize,

    /// Seed of the first game; game `i` uses `seed_base + i`.
    pub seed_base: u64,
}

impl Default for MatchupConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed_base: 0,
        }
    }
}

impl MatchupConfig {
    /// Create a matchup config with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    #[must_use]
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the base seed.
    #[must_use]
    pub fn with_seed_base(mut self, seed_base: u64) -> Self {
        self.seed_base = seed_base;
        self
    }
}

/// Which side took a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchWinner {
    A,
    B,
    Tie,
}

/// Outcome of a single game within a matchup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameScore {
    /// Game index within the matchup.
    pub game: usize,
    /// The seed this game ran with.
    pub seed: u64,
    pub score_a: f64,
    pub score_b: f64,
    pub winner: MatchWinner,
}

/// Full matchup record: every game plus the labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchupReport {
    pub label_a: String,
    pub label_b: String,
    pub games: Vec<GameScore>,
}

/// Descriptive statistics over a matchup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchupSummary {
    pub label_a: String,
    pub label_b: String,
    pub games: usize,
    pub win_rate_a: f64,
    pub win_rate_b: f64,
    pub tie_rate: f64,
    pub mean_score_a: f64,
    pub mean_score_b: f64,
    pub std_score_a: f64,
    pub std_score_b: f64,
}

impl MatchupReport {
    /// Aggregate win/tie rates and score moments.
    #[must_use]
    pub fn summary(&self) -> MatchupSummary {
        let n = self.games.len();
        let count = |winner: MatchWinner| {
            self.games.iter().filter(|g| g.winner == winner).count() as f64
        };
        let rate = |winner: MatchWinner| {
            if n == 0 {
                0.0
            } else {
                count(winner) / n as f64
            }
        };

        let scores_a: Vec<f64> = self.games.iter().map(|g| g.score_a).collect();
        let scores_b: Vec<f64> = self.games.iter().map(|g| g.score_b).collect();

        MatchupSummary {
            label_a: self.label_a.clone(),
            label_b: self.label_b.clone(),
            games: n,
            win_rate_a: rate(MatchWinner::A),
            win_rate_b: rate(MatchWinner::B),
            tie_rate: rate(MatchWinner::Tie),
            mean_score_a: mean(&scores_a),
            mean_score_b: mean(&scores_b),
            std_score_a: sample_std(&scores_a),
            std_score_b: sample_std(&scores_b),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator); 0 for fewer than two
/// observations.
fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Run a matchup between two strategy builders.
///
/// The builders receive a freshly forked [`GameRng`] per game, so
/// randomized strategies stay reproducible under the matchup's seeds.
pub fn play_matchup<A, B>(
    label_a: &str,
    make_a: A,
    label_b: &str,
    make_b: B,
    config: &MatchupConfig,
) -> Result<MatchupReport, GameError>
where
    A: Fn(GameRng) -> Box<dyn Strategy>,
    B: Fn(GameRng) -> Box<dyn Strategy>,
{
    log::debug!(
        "matchup {} vs {}: {} game(s) from seed {}",
        label_a,
        label_b,
        config.games,
        config.seed_base
    );

    let mut games = Vec::with_capacity(config.games);
    for i in 0..config.games {
        let seed = config.seed_base + i as u64;
        let mut rng = GameRng::new(seed);

        let players = vec![
            Player::new(SEAT_A, make_a(rng.fork())),
            Player::new(SEAT_B, make_b(rng.fork())),
        ];
        let mut game = AuctionGame::new(players, Some(seed))?;
        game.run_to_end()?;
        let outcome = game.result()?;

        let score_of = |seat: &str| {
            outcome
                .standings
                .iter()
                .find(|s| s.player == seat)
                .map(|s| s.score)
                .expect("matchup seat is in the standings")
        };
        let score_a = score_of(SEAT_A);
        let score_b = score_of(SEAT_B);
        let winner = if score_a > score_b {
            MatchWinner::A
        } else if score_b > score_a {
            MatchWinner::B
        } else {
            MatchWinner::Tie
        };

        games.push(GameScore {
            game: i,
            seed,
            score_a,
            score_b,
            winner,
        });
    }

    Ok(MatchupReport {
        label_a: label_a.to_string(),
        label_b: label_b.to_string(),
        games,
    })
}
