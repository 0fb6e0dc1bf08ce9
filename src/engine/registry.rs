//! Registry of concurrent independent games.
//!
//! The registry is pure indirection: it owns a map from generated
//! identifier to engine instance and forwards every operation by id,
//! translating an unknown identifier into `GameError::GameNotFound`.
//! It imposes no ordering or locking between different games.

use rustc_hash::FxHashMap;

use crate::core::player::Player;
use crate::error::GameError;

use super::game::{AuctionGame, GameId};
use super::report::{GameOutcome, GameStatus, PlayerStatus};

/// Registry of games, keyed by [`GameId`].
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: FxHashMap<GameId, AuctionGame>,
}

impl GameRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a game and register it under a fresh identifier.
    pub fn create_game(
        &mut self,
        players: Vec<Player>,
        seed: Option<u64>,
    ) -> Result<GameId, GameError> {
        let game = AuctionGame::new(players, seed)?;
        let id = game.id();
        self.games.insert(id, game);
        log::debug!("registry now holds {} game(s)", self.games.len());
        Ok(id)
    }

    /// Check whether an identifier is registered.
    #[must_use]
    pub fn contains(&self, id: GameId) -> bool {
        self.games.contains_key(&id)
    }

    /// Number of registered games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Check whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Get a game by id.
    #[must_use]
    pub fn get(&self, id: GameId) -> Option<&AuctionGame> {
        self.games.get(&id)
    }

    /// Start the identified game.
    pub fn start(&mut self, id: GameId) -> Result<(), GameError> {
        self.game_mut(id)?.start()
    }

    /// Step the identified game; returns whether it is still running.
    pub fn step(&mut self, id: GameId) -> Result<bool, GameError> {
        self.game_mut(id)?.step()
    }

    /// Run the identified game to completion.
    pub fn run_to_end(&mut self, id: GameId) -> Result<(), GameError> {
        self.game_mut(id)?.run_to_end()
    }

    /// Abandon the identified game.
    pub fn abandon(&mut self, id: GameId) -> Result<(), GameError> {
        self.game_mut(id)?.abandon();
        Ok(())
    }

    /// Status snapshot of the identified game.
    pub fn game_status(&self, id: GameId) -> Result<GameStatus, GameError> {
        Ok(self.game(id)?.game_status())
    }

    /// Per-player view of the identified game.
    pub fn player_status(
        &self,
        id: GameId,
        requester: &str,
        reveal_all: bool,
    ) -> Result<Vec<PlayerStatus>, GameError> {
        Ok(self.game(id)?.player_status(requester, reveal_all))
    }

    /// Final result of the identified game.
    pub fn result(&self, id: GameId) -> Result<GameOutcome, GameError> {
        self.game(id)?.result()
    }

    fn game(&self, id: GameId) -> Result<&AuctionGame, GameError> {
        self.games.get(&id).ok_or(GameError::GameNotFound(id))
    }

    fn game_mut(&mut self, id: GameId) -> Result<&mut AuctionGame, GameError> {
        self.games.get_mut(&id).ok_or(GameError::GameNotFound(id))
    }
}
