//! Registry delegation, identifier handling, and status visibility.

use diamonds::{
    ConservativeStrategy, GameError, GamePhase, GameRegistry, Player, RandomStrategy, Strategy,
};
use diamonds::GameRng;

fn conservative(name: &str) -> Player {
    Player::new(name, Box::new(ConservativeStrategy::new()))
}

fn random(name: &str, seed: u64) -> Player {
    Player::new(name, Box::new(RandomStrategy::new(GameRng::new(seed))))
}

fn two_seats(seed: u64) -> Vec<Player> {
    vec![random("North", seed), random("South", seed + 1)]
}

#[test]
fn test_every_operation_rejects_unknown_ids() {
    let mut registry = GameRegistry::new();
    let mut other = GameRegistry::new();
    let foreign = other.create_game(two_seats(1), Some(1)).unwrap();

    assert!(matches!(registry.start(foreign), Err(GameError::GameNotFound(_))));
    assert!(matches!(registry.step(foreign), Err(GameError::GameNotFound(_))));
    assert!(matches!(registry.run_to_end(foreign), Err(GameError::GameNotFound(_))));
    assert!(matches!(registry.abandon(foreign), Err(GameError::GameNotFound(_))));
    assert!(matches!(registry.game_status(foreign), Err(GameError::GameNotFound(_))));
    assert!(matches!(
        registry.player_status(foreign, "North", false),
        Err(GameError::GameNotFound(_))
    ));
    assert!(matches!(registry.result(foreign), Err(GameError::GameNotFound(_))));
}

#[test]
fn test_full_lifecycle_through_registry() {
    let mut registry = GameRegistry::new();
    let id = registry.create_game(two_seats(9), Some(9)).unwrap();

    let status = registry.game_status(id).unwrap();
    assert_eq!(status.phase, GamePhase::Created);
    assert_eq!(status.round, 0);
    assert_eq!(status.players.len(), 2);

    registry.start(id).unwrap();
    assert!(registry.step(id).unwrap());
    assert_eq!(registry.game_status(id).unwrap().round, 1);

    registry.run_to_end(id).unwrap();
    let outcome = registry.result(id).unwrap();
    assert_eq!(outcome.id, id);
    assert_eq!(outcome.standings.len(), 2);
}

#[test]
fn test_abandon_through_registry() {
    let mut registry = GameRegistry::new();
    let id = registry.create_game(two_seats(4), Some(4)).unwrap();

    registry.start(id).unwrap();
    registry.step(id).unwrap();
    registry.abandon(id).unwrap();

    assert_eq!(registry.game_status(id).unwrap().phase, GamePhase::Abandoned);
    assert!(matches!(
        registry.step(id),
        Err(GameError::IllegalState {
            operation: "step",
            phase: GamePhase::Abandoned,
        })
    ));
    assert!(matches!(registry.result(id), Err(GameError::IllegalState { .. })));

    // Abandoning again stays a no-op.
    registry.abandon(id).unwrap();
    assert_eq!(registry.game_status(id).unwrap().phase, GamePhase::Abandoned);
}

/// availableRanks is visible to its owner, to reveal_all observers, and
/// to no one else — for every requester/target combination.
#[test]
fn test_player_status_privacy_matrix() {
    let mut registry = GameRegistry::new();
    let players = vec![conservative("A"), conservative("B"), conservative("C")];
    let id = registry.create_game(players, Some(8)).unwrap();

    let names = ["A", "B", "C"];
    for requester in names {
        let statuses = registry.player_status(id, requester, false).unwrap();
        for status in &statuses {
            if status.name == requester {
                assert!(
                    status.available_ranks.is_some(),
                    "{} cannot see their own hand",
                    requester
                );
            } else {
                assert!(
                    status.available_ranks.is_none(),
                    "{} can see {}'s hand",
                    requester,
                    status.name
                );
            }
            assert_eq!(status.cards_left, 13);
        }
    }

    // Administrative view reveals every hand.
    for requester in names {
        let statuses = registry.player_status(id, requester, true).unwrap();
        assert!(statuses.iter().all(|s| s.available_ranks.is_some()));
    }
}

#[test]
fn test_game_status_never_contains_ranks() {
    let mut registry = GameRegistry::new();
    let id = registry.create_game(two_seats(6), Some(6)).unwrap();

    let json = serde_json::to_string(&registry.game_status(id).unwrap()).unwrap();
    assert!(!json.contains("available_ranks"));
    assert!(!json.contains("ranks"));
}

#[test]
fn test_interleaved_games_do_not_interfere() {
    let mut registry = GameRegistry::new();
    let first = registry.create_game(two_seats(100), Some(100)).unwrap();
    let second = registry.create_game(two_seats(100), Some(100)).unwrap();

    registry.start(first).unwrap();
    registry.start(second).unwrap();

    // Step the two games alternately to completion.
    let mut running = true;
    while running {
        let a = registry.step(first);
        let b = registry.step(second);
        let a = match a {
            Ok(flag) => flag,
            Err(GameError::IllegalState { .. }) => false,
            Err(err) => panic!("unexpected error: {err}"),
        };
        let b = match b {
            Ok(flag) => flag,
            Err(GameError::IllegalState { .. }) => false,
            Err(err) => panic!("unexpected error: {err}"),
        };
        running = a || b;
    }

    // Identically seeded games end identically even when interleaved.
    let one = registry.result(first).unwrap();
    let two = registry.result(second).unwrap();
    assert_eq!(one.history, two.history);
    assert_eq!(one.standings, two.standings);
}
