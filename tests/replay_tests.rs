// Integration tests for the replay engine
//
// Tests loading JSONL debug logs, replaying turns through the decision core,
// validating expected moves and generating statistics.

use hunter_snake::config::Config;
use hunter_snake::replay::ReplayEngine;
use hunter_snake::strategy::Tier;
use hunter_snake::types::Direction;
use std::path::PathBuf;

/// Helper function to get the path to test fixtures
fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(filename)
}

fn engine() -> ReplayEngine {
    ReplayEngine::new(Config::default_hardcoded(), false)
}

#[test]
fn test_load_log_file() {
    let entries = engine()
        .load_log_file(fixture_path("hunter_game.jsonl"))
        .expect("Failed to load hunter_game.jsonl");

    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].turn, 0);
    assert_eq!(entries[0].you_id, "hunter");
    assert_eq!(entries[0].chosen_move, Direction::Up);
    assert_eq!(entries[2].board.snakes.len(), 2);
    assert_eq!(entries[3].tier.as_deref(), Some("RandomSafe"));
}

#[test]
fn test_missing_log_file_is_an_error() {
    assert!(engine().load_log_file(fixture_path("does_not_exist.jsonl")).is_err());
}

#[test]
fn test_replay_reproduces_deterministic_turns() {
    let engine = engine();
    let entries = engine
        .load_log_file(fixture_path("hunter_game.jsonl"))
        .unwrap();

    let results = engine.replay_all(&entries);
    assert_eq!(results.len(), 4);

    assert_eq!(results[0].replayed_tier, Tier::SeekFood);
    assert!(results[0].matches);
    assert_eq!(results[1].replayed_tier, Tier::SeekFood);
    assert!(results[1].matches);
    assert_eq!(results[2].replayed_tier, Tier::ChaseSmallerSnake);
    assert_eq!(results[2].replayed_move, Direction::Right);
    assert!(results[2].matches);
    assert_eq!(results[3].replayed_tier, Tier::RandomSafe);

    let stats = engine.generate_stats(&results);
    assert_eq!(stats.total_turns, 4);
    assert_eq!(stats.deterministic_turns, 3);
    assert_eq!(stats.divergences, 0);
    assert_eq!(stats.match_rate, 100.0);
}

#[test]
fn test_replay_flags_divergence() {
    let engine = engine();
    let entries = engine
        .load_log_file(fixture_path("divergence.jsonl"))
        .unwrap();

    let result = engine.replay_entry(&entries[0]).expect("turn should replay");
    assert_eq!(result.original_move, Direction::Left);
    assert_eq!(result.replayed_move, Direction::Up);
    assert!(!result.matches);
    assert!(result.is_divergence());
}

#[test]
fn test_replay_specific_turns() {
    let engine = engine();
    let entries = engine
        .load_log_file(fixture_path("hunter_game.jsonl"))
        .unwrap();

    let results = engine.replay_turns(&entries, &[1, 2]).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].turn, 1);
    assert_eq!(results[1].turn, 2);

    assert!(engine.replay_turns(&entries, &[42]).is_err());
}

#[test]
fn test_replay_with_a_star_matches_breadth_first() {
    let toml = std::fs::read_to_string(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Snake.toml"))
        .unwrap()
        .replace("\"breadth_first\"", "\"a_star\"");
    let config = Config::from_toml_str(&toml).unwrap();
    let engine = ReplayEngine::new(config, false);

    let entries = engine
        .load_log_file(fixture_path("hunter_game.jsonl"))
        .unwrap();
    let stats = engine.generate_stats(&engine.replay_all(&entries));

    assert_eq!(stats.divergences, 0);
}

#[test]
fn test_validate_expected_moves() {
    let engine = engine();
    let entries = engine
        .load_log_file(fixture_path("hunter_game.jsonl"))
        .unwrap();

    let ok = vec![
        (0, vec![Direction::Up]),
        (2, vec![Direction::Right, Direction::Down]),
    ];
    assert!(engine.validate_expected_moves(&entries, &ok).is_ok());

    let wrong = vec![(1, vec![Direction::Down])];
    assert!(engine.validate_expected_moves(&entries, &wrong).is_err());

    let missing = vec![(99, vec![Direction::Up])];
    assert!(engine.validate_expected_moves(&entries, &missing).is_err());
}
