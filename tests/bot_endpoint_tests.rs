// Integration tests for the Bot endpoint methods
//
// Requests are parsed from API-shaped JSON, the same way the HTTP layer does.

mod common;

use common::{board, snake};
use hunter_snake::bot::Bot;
use hunter_snake::config::Config;
use hunter_snake::debug_logger::DebugLogger;
use hunter_snake::replay::ReplayEngine;
use hunter_snake::types::{Direction, Game, GameState};
use serde_json::json;
use std::time::Duration;

fn game() -> Game {
    Game {
        id: "test-game".to_string(),
        ruleset: json!({}),
        timeout: 500,
        source: "test".to_string(),
    }
}

#[test]
fn test_move_request_from_json() {
    let request = json!({
        "game": {"id": "g", "ruleset": {"name": "standard"}, "timeout": 500},
        "turn": 12,
        "board": {
            "height": 11,
            "width": 11,
            "food": [{"x": 5, "y": 7}],
            "hazards": [],
            "snakes": [
                {
                    "id": "hunter", "name": "Hunter", "health": 15,
                    "body": [{"x": 5, "y": 5}, {"x": 5, "y": 4}, {"x": 5, "y": 3}],
                    "head": {"x": 5, "y": 5}, "length": 3, "latency": "22", "shout": ""
                },
                {
                    "id": "rival", "name": "Rival", "health": 80,
                    "body": [{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 2, "y": 0}],
                    "head": {"x": 0, "y": 0}, "length": 3, "latency": "30", "shout": ""
                }
            ]
        },
        "you": {
            "id": "hunter", "name": "Hunter", "health": 15,
            "body": [{"x": 5, "y": 5}, {"x": 5, "y": 4}, {"x": 5, "y": 3}],
            "head": {"x": 5, "y": 5}, "length": 3, "latency": "22", "shout": ""
        }
    });

    let state: GameState = serde_json::from_value(request).expect("request should parse");
    let bot = Bot::with_seed(Config::default_hardcoded(), 11);

    let response = bot.get_move(&state.game, &state.turn, &state.board, &state.you);
    assert_eq!(response, json!({ "move": "up" }));
}

#[test]
fn test_every_answer_is_a_valid_token() {
    let bot = Bot::with_seed(Config::default_hardcoded(), 99);
    let valid = ["up", "down", "left", "right"];

    let boards = vec![
        // Wide open
        vec![snake("me", 100, &[(5, 5), (5, 4), (5, 3)])],
        // Corner
        vec![snake("me", 100, &[(0, 0), (0, 1), (0, 2)])],
        // Boxed in
        vec![snake("me", 100, &[(0, 0), (1, 0), (1, 1), (0, 1), (0, 2)])],
        // Crowded by a longer opponent
        vec![
            snake("me", 40, &[(5, 5), (5, 4), (5, 3)]),
            snake("big", 90, &[(6, 6), (7, 6), (8, 6), (9, 6), (10, 6)]),
        ],
    ];

    for snakes in boards {
        let you = snakes[0].clone();
        let b = board(11, 11, &[(2, 8)], snakes);

        for turn in 0..8 {
            let response = bot.get_move(&game(), &turn, &b, &you);
            let chosen = response["move"].as_str().expect("move must be a string");
            assert!(valid.contains(&chosen), "invalid move {}", chosen);
        }
    }
}

#[test]
fn test_malformed_snake_still_gets_an_answer() {
    let bot = Bot::with_seed(Config::default_hardcoded(), 3);
    let you = snake("me", 100, &[(4, 4)]);
    let b = board(11, 11, &[], vec![you.clone()]);

    let response = bot.get_move(&game(), &0, &b, &you);
    assert!(Direction::parse(response["move"].as_str().unwrap()).is_ok());
}

#[test]
fn test_start_and_end_do_not_panic() {
    let bot = Bot::new(Config::default_hardcoded());
    let you = snake("me", 0, &[(4, 4), (4, 3), (4, 2), (4, 1)]);
    let b = board(11, 11, &[], vec![you.clone()]);

    bot.start(&game(), &0, &b, &you);
    bot.end(&game(), &120, &b, &you);
}

#[tokio::test]
async fn test_logged_game_replays_cleanly() {
    let path = std::env::temp_dir().join(format!(
        "hunter_endpoint_replay_{}.jsonl",
        std::process::id()
    ));
    let path_str = path.to_string_lossy().to_string();

    let logger = DebugLogger::new(true, &path_str).await;
    let bot = Bot::with_seed(Config::default_hardcoded(), 5).with_debug_logger(logger);

    // Hungry snake walking up towards food
    let turns = vec![
        snake("me", 20, &[(5, 2), (5, 1), (5, 0)]),
        snake("me", 19, &[(5, 3), (5, 2), (5, 1)]),
        snake("me", 18, &[(5, 4), (5, 3), (5, 2)]),
    ];
    for (turn, you) in turns.iter().enumerate() {
        let b = board(11, 11, &[(5, 8)], vec![you.clone()]);
        let response = bot.get_move(&game(), &(turn as i32), &b, you);
        assert_eq!(response["move"], "up");
    }

    let engine = ReplayEngine::new(Config::default_hardcoded(), false);
    let mut entries = Vec::new();
    for _ in 0..100 {
        tokio::time::sleep(Duration::from_millis(10)).await;
        entries = engine.load_log_file(&path).unwrap_or_default();
        if entries.len() == turns.len() {
            break;
        }
    }
    assert_eq!(entries.len(), turns.len());

    let stats = engine.generate_stats(&engine.replay_all(&entries));
    assert_eq!(stats.matches, turns.len());
    assert_eq!(stats.divergences, 0);

    let _ = std::fs::remove_file(&path);
}
