//! JSON export of the read-only game state

use serde_json::{json, Value};

use game_hub::core::{ArenaGame, ArenaState, TurnGame, TurnGameState};
use game_hub::types::{Difficulty, Direction, GameMode, Point, CATALOG};

#[test]
fn test_turn_state_json_shape() {
    let mut game = TurnGame::new(1, GameMode::PvP, Difficulty::Hard);
    for cell in [0, 3, 1, 4, 2] {
        game.place_mark(cell);
    }
    let value = serde_json::to_value(game.state()).unwrap();

    assert_eq!(value["status"], "won");
    assert_eq!(value["winner"], "X");
    assert_eq!(value["winning_line"], json!([0, 1, 2]));
    assert_eq!(value["mode"], "pvp");
    assert_eq!(value["difficulty"], "hard");
    assert_eq!(value["board"]["cells"][3], "O");
    assert_eq!(value["board"]["cells"][8], Value::Null);

    let back: TurnGameState = serde_json::from_value(value).unwrap();
    assert_eq!(&back, game.state());
}

#[test]
fn test_arena_state_json_shape() {
    let state = ArenaState::from_parts(
        vec![Point::new(3, 4), Point::new(2, 4)],
        Point::new(7, 7),
        Direction::Up,
    );
    let value = serde_json::to_value(&state).unwrap();

    assert_eq!(value["body"], json!([{ "x": 3, "y": 4 }, { "x": 2, "y": 4 }]));
    assert_eq!(value["food"], json!({ "x": 7, "y": 7 }));
    assert_eq!(value["direction"], "up");
    assert_eq!(value["score"], 1);
    assert_eq!(value["grid_size"], 20);
    assert_eq!(value["is_over"], false);
}

#[test]
fn test_snapshot_restores_a_running_arena() {
    let mut game = ArenaGame::new(21, Difficulty::Normal);
    for _ in 0..5 {
        game.tick();
    }
    let text = serde_json::to_string(game.state()).unwrap();
    let restored: ArenaState = serde_json::from_str(&text).unwrap();

    let mut resumed = ArenaGame::from_state(restored, 21);
    assert_eq!(resumed.state(), game.state());

    // Food placement may differ (separate RNG), movement may not.
    let mut original = game.clone();
    original.tick();
    resumed.tick();
    assert_eq!(resumed.state().body, original.state().body);
}

#[test]
fn test_catalog_json() {
    let value = serde_json::to_value(&CATALOG).unwrap();
    assert_eq!(value[0]["name"], "Tic-Tac-Toe");
    assert_eq!(value[0]["has_bot"], true);
    assert_eq!(value[1]["key"], "snake");
    assert_eq!(value[1]["max_players"], 1);
}
