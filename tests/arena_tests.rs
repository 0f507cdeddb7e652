//! Arena engine and state machine tests (facade-level)

use std::collections::{HashSet, VecDeque};

use proptest::prelude::*;
use rand::rngs::mock::StepRng;

use game_hub::core::{ArenaGame, ArenaState, GameRng, TickOutcome};
use game_hub::types::{ArenaAction, ArenaStatus, Difficulty, Direction, Point, GRID_SIZE};

fn p(x: u8, y: u8) -> Point {
    Point::new(x, y)
}

fn assert_invariants(state: &ArenaState) {
    assert!(state.high_score >= state.score);
    if state.is_over {
        return;
    }
    assert_eq!(state.body.len(), state.score as usize + 1);
    let unique: HashSet<Point> = state.body.iter().copied().collect();
    assert_eq!(unique.len(), state.body.len(), "body overlaps itself");
    assert!(!state.body.contains(&state.food), "food on the body");
    for point in state.body.iter().chain([&state.food]) {
        assert!(point.x < GRID_SIZE && point.y < GRID_SIZE);
    }
}

#[test]
fn test_eating_grows_and_respawns_food() {
    let mut rng = GameRng::new(31);
    let mut state = ArenaState::from_parts(vec![p(5, 5)], p(6, 5), Direction::Right);
    assert_eq!(state.tick(&mut rng), TickOutcome::Ate);
    assert_eq!(state.body, VecDeque::from([p(6, 5), p(5, 5)]));
    assert_eq!(state.score, 1);
    assert_eq!(state.high_score, 1);
    assert!(!state.body.contains(&state.food));
}

#[test]
fn test_food_respawn_uses_free_cells_only() {
    // gen_range always returns its lower bound: the first free cell in row-major order.
    let mut rng = StepRng::new(0, 0);
    let mut state = ArenaState::from_parts(vec![p(1, 0), p(0, 0)], p(2, 0), Direction::Right);
    assert_eq!(state.tick(&mut rng), TickOutcome::Ate);
    assert_eq!(state.food, p(3, 0));
}

#[test]
fn test_collision_leaves_body_untouched() {
    let mut rng = GameRng::new(1);
    let body = vec![p(1, 1), p(1, 2), p(1, 3)];
    let mut state = ArenaState::from_parts(body.clone(), p(9, 9), Direction::Down);
    assert_eq!(state.tick(&mut rng), TickOutcome::Collided);
    assert!(state.is_over);
    assert_eq!(state.status(), ArenaStatus::GameOver);
    assert_eq!(state.body, VecDeque::from(body));
    assert_eq!(state.tick(&mut rng), TickOutcome::Idle);
}

#[test]
fn test_wraps_on_every_edge() {
    let mut rng = GameRng::new(1);
    let edge = GRID_SIZE - 1;
    let cases = [
        (p(edge, 4), Direction::Right, p(0, 4)),
        (p(0, 4), Direction::Left, p(edge, 4)),
        (p(4, 0), Direction::Up, p(4, edge)),
        (p(4, edge), Direction::Down, p(4, 0)),
    ];
    for (start, direction, expected) in cases {
        let mut state = ArenaState::from_parts(vec![start], p(10, 10), direction);
        assert_eq!(state.tick(&mut rng), TickOutcome::Moved);
        assert_eq!(state.head(), expected, "{direction:?} from {start:?}");
    }
}

#[test]
fn test_reversal_is_rejected_but_turns_apply_next_tick() {
    let mut game = ArenaGame::from_state(
        ArenaState::from_parts(vec![p(5, 5), p(4, 5), p(3, 5)], p(0, 19), Direction::Right),
        3,
    );
    assert!(!game.apply_action(ArenaAction::Turn(Direction::Left)));
    assert!(game.apply_action(ArenaAction::Turn(Direction::Up)));
    game.tick();
    assert_eq!(game.state().head(), p(5, 4));
    // Down is now the reversal.
    assert!(!game.set_direction(Direction::Down));
}

#[test]
fn test_quick_double_turn_cannot_reverse() {
    // Up then Left before one tick: both judged against Right, so Left is dropped.
    let mut game = ArenaGame::from_state(
        ArenaState::from_parts(vec![p(5, 5), p(4, 5)], p(0, 19), Direction::Right),
        3,
    );
    assert!(game.set_direction(Direction::Up));
    assert!(!game.set_direction(Direction::Left));
    assert_eq!(game.tick(), TickOutcome::Moved);
    assert_eq!(game.state().head(), p(5, 4));
}

#[test]
fn test_reset_from_every_state() {
    let mut game = ArenaGame::new(8, Difficulty::Hard);
    game.toggle_pause();
    game.reset();
    assert_eq!(game.status(), ArenaStatus::Running);

    game.reset();
    let first = game.state().clone();
    game.reset();
    let second = game.state().clone();
    assert_eq!(first.body, second.body);
    assert_eq!(first.score, 0);
    assert_eq!(second.difficulty, Difficulty::Hard);
    assert_eq!(game.episode_id(), 3);
}

#[test]
fn test_high_score_survives_game_over_and_reset() {
    let state = ArenaState::from_parts(
        vec![p(2, 2), p(2, 3), p(3, 3), p(3, 2), p(3, 1)],
        p(0, 0),
        Direction::Right,
    );
    let mut game = ArenaGame::from_state(state, 4);
    assert_eq!(game.tick(), TickOutcome::Collided);
    game.reset();
    assert_eq!(game.state().score, 0);
    assert_eq!(game.state().high_score, 4);
}

#[derive(Debug, Clone)]
enum Input {
    Turn(Direction),
    Pause,
    Tick,
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        3 => prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
        .prop_map(Input::Turn),
        1 => Just(Input::Pause),
        6 => Just(Input::Tick),
    ]
}

proptest! {
    #[test]
    fn prop_random_play_keeps_invariants(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 0..400),
    ) {
        let mut game = ArenaGame::new(seed, Difficulty::Normal);
        assert_invariants(game.state());
        for input in inputs {
            let before = game.state().clone();
            match input {
                Input::Turn(direction) => {
                    game.set_direction(direction);
                }
                Input::Pause => {
                    game.toggle_pause();
                }
                Input::Tick => {
                    let outcome = game.tick();
                    let moved = matches!(outcome, TickOutcome::Moved | TickOutcome::Ate);
                    if moved {
                        let step = before.head().step(game.state().direction, GRID_SIZE);
                        prop_assert_eq!(game.state().head(), step);
                    }
                    if outcome == TickOutcome::Idle {
                        prop_assert_eq!(game.state(), &before);
                    }
                }
            }
            assert_invariants(game.state());
        }
    }

    #[test]
    fn prop_step_stays_on_grid(x in 0u8..GRID_SIZE, y in 0u8..GRID_SIZE) {
        for d in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            let next = p(x, y).step(d, GRID_SIZE);
            prop_assert!(next.x < GRID_SIZE && next.y < GRID_SIZE);
            prop_assert_eq!(next.step(d.opposite(), GRID_SIZE), p(x, y));
        }
    }
}
