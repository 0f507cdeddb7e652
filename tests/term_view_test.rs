use game_hub::core::{ArenaState, TurnGameState};
use game_hub::engine::ArenaDriver;
use game_hub::term::{ArenaView, GridOverlay, GridView, Viewport};
use game_hub::types::{Difficulty, Direction, GameMode, Point};

#[test]
fn arena_view_renders_border_corners() {
    let state = ArenaState::from_parts(vec![Point::new(0, 0)], Point::new(5, 5), Direction::Right);
    let view = ArenaView::default();

    // 20 cells * 2 columns + border => 42 wide; header + 22 rows + hint => 24 tall.
    let fb = view.render(&state, Viewport::new(42, 24));

    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(41, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 22).unwrap().ch, '└');
    assert_eq!(fb.get(41, 22).unwrap().ch, '┘');
}

#[test]
fn arena_view_draws_head_two_columns_wide() {
    let state = ArenaState::from_parts(vec![Point::new(0, 19)], Point::new(5, 5), Direction::Right);
    let fb = ArenaView::default().render(&state, Viewport::new(42, 24));

    // Inside border: (1, 2) origin.
    assert_eq!(fb.get(1, 2 + 19).unwrap().ch, '█');
    assert_eq!(fb.get(2, 2 + 19).unwrap().ch, '█');
    assert_eq!(fb.get(1 + 10, 2 + 5).unwrap().ch, '●');
}

#[test]
fn arena_view_follows_the_driver() {
    let mut driver = ArenaDriver::new(5, Difficulty::Normal);
    let view = ArenaView::default();
    let before = view.render(driver.game().state(), Viewport::new(80, 24));
    driver.update(100);
    let after = view.render(driver.game().state(), Viewport::new(80, 24));
    assert_ne!(before, after);
}

#[test]
fn grid_view_switches_mode_label() {
    let view = GridView;
    let vp = Viewport::new(70, 20);
    let pvp = view.render(
        &TurnGameState::new(GameMode::PvP, Difficulty::Easy),
        GridOverlay::default(),
        vp,
    );
    assert!(pvp.contains_text("mode: two players   level: easy"));

    let pvai = view.render(
        &TurnGameState::new(GameMode::PvAI, Difficulty::Hard),
        GridOverlay::default(),
        vp,
    );
    assert!(pvai.contains_text("mode: vs computer   level: hard"));
}
