//! Terminal game hub runner (default binary).
//!
//! `game-hub` with no game lists the catalog; `game-hub snake` or
//! `game-hub tictactoe` takes over the terminal. Input comes from crossterm,
//! frames go through the framebuffer renderer, and elapsed time is reported
//! to the game's driver once per loop iteration.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::info;

use game_hub::config::{parse_args, Command, Game, HubConfig, USAGE};
use game_hub::engine::{ArenaDriver, TurnDriver};
use game_hub::input::{arena_key_event, should_quit, GridCursor};
use game_hub::term::{ArenaView, FrameBuffer, GridOverlay, GridView, TerminalRenderer, Viewport};
use game_hub::types::{CATALOG, FRAME_MS};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, config) = parse_args(&args, HubConfig::from_env())?;

    let game = match command {
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Command::List => {
            print_catalog();
            return Ok(());
        }
        Command::Play(game) => game,
    };

    init_tracing(&config)?;
    info!(
        ?game,
        seed = config.seed,
        difficulty = config.difficulty.as_str(),
        mode = config.mode.as_str(),
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = match game {
        Game::TicTacToe => run_grid(&mut term, &config),
        Game::Snake => run_arena(&mut term, &config),
    };

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn print_catalog() {
    println!("{USAGE}\n\ngames:");
    for game in CATALOG.iter() {
        let players = if game.has_bot {
            format!("{} players or vs computer", game.max_players)
        } else {
            format!("{} player", game.max_players)
        };
        println!("  {:<10} {} - {} ({})", game.key, game.name, game.description, players);
    }
}

/// File logging only: the terminal belongs to the game while it runs.
fn init_tracing(config: &HubConfig) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(filter)
        .init();

    Ok(())
}

/// Next key press within `wait_ms`, capped at one frame. Resizes force a full redraw.
fn poll_key(term: &mut TerminalRenderer, wait_ms: Option<u32>) -> Result<Option<KeyEvent>> {
    let wait_ms = wait_ms.map_or(FRAME_MS, |ms| ms.min(FRAME_MS));
    if !event::poll(Duration::from_millis(wait_ms as u64))? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        Event::Resize(..) => {
            term.invalidate();
            Ok(None)
        }
        _ => Ok(None),
    }
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn elapsed_since(last: &mut Instant) -> u32 {
    let now = Instant::now();
    let elapsed = now.duration_since(*last).as_millis().min(u32::MAX as u128) as u32;
    *last = now;
    elapsed
}

fn run_arena(term: &mut TerminalRenderer, config: &HubConfig) -> Result<()> {
    let mut driver = ArenaDriver::new(config.seed, config.difficulty);
    info!(seed = driver.game().seed(), "arena ready");
    let view = ArenaView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = Instant::now();

    loop {
        view.render_into(driver.game().state(), viewport(), &mut fb);
        term.draw(&fb)?;

        if let Some(key) = poll_key(term, driver.next_deadline_ms())? {
            if should_quit(key) {
                return Ok(());
            }
            if let Some(action) = arena_key_event(key) {
                driver.handle(action);
            }
        }

        driver.update(elapsed_since(&mut last));
    }
}

fn run_grid(term: &mut TerminalRenderer, config: &HubConfig) -> Result<()> {
    let mut driver = TurnDriver::new(config.seed, config.mode, config.difficulty);
    info!(seed = driver.game().seed(), "grid ready");
    let mut cursor = GridCursor::new();
    let view = GridView;
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = Instant::now();

    loop {
        let overlay = GridOverlay {
            cursor: Some(cursor.cell()),
            ai_thinking: driver.ai_thinking(),
            end_screen: driver.end_screen_visible(),
        };
        view.render_into(driver.game().state(), overlay, viewport(), &mut fb);
        term.draw(&fb)?;

        if let Some(key) = poll_key(term, None)? {
            if should_quit(key) {
                return Ok(());
            }
            let mode = driver.game().state().mode;
            if let Some(action) = cursor.handle_key(key, mode) {
                driver.handle(action);
            }
        }

        driver.update(elapsed_since(&mut last))?;
    }
}
