//! Runtime configuration: environment defaults, then command-line overrides.
//!
//! | Variable              | Default          | Meaning                          |
//! |-----------------------|------------------|----------------------------------|
//! | `GAME_HUB_SEED`       | wall clock       | RNG seed for both games          |
//! | `GAME_HUB_DIFFICULTY` | `normal`         | `easy`, `normal` or `hard`       |
//! | `GAME_HUB_MODE`       | `ai`             | tic-tac-toe mode, `pvp` or `ai`  |
//! | `GAME_HUB_LOG_PATH`   | unset (no logs)  | file that receives tracing output|
//! | `GAME_HUB_LOG`        | `info`           | filter when `RUST_LOG` is unset  |

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Result};

use crate::types::{find_game, Difficulty, GameMode};

pub const USAGE: &str =
    "usage: game-hub [tictactoe|snake] [--seed N] [--difficulty easy|normal|hard] [--mode pvp|ai]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
    pub seed: u64,
    pub difficulty: Difficulty,
    pub mode: GameMode,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl HubConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("GAME_HUB_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let difficulty = lookup("GAME_HUB_DIFFICULTY")
            .and_then(|s| Difficulty::from_str(s.trim()))
            .unwrap_or_default();

        let mode = lookup("GAME_HUB_MODE")
            .and_then(|s| GameMode::from_str(s.trim()))
            .unwrap_or_default();

        let log_path = lookup("GAME_HUB_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let log_filter = lookup("GAME_HUB_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "info".to_string());

        Self {
            seed,
            difficulty,
            mode,
            log_path,
            log_filter,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

/// Which game the binary runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Game {
    TicTacToe,
    Snake,
}

impl Game {
    /// Resolve a catalog key (case-insensitive).
    pub fn from_key(key: &str) -> Option<Self> {
        match find_game(key)?.key {
            "tictactoe" => Some(Game::TicTacToe),
            "snake" => Some(Game::Snake),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// No game named: print the catalog
    List,
    Help,
    Play(Game),
}

/// Parse arguments (without the program name) on top of `config`.
pub fn parse_args(args: &[String], mut config: HubConfig) -> Result<(Command, HubConfig)> {
    let mut game = None;
    let mut i = 0usize;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => return Ok((Command::Help, config)),
            "--seed" | "--difficulty" | "--mode" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for {}", arg))?;
                apply_flag(&mut config, arg, value)?;
            }
            other if other.starts_with('-') => bail!("unknown argument: {}", other),
            other => {
                if game.is_some() {
                    bail!("unexpected argument: {}", other);
                }
                game = Some(Game::from_key(other).ok_or_else(|| anyhow!("unknown game: {}", other))?);
            }
        }
        i += 1;
    }

    let command = game.map_or(Command::List, Command::Play);
    Ok((command, config))
}

fn apply_flag(config: &mut HubConfig, flag: &str, value: &str) -> Result<()> {
    match flag {
        "--seed" => {
            config.seed = value
                .parse()
                .map_err(|_| anyhow!("invalid --seed value: {}", value))?;
        }
        "--difficulty" => {
            config.difficulty = Difficulty::from_str(value)
                .ok_or_else(|| anyhow!("invalid --difficulty value: {}", value))?;
        }
        "--mode" => {
            config.mode = GameMode::from_str(value)
                .ok_or_else(|| anyhow!("invalid --mode value: {}", value))?;
        }
        _ => bail!("unknown flag: {}", flag),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HubConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HubConfig::from_lookup(|key| map.get(key).cloned())
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_env_defaults() {
        let config = env(&[]);
        assert_eq!(config.difficulty, Difficulty::Normal);
        assert_eq!(config.mode, GameMode::PvAI);
        assert_eq!(config.log_path, None);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_env_values() {
        let config = env(&[
            ("GAME_HUB_SEED", "42"),
            ("GAME_HUB_DIFFICULTY", "hard"),
            ("GAME_HUB_MODE", "pvp"),
            ("GAME_HUB_LOG_PATH", " /tmp/hub.log "),
            ("GAME_HUB_LOG", "debug"),
        ]);
        assert_eq!(config.seed, 42);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.mode, GameMode::PvP);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/hub.log"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_env_garbage_falls_back() {
        let config = env(&[("GAME_HUB_DIFFICULTY", "brutal"), ("GAME_HUB_LOG_PATH", "  ")]);
        assert_eq!(config.difficulty, Difficulty::Normal);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_no_game_lists_catalog() {
        let (command, _) = parse_args(&[], env(&[])).unwrap();
        assert_eq!(command, Command::List);
    }

    #[test]
    fn test_flags_override_env() {
        let base = env(&[("GAME_HUB_SEED", "1"), ("GAME_HUB_DIFFICULTY", "easy")]);
        let (command, config) = parse_args(
            &args(&["snake", "--seed", "99", "--difficulty", "hard"]),
            base,
        )
        .unwrap();
        assert_eq!(command, Command::Play(Game::Snake));
        assert_eq!(config.seed, 99);
        assert_eq!(config.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_game_key_is_case_insensitive() {
        let (command, config) =
            parse_args(&args(&["--mode", "pvp", "TicTacToe"]), env(&[])).unwrap();
        assert_eq!(command, Command::Play(Game::TicTacToe));
        assert_eq!(config.mode, GameMode::PvP);
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse_args(&args(&["chess"]), env(&[])).is_err());
        assert!(parse_args(&args(&["snake", "--seed"]), env(&[])).is_err());
        assert!(parse_args(&args(&["snake", "--seed", "x"]), env(&[])).is_err());
        assert!(parse_args(&args(&["--fast"]), env(&[])).is_err());
        assert!(parse_args(&args(&["snake", "snake"]), env(&[])).is_err());
        let (command, _) = parse_args(&args(&["--help"]), env(&[])).unwrap();
        assert_eq!(command, Command::Help);
    }
}
