//! Command line and environment configuration.
//!
//! Every option can also be given through a `BLOCKFALL_*` environment
//! variable; explicit flags win.

use std::path::PathBuf;

use clap::Parser;

use crate::core::{GameState, PieceFactory, Rules, RulesError};
use crate::types::{BASE_DROP_MS, LINE_SCORE, MIN_DROP_MS};

#[derive(Debug, Clone, Parser)]
#[command(name = "blockfall", version, about = "Terminal falling-block puzzle game")]
pub struct Config {
    /// Seed for the piece sequence (random when omitted)
    #[arg(long, env = "BLOCKFALL_SEED")]
    pub seed: Option<u64>,

    /// Gravity interval at score 0, in milliseconds
    #[arg(long, env = "BLOCKFALL_BASE_DROP_MS", default_value_t = BASE_DROP_MS)]
    pub base_drop_ms: u32,

    /// Gravity interval floor, in milliseconds
    #[arg(long, env = "BLOCKFALL_MIN_DROP_MS", default_value_t = MIN_DROP_MS)]
    pub min_drop_ms: u32,

    /// Points per cleared line
    #[arg(long, env = "BLOCKFALL_LINE_SCORE", default_value_t = LINE_SCORE)]
    pub line_score: u32,

    /// Start playing immediately instead of waiting for ENTER
    #[arg(long, env = "BLOCKFALL_AUTOSTART")]
    pub autostart: bool,

    /// Append logs to this file (logging is off otherwise)
    #[arg(long, env = "BLOCKFALL_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. `info` or `blockfall_core=debug`
    #[arg(long, env = "BLOCKFALL_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn rules(&self) -> Result<Rules, RulesError> {
        Rules {
            base_drop_ms: self.base_drop_ms,
            min_drop_ms: self.min_drop_ms,
            line_score: self.line_score,
        }
        .validate()
    }

    pub fn factory(&self) -> PieceFactory {
        match self.seed {
            Some(seed) => PieceFactory::new(seed),
            None => PieceFactory::from_entropy(),
        }
    }

    /// Build the initial game, already running if `autostart` is set.
    pub fn build_game(&self) -> Result<GameState, RulesError> {
        let mut game = GameState::with_factory(self.rules()?, self.factory());
        if self.autostart {
            game.start();
        }
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GamePhase;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("blockfall").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn defaults_match_standard_rules() {
        let config = parse(&[]);
        assert_eq!(config.rules(), Ok(Rules::default()));
        assert!(!config.autostart);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn flags_override_rules() {
        let config = parse(&["--base-drop-ms", "800", "--min-drop-ms", "100", "--line-score", "25"]);
        let rules = config.rules().unwrap();
        assert_eq!(rules.base_drop_ms, 800);
        assert_eq!(rules.min_drop_ms, 100);
        assert_eq!(rules.line_score, 25);
    }

    #[test]
    fn invalid_rules_are_reported() {
        let config = parse(&["--min-drop-ms", "0"]);
        assert_eq!(config.rules(), Err(RulesError::ZeroFloor));
        assert!(config.build_game().is_err());
    }

    #[test]
    fn autostart_runs_the_game() {
        let game = parse(&["--autostart", "--seed", "3"]).build_game().unwrap();
        assert_eq!(game.phase(), GamePhase::Running);

        let game = parse(&["--seed", "3"]).build_game().unwrap();
        assert_eq!(game.phase(), GamePhase::Paused);
    }

    #[test]
    fn seed_makes_sequence_reproducible() {
        let mut a = parse(&["--seed", "11"]).factory();
        let mut b = parse(&["--seed", "11"]).factory();
        for _ in 0..20 {
            assert_eq!(a.next_kind(), b.next_kind());
        }
    }
}
