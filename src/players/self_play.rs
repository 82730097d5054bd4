//! Self-play loop.
//!
//! Drives one session from its current position to the end, asking each
//! seat's strategy for an action before every turn.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{Action, ColorMap, GameConfig, GameRng, SelfPlayError};
use crate::rules::{Game, GameResult};

use super::{Player, RandomPlayer};

/// Configuration for self-play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Maximum submitted actions per game.
    pub max_turns: usize,

    /// Seed for strategies built by the driver.
    pub seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            max_turns: 500,
            seed: 0,
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum submitted actions per game.
    #[must_use]
    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// How a self-played game ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchSummary {
    pub result: GameResult,
    pub scores: ColorMap<usize>,
    /// Submitted actions, placements included.
    pub turns: usize,
}

/// Plays a game between two strategies.
pub struct SelfPlay {
    config: SelfPlayConfig,
    players: ColorMap<Box<dyn Player>>,
}

impl SelfPlay {
    /// Create a driver with one strategy per player color.
    pub fn new(config: SelfPlayConfig, white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self {
            config,
            players: ColorMap::from_values(white, black),
        }
    }

    /// Two random players with streams forked from the configured seed.
    #[must_use]
    pub fn random(config: SelfPlayConfig) -> Self {
        let mut rng = GameRng::new(config.seed);
        let white = RandomPlayer::from_rng(rng.fork());
        let black = RandomPlayer::from_rng(rng.fork());
        Self::new(config, Box::new(white), Box::new(black))
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Play `game` to the end.
    ///
    /// The session is left where play stopped, also on error.
    pub fn play_game(&mut self, game: &mut Game) -> Result<MatchSummary, SelfPlayError> {
        let mut turns = 0;

        while game.find_valid_play() {
            if turns >= self.config.max_turns {
                return Err(SelfPlayError::TurnLimit(self.config.max_turns));
            }

            let color = game.current_color();
            let action = self.players[color]
                .choose_action(game)
                .ok_or(SelfPlayError::NoAction {
                    color,
                    phase: game.phase(),
                })?;

            match action {
                Action::Place(placement) => game.submit_placement(placement)?,
                Action::Move(mv) => {
                    let outcome = game.submit_move(mv)?;
                    debug!(
                        "{} merged to height {}, {} cleared",
                        color,
                        outcome.merged_height,
                        outcome.cleared.len()
                    );
                }
            }
            turns += 1;
        }

        let result = game.winner().map_or(GameResult::Draw, GameResult::Winner);
        info!("Self-play finished after {} turns: {:?}", turns, result);

        Ok(MatchSummary {
            result,
            scores: game.scores(),
            turns,
        })
    }

    /// Start a fresh session from `config` and play it to the end.
    pub fn play_new_game(&mut self, config: GameConfig) -> Result<(Game, MatchSummary), SelfPlayError> {
        let mut game = Game::new(config)?;
        let summary = self.play_game(&mut game)?;
        Ok((game, summary))
    }
}

impl std::fmt::Debug for SelfPlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelfPlay")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
