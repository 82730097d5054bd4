//! Uniform random strategy.

use crate::core::{Color, GameRng, ValidatedMove, ValidatedPlacement};
use crate::rules::Game;

use super::Player;

/// Picks uniformly at random among the legal options.
///
/// ```
/// use rust_stacks::players::{Player, RandomPlayer};
/// use rust_stacks::rules::Game;
///
/// let game = Game::standard();
/// let mut player = RandomPlayer::new(42);
///
/// let token = player.place(game.current_color(), &game).unwrap();
/// assert!(!game.is_occupied(token.cell()));
/// ```
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    /// Create a player with its own seeded stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create a player drawing from an existing stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// The player's random stream.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }
}

impl Player for RandomPlayer {
    fn place(&mut self, _color: Color, game: &Game) -> Option<ValidatedPlacement> {
        let empty = game.empty_cells();
        let cell = *self.rng.choose(&empty)?;
        game.validate_placement(cell).ok()
    }

    fn play(&mut self, color: Color, game: &Game) -> Option<ValidatedMove> {
        if game.current_color() != color {
            return None;
        }

        let mut owned = game.cells_owned_by(color);
        self.rng.shuffle(&mut owned);
        owned.into_iter().find_map(|cell| {
            let moves = game.legal_moves_from(cell);
            self.rng.choose(&moves).copied()
        })
    }
}
