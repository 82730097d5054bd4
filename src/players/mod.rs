//! Move-selection strategies and the self-play driver.
//!
//! Strategies only read the session. They return tokens obtained from the
//! session's validators and leave submission to the caller.

pub mod random;
pub mod self_play;

pub use random::RandomPlayer;
pub use self_play::{MatchSummary, SelfPlay, SelfPlayConfig};

use crate::core::{Action, Color, Phase, ValidatedMove, ValidatedPlacement};
use crate::rules::Game;

/// A strategy for one seat.
pub trait Player: Send {
    /// Choose a cell for `color` during the placement phase.
    ///
    /// Returns `None` if the strategy has nothing to offer.
    fn place(&mut self, color: Color, game: &Game) -> Option<ValidatedPlacement>;

    /// Choose a move for `color` during the play phase.
    fn play(&mut self, color: Color, game: &Game) -> Option<ValidatedMove>;

    /// Choose an action for the color to act, dispatching on the phase.
    fn choose_action(&mut self, game: &Game) -> Option<Action> {
        let color = game.current_color();
        match game.phase() {
            Phase::Placement => self.place(color, game).map(Action::from),
            Phase::Play => self.play(color, game).map(Action::from),
            Phase::Finished => None,
        }
    }
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn place(&mut self, color: Color, game: &Game) -> Option<ValidatedPlacement> {
        (**self).place(color, game)
    }

    fn play(&mut self, color: Color, game: &Game) -> Option<ValidatedMove> {
        (**self).play(color, game)
    }
}
