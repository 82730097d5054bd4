//! Rules of the game.
//!
//! `Game` owns the session state and is the only thing that changes it:
//! - Placement and move validation, producing submit-once tokens
//! - Legal-move enumeration
//! - Post-move elimination of stacks cut off from every anchor
//! - Scoring and the placement → play → finished phase machine

pub mod elimination;
pub mod engine;

pub use elimination::{connected_to_anchors, eliminate, StackMap};
pub use engine::{Game, GameResult, MoveOutcome, MOVE_DIRECTIONS};
