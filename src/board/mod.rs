//! The playing surface and the stacks that sit on it.
//!
//! - `geometry`: rows, cells, names and the six-neighbor adjacency
//! - `stack`: immutable token piles and the merge rule

pub mod geometry;
pub mod stack;

pub use geometry::{Board, Cell, Neighbors, Row};
pub use stack::Stack;
