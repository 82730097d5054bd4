//! Post-move elimination.
//!
//! After every move, a stack survives only if a chain of occupied, adjacent
//! cells links it to some stack holding an anchor token. The surviving set
//! is the fixed point of a multi-source flood fill seeded from every
//! anchor-bearing cell; everything outside it is cleared in one step.

use std::collections::VecDeque;

use im::OrdMap;
use log::debug;
use rustc_hash::FxHashSet;

use crate::board::{Board, Stack};
use crate::core::CellId;

/// Occupied cells of a session, keyed by cell id.
pub type StackMap = OrdMap<CellId, Stack>;

/// Every occupied cell connected to an anchor-bearing cell.
///
/// Empty when no stack carries an anchor.
#[must_use]
pub fn connected_to_anchors(board: &Board, stacks: &StackMap) -> FxHashSet<CellId> {
    let mut reached = FxHashSet::default();
    let mut queue = VecDeque::new();

    for (&cell, stack) in stacks.iter() {
        if stack.has_anchor() {
            debug!("Anchor at {}", board.name(cell));
            reached.insert(cell);
            queue.push_back(cell);
        }
    }

    while let Some(cell) = queue.pop_front() {
        for &neighbor in board.adjacent(cell) {
            if stacks.contains_key(&neighbor) && reached.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    reached
}

/// Remove every stack not connected to an anchor.
///
/// Returns the cleared cells in id order.
pub fn eliminate(board: &Board, stacks: &mut StackMap) -> Vec<CellId> {
    let reached = connected_to_anchors(board, stacks);
    let cleared: Vec<CellId> = stacks
        .keys()
        .filter(|cell| !reached.contains(cell))
        .copied()
        .collect();

    for cell in &cleared {
        debug!("Clearing {}", board.name(*cell));
        stacks.remove(cell);
    }

    cleared
}
