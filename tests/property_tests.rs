//! Property tests over random boards, stacks and positions.

use proptest::prelude::*;

use rust_stacks::board::{Board, Stack};
use rust_stacks::core::{BoardConfig, CellId, Color, GameConfig, RowBounds};
use rust_stacks::players::{SelfPlay, SelfPlayConfig};
use rust_stacks::rules::{connected_to_anchors, eliminate, StackMap};

fn color() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::White), Just(Color::Black), Just(Color::Red)]
}

fn stack() -> impl Strategy<Value = Stack> {
    prop::collection::vec(color(), 1..6).prop_map(|colors| Stack::from_colors(&colors).unwrap())
}

fn board_config() -> impl Strategy<Value = BoardConfig> {
    prop::collection::vec((0..6i32, 1..12i32), 1..7).prop_map(|rows| {
        BoardConfig::new(
            rows.into_iter()
                .map(|(start, width)| RowBounds::new(start, (start + width).min(26)))
                .collect::<Vec<_>>(),
        )
    })
}

/// Random occupancy of the standard board.
fn position() -> impl Strategy<Value = StackMap> {
    prop::collection::vec(prop::option::of(stack()), 47).prop_map(|slots| {
        slots
            .into_iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|s| (CellId(i as u16), s)))
            .collect()
    })
}

proptest! {
    #[test]
    fn test_adjacency_symmetric_on_any_layout(config in board_config()) {
        let board = Board::new(&config).unwrap();
        prop_assert_eq!(board.len(), config.cell_count());

        for id in board.cell_ids() {
            let neighbors = board.adjacent(id);
            prop_assert!(neighbors.len() <= 6);
            for &n in neighbors {
                prop_assert!(board.adjacent(n).contains(&id));
            }
        }
    }

    #[test]
    fn test_merge_law(mover in stack(), destination in stack()) {
        let merged = Stack::merged(&mover, &destination);

        prop_assert_eq!(merged.owner(), mover.owner());
        prop_assert_eq!(merged.height(), mover.height() + destination.height());
        prop_assert_eq!(merged.has_anchor(), mover.has_anchor() || destination.has_anchor());
        prop_assert_eq!(&merged.colors()[..destination.height()], destination.colors());
    }

    #[test]
    fn test_elimination_fixed_point(mut stacks in position()) {
        let board = Board::standard();
        let before = stacks.clone();

        let cleared = eliminate(&board, &mut stacks);

        prop_assert_eq!(stacks.len() + cleared.len(), before.len());
        let reached = connected_to_anchors(&board, &stacks);
        for cell in stacks.keys() {
            prop_assert!(reached.contains(cell));
        }
        for cell in &cleared {
            prop_assert!(before.contains_key(cell));
        }

        let mut again = stacks.clone();
        prop_assert!(eliminate(&board, &mut again).is_empty());
        prop_assert_eq!(again, stacks);
    }

    #[test]
    fn test_elimination_keeps_anchor_stacks(stacks in position()) {
        let board = Board::standard();
        let mut after = stacks.clone();
        eliminate(&board, &mut after);

        for (cell, stack) in stacks.iter() {
            if stack.has_anchor() {
                prop_assert!(after.contains_key(cell));
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_random_games_are_reproducible(seed in any::<u64>()) {
        let config = SelfPlayConfig::new().with_seed(seed);
        let (first, a) = SelfPlay::random(config.clone()).play_new_game(GameConfig::default()).unwrap();
        let (second, b) = SelfPlay::random(config).play_new_game(GameConfig::default()).unwrap();

        prop_assert_eq!(a, b);
        prop_assert_eq!(first.snapshot(), second.snapshot());
        // Every surviving stack is tied to an anchor.
        let stacks: StackMap = first.stacks().map(|(cell, s)| (cell, s.clone())).collect();
        prop_assert_eq!(connected_to_anchors(first.board(), &stacks).len(), stacks.len());
    }
}
