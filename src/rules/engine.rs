//! The game session: validation, submission, phase machine and scoring.
//!
//! `Game` is the single owner of all mutable state. Collaborators read it
//! through `&Game` and change it only by submitting tokens the session
//! itself validated:
//!
//! ```
//! use rust_stacks::core::{Color, Phase};
//! use rust_stacks::rules::Game;
//!
//! let mut game = Game::standard();
//! assert!(game.find_valid_play());
//!
//! let cell = game.board().find("E3").unwrap();
//! let token = game.validate_placement(cell).unwrap();
//! game.submit_placement(token).unwrap();
//!
//! // The opening placements seed the anchor stacks.
//! assert_eq!(game.stack(cell).unwrap().owner(), Color::Red);
//! assert_eq!(game.current_color(), Color::Black);
//! assert_eq!(game.phase(), Phase::Placement);
//! ```

use std::sync::Arc;

use log::{info, warn};

use crate::board::{Board, Stack};
use crate::core::{
    CellId, Color, ColorMap, ConfigError, GameConfig, GameSnapshot, Move, MoveError, Phase,
    PlacementError, SnapshotError, SnapshotStack, ValidatedMove, ValidatedPlacement,
};

use super::elimination::{eliminate, StackMap};

/// Unit steps of legal-move enumeration as `(rows, columns)`, scaled by the
/// height of the moving stack.
pub const MOVE_DIRECTIONS: [(i32, i32); 6] = [(0, -1), (0, 1), (-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Strictly higher score.
    Winner(Color),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a color won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        matches!(self, GameResult::Winner(c) if *c == color)
    }
}

/// What a submitted move changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: CellId,
    pub to: CellId,
    /// Height of the stack now on `to`, or 0 if elimination removed it.
    pub merged_height: usize,
    /// Cells emptied by elimination, in id order.
    pub cleared: Vec<CellId>,
}

/// A live game session.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Arc<Board>,
    stacks: StackMap,
    phase: Phase,
    current: Color,
    /// Bumped on every state change; stamps validated tokens.
    ply: u32,
}

impl Game {
    /// Start a session in the placement phase.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(&config.board)?;
        Ok(Self::with_board(config, Arc::new(board)))
    }

    /// A session on the standard 47-cell board with default rules.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_board(GameConfig::default(), Arc::new(Board::standard()))
    }

    fn with_board(config: GameConfig, board: Arc<Board>) -> Self {
        Self {
            current: config.first_color,
            config,
            board,
            stacks: StackMap::new(),
            phase: Phase::Placement,
            ply: 0,
        }
    }

    /// Rebuild a session from a snapshot.
    ///
    /// Every cell name must exist on the board built from `config`.
    pub fn restore(config: GameConfig, snapshot: &GameSnapshot) -> Result<Self, SnapshotError> {
        let mut game = Self::new(config)?;
        if snapshot.current.is_anchor() {
            return Err(SnapshotError::AnchorToAct(snapshot.current));
        }

        for entry in &snapshot.stacks {
            let cell = game
                .board
                .find(&entry.cell)
                .ok_or_else(|| SnapshotError::UnknownCell(entry.cell.clone()))?;
            let stack = Stack::from_colors(&entry.colors)
                .ok_or_else(|| SnapshotError::EmptyStack(entry.cell.clone()))?;
            if game.stacks.insert(cell, stack).is_some() {
                return Err(SnapshotError::DuplicateCell(entry.cell.clone()));
            }
        }

        game.phase = snapshot.phase;
        game.current = snapshot.current;
        Ok(game)
    }

    /// Capture the position with cell display names.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            current: self.current,
            stacks: self
                .stacks
                .iter()
                .map(|(&cell, stack)| SnapshotStack {
                    cell: self.board.name(cell),
                    colors: stack.colors().to_vec(),
                })
                .collect(),
        }
    }

    // === Read access ===

    /// Configuration the session was built from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The playing surface.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Shared handle to the board, for readers that outlive a borrow.
    #[must_use]
    pub fn shared_board(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Color to act. Never the anchor color.
    #[must_use]
    pub fn current_color(&self) -> Color {
        self.current
    }

    /// Number of state changes so far.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Stack on `cell`, if any.
    #[must_use]
    pub fn stack(&self, cell: CellId) -> Option<&Stack> {
        self.stacks.get(&cell)
    }

    #[must_use]
    pub fn is_occupied(&self, cell: CellId) -> bool {
        self.stacks.contains_key(&cell)
    }

    /// Occupied cells and their stacks, in id order.
    pub fn stacks(&self) -> impl Iterator<Item = (CellId, &Stack)> {
        self.stacks.iter().map(|(&cell, stack)| (cell, stack))
    }

    /// Cells without a stack, in id order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<CellId> {
        self.board
            .cell_ids()
            .filter(|cell| !self.stacks.contains_key(cell))
            .collect()
    }

    /// Cells whose top token is `color`, in id order.
    #[must_use]
    pub fn cells_owned_by(&self, color: Color) -> Vec<CellId> {
        self.stacks()
            .filter(|(_, stack)| stack.owner() == color)
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Number of stacks holding at least one anchor token.
    #[must_use]
    pub fn anchor_stack_count(&self) -> usize {
        self.stacks.values().filter(|stack| stack.has_anchor()).count()
    }

    // === Placement ===

    /// Accept `cell` for the next placement.
    pub fn validate_placement(&self, cell: CellId) -> Result<ValidatedPlacement, PlacementError> {
        if self.phase != Phase::Placement {
            return Err(PlacementError::WrongPhase(self.phase));
        }
        if !self.board.contains(cell) {
            return Err(PlacementError::NotOnBoard(cell));
        }
        if self.is_occupied(cell) {
            return Err(PlacementError::Occupied(self.board.name(cell)));
        }
        Ok(ValidatedPlacement::new(cell, self.ply))
    }

    /// Place a token and pass the turn.
    ///
    /// Until the configured number of anchor stacks exists, the token is the
    /// anchor color whoever places it. The placement is checked again against
    /// this session, so a token issued by another game is refused.
    pub fn submit_placement(&mut self, placement: ValidatedPlacement) -> Result<(), PlacementError> {
        if placement.ply() != self.ply {
            return Err(PlacementError::Stale);
        }
        // The ply alone does not tie a token to this session.
        let cell = self.validate_placement(placement.cell())?.cell();
        let color = if self.anchor_stack_count() < self.config.anchor_stacks {
            Color::ANCHOR
        } else {
            self.current
        };

        info!(
            "Placement: {} has placed {} at {}",
            self.current,
            color,
            self.board.name(cell)
        );
        self.stacks.insert(cell, Stack::new(color));
        self.pass_turn();
        Ok(())
    }

    // === Movement ===

    /// Accept `mv` if the current color may play it.
    ///
    /// A stack of height `h` travels exactly `h` cells along the row, along
    /// the column, or along the diagonal where both indices change by `h`,
    /// and must land on another stack.
    pub fn validate_move(&self, mv: Move) -> Result<ValidatedMove, MoveError> {
        if self.phase != Phase::Play {
            return Err(MoveError::WrongPhase(self.phase));
        }
        for cell in [mv.from, mv.to] {
            if !self.board.contains(cell) {
                return Err(MoveError::NotOnBoard(cell));
            }
        }

        let moving = self
            .stack(mv.from)
            .ok_or_else(|| MoveError::EmptySource(self.board.name(mv.from)))?;
        if moving.owner() != self.current {
            return Err(MoveError::NotOwner {
                cell: self.board.name(mv.from),
                owner: moving.owner(),
                mover: self.current,
            });
        }
        if !self.is_occupied(mv.to) {
            return Err(MoveError::EmptyDestination(self.board.name(mv.to)));
        }

        let height = moving.height();
        let h = height as i32;
        let from = self.board.cell(mv.from);
        let to = self.board.cell(mv.to);
        let row_delta = to.row() as i32 - from.row() as i32;
        let column_delta = to.column() - from.column();

        let along_row = row_delta == 0 && column_delta.abs() == h;
        let along_column = column_delta == 0 && row_delta.abs() == h;
        let along_diagonal = row_delta.abs() == h && column_delta.abs() == h;

        if along_row || along_column || along_diagonal {
            Ok(ValidatedMove::new(mv, self.ply))
        } else {
            Err(MoveError::Geometry {
                from: from.name(),
                to: to.name(),
                height,
                row_delta,
                column_delta,
            })
        }
    }

    /// Moves the current color can make with the stack on `cell`.
    ///
    /// Empty outside the play phase, for an empty cell, or for a stack the
    /// current color does not own.
    ///
    /// # Panics
    ///
    /// Panics if a generated candidate fails [`Game::validate_move`]; that
    /// means enumeration and validation disagree, which is an engine bug.
    #[must_use]
    pub fn legal_moves_from(&self, cell: CellId) -> Vec<ValidatedMove> {
        if self.phase != Phase::Play || !self.board.contains(cell) {
            return Vec::new();
        }
        let Some(stack) = self.stack(cell) else {
            return Vec::new();
        };
        if stack.owner() != self.current {
            return Vec::new();
        }

        // Surrounded by six empty cells: every landing spot would be empty too.
        if self.board.is_interior(cell)
            && self.board.adjacent(cell).iter().all(|n| !self.is_occupied(*n))
        {
            return Vec::new();
        }

        let h = stack.height() as i32;
        let origin = self.board.cell(cell);
        MOVE_DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| {
                self.board
                    .cell_at(origin.row() as i32 + dr * h, origin.column() + dc * h)
            })
            .filter(|&to| self.is_occupied(to))
            .map(|to| {
                let mv = Move::new(cell, to);
                self.validate_move(mv).unwrap_or_else(|err| {
                    panic!("generated move {} -> {} failed validation: {err}", origin, self.board.name(to))
                })
            })
            .collect()
    }

    /// Every move the current color can make.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<ValidatedMove> {
        self.cells_owned_by(self.current)
            .into_iter()
            .flat_map(|cell| self.legal_moves_from(cell))
            .collect()
    }

    /// True if the current color has at least one move.
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        self.cells_owned_by(self.current)
            .into_iter()
            .any(|cell| !self.legal_moves_from(cell).is_empty())
    }

    /// Move a stack onto another, clear disconnected stacks, pass the turn.
    ///
    /// The move is checked again against this session, so a token issued by
    /// another game is refused.
    pub fn submit_move(&mut self, mv: ValidatedMove) -> Result<MoveOutcome, MoveError> {
        if mv.ply() != self.ply {
            return Err(MoveError::Stale);
        }
        // The ply alone does not tie a token to this session.
        let mv = self.validate_move(mv.as_move())?;

        let (from, to) = (mv.from(), mv.to());
        let (Some(moving), Some(destination)) = (self.stacks.get(&from), self.stacks.get(&to)) else {
            return Err(MoveError::EmptySource(self.board.name(from)));
        };
        let merged = Stack::merged(moving, destination);

        info!(
            "Move: {} from {} to {}",
            self.current,
            self.board.name(from),
            self.board.name(to)
        );
        self.stacks.remove(&from);
        self.stacks.insert(to, merged);

        let cleared = eliminate(&self.board, &mut self.stacks);
        if !cleared.is_empty() {
            info!("Elimination cleared {} stacks", cleared.len());
        }
        let merged_height = self.stack(to).map_or(0, Stack::height);

        self.pass_turn();
        Ok(MoveOutcome {
            from,
            to,
            merged_height,
            cleared,
        })
    }

    // === Phase machine ===

    /// Advance the phase machine and report whether the game goes on.
    ///
    /// Call before every turn; stop driving the session once it returns
    /// false. In the play phase a color without moves loses its turn, and
    /// the game finishes when neither color can move.
    pub fn find_valid_play(&mut self) -> bool {
        if self.phase == Phase::Placement {
            if self.stacks.len() < self.board.len() {
                return true;
            }
            self.phase = Phase::Play;
            self.ply += 1;
            info!("Placement complete: {} to move", self.current);
        }

        if self.phase == Phase::Play {
            if self.has_legal_move() {
                return true;
            }

            let stalled = self.current;
            self.pass_turn();
            if self.has_legal_move() {
                warn!("{} has no legal move, turn passes to {}", stalled, self.current);
                return true;
            }

            self.phase = Phase::Finished;
            self.ply += 1;
            info!(
                "Game finished: WHITE: {}, BLACK: {} WINNER: {}",
                self.score(Color::White),
                self.score(Color::Black),
                self.winner().map_or_else(|| "none".to_string(), |c| c.to_string())
            );
        }

        false
    }

    fn pass_turn(&mut self) {
        self.current = self.current.opponent();
        self.ply += 1;
    }

    // === Scoring ===

    /// Total height of the stacks topped by `color`.
    #[must_use]
    pub fn score(&self, color: Color) -> usize {
        self.stacks
            .values()
            .filter(|stack| stack.owner() == color)
            .map(Stack::height)
            .sum()
    }

    /// Scores of both player colors.
    #[must_use]
    pub fn scores(&self) -> ColorMap<usize> {
        ColorMap::new(|color| self.score(color))
    }

    /// The player color with the strictly higher score.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        let white = self.score(Color::White);
        let black = self.score(Color::Black);
        if white > black {
            Some(Color::White)
        } else if black > white {
            Some(Color::Black)
        } else {
            None
        }
    }

    /// Final result, once the game is finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.phase != Phase::Finished {
            return None;
        }
        Some(self.winner().map_or(GameResult::Draw, GameResult::Winner))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(game: &Game, name: &str) -> CellId {
        game.board().find(name).unwrap()
    }

    fn play_position(current: Color, stacks: &[(&str, &[Color])]) -> Game {
        let snapshot = stacks
            .iter()
            .fold(GameSnapshot::new(Phase::Play, current), |s, (name, colors)| {
                s.with_stack(*name, colors.to_vec())
            });
        Game::restore(GameConfig::default(), &snapshot).unwrap()
    }

    #[test]
    fn test_game_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Game>();
    }

    #[test]
    fn test_clone_is_independent() {
        let mut game = play_position(Color::White, &[("A1", &[Color::Red]), ("B1", &[Color::White])]);
        let copy = game.clone();

        let token = game
            .validate_move(Move::new(cell(&game, "B1"), cell(&game, "A1")))
            .unwrap();
        game.submit_move(token).unwrap();

        assert_eq!(copy.stacks().count(), 2);
        assert_eq!(game.stacks().count(), 1);
        assert_eq!(copy.current_color(), Color::White);
    }

    #[test]
    fn test_game_result_is_winner() {
        assert!(GameResult::Winner(Color::Black).is_winner(Color::Black));
        assert!(!GameResult::Winner(Color::Black).is_winner(Color::White));
        assert!(!GameResult::Draw.is_winner(Color::White));
    }

    #[test]
    fn test_fresh_session() {
        let game = Game::standard();
        assert_eq!(game.phase(), Phase::Placement);
        assert_eq!(game.current_color(), Color::White);
        assert_eq!(game.board().len(), 47);
        assert_eq!(game.empty_cells().len(), 47);
        assert_eq!(game.stacks().count(), 0);
        assert_eq!(game.result(), None);
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = GameConfig::new().with_first_color(Color::Red);
        assert_eq!(Game::new(config).unwrap_err(), ConfigError::AnchorFirst(Color::Red));
    }

    #[test]
    fn test_first_placement_is_anchor() {
        let mut game = Game::standard();
        let a1 = cell(&game, "A1");

        let token = game.validate_placement(a1).unwrap();
        assert_eq!(token.cell(), a1);
        game.submit_placement(token).unwrap();

        let stack = game.stack(a1).unwrap();
        assert_eq!(stack.owner(), Color::Red);
        assert_eq!(stack.height(), 1);
        assert_eq!(game.current_color(), Color::Black);
    }

    #[test]
    fn test_placement_after_anchors_uses_turn_color() {
        let mut game = Game::standard();
        for name in ["A1", "B1", "C1", "D1", "E1"] {
            let token = game.validate_placement(cell(&game, name)).unwrap();
            game.submit_placement(token).unwrap();
        }

        assert_eq!(game.anchor_stack_count(), 3);
        // Fourth placement by Black (White, Black, White placed anchors).
        assert_eq!(game.stack(cell(&game, "D1")).unwrap().owner(), Color::Black);
        assert_eq!(game.stack(cell(&game, "E1")).unwrap().owner(), Color::White);
    }

    #[test]
    fn test_placement_errors() {
        let mut game = Game::standard();
        let a1 = cell(&game, "A1");
        let token = game.validate_placement(a1).unwrap();
        game.submit_placement(token).unwrap();

        assert_eq!(
            game.validate_placement(a1),
            Err(PlacementError::Occupied("A1".to_string()))
        );
        assert_eq!(
            game.validate_placement(CellId(500)),
            Err(PlacementError::NotOnBoard(CellId(500)))
        );

        let play = play_position(Color::White, &[("A1", &[Color::Red])]);
        assert_eq!(
            play.validate_placement(cell(&play, "B1")),
            Err(PlacementError::WrongPhase(Phase::Play))
        );
    }

    #[test]
    fn test_stale_placement_rejected() {
        let mut game = Game::standard();
        let first = game.validate_placement(cell(&game, "A1")).unwrap();
        let second = game.validate_placement(cell(&game, "B1")).unwrap();

        game.submit_placement(first).unwrap();
        assert_eq!(game.submit_placement(second), Err(PlacementError::Stale));
        assert!(!game.is_occupied(cell(&game, "B1")));
    }

    #[test]
    fn test_move_validation_errors() {
        let game = play_position(
            Color::White,
            &[
                ("A1", &[Color::White, Color::White]),
                ("C1", &[Color::Red]),
                ("B1", &[Color::Black]),
            ],
        );
        let a1 = cell(&game, "A1");

        assert_eq!(
            game.validate_move(Move::new(cell(&game, "D1"), a1)),
            Err(MoveError::EmptySource("D1".to_string()))
        );
        assert_eq!(
            game.validate_move(Move::new(cell(&game, "B1"), a1)),
            Err(MoveError::NotOwner {
                cell: "B1".to_string(),
                owner: Color::Black,
                mover: Color::White,
            })
        );
        assert_eq!(
            game.validate_move(Move::new(a1, cell(&game, "A2"))),
            Err(MoveError::EmptyDestination("A2".to_string()))
        );
        assert!(matches!(
            game.validate_move(Move::new(a1, cell(&game, "B1"))),
            Err(MoveError::Geometry { height: 2, row_delta: 0, column_delta: 1, .. })
        ));
        assert!(game.validate_move(Move::new(a1, cell(&game, "C1"))).is_ok());
    }

    #[test]
    fn test_move_in_placement_phase_rejected() {
        let game = Game::standard();
        assert_eq!(
            game.validate_move(Move::new(CellId(0), CellId(1))),
            Err(MoveError::WrongPhase(Phase::Placement))
        );
    }

    #[test]
    fn test_geometry_axes() {
        // Height-2 white stack on E3 (row 2, column 4) with targets around it.
        let game = play_position(
            Color::White,
            &[
                ("E3", &[Color::Black, Color::White]),
                ("C3", &[Color::Red]),
                ("G3", &[Color::Red]),
                ("E1", &[Color::Red]),
                ("E5", &[Color::Red]),
                ("C1", &[Color::Red]),
                ("G5", &[Color::Red]),
                ("G1", &[Color::Red]),
                ("C5", &[Color::Red]),
                ("F4", &[Color::Red]),
            ],
        );
        let e3 = cell(&game, "E3");
        for target in ["C3", "G3", "E1", "E5", "C1", "G5", "G1", "C5"] {
            assert!(
                game.validate_move(Move::new(e3, cell(&game, target))).is_ok(),
                "E3 -> {target}"
            );
        }
        assert!(game.validate_move(Move::new(e3, cell(&game, "F4"))).is_err());
    }

    #[test]
    fn test_legal_moves_from_enumerates_six_directions() {
        let game = play_position(
            Color::White,
            &[
                ("E3", &[Color::Black, Color::White]),
                ("C3", &[Color::Red]),
                ("G3", &[Color::Red]),
                ("C1", &[Color::Red]),
                ("G1", &[Color::Red]),
                ("C5", &[Color::Red]),
                ("G5", &[Color::Red]),
                // Pure column moves validate but are not proposed.
                ("E1", &[Color::Red]),
                ("E5", &[Color::Red]),
                ("E4", &[Color::Red]),
            ],
        );
        let e3 = cell(&game, "E3");

        let mut targets: Vec<_> = game
            .legal_moves_from(e3)
            .iter()
            .map(|m| game.board().name(m.to()))
            .collect();
        targets.sort();

        assert_eq!(targets, vec!["C1", "C3", "C5", "G1", "G3", "G5"]);
    }

    #[test]
    fn test_legal_moves_from_edge_cases() {
        let game = play_position(
            Color::White,
            &[
                ("E3", &[Color::White]),
                ("A1", &[Color::Black]),
                ("B1", &[Color::Red]),
            ],
        );

        // Interior stack with six empty neighbors.
        assert!(game.legal_moves_from(cell(&game, "E3")).is_empty());
        // Empty cell.
        assert!(game.legal_moves_from(cell(&game, "F3")).is_empty());
        // Opponent's stack.
        assert!(game.legal_moves_from(cell(&game, "A1")).is_empty());
        // Foreign id.
        assert!(game.legal_moves_from(CellId(999)).is_empty());
    }

    #[test]
    fn test_diagonal_step_merges() {
        let mut game = play_position(
            Color::White,
            &[("E3", &[Color::White]), ("D4", &[Color::Red])],
        );
        let e3 = cell(&game, "E3");
        let d4 = cell(&game, "D4");

        assert!(game.board().adjacent(e3).contains(&d4));
        let token = game.validate_move(Move::new(e3, d4)).unwrap();
        let outcome = game.submit_move(token).unwrap();

        assert_eq!(outcome.merged_height, 2);
        assert!(outcome.cleared.is_empty());
        assert!(!game.is_occupied(e3));
        let merged = game.stack(d4).unwrap();
        assert_eq!(merged.owner(), Color::White);
        assert_eq!(merged.colors(), &[Color::Red, Color::White]);
        assert_eq!(game.current_color(), Color::Black);
    }

    #[test]
    fn test_move_clears_disconnected_stacks() {
        let mut game = play_position(
            Color::White,
            &[
                ("A1", &[Color::Red]),
                ("B1", &[Color::White]),
                ("C1", &[Color::Black]),
                ("D1", &[Color::Black]),
            ],
        );
        // B1 jumps onto A1; C1-D1 lose their link to the anchor.
        let token = game
            .validate_move(Move::new(cell(&game, "B1"), cell(&game, "A1")))
            .unwrap();
        let outcome = game.submit_move(token).unwrap();

        assert_eq!(outcome.cleared, vec![cell(&game, "C1"), cell(&game, "D1")]);
        assert_eq!(game.stacks().count(), 1);
        assert_eq!(game.score(Color::White), 2);
        assert_eq!(game.score(Color::Black), 0);
    }

    #[test]
    fn test_cut_off_anchor_keeps_only_itself() {
        let mut game = play_position(
            Color::White,
            &[
                ("A1", &[Color::White]),
                ("B1", &[Color::Black]),
                ("C1", &[Color::White]),
                ("J1", &[Color::Red]),
            ],
        );
        // J1 is already cut off; the next move's elimination keeps only J1.
        let token = game
            .validate_move(Move::new(cell(&game, "A1"), cell(&game, "B1")))
            .unwrap();
        let outcome = game.submit_move(token).unwrap();

        assert_eq!(outcome.merged_height, 0);
        assert_eq!(game.stacks().count(), 1);
        assert!(game.is_occupied(cell(&game, "J1")));
    }

    #[test]
    fn test_no_anchor_left_clears_everything() {
        let mut game = play_position(
            Color::White,
            &[("A1", &[Color::White]), ("B1", &[Color::Black])],
        );
        let token = game
            .validate_move(Move::new(cell(&game, "A1"), cell(&game, "B1")))
            .unwrap();
        let outcome = game.submit_move(token).unwrap();

        assert_eq!(outcome.cleared, vec![cell(&game, "B1")]);
        assert_eq!(game.stacks().count(), 0);
    }

    #[test]
    fn test_stale_move_rejected() {
        let mut game = play_position(
            Color::White,
            &[
                ("A1", &[Color::White]),
                ("B1", &[Color::Red]),
                ("C1", &[Color::White]),
            ],
        );
        let first = game
            .validate_move(Move::new(cell(&game, "A1"), cell(&game, "B1")))
            .unwrap();
        let second = game
            .validate_move(Move::new(cell(&game, "C1"), cell(&game, "B1")))
            .unwrap();

        game.submit_move(first).unwrap();
        assert_eq!(game.submit_move(second), Err(MoveError::Stale));
    }

    #[test]
    fn test_foreign_tokens_rechecked() {
        let fresh = Game::standard();
        let placement = fresh.validate_placement(cell(&fresh, "A1")).unwrap();

        let mut play = play_position(
            Color::White,
            &[("A1", &[Color::Red]), ("B1", &[Color::White])],
        );
        assert_eq!(
            play.submit_placement(placement),
            Err(PlacementError::WrongPhase(Phase::Play))
        );
        assert_eq!(play.stack(cell(&play, "A1")).map(Stack::owner), Some(Color::Red));

        let other = play_position(
            Color::White,
            &[("A1", &[Color::White]), ("B1", &[Color::Red])],
        );
        let mv = other
            .validate_move(Move::new(cell(&other, "A1"), cell(&other, "B1")))
            .unwrap();
        let before = play.snapshot();
        assert_eq!(
            play.submit_move(mv),
            Err(MoveError::NotOwner {
                cell: "A1".to_string(),
                owner: Color::Red,
                mover: Color::White,
            })
        );
        assert_eq!(play.snapshot(), before);
    }

    #[test]
    fn test_find_valid_play_enters_play_when_full() {
        let config = GameConfig::new().with_board(crate::core::BoardConfig::new([
            crate::core::RowBounds::new(0, 4),
        ]));
        let mut game = Game::new(config).unwrap();

        for _ in 0..4 {
            assert!(game.find_valid_play());
            assert_eq!(game.phase(), Phase::Placement);
            let target = game.empty_cells()[0];
            let token = game.validate_placement(target).unwrap();
            game.submit_placement(token).unwrap();
        }

        // A1..C1 are anchors and D1 is Black's. White owns nothing and passes.
        assert!(game.find_valid_play());
        assert_eq!(game.phase(), Phase::Play);
        assert_eq!(game.current_color(), Color::Black);
    }

    #[test]
    fn test_find_valid_play_passes_turn() {
        let mut game = play_position(
            Color::White,
            &[("A1", &[Color::Red]), ("B1", &[Color::Black])],
        );

        assert!(game.find_valid_play());
        assert_eq!(game.current_color(), Color::Black);
        assert_eq!(game.phase(), Phase::Play);
    }

    #[test]
    fn test_find_valid_play_finishes() {
        let mut game = play_position(
            Color::White,
            &[
                ("A1", &[Color::Red, Color::White]),
                ("E3", &[Color::Black, Color::Black, Color::Black]),
            ],
        );

        assert!(!game.find_valid_play());
        assert_eq!(game.phase(), Phase::Finished);
        assert_eq!(game.winner(), Some(Color::Black));
        assert_eq!(game.result(), Some(GameResult::Winner(Color::Black)));

        // Stays finished.
        assert!(!game.find_valid_play());
        assert_eq!(game.phase(), Phase::Finished);
    }

    #[test]
    fn test_scores_and_draw() {
        let game = play_position(
            Color::White,
            &[
                ("A1", &[Color::Red, Color::White]),
                ("B1", &[Color::White, Color::Black]),
                ("C1", &[Color::Red]),
            ],
        );

        assert_eq!(game.score(Color::White), 2);
        assert_eq!(game.score(Color::Black), 2);
        assert_eq!(game.score(Color::Red), 1);
        let scores = game.scores();
        assert_eq!(scores[Color::White], 2);
        assert_eq!(scores[Color::Black], 2);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_owned_and_empty_cells() {
        let game = play_position(
            Color::Black,
            &[
                ("A1", &[Color::Red]),
                ("B1", &[Color::Black]),
                ("C1", &[Color::White, Color::Black]),
            ],
        );

        assert_eq!(
            game.cells_owned_by(Color::Black),
            vec![cell(&game, "B1"), cell(&game, "C1")]
        );
        assert_eq!(game.empty_cells().len(), 44);
        assert_eq!(game.anchor_stack_count(), 1);
    }

    #[test]
    fn test_restore_errors() {
        let unknown = GameSnapshot::new(Phase::Play, Color::White).with_stack("Z9", [Color::Red]);
        assert!(matches!(
            Game::restore(GameConfig::default(), &unknown),
            Err(SnapshotError::UnknownCell(name)) if name == "Z9"
        ));

        let duplicate = GameSnapshot::new(Phase::Play, Color::White)
            .with_stack("A1", [Color::Red])
            .with_stack("A1", [Color::White]);
        assert!(matches!(
            Game::restore(GameConfig::default(), &duplicate),
            Err(SnapshotError::DuplicateCell(_))
        ));

        let empty = GameSnapshot::new(Phase::Play, Color::White).with_stack("A1", Vec::<Color>::new());
        assert!(matches!(
            Game::restore(GameConfig::default(), &empty),
            Err(SnapshotError::EmptyStack(_))
        ));

        let anchor = GameSnapshot::new(Phase::Play, Color::Red);
        assert!(matches!(
            Game::restore(GameConfig::default(), &anchor),
            Err(SnapshotError::AnchorToAct(Color::Red))
        ));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut game = Game::standard();
        for name in ["E3", "F3", "G3", "H3"] {
            let token = game.validate_placement(cell(&game, name)).unwrap();
            game.submit_placement(token).unwrap();
        }

        let snapshot = game.snapshot();
        assert_eq!(snapshot.stacks.len(), 4);
        assert_eq!(snapshot.stacks[0].cell, "E3");

        let restored = Game::restore(GameConfig::default(), &snapshot).unwrap();
        assert_eq!(restored.snapshot(), snapshot);
        assert_eq!(restored.current_color(), game.current_color());
    }
}
