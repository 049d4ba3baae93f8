//! Mutable board state with make/unmake move history

use std::fmt;

use tracing::{debug, trace};

use super::{collides_edge, Direction, Move, Owner};
use crate::config::BoardConfig;
use crate::error::ConfigError;
use crate::rules::{is_goal_for, would_win_at};

/// Board state driven by a search through `push_move` / `pop_move`.
///
/// The grid is a flat row-major buffer (`x + y * columns`). The number of
/// empty cells is tracked on every write, and the move history is a plain
/// stack of coordinates: retracting a move always clears its cell.
///
/// `Clone` gives an independent copy for another search worker. The copy
/// carries the source's empty-cell count, history and cached winner.
#[derive(Debug, Clone)]
pub struct BoardState {
    columns: u32,
    rows: u32,
    win_length: u32,
    gravity: bool,
    cells: Vec<Owner>,
    /// Number of `Owner::Empty` cells
    remaining: u32,
    /// Winner produced by the move on top of `history`, or `Empty`
    winner: Owner,
    history: Vec<Move>,
    last_move: Move,
    deadline: u64,
}

impl BoardState {
    /// Create an empty board. Dimensions are trusted to be non-zero; use
    /// [`BoardState::from_config`] for validated input.
    pub fn new(
        columns: u32,
        rows: u32,
        gravity: bool,
        last_move: Move,
        win_length: u32,
        deadline: u64,
    ) -> Self {
        let total = columns * rows;
        debug!(columns, rows, win_length, gravity, "creating board");
        Self {
            columns,
            rows,
            win_length,
            gravity,
            cells: vec![Owner::Empty; total as usize],
            remaining: total,
            winner: Owner::Empty,
            history: Vec::with_capacity(total as usize),
            last_move,
            deadline,
        }
    }

    /// Validate `config` and create an empty board from it.
    pub fn from_config(config: &BoardConfig, last_move: Move, deadline: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            config.columns,
            config.rows,
            config.gravity,
            last_move,
            config.win_length,
            deadline,
        ))
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig {
            columns: self.columns,
            rows: self.rows,
            win_length: self.win_length,
            gravity: self.gravity,
        }
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn win_length(&self) -> u32 {
        self.win_length
    }

    #[inline]
    pub fn gravity(&self) -> bool {
        self.gravity
    }

    #[inline]
    pub fn last_move(&self) -> Move {
        self.last_move
    }

    #[inline]
    pub fn deadline(&self) -> u64 {
        self.deadline
    }

    /// Raw row-major cells, for move generators
    #[inline]
    pub fn cells(&self) -> &[Owner] {
        &self.cells
    }

    /// Number of empty cells
    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.remaining == 0
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.columns && y < self.rows,
            "({x}, {y}) is off a {}x{} board",
            self.columns,
            self.rows
        );
        x as usize + y as usize * self.columns as usize
    }

    /// Overwrite one cell, keeping the empty-cell count in step.
    #[inline]
    fn write_cell(&mut self, idx: usize, owner: Owner) {
        let old = self.cells[idx];
        if old.is_empty() {
            self.remaining -= 1;
        }
        if owner.is_empty() {
            self.remaining += 1;
        }
        self.cells[idx] = owner;
    }

    /// Get the owner of a cell. Coordinates must be on the board.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Owner {
        self.cells[self.index(x, y)]
    }

    /// Set a cell directly, for setting up or editing a position.
    ///
    /// Does not touch the move history or the cached winner.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, owner: Owner) {
        let idx = self.index(x, y);
        self.write_cell(idx, owner);
    }

    /// Apply a move and record it on the history.
    ///
    /// If the move completes a run of `win_length` for `owner`, the cached
    /// winner becomes `owner`; otherwise it is left as it was.
    #[inline]
    pub fn push_move(&mut self, x: u32, y: u32, owner: Owner) {
        debug_assert!(!owner.is_empty(), "push_move needs a player");
        let idx = self.index(x, y);
        let mv = Move::new(x, y);
        self.history.push(mv);
        self.write_cell(idx, owner);

        if is_goal_for(&self.cells, self.columns, self.rows, mv, owner, self.win_length) {
            trace!(%mv, ?owner, ply = self.history.len(), "winning move");
            self.winner = owner;
        }
    }

    /// Retract the most recent move and return it.
    ///
    /// The cell is cleared and the cached winner reset to `Empty`, even if
    /// the position before the retracted move was already won. The history
    /// must not be empty; in release builds an empty pop returns `None`.
    #[inline]
    pub fn pop_move(&mut self) -> Option<Move> {
        debug_assert!(!self.history.is_empty(), "pop_move on an empty history");
        let mv = self.history.pop()?;
        let idx = self.index(mv.x, mv.y);
        self.write_cell(idx, Owner::Empty);
        self.winner = Owner::Empty;
        Some(mv)
    }

    /// Most recent move on the history
    #[inline]
    pub fn peek_last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Retract every move on the history.
    pub fn reset_all(&mut self) {
        let plies = self.history.len();
        while !self.history.is_empty() {
            self.pop_move();
        }
        debug!(plies, "reset all moves");
    }

    /// Applied moves, oldest first
    #[inline]
    pub fn path(&self) -> &[Move] {
        &self.history
    }

    /// Number of applied moves
    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Whether `(x, y)` is outside the board as seen from direction `dir`.
    #[inline]
    pub fn at_edge(&self, x: i64, y: i64, dir: Direction) -> bool {
        self.at_edge_by(x, y, dir, 0)
    }

    /// Whether stepping `dist` cells from `(x, y)` towards `dir` leaves the
    /// board.
    #[inline]
    pub fn at_edge_by(&self, x: i64, y: i64, dir: Direction, dist: i64) -> bool {
        collides_edge(self.columns, self.rows, x, y, dir, dist)
    }

    /// A winning run was completed by the last pushed move
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !self.winner.is_empty()
    }

    #[inline]
    pub fn is_winner(&self, owner: Owner) -> bool {
        self.winner == owner
    }

    #[inline]
    pub fn winner(&self) -> Option<Owner> {
        (!self.winner.is_empty()).then_some(self.winner)
    }

    /// Run the win test at `mv` against the current grid.
    ///
    /// The cached winner is neither read nor written. The cell must already
    /// hold `owner` for the test to pass; see [`BoardState::would_win`] for
    /// an empty cell.
    #[inline]
    pub fn is_goal_at(&self, mv: Move, owner: Owner) -> bool {
        is_goal_for(&self.cells, self.columns, self.rows, mv, owner, self.win_length)
    }

    /// Whether placing `owner` at `mv` would win, without placing it.
    #[inline]
    pub fn would_win(&self, mv: Move, owner: Owner) -> bool {
        debug_assert!(mv.x < self.columns && mv.y < self.rows);
        would_win_at(&self.cells, self.columns, self.rows, mv, owner, self.win_length)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "board {}x{} k={} gravity={}:", self.columns, self.rows, self.win_length, self.gravity)?;
        for row in self.cells.chunks(self.columns as usize) {
            write!(f, "\t")?;
            for cell in row {
                write!(f, "{}\t", cell.as_u8())?;
            }
            writeln!(f)?;
        }
        write!(f, "path:")?;
        for (i, mv) in self.history.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {mv}")?;
        }
        writeln!(f)?;
        write!(f, "winner: {}", self.winner.as_u8())
    }
}
