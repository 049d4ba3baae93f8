//! Move-path enumeration over the make/unmake protocol
//!
//! `perft` walks every move sequence up to a depth, pushing and popping on a
//! single [`BoardState`]. Terminal positions (a win or a full board) are not
//! expanded. Node counts for known boards make a good check that push, pop
//! and win detection agree with each other.

use tracing::debug;

use crate::board::{BoardState, Direction, Move, Owner};

/// Counters collected by [`perft`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftStats {
    /// Positions reached, root excluded
    pub nodes: u64,
    /// Positions where the mover completed a run
    pub wins: u64,
    /// Full boards without a winner
    pub draws: u64,
}

/// Playable cells in row-major order.
///
/// Without gravity every empty cell is playable. With gravity a cell is
/// playable when it is empty and rests on the bottom edge or on an occupied
/// cell.
pub fn legal_moves(board: &BoardState) -> Vec<Move> {
    let columns = board.columns();
    let cells = board.cells();
    let mut moves = Vec::with_capacity(board.remaining() as usize);
    for (idx, cell) in cells.iter().enumerate() {
        if !cell.is_empty() {
            continue;
        }
        let x = (idx % columns as usize) as u32;
        let y = (idx / columns as usize) as u32;
        if board.gravity()
            && !board.at_edge_by(x as i64, y as i64, Direction::South, 1)
            && cells[idx + columns as usize].is_empty()
        {
            continue;
        }
        moves.push(Move::new(x, y));
    }
    moves
}

/// Enumerate all move sequences of up to `depth` plies, `to_move` first.
///
/// The board is restored to its starting contents on return.
pub fn perft(board: &mut BoardState, to_move: Owner, depth: u32) -> PerftStats {
    let mut stats = PerftStats::default();
    walk(board, to_move, depth, &mut stats);
    debug!(depth, nodes = stats.nodes, wins = stats.wins, draws = stats.draws, "perft done");
    stats
}

fn walk(board: &mut BoardState, to_move: Owner, depth: u32, stats: &mut PerftStats) {
    if depth == 0 {
        return;
    }
    for mv in legal_moves(board) {
        board.push_move(mv.x, mv.y, to_move);
        stats.nodes += 1;
        if board.is_terminal() {
            stats.wins += 1;
        } else if board.is_full() {
            stats.draws += 1;
        } else {
            walk(board, to_move.opponent(), depth - 1, stats);
        }
        board.pop_move();
    }
}
