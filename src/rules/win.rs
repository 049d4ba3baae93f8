//! Win condition checking for k-in-a-row
//!
//! A move wins when the unbroken run of its owner through the placed cell
//! reaches `k` along any of the four axes. Each axis is measured with two
//! scans in opposite directions; both scans count the placed cell, so the
//! true run length is `forward + backward - 1` and the test compares
//! `forward + backward > k`.

use crate::board::{Direction, Move, Owner};

use super::scan::scan_on;

/// Length of the unbroken run through `mv` along one axis, capped near `k`.
///
/// Each half-scan stops after `k` cells, so the result never exceeds
/// `2k - 1`. Returns 0 when `mv` is not owned by `owner`.
#[inline]
pub fn run_length(
    cells: &[Owner],
    columns: u32,
    rows: u32,
    mv: Move,
    owner: Owner,
    k: u32,
    axis: (Direction, Direction),
) -> u32 {
    let matches = |cell: Owner, _: u32, _: u32, _: u32| cell == owner;
    axis_sum(cells, columns, rows, mv, k, axis, matches).saturating_sub(1)
}

#[inline]
fn axis_sum<F>(
    cells: &[Owner],
    columns: u32,
    rows: u32,
    mv: Move,
    k: u32,
    (forward, backward): (Direction, Direction),
    matches: F,
) -> u32
where
    F: FnMut(Owner, u32, u32, u32) -> bool + Copy,
{
    scan_on(cells, columns, rows, k, mv.x, mv.y, forward, matches)
        + scan_on(cells, columns, rows, k, mv.x, mv.y, backward, matches)
}

/// Whether `owner` has a run of at least `k` through `mv` on the given grid.
///
/// The cell at `mv` is expected to already hold `owner`; if it does not,
/// both scans return 0 and the test fails.
pub fn is_goal_for(cells: &[Owner], columns: u32, rows: u32, mv: Move, owner: Owner, k: u32) -> bool {
    let matches = |cell: Owner, _: u32, _: u32, _: u32| cell == owner;
    Direction::AXES
        .iter()
        .any(|&axis| axis_sum(cells, columns, rows, mv, k, axis, matches) > k)
}

/// Same test as [`is_goal_for`], reading the cell at `mv` as if it held
/// `owner` whatever it holds now.
pub fn would_win_at(cells: &[Owner], columns: u32, rows: u32, mv: Move, owner: Owner, k: u32) -> bool {
    let matches = |cell: Owner, x: u32, y: u32, _: u32| cell == owner || (x == mv.x && y == mv.y);
    Direction::AXES
        .iter()
        .any(|&axis| axis_sum(cells, columns, rows, mv, k, axis, matches) > k)
}
