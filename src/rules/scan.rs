//! Directional line scan
//!
//! Walks outward from an origin cell along one compass direction and counts
//! how many consecutive cells satisfy a predicate. The walk is independent of
//! what is being matched: the win test passes an owner comparison, a move
//! generator or heuristic can pass anything else.

use crate::board::{collides_edge, Direction};

/// Count consecutive matching cells from `(x, y)` towards `dir`.
///
/// Distances `0..max_distance` are visited in order; distance 0 is the
/// origin itself. The predicate receives the cell value, its coordinates and
/// the distance. Counting stops at the first rejected cell or at the grid
/// boundary, whichever comes first.
///
/// The origin must lie inside the `width` x `height` grid.
#[allow(clippy::too_many_arguments)]
pub fn scan_on<T, F>(
    cells: &[T],
    width: u32,
    height: u32,
    max_distance: u32,
    x: u32,
    y: u32,
    dir: Direction,
    mut predicate: F,
) -> u32
where
    T: Copy,
    F: FnMut(T, u32, u32, u32) -> bool,
{
    debug_assert!(x < width && y < height, "scan origin ({x}, {y}) off the grid");
    debug_assert_eq!(cells.len(), width as usize * height as usize);

    let (dx, dy) = dir.step();
    let mut count = 0;
    for dist in 0..max_distance {
        let d = dist as i64;
        if collides_edge(width, height, x as i64, y as i64, dir, d) {
            break;
        }
        let cx = (x as i64 + dx * d) as u32;
        let cy = (y as i64 + dy * d) as u32;
        let cell = cells[cx as usize + cy as usize * width as usize];
        if !predicate(cell, cx, cy, dist) {
            break;
        }
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Owner;

    // 4x3 grid:
    //   1 1 1 0
    //   0 1 2 0
    //   0 0 1 0
    fn grid() -> Vec<Owner> {
        use crate::board::Owner::{Empty as E, First as A, Second as B};
        vec![A, A, A, E, E, A, B, E, E, E, A, E]
    }

    fn owned_by(who: Owner) -> impl FnMut(Owner, u32, u32, u32) -> bool {
        move |cell, _, _, _| cell == who
    }

    #[test]
    fn test_scan_counts_origin() {
        let cells = grid();
        assert_eq!(scan_on(&cells, 4, 3, 5, 1, 1, Direction::East, owned_by(Owner::First)), 1);
        assert_eq!(scan_on(&cells, 4, 3, 5, 3, 0, Direction::East, owned_by(Owner::First)), 0);
    }

    #[test]
    fn test_scan_stops_at_mismatch() {
        let cells = grid();
        assert_eq!(scan_on(&cells, 4, 3, 5, 0, 0, Direction::East, owned_by(Owner::First)), 3);
        assert_eq!(scan_on(&cells, 4, 3, 5, 2, 0, Direction::West, owned_by(Owner::First)), 3);
    }

    #[test]
    fn test_scan_stops_at_boundary() {
        let cells = vec![Owner::First; 12];
        assert_eq!(scan_on(&cells, 4, 3, 10, 0, 0, Direction::East, owned_by(Owner::First)), 4);
        assert_eq!(scan_on(&cells, 4, 3, 10, 0, 0, Direction::South, owned_by(Owner::First)), 3);
        assert_eq!(scan_on(&cells, 4, 3, 10, 0, 0, Direction::North, owned_by(Owner::First)), 1);
        assert_eq!(scan_on(&cells, 4, 3, 10, 3, 2, Direction::NorthWest, owned_by(Owner::First)), 3);
    }

    #[test]
    fn test_scan_bounded_by_max_distance() {
        let cells = vec![Owner::First; 12];
        assert_eq!(scan_on(&cells, 4, 3, 2, 0, 0, Direction::East, owned_by(Owner::First)), 2);
        assert_eq!(scan_on(&cells, 4, 3, 0, 0, 0, Direction::East, owned_by(Owner::First)), 0);
    }

    #[test]
    fn test_scan_diagonal() {
        let cells = grid();
        // (0,0) -> (1,1) -> (2,2)
        assert_eq!(scan_on(&cells, 4, 3, 5, 0, 0, Direction::SouthEast, owned_by(Owner::First)), 3);
        assert_eq!(scan_on(&cells, 4, 3, 5, 2, 2, Direction::NorthWest, owned_by(Owner::First)), 3);
    }

    #[test]
    fn test_predicate_sees_coordinates_and_distance() {
        let cells = vec![0u8; 12];
        let mut seen = Vec::new();
        let n = scan_on(&cells, 4, 3, 3, 1, 2, Direction::NorthEast, |_, x, y, d| {
            seen.push((x, y, d));
            true
        });
        assert_eq!(n, 3);
        assert_eq!(seen, vec![(1, 2, 0), (2, 1, 1), (3, 0, 2)]);
    }
}
