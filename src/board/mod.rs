//! Board representation for k-in-a-row games

pub mod state;


// Re-exports
pub use state::BoardState;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::OwnerError;

/// Sentinel owner tag for an empty cell
pub const NO_PIECE: Owner = Owner::Empty;

/// Owner tag stored in each cell
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Owner {
    #[default]
    Empty = 0,
    First = 1,
    Second = 2,
}

impl Owner {
    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Owner {
        match self {
            Owner::First => Owner::Second,
            Owner::Second => Owner::First,
            Owner::Empty => Owner::Empty,
        }
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Owner::Empty
    }
}

impl TryFrom<u8> for Owner {
    type Error = OwnerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Owner::Empty),
            1 => Ok(Owner::First),
            2 => Ok(Owner::Second),
            other => Err(OwnerError::Invalid(other)),
        }
    }
}

/// Cell coordinate, `x` is the column and `y` the row (row 0 at the top)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Move {
    pub x: u32,
    pub y: u32,
}

impl Move {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compass direction used by the line scan and the edge tests.
///
/// Indices run counter-clockwise from east; "north" is decreasing row.
/// Opposite directions are four indices apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East = 0,
    NorthEast = 1,
    North = 2,
    NorthWest = 3,
    West = 4,
    SouthWest = 5,
    South = 6,
    SouthEast = 7,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::NorthEast,
        Direction::North,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// The four line orientations, each as a pair of opposite directions
    pub const AXES: [(Direction, Direction); 4] = [
        (Direction::East, Direction::West),           // Horizontal
        (Direction::NorthEast, Direction::SouthWest), // Diagonal /
        (Direction::North, Direction::South),         // Vertical
        (Direction::NorthWest, Direction::SouthEast), // Diagonal \
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction for an index, wrapping modulo 8
    #[inline]
    pub fn from_index(idx: usize) -> Direction {
        Self::ALL[idx % 8]
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        Self::from_index(self.index() + 4)
    }

    /// Unit step `(dx, dy)` for this direction
    #[inline]
    pub fn step(self) -> (i64, i64) {
        match self {
            Direction::East => (1, 0),
            Direction::NorthEast => (1, -1),
            Direction::North => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::SouthWest => (-1, 1),
            Direction::South => (0, 1),
            Direction::SouthEast => (1, 1),
        }
    }
}

/// Whether stepping `dist` cells from `(x, y)` towards `dir` leaves a
/// `columns` x `rows` grid. Only the axes `dir` moves along are checked.
#[inline]
pub fn collides_edge(columns: u32, rows: u32, x: i64, y: i64, dir: Direction, dist: i64) -> bool {
    let cols = columns as i64;
    let rows = rows as i64;
    match dir {
        Direction::East => x + dist >= cols,
        Direction::NorthEast => x + dist >= cols || y - dist < 0,
        Direction::North => y - dist < 0,
        Direction::NorthWest => x - dist < 0 || y - dist < 0,
        Direction::West => x - dist < 0,
        Direction::SouthWest => x - dist < 0 || y + dist >= rows,
        Direction::South => y + dist >= rows,
        Direction::SouthEast => x + dist >= cols || y + dist >= rows,
    }
}
