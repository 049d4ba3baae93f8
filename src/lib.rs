//! Board-state core for k-in-a-row connection games
//!
//! Maintains a mutable grid for two-player games such as Gomoku, Connect
//! Four or tic-tac-toe, with:
//! - Configurable dimensions and run length `k`
//! - Incremental make/unmake through a move-history stack
//! - Win detection rooted at the last placed cell
//! - Boundary tests for move generators (the gravity flag is stored only)
//!
//! # Architecture
//!
//! - [`board`]: Owner tags, coordinates, directions and [`BoardState`]
//! - [`rules`]: Directional line scan and the win test
//! - [`config`]: Validated board configuration
//! - [`perft`]: Move-path enumeration over the make/unmake protocol
//!
//! # Quick Start
//!
//! ```
//! use connectk::{BoardState, Move, Owner};
//!
//! // 5x5 board, three in a row wins, no gravity
//! let mut board = BoardState::new(5, 5, false, Move::default(), 3, 0);
//!
//! board.push_move(0, 0, Owner::First);
//! board.push_move(1, 1, Owner::First);
//! board.push_move(0, 1, Owner::Second);
//! board.push_move(2, 2, Owner::First);
//! assert!(board.is_winner(Owner::First));
//!
//! // Backtrack
//! board.pop_move();
//! assert!(!board.is_terminal());
//! assert_eq!(board.remaining(), 22);
//! ```
//!
//! A board is owned by one search thread. Parallel searches give each
//! worker its own `clone()`.

pub mod board;
pub mod config;
pub mod error;
pub mod perft;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{BoardState, Direction, Move, Owner, NO_PIECE};
pub use config::BoardConfig;
pub use error::{ConfigError, OwnerError};
pub use perft::{perft, PerftStats};
