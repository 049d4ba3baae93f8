//! Game rules for k-in-a-row
//!
//! This module implements:
//! - The directional line scan primitive
//! - Win detection rooted at the last placed cell

pub mod scan;
pub mod win;

// Re-exports for convenient access
pub use scan::scan_on;
pub use win::{is_goal_for, run_length, would_win_at};
