//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They hold no state and are
//! shared by the engine and the invariant checks.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, has_won, winner, winning_line};
