//! Pure tic-tac-toe game logic.
//!
//! The [`Engine`] holds one board, the mark to move and the game status. A
//! UI surface forwards cell selections to [`Engine::apply_move`] and restart
//! requests to [`Engine::restart`], then renders from the read accessors.
//! Nothing here knows about terminals, windows or event loops.
//!
//! ```
//! use tictac_engine::{Engine, GameStatus, Mark};
//!
//! let mut engine = Engine::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 2), (0, 2)] {
//!     let _ = engine.apply_move(row, col);
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{MoveOutcome, RejectReason};
pub use engine::{Engine, Snapshot};
pub use position::Position;
pub use types::{Board, Cell, GameStatus, Mark};
