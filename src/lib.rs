//! Tic Tac Toe - a click-to-play game in the terminal
//!
//! The game logic lives in [`tictac_engine`]; this crate is the surface
//! around it.
//!
//! # Architecture
//!
//! - **TUI**: mouse and keyboard events become engine commands; the board and
//!   status line are redrawn after each one
//! - **Replay**: headless runs of a move list, as text or JSON
//! - **Config**: mark labels and logging, from TOML
//!
//! # Example
//!
//! ```
//! use tictac::{Labels, parse_moves, replay};
//!
//! let moves = parse_moves("0,0 1,1 0,1 1,2 0,2").unwrap();
//! let report = replay(&moves, &Labels::default());
//! assert_eq!(report.status, "Player Wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
pub mod logging;
mod replay;
mod status;
pub mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, Labels, LogConfig};

// Crate-level exports - Replay
pub use replay::{ParseMoveError, RejectedMove, ReplayReport, parse_moves, replay};

// Crate-level exports - Status text
pub use status::{engine_status, status_text};

// Crate-level exports - Game types
pub use tictac_engine::{Cell, Engine, GameStatus, Mark, MoveOutcome, Position, RejectReason};
