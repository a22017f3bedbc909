//! Rewindable tic-tac-toe - a pure rules engine with time travel
//!
//! This library implements the full game state machine for tic-tac-toe:
//! board snapshots, turn alternation, win detection, and a step cursor
//! that can jump to any recorded point in the game. Making a move after
//! jumping back discards the abandoned future and starts a new branch.
//!
//! # Architecture
//!
//! - **Board**: Immutable 3x3 snapshots; every move produces a new board
//! - **Rules**: Pure win detection over a single board
//! - **Contracts**: Named preconditions that gate moves and jumps
//! - **Invariants**: Composable checks over the whole recorded timeline
//! - **Game**: History of snapshots plus the step cursor
//! - **View**: Serializable bundle for a presentation layer to poll
//!
//! # Example
//!
//! ```
//! use rewindable_tictactoe::Game;
//!
//! let mut game = Game::new();
//! game.play_move(0);
//! game.play_move(4);
//! assert_eq!(game.status(), "Next player: ✖");
//!
//! // Browse back without losing history
//! game.jump_to(1);
//! assert_eq!(game.moves(), vec![0, 1, 2]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod contracts;
mod game;
mod position;
mod view;

// Public rule and invariant vocabularies
pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use board::{Board, Player, Square};
pub use position::Position;

// Crate-level exports - Contracts
pub use contracts::{CellVacant, GameLive, LegalMove, RejectReason, StepInHistory};

// Crate-level exports - Engine
pub use game::Game;

// Crate-level exports - Rules
pub use rules::{Line, WINNING_LINES, Winner, check_winner};

// Crate-level exports - Presentation contract
pub use view::{GameView, move_description};
