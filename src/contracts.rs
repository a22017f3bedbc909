//! Contract-based validation for moves and jumps.
//!
//! Preconditions are named structs with a `check` method, so each rule
//! can be tested on its own and composed into the full legality check.
//! The engine's public intents stay failure-free: a failed precondition
//! surfaces as a rejected (no-op) intent, with the reason logged.

use crate::board::Board;
use crate::position::Position;
use crate::rules::check_winner;
use tracing::instrument;

/// Why a move or jump intent was rejected.
///
/// Internal vocabulary for logging and contract checks; the public
/// intents report rejection as a plain `false`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RejectReason {
    /// The cell index is outside 0-8.
    #[display("Cell index {} is out of range", _0)]
    CellOutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    CellOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The step does not index a recorded snapshot.
    #[display("Step {} is outside recorded history", _0)]
    StepOutOfRange(usize),
}

impl std::error::Error for RejectReason {}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The square at the move's position must be empty.
pub struct CellVacant;

impl CellVacant {
    /// Checks that the target square is empty.
    #[instrument(skip(board))]
    pub fn check(pos: Position, board: &Board) -> Result<(), RejectReason> {
        if !board.is_empty(pos) {
            Err(RejectReason::CellOccupied(pos))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The board must not already have a winner.
pub struct GameLive;

impl GameLive {
    /// Checks that no winning line exists on the board.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), RejectReason> {
        if check_winner(board).is_some() {
            Err(RejectReason::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: A move is legal if the square is vacant and
/// the game has no winner yet. Vacancy is checked first.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(pos: Position, board: &Board) -> Result<(), RejectReason> {
        CellVacant::check(pos, board)?;
        GameLive::check(board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: A jump target must index a recorded snapshot.
pub struct StepInHistory;

impl StepInHistory {
    /// Checks that `step` falls within the recorded history.
    #[instrument]
    pub fn check(step: usize, history_len: usize) -> Result<(), RejectReason> {
        if step >= history_len {
            Err(RejectReason::StepOutOfRange(step))
        } else {
            Ok(())
        }
    }
}
