//! Win detection logic for tic-tac-toe.

use crate::board::{Board, Player, Square};
use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions forming a potential winning triple.
pub type Line = [Position; 3];

/// The eight winning triples: rows top-to-bottom, columns
/// left-to-right, then the two diagonals.
pub const WINNING_LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed three-in-a-row: the winning player and the line they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    /// The player holding the line.
    pub player: Player,
    /// The three positions forming the line.
    pub line: Line,
}

/// Checks if there is a winner on the board.
///
/// Scans [`WINNING_LINES`] in order and returns the first triple whose
/// three squares hold the same occupied player, `None` otherwise.
/// Boards reachable through legal play have at most one winning player,
/// so the scan order only pins down which line is reported.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Winner> {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some(Winner { player, line });
            }
        }
    }

    None
}
