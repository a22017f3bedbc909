//! The rewindable game state machine.
//!
//! `Game` owns the full timeline of board snapshots plus a step cursor.
//! Every derived quantity (player to move, winner, status) is recomputed
//! from those two fields on access, so there is no cached state to fall
//! out of sync.

use crate::board::{Board, Player, Square};
use crate::contracts::{LegalMove, StepInHistory};
use crate::position::Position;
use crate::rules::{Winner, check_winner};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe engine with full snapshot history and a step cursor.
///
/// The timeline starts as a single empty board and grows by one snapshot
/// per accepted move. Jumping moves only the cursor; the next accepted
/// move truncates everything past the cursor before appending, which
/// discards the abandoned branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Recorded board snapshots, oldest first.
    pub(crate) history: Vec<Board>,
    /// Index of the snapshot currently being viewed.
    pub(crate) step: usize,
}

impl Game {
    /// Creates a fresh game: one empty snapshot, cursor at step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Derived queries - recomputed on access, never cached
    // ─────────────────────────────────────────────────────────────

    /// Returns the board at the current step.
    pub fn board(&self) -> &Board {
        &self.history[self.step]
    }

    /// Returns the player to move at the current step.
    ///
    /// X moves on even steps, O on odd steps; play alternates starting
    /// with X at step 0, so step parity determines the turn.
    pub fn to_move(&self) -> Player {
        if self.step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the winner on the current board, if any.
    pub fn winner(&self) -> Option<Winner> {
        check_winner(self.board())
    }

    /// Returns the status line for display.
    pub fn status(&self) -> String {
        match self.winner() {
            Some(winner) => format!("Winner: {}", winner.player),
            None => format!("Next player: {}", self.to_move()),
        }
    }

    /// Returns the step indices of all recorded snapshots, in order.
    pub fn moves(&self) -> Vec<usize> {
        (0..self.history.len()).collect()
    }

    /// Returns the recorded snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the current step cursor.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the vacant positions on the current board.
    pub fn open_cells(&self) -> Vec<Position> {
        Position::open_positions(self.board())
    }

    // ─────────────────────────────────────────────────────────────
    //  Intents
    // ─────────────────────────────────────────────────────────────

    /// Plays the current player's mark at the given cell index (0-8).
    ///
    /// Returns `true` when the move was accepted. An out-of-range index,
    /// an occupied cell, or a finished game leaves the state untouched
    /// and returns `false`.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn play_move(&mut self, cell: usize) -> bool {
        let Some(pos) = Position::from_index(cell) else {
            debug!(cell, "Move rejected: cell index out of range");
            return false;
        };
        self.play(pos)
    }

    /// Plays the current player's mark at the given position.
    ///
    /// Same contract as [`Game::play_move`], with the cell already named.
    #[instrument(skip(self), fields(step = self.step, player = ?self.to_move()))]
    pub fn play(&mut self, pos: Position) -> bool {
        if let Err(reason) = LegalMove::check(pos, self.board()) {
            debug!(%reason, "Move rejected");
            return false;
        }

        let mut next = self.board().clone();
        next.set(pos, Square::Occupied(self.to_move()));

        // Overwrite-on-branch: drop everything past the cursor, then append.
        self.history.truncate(self.step + 1);
        self.history.push(next);
        self.step = self.history.len() - 1;

        debug!(step = self.step, "Move accepted");
        crate::invariants::assert_invariants(self);
        true
    }

    /// Moves the step cursor to an earlier or later recorded snapshot.
    ///
    /// Returns `true` when `step` indexes recorded history. Out-of-range
    /// targets are a no-op returning `false`. A jump never truncates
    /// history; only the next accepted move discards the branch past
    /// the cursor.
    #[instrument(skip(self), fields(current = self.step))]
    pub fn jump_to(&mut self, step: usize) -> bool {
        if let Err(reason) = StepInHistory::check(step, self.history.len()) {
            debug!(%reason, "Jump rejected");
            return false;
        }

        self.step = step;
        true
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game() {
        let game = Game::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step(), 0);
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.winner(), None);
        assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
    }

    #[test]
    fn test_move_appends_snapshot() {
        let mut game = Game::new();
        assert!(game.play(Position::Center));

        assert_eq!(game.history().len(), 2);
        assert_eq!(game.step(), 1);
        assert_eq!(
            game.board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        // Snapshot 0 is untouched.
        assert!(game.history()[0].is_empty(Position::Center));
    }

    #[test]
    fn test_parity_alternation() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        assert!(game.play(Position::Center));
        assert_eq!(game.to_move(), Player::O);
        assert!(game.play(Position::TopLeft));
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = Game::new();
        assert!(game.play(Position::Center));

        assert!(!game.play(Position::Center));
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.step(), 1);
    }

    #[test]
    fn test_out_of_range_cell_rejected() {
        let mut game = Game::new();
        assert!(!game.play_move(9));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_jump_moves_cursor_only() {
        let mut game = Game::new();
        assert!(game.play(Position::Center));
        assert!(game.play(Position::TopLeft));

        assert!(game.jump_to(0));
        assert_eq!(game.step(), 0);
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut game = Game::new();
        assert!(game.play(Position::Center));

        assert!(!game.jump_to(2));
        assert_eq!(game.step(), 1);
    }

    #[test]
    fn test_branch_overwrite() {
        let mut game = Game::new();
        assert!(game.play(Position::Center));
        assert!(game.play(Position::TopLeft));
        assert!(game.play(Position::TopRight));

        assert!(game.jump_to(1));
        assert!(game.play(Position::BottomLeft));

        // Steps 2 and 3 of the old branch are gone.
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.step(), 2);
        assert_eq!(
            game.board().get(Position::BottomLeft),
            Square::Occupied(Player::O)
        );
        assert!(game.board().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut game = Game::new();
        // X takes the top row.
        assert!(game.play(Position::TopLeft));
        assert!(game.play(Position::MiddleLeft));
        assert!(game.play(Position::TopCenter));
        assert!(game.play(Position::Center));
        assert!(game.play(Position::TopRight));

        assert!(game.winner().is_some());
        assert!(!game.play(Position::BottomRight));
        assert_eq!(game.history().len(), 6);
    }

    #[test]
    fn test_status_strings() {
        let mut game = Game::new();
        assert_eq!(game.status(), "Next player: ✖");
        assert!(game.play(Position::Center));
        assert_eq!(game.status(), "Next player: ◯");
    }

    #[test]
    fn test_serde_round_trip() {
        let mut game = Game::new();
        assert!(game.play(Position::Center));
        assert!(game.play(Position::TopLeft));
        assert!(game.jump_to(1));

        let json = serde_json::to_string(&game).expect("game serializes");
        let restored: Game = serde_json::from_str(&json).expect("game deserializes");
        assert_eq!(restored, game);
    }
}
