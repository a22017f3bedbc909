//! Serializable view bundle for the presentation layer.
//!
//! The engine's collaborators (rendering, click plumbing, the move-list
//! widget) poll this bundle after every intent instead of reaching into
//! the engine's internals.

use crate::board::Board;
use crate::game::Game;
use crate::rules::Line;
use serde::{Deserialize, Serialize};

/// Snapshot of everything a presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The board at the current step.
    pub board: Board,
    /// Status line: winner announcement or next player.
    pub status: String,
    /// Step indices of all recorded snapshots, for the move list.
    pub moves: Vec<usize>,
    /// The three winning positions, for highlight rendering.
    pub winning_line: Option<Line>,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self {
            board: game.board().clone(),
            status: game.status(),
            moves: game.moves(),
            winning_line: game.winner().map(|w| w.line),
        }
    }
}

/// Renders the move-list label for a step.
///
/// Step 0 is the empty board, so it reads "Go to game start"; every
/// later step names its move number.
pub fn move_description(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_view_of_fresh_game() {
        let game = Game::new();
        let view = GameView::from(&game);

        assert_eq!(view.status, "Next player: ✖");
        assert_eq!(view.moves, vec![0]);
        assert_eq!(view.winning_line, None);
    }

    #[test]
    fn test_view_reports_winning_line() {
        let mut game = Game::new();
        assert!(game.play(Position::TopLeft));
        assert!(game.play(Position::MiddleLeft));
        assert!(game.play(Position::TopCenter));
        assert!(game.play(Position::Center));
        assert!(game.play(Position::TopRight));

        let view = GameView::from(&game);
        assert_eq!(view.status, "Winner: ✖");
        assert_eq!(
            view.winning_line,
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_move_descriptions() {
        assert_eq!(move_description(0), "Go to game start");
        assert_eq!(move_description(1), "Go to move #1");
        assert_eq!(move_description(5), "Go to move #5");
    }
}
