//! Tests for the presentation-layer view bundle.

use rewindable_tictactoe::{Game, GameView, Position, move_description};

#[test]
fn test_view_polled_after_each_intent() {
    let mut game = Game::new();

    let view = GameView::from(&game);
    assert_eq!(view.status, "Next player: ✖");
    assert_eq!(view.moves, vec![0]);
    assert!(view.winning_line.is_none());

    assert!(game.play_move(4));
    let view = GameView::from(&game);
    assert_eq!(view.status, "Next player: ◯");
    assert_eq!(view.moves, vec![0, 1]);

    assert!(game.jump_to(0));
    let view = GameView::from(&game);
    assert_eq!(view.status, "Next player: ✖");
    assert!(view.board.is_empty(Position::Center));
    // The move list still shows both recorded steps.
    assert_eq!(view.moves, vec![0, 1]);
}

#[test]
fn test_view_carries_winning_line_for_highlight() {
    let mut game = Game::new();
    for cell in [0, 3, 1, 4, 2] {
        assert!(game.play_move(cell));
    }

    let view = GameView::from(&game);
    assert_eq!(view.status, "Winner: ✖");
    assert_eq!(
        view.winning_line,
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
}

#[test]
fn test_move_list_labels() {
    let mut game = Game::new();
    for cell in [4, 0, 8] {
        assert!(game.play_move(cell));
    }

    let labels: Vec<String> = game.moves().into_iter().map(move_description).collect();
    assert_eq!(
        labels,
        vec![
            "Go to game start",
            "Go to move #1",
            "Go to move #2",
            "Go to move #3",
        ]
    );
}

#[test]
fn test_view_serializes() {
    let mut game = Game::new();
    assert!(game.play_move(0));
    assert!(game.play_move(4));

    let view = GameView::from(&game);
    let json = serde_json::to_string(&view).expect("view serializes");
    let restored: GameView = serde_json::from_str(&json).expect("view deserializes");
    assert_eq!(restored, view);
}
