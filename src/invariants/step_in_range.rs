//! Step range invariant: the cursor always indexes a recorded snapshot.

use super::Invariant;
use crate::game::Game;

/// Invariant: The step cursor stays within the recorded history.
pub struct StepInRangeInvariant;

impl Invariant<Game> for StepInRangeInvariant {
    fn holds(game: &Game) -> bool {
        game.step() < game.history().len()
    }

    fn description() -> &'static str {
        "Step cursor indexes into recorded history"
    }
}
