//! Snapshot delta invariant: adjacent snapshots differ by one placed mark.

use super::Invariant;
use crate::board::Square;
use crate::game::Game;
use crate::position::Position;
use strum::IntoEnumIterator;

/// Invariant: Each snapshot extends the previous one by a single mark.
///
/// History is only ever grown by cloning the current board and filling
/// one empty square, so adjacent snapshots must differ in exactly one
/// position, transitioning Empty to Occupied.
pub struct SnapshotDeltaInvariant;

impl Invariant<Game> for SnapshotDeltaInvariant {
    fn holds(game: &Game) -> bool {
        game.history().windows(2).all(|pair| {
            let changed: Vec<Position> = Position::iter()
                .filter(|&pos| pair[0].get(pos) != pair[1].get(pos))
                .collect();

            match changed.as_slice() {
                [pos] => {
                    pair[0].get(*pos) == Square::Empty
                        && matches!(pair[1].get(*pos), Square::Occupied(_))
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Adjacent snapshots differ by exactly one square transitioning Empty to Occupied"
    }
}
