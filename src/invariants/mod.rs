//! First-class invariants over the recorded game timeline.
//!
//! Every accepted move must leave the whole timeline well-formed, not just
//! the newest snapshot. Each property is its own type, testable on its own
//! and composable into a set checked after each transition.

use crate::game::Game;
use tracing::warn;

/// A logical property that must hold for a given state.
///
/// The engine asserts its invariants in debug builds after every accepted
/// move; tests also exercise them directly against corrupted states.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together, implemented for tuples.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set.
    ///
    /// Collects a violation per failed invariant rather than stopping at
    /// the first, so a corrupted timeline reports everything wrong with it.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 3-tuples
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod snapshot_delta;
pub mod step_in_range;
pub mod turn_parity;

pub use snapshot_delta::SnapshotDeltaInvariant;
pub use step_in_range::StepInRangeInvariant;
pub use turn_parity::TurnParityInvariant;

/// All timeline invariants as a composable set.
pub type TimelineInvariants = (
    SnapshotDeltaInvariant,
    TurnParityInvariant,
    StepInRangeInvariant,
);

/// Asserts that all timeline invariants hold (panic on violation in debug builds).
pub fn assert_invariants(game: &Game) {
    if let Err(violations) = TimelineInvariants::check_all(game) {
        for violation in &violations {
            warn!(description = %violation.description, "Timeline invariant violated");
        }
        debug_assert!(
            violations.is_empty(),
            "Timeline invariants violated: {:?}",
            violations
        );
    }
}
