//! First-class invariants for the rules engine.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are testable on their own and checked by the engine in debug
//! builds.

pub mod mark_balance;
pub mod outcome_consistent;
pub mod turn_order;

pub use mark_balance::MarkBalanceInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;
pub use turn_order::TurnOrderInvariant;

use crate::Game;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
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

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose from individual invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

/// Every engine invariant as one set.
pub type GameInvariants = (
    MarkBalanceInvariant,
    TurnOrderInvariant,
    OutcomeConsistentInvariant,
);

/// Checks [`GameInvariants`], logging and debug-asserting on violation.
pub(crate) fn assert_invariants(game: &Game) {
    if !cfg!(debug_assertions) {
        return;
    }
    if let Err(violations) = GameInvariants::check_all(game) {
        for violation in &violations {
            warn!(%violation, "Invariant violated");
        }
        debug_assert!(false, "invariants violated: {:?}", violations);
    }
}
