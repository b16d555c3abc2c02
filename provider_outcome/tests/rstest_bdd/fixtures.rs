//! Shared fixtures for the behavioural scenarios.

use provider_outcome::{Outcome, VoidOutcome};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Scenario state threading outcomes and step counts between steps.
#[derive(Debug, Default, ScenarioState)]
pub struct RailwayContext {
    /// Outcome under composition.
    pub outcome: Slot<Outcome<i64>>,
    /// Void outcome under composition.
    pub void_outcome: Slot<VoidOutcome>,
    /// Value produced from the void outcome.
    pub produced: Slot<Outcome<String>>,
    /// Number of caller closures the combinators ran.
    pub steps_run: Slot<usize>,
}

impl RailwayContext {
    /// Records that a combinator invoked a caller closure.
    pub fn record_step(&self) {
        let current = self.steps_run.get().unwrap_or(0);
        self.steps_run.set(current + 1);
    }
}

/// Creates empty scenario state.
#[fixture]
pub fn railway_context() -> RailwayContext {
    RailwayContext::default()
}
