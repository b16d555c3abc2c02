//! Step definitions for outcome composition scenarios.

use anyhow::{Result, anyhow, ensure};
use provider_outcome::{Outcome, ProviderError, VoidOutcome};
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::unquote;

use crate::fixtures::RailwayContext;

fn failure_with_code(code: &str) -> ProviderError {
    ProviderError::invalid_input(unquote(code), "scenario failure")
}

fn take_outcome(railway_context: &RailwayContext) -> Result<Outcome<i64>> {
    railway_context
        .outcome
        .take()
        .ok_or_else(|| anyhow!("no outcome has been set up"))
}

fn ensure_failure_code<T>(outcome: &Outcome<T>, code: &str) -> Result<()> {
    let error = outcome
        .try_error()
        .map_err(|err| anyhow!("expected failure: {err}"))?;
    ensure!(
        error.code() == unquote(code),
        "expected code {code}, got {}",
        error.code()
    );
    Ok(())
}

#[given("a successful outcome holding {value}")]
fn successful_outcome(railway_context: &RailwayContext, value: i64) {
    railway_context.outcome.set(Outcome::success(value));
}

#[given("a failed outcome with code {code}")]
fn failed_outcome(railway_context: &RailwayContext, code: String) {
    railway_context
        .outcome
        .set(Outcome::failure(failure_with_code(&code)));
}

#[given("a successful void outcome")]
fn successful_void_outcome(railway_context: &RailwayContext) {
    railway_context.void_outcome.set(VoidOutcome::success());
}

#[given("a failed void outcome with code {code}")]
fn failed_void_outcome(railway_context: &RailwayContext, code: String) {
    railway_context
        .void_outcome
        .set(VoidOutcome::failure(failure_with_code(&code)));
}

#[when("the value is incremented through map")]
fn increment_with_map(railway_context: &RailwayContext) -> Result<()> {
    let mapped = take_outcome(railway_context)?.map(|x| {
        railway_context.record_step();
        x + 1
    });
    railway_context.outcome.set(mapped);
    Ok(())
}

#[when("the value is doubled if positive")]
fn double_if_positive(railway_context: &RailwayContext) -> Result<()> {
    let doubled = take_outcome(railway_context)?.bind(|x| {
        railway_context.record_step();
        if x > 0 {
            Outcome::success(x * 2)
        } else {
            Outcome::failure(failure_with_code("number.negative"))
        }
    });
    railway_context.outcome.set(doubled);
    Ok(())
}

#[when("the value is incremented through bind")]
fn increment_with_bind(railway_context: &RailwayContext) -> Result<()> {
    let incremented = take_outcome(railway_context)?.bind(|y| {
        railway_context.record_step();
        Outcome::success(y + 1)
    });
    railway_context.outcome.set(incremented);
    Ok(())
}

#[when("the void outcome produces {text}")]
fn void_produces(railway_context: &RailwayContext, text: String) -> Result<()> {
    let void_outcome = railway_context
        .void_outcome
        .take()
        .ok_or_else(|| anyhow!("no void outcome has been set up"))?;
    let produced = void_outcome.map(|| {
        railway_context.record_step();
        unquote(&text).to_owned()
    });
    railway_context.produced.set(produced);
    Ok(())
}

#[then("the outcome holds {expected}")]
fn outcome_holds(railway_context: &RailwayContext, expected: i64) -> Result<()> {
    let outcome = take_outcome(railway_context)?;
    ensure!(
        outcome == Outcome::Success(expected),
        "expected Success({expected}), got {outcome}"
    );
    Ok(())
}

#[then("the outcome failed with code {code}")]
fn outcome_failed(railway_context: &RailwayContext, code: String) -> Result<()> {
    let outcome = take_outcome(railway_context)?;
    ensure_failure_code(&outcome, &code)
}

#[then("the produced value is {expected}")]
fn produced_value(railway_context: &RailwayContext, expected: String) -> Result<()> {
    let produced = railway_context
        .produced
        .take()
        .ok_or_else(|| anyhow!("nothing was produced"))?;
    let value = produced
        .try_value()
        .map_err(|err| anyhow!("expected a produced value: {err}"))?;
    ensure!(value == unquote(&expected), "unexpected value {value}");
    Ok(())
}

#[then("the produced outcome failed with code {code}")]
fn produced_failed(railway_context: &RailwayContext, code: String) -> Result<()> {
    let produced = railway_context
        .produced
        .take()
        .ok_or_else(|| anyhow!("nothing was produced"))?;
    ensure_failure_code(&produced, &code)
}

#[then("the step counter reads {expected}")]
fn step_counter(railway_context: &RailwayContext, expected: usize) -> Result<()> {
    let actual = railway_context.steps_run.get().unwrap_or(0);
    ensure!(actual == expected, "expected {expected} steps, {actual} ran");
    Ok(())
}
