//! Sample applicant payload and rule set.

use serde::{Deserialize, Serialize};

use crate::chaining::{Engine, EngineConfig, Rule};

pub const AGE_PRIORITY: i64 = 10;
pub const STATE_PRIORITY: i64 = 20;

/// Applicant payload exchanged as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payload {
    pub age: i64,
    pub state: String,
    pub panics_on_when: bool,
    pub panics_on_then: bool,

    pub age_check: bool,
    pub state_check: bool,
}

/// Marks applicants older than 18.
pub fn age_rule() -> Rule<Payload> {
    Rule::new(
        "Age > 18",
        |p: &Payload| !p.age_check && p.age > 18,
        |p: &mut Payload| p.age_check = true,
    )
}

/// Marks applicants with a state code.
pub fn state_rule() -> Rule<Payload> {
    Rule::new(
        "State is not empty",
        |p: &Payload| !p.state_check && !p.state.is_empty(),
        |p: &mut Payload| p.state_check = true,
    )
}

/// Panics while evaluating its condition when `panics_on_when` is set.
pub fn panics_on_when_rule() -> Rule<Payload> {
    Rule::new(
        "RulePanicsOnWhen",
        |p: &Payload| {
            if p.panics_on_when {
                panic!("RulePanicsOnWhen");
            }
            false
        },
        |_: &mut Payload| {},
    )
}

/// Panics in its action whenever `panics_on_then` is set.
pub fn panics_on_then_rule() -> Rule<Payload> {
    Rule::new(
        "RulePanicOnThen",
        |p: &Payload| p.panics_on_then,
        |_: &mut Payload| panic!("RulePanicOnThen"),
    )
}

/// Builds the engine used by the host: state (20) before age (10), plus
/// the two failure-injection rules at the lowest priority.
pub fn sample_engine(config: EngineConfig) -> Engine<Payload> {
    Engine::with_config(config)
        .with_rule(age_rule(), AGE_PRIORITY)
        .with_rule(state_rule(), STATE_PRIORITY)
        .with_rule(panics_on_when_rule(), 0)
        .with_rule(panics_on_then_rule(), 0)
}
