//! Rule registry and the forward-chaining execution loop.

use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use super::config::EngineConfig;
use super::error::{EngineError, EngineResult};
use super::types::ForwardRule;

/// A registered rule paired with the priority it was added with.
struct Registration<P> {
    rule: Box<dyn ForwardRule<P>>,
    priority: i64,
}

/// Outcome of a successful execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionReport {
    /// Number of actions fired (one per cycle).
    pub cycles: u64,

    /// Names of the fired rules, in firing order.
    pub fired: Vec<String>,

    /// Wall-clock time spent in the loop.
    pub elapsed: Duration,
}

/// Forward-chaining engine over payloads of type `P`.
///
/// Rules are kept sorted by descending priority; rules with equal
/// priority keep their registration order. Each cycle scans every
/// condition, fires the first runnable rule and rescans, until no
/// condition holds or the cycle ceiling is exceeded.
///
/// # Examples
///
/// ```
/// use u_infer::chaining::{Engine, Rule};
///
/// #[derive(Default)]
/// struct Applicant { age: u32, state: String, age_check: bool, state_check: bool }
///
/// let engine = Engine::new(100)
///     .with_rule(
///         Rule::new(
///             "Age > 18",
///             |a: &Applicant| !a.age_check && a.age > 18,
///             |a: &mut Applicant| a.age_check = true,
///         ),
///         10,
///     )
///     .with_rule(
///         Rule::new(
///             "State is not empty",
///             |a: &Applicant| !a.state_check && !a.state.is_empty(),
///             |a: &mut Applicant| a.state_check = true,
///         ),
///         20,
///     );
///
/// let mut applicant = Applicant { age: 25, state: "CA".into(), ..Default::default() };
/// let report = engine.execute_with_report(&mut applicant).unwrap();
///
/// assert_eq!(report.fired, vec!["State is not empty", "Age > 18"]);
/// assert!(applicant.age_check && applicant.state_check);
/// ```
///
/// # Payload lifetime
///
/// Rules are stored as `Box<dyn ForwardRule<P>>`, so both the rules and
/// the payload type must be `'static`. A payload cannot hold borrowed
/// data such as `&'a mut Vec<u8>`; move the data into an owned payload
/// for the run and take it back afterwards.
///
/// # Concurrency
///
/// [`execute`](Self::execute) takes `&self` and keeps its cycle counter on
/// the stack, so one engine can run many payloads at once. Registration
/// takes `&mut self` and therefore cannot overlap with an execution.
pub struct Engine<P> {
    config: EngineConfig,
    rules: Vec<Registration<P>>,
}

impl<P> Engine<P> {
    /// Creates an empty engine with the given cycle ceiling.
    pub fn new(max_cycles: u64) -> Self {
        Self::with_config(EngineConfig::default().with_max_cycles(max_cycles))
    }

    /// Creates an empty engine from a configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            rules: Vec::new(),
        }
    }

    /// Registers a rule with a priority. Higher values are evaluated first.
    ///
    /// The registry is re-sorted with a stable sort after every addition,
    /// so rules sharing a priority stay in registration order. Duplicate
    /// names and priorities are accepted.
    pub fn add_rule<R: ForwardRule<P> + 'static>(&mut self, rule: R, priority: i64) {
        debug!(
            rule = rule.name(),
            priority,
            registered = self.rules.len() + 1,
            "adding rule"
        );
        self.rules.push(Registration {
            rule: Box::new(rule),
            priority,
        });
        self.rules.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Builder form of [`add_rule`](Self::add_rule).
    pub fn with_rule<R: ForwardRule<P> + 'static>(mut self, rule: R, priority: i64) -> Self {
        self.add_rule(rule, priority);
        self
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the cycle ceiling.
    pub fn max_cycles(&self) -> u64 {
        self.config.max_cycles
    }

    /// Returns the number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rule has been registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|reg| reg.rule.name()).collect()
    }

    /// Runs the rules against `payload` until quiescence.
    ///
    /// # Errors
    ///
    /// - [`EngineError::CycleLimitExceeded`] when a rule is still runnable
    ///   after `max_cycles` actions have fired. The denied action does not run.
    /// - [`EngineError::Condition`] / [`EngineError::Action`] when user code
    ///   returns an error. No further cycles run.
    ///
    /// Panics raised by conditions or actions are not caught. In every
    /// failure case the payload keeps the mutations made so far.
    pub fn execute(&self, payload: &mut P) -> EngineResult<()> {
        self.run(payload, None).map(|_| ())
    }

    /// Same as [`execute`](Self::execute), returning what was fired.
    pub fn execute_with_report(&self, payload: &mut P) -> EngineResult<ExecutionReport> {
        let started = Instant::now();
        let mut fired = Vec::new();
        let cycles = self.run(payload, Some(&mut fired))?;

        Ok(ExecutionReport {
            cycles,
            fired,
            elapsed: started.elapsed(),
        })
    }

    /// The fire loop. Returns the number of fired actions; names of fired
    /// rules are appended to `fired` only when the caller asks for them.
    fn run(&self, payload: &mut P, mut fired: Option<&mut Vec<String>>) -> EngineResult<u64> {
        let started = Instant::now();
        let max_cycles = self.config.max_cycles;
        debug!(
            rule_count = self.rules.len(),
            max_cycles, "starting rule execution"
        );

        let mut cycles = 0u64;

        loop {
            let runnable = self.runnable(payload, cycles + 1)?;
            debug!(
                cycle = cycles + 1,
                runnable = runnable.len(),
                "selected runnable rules"
            );

            let Some(selected) = runnable.first() else {
                break;
            };

            cycles += 1;
            if cycles > max_cycles {
                warn!(
                    max_cycles,
                    rule = selected.rule.name(),
                    "max cycle reached"
                );
                return Err(EngineError::cycle_limit_exceeded(max_cycles));
            }

            let name = selected.rule.name();
            debug!(
                cycle = cycles,
                rule = name,
                priority = selected.priority,
                "executing rule"
            );
            if let Err(source) = selected.rule.action(payload) {
                warn!(cycle = cycles, rule = name, error = %source, "rule action failed");
                return Err(EngineError::action(name, cycles, source));
            }
            if let Some(fired) = fired.as_deref_mut() {
                fired.push(name.to_string());
            }
        }

        debug!(
            cycles,
            duration_ms = started.elapsed().as_millis() as u64,
            "finished rules execution"
        );
        Ok(cycles)
    }

    /// Executes every payload independently, returning results in input order.
    ///
    /// With the `parallel` feature the payloads are processed on the rayon
    /// thread pool. Each payload's own loop stays sequential.
    pub fn execute_batch(&self, payloads: &mut [P]) -> Vec<EngineResult<ExecutionReport>>
    where
        P: Send,
    {
        #[cfg(feature = "parallel")]
        {
            payloads
                .par_iter_mut()
                .map(|payload| self.execute_with_report(payload))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            payloads
                .iter_mut()
                .map(|payload| self.execute_with_report(payload))
                .collect()
        }
    }

    /// Evaluates every condition in registry order and returns the rules
    /// that currently hold, preserving that order.
    fn runnable(&self, payload: &P, cycle: u64) -> EngineResult<Vec<&Registration<P>>> {
        trace!(cycle, "inside cycle");
        let mut runnable = Vec::new();

        for reg in &self.rules {
            let name = reg.rule.name();
            match reg.rule.condition(payload) {
                Ok(true) => {
                    trace!(rule = name, "rule is runnable");
                    runnable.push(reg);
                }
                Ok(false) => trace!(rule = name, "rule is not runnable"),
                Err(source) => {
                    warn!(cycle, rule = name, error = %source, "rule condition failed");
                    return Err(EngineError::condition(name, cycle, source));
                }
            }
        }

        Ok(runnable)
    }
}

impl<P> Default for Engine<P> {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}
