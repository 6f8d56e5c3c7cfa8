//! Engine error types.

use thiserror::Error;

/// Error type returned by fallible conditions and actions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can terminate an execution.
///
/// `cycle` is the 1-based number of the cycle in which a rule failed.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A rule was still runnable after `max_cycles` actions had fired.
    #[error("max cycle of {max_cycles} reached")]
    CycleLimitExceeded {
        /// The configured ceiling.
        max_cycles: u64,
    },

    /// A condition returned an error during a scan.
    #[error("condition of rule '{rule}' failed in cycle {cycle}")]
    Condition {
        /// Name of the failing rule.
        rule: String,
        /// Cycle whose scan failed.
        cycle: u64,
        /// Error returned by the condition, untouched.
        #[source]
        source: BoxError,
    },

    /// An action returned an error while firing.
    #[error("action of rule '{rule}' failed in cycle {cycle}")]
    Action {
        /// Name of the failing rule.
        rule: String,
        /// Cycle in which the action fired.
        cycle: u64,
        /// Error returned by the action, untouched.
        #[source]
        source: BoxError,
    },
}

impl EngineError {
    /// Builds [`EngineError::CycleLimitExceeded`].
    pub fn cycle_limit_exceeded(max_cycles: u64) -> Self {
        Self::CycleLimitExceeded { max_cycles }
    }

    /// Builds [`EngineError::Condition`] for a rule that failed in `cycle`.
    pub fn condition(rule: impl Into<String>, cycle: u64, source: BoxError) -> Self {
        Self::Condition {
            rule: rule.into(),
            cycle,
            source,
        }
    }

    /// Builds [`EngineError::Action`] for a rule that failed in `cycle`.
    pub fn action(rule: impl Into<String>, cycle: u64, source: BoxError) -> Self {
        Self::Action {
            rule: rule.into(),
            cycle,
            source,
        }
    }

    /// Returns `true` if the execution hit the cycle ceiling.
    pub fn is_cycle_limit(&self) -> bool {
        matches!(self, Self::CycleLimitExceeded { .. })
    }

    /// Name of the rule whose user code failed, if any.
    pub fn rule_name(&self) -> Option<&str> {
        match self {
            Self::CycleLimitExceeded { .. } => None,
            Self::Condition { rule, .. } | Self::Action { rule, .. } => Some(rule),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_cycle_limit_display() {
        let err = EngineError::cycle_limit_exceeded(100);
        assert_eq!(err.to_string(), "max cycle of 100 reached");
        assert!(err.is_cycle_limit());
        assert!(err.rule_name().is_none());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_action_error_keeps_source() {
        let err = EngineError::action("Ship", 3, "warehouse offline".into());
        assert_eq!(err.to_string(), "action of rule 'Ship' failed in cycle 3");
        assert_eq!(err.rule_name(), Some("Ship"));
        assert!(!err.is_cycle_limit());
        assert_eq!(err.source().unwrap().to_string(), "warehouse offline");
    }

    #[test]
    fn test_condition_error_display() {
        let err = EngineError::condition("Lookup", 1, "missing key".into());
        assert_eq!(err.to_string(), "condition of rule 'Lookup' failed in cycle 1");
        assert_eq!(err.rule_name(), Some("Lookup"));
    }
}
