//! Engine configuration.

/// Default ceiling on fired actions per execution.
pub const DEFAULT_MAX_CYCLES: u64 = 100;

/// Configuration for the forward-chaining [`Engine`](super::Engine).
///
/// # Examples
///
/// ```
/// use u_infer::chaining::EngineConfig;
///
/// let config = EngineConfig::default().with_max_cycles(500);
/// assert_eq!(config.max_cycles, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Maximum number of actions fired in a single execution.
    ///
    /// Exceeding it fails the execution with
    /// [`EngineError::CycleLimitExceeded`](super::EngineError::CycleLimitExceeded).
    /// 0 means any runnable rule fails immediately.
    pub max_cycles: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_cycles: DEFAULT_MAX_CYCLES,
        }
    }
}

impl EngineConfig {
    /// Sets the cycle ceiling.
    pub fn with_max_cycles(mut self, n: u64) -> Self {
        self.max_cycles = n;
        self
    }
}
