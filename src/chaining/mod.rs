//! Forward-chaining rule evaluation.
//!
//! Provides a domain-agnostic engine that repeatedly fires condition/action
//! rules against a caller-owned payload until no condition holds:
//!
//! - **Scan**: every rule's condition is evaluated in registry order
//!   (highest priority first, registration order on ties).
//! - **Select**: the first runnable rule wins. Exactly one action fires
//!   per cycle, regardless of how many conditions hold.
//! - **Fire**: the selected action mutates the payload, then the engine
//!   rescans against the fresh state.
//!
//! The loop ends successfully at quiescence (empty runnable set) or fails
//! once the configured cycle ceiling is exceeded.
//!
//! # Design
//!
//! This module contains NO payload-specific concepts. Conditions and
//! actions are supplied by consumers, either as closures via [`Rule`] or
//! by implementing the [`ForwardRule`] trait directly.

mod config;
mod error;
mod runner;
mod types;

pub use config::{EngineConfig, DEFAULT_MAX_CYCLES};
pub use error::{BoxError, EngineError, EngineResult};
pub use runner::{Engine, ExecutionReport};
pub use types::{ForwardRule, Rule};
