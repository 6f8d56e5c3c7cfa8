//! Domain-agnostic forward-chaining rule engine.
//!
//! A rule pairs a condition with an action. Given a mutable payload, the
//! [`chaining::Engine`] repeatedly finds the highest-priority rule whose
//! condition holds, fires its action, and rescans, until no condition
//! holds (quiescence) or a configured cycle ceiling is exceeded.
//!
//! - **Registry**: rules are ordered by descending priority; equal
//!   priorities keep registration order.
//! - **Conflict resolution**: exactly one rule fires per cycle.
//! - **Termination**: quiescence is the only success; the cycle ceiling
//!   guards against rule sets that never settle.
//!
//! # Architecture
//!
//! The engine knows nothing about the payload. Consumers supply conditions
//! and actions as closures ([`chaining::Rule`]) or by implementing
//! [`chaining::ForwardRule`]. The optional `cli` module is a sample host
//! that drives the engine from JSON payloads.
//!
//! # Features
//!
//! - `serde`: serialization for [`chaining::EngineConfig`] and
//!   [`chaining::ExecutionReport`].
//! - `parallel`: rayon-backed [`chaining::Engine::execute_batch`].
//! - `cli`: the `u-infer` binary and its `cli` module.

pub mod chaining;
#[cfg(feature = "cli")]
pub mod cli;
