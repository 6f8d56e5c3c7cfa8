//! Sample command-line host for the rule engine.
//!
//! Decodes a JSON payload, runs the applicant rule set over it and
//! renders the result. Enabled with the `cli` feature.

pub mod args;
pub mod commands;
pub mod logging;
pub mod sample;

pub use args::{Cli, Command};
