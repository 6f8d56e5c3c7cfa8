//! Command implementations.

use std::fs;
use std::io::{self, BufRead, Read, Write};

use anyhow::{Context, Result};
use tracing::info;

use super::args::{AgeArgs, EngineArgs, RunArgs};
use super::sample::{age_rule, sample_engine, Payload};
use crate::chaining::{Engine, EngineConfig};

/// Priority the age command registers its single rule with.
const AGE_CHECK_PRIORITY: i64 = 100;

/// Resolves the engine configuration from an optional JSON file and
/// command-line overrides.
pub fn load_config(args: &EngineArgs) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid config: {}", path.display()))?
        }
        None => EngineConfig::default(),
    };

    if let Some(max_cycles) = args.max_cycles {
        config = config.with_max_cycles(max_cycles);
    }

    Ok(config)
}

pub fn run(args: RunArgs) -> Result<()> {
    let config = load_config(&args.engine)?;

    let input = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read payload: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read payload from stdin")?;
            buf
        }
    };

    println!("{}", evaluate(&input, config, args.pretty)?);
    Ok(())
}

/// Decodes a payload, runs the sample rules over it and re-encodes it.
pub fn evaluate(input: &str, config: EngineConfig, pretty: bool) -> Result<String> {
    let mut payload: Payload = serde_json::from_str(input).context("Invalid input")?;

    let engine = sample_engine(config);
    let report = engine
        .execute_with_report(&mut payload)
        .context("Rule execution failed")?;
    info!(cycles = report.cycles, fired = ?report.fired, "payload evaluated");

    let output = if pretty {
        serde_json::to_string_pretty(&payload)?
    } else {
        serde_json::to_string(&payload)?
    };
    Ok(output)
}

pub fn age(args: AgeArgs) -> Result<()> {
    let config = load_config(&args.engine)?;

    let age = match args.age {
        Some(age) => age,
        None => prompt_age(io::stdin().lock(), io::stdout())?,
    };

    println!("{}", check_age(age, &args.state, config)?);
    Ok(())
}

/// Runs the age rule alone and returns the verdict line.
pub fn check_age(age: i64, state: &str, config: EngineConfig) -> Result<&'static str> {
    let engine = Engine::with_config(config).with_rule(age_rule(), AGE_CHECK_PRIORITY);

    let mut payload = Payload {
        age,
        state: state.to_string(),
        ..Payload::default()
    };
    engine.execute(&mut payload)?;

    Ok(if payload.age_check {
        "You are old enough"
    } else {
        "You are not old enough"
    })
}

fn prompt_age<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<i64> {
    write!(output, "Enter your age: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read age")?;
    let line = line.trim();

    line.parse().with_context(|| format!("Invalid age: {line:?}"))
}
