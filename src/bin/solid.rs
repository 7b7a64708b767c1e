//! Replays the SOLID scenario and checks every printed line.
//!
//! Run with: cargo run --bin solid
//! Environment: SOLID_SCENARIO=<file.toml>, SOLID_VERIFY=0, RUST_LOG=debug

use anyhow::Context;
use colored::Colorize;
use solid_capabilities::{Harness, HarnessConfig, RunSummary, Terminal};
use std::process;

fn run(config: &HarnessConfig) -> anyhow::Result<RunSummary> {
    let scenario = config.load_scenario().context("loading scenario")?;
    let mut harness = Harness::new(scenario)
        .context("building variants")?
        .verify(config.verify);

    println!("{}", format!("=== {} ===", harness.name()).bold());
    let summary = harness
        .run(&mut Terminal)
        .with_context(|| format!("running scenario '{}'", harness.name()))?;
    Ok(summary)
}

fn main() {
    env_logger::init();
    let config = HarnessConfig::from_env();
    log::debug!("{:?}", config);

    match run(&config) {
        Ok(summary) => {
            let status = format!(
                "{} steps, {} lines, {} checked",
                summary.steps, summary.lines, summary.checked
            );
            println!("{} {}", "ok:".green().bold(), status);
        }
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            process::exit(1);
        }
    }
}
