use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;

use stockshift_cli::{AdvisorConfig, AdvisorInput, build_report};

fn main() -> ExitCode {
    stockshift_observability::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("advisor run failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = AdvisorConfig::from_env()?;

    let raw = std::fs::read_to_string(&config.snapshot_path)
        .with_context(|| format!("failed to read snapshot {}", config.snapshot_path.display()))?;
    let input: AdvisorInput = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse snapshot {}", config.snapshot_path.display()))?;

    let now = config.now.unwrap_or_else(|| {
        tracing::info!("STOCKSHIFT_NOW not set; evaluating at current time");
        Utc::now()
    });

    let report = build_report(&input, &config, now)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
