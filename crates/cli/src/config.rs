use std::path::PathBuf;

use anyhow::{Context, anyhow, bail};
use chrono::{DateTime, Utc};
use tracing::debug;

use stockshift_ai::Horizon;

pub const SNAPSHOT_VAR: &str = "STOCKSHIFT_SNAPSHOT";
pub const HORIZON_VAR: &str = "STOCKSHIFT_HORIZON_DAYS";
pub const GROWTH_RATE_VAR: &str = "STOCKSHIFT_GROWTH_RATE";
pub const FORECAST_MONTHS_VAR: &str = "STOCKSHIFT_FORECAST_MONTHS";
pub const NOW_VAR: &str = "STOCKSHIFT_NOW";

pub const DEFAULT_GROWTH_RATE: f64 = 10.0;
pub const DEFAULT_FORECAST_MONTHS: usize = 3;

/// Runtime configuration for one advisor run.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorConfig {
    pub snapshot_path: PathBuf,
    pub horizon: Horizon,
    pub growth_rate_percent: f64,
    /// Forward months projected when the snapshot carries no baseline.
    pub forecast_months: usize,
    /// Pinned evaluation time; `None` means wall-clock time at startup.
    pub now: Option<DateTime<Utc>>,
}

impl AdvisorConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, test map, ...).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let snapshot_path = lookup(SNAPSHOT_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!("{SNAPSHOT_VAR} must point to an inventory snapshot JSON file"))?;

        let horizon = match lookup(HORIZON_VAR) {
            Some(raw) => {
                let days: u32 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{HORIZON_VAR}={raw:?} is not a number of days"))?;
                Horizon::try_from(days).with_context(|| format!("invalid {HORIZON_VAR}"))?
            }
            None => {
                debug!(default = %Horizon::default(), "{HORIZON_VAR} not set; using default");
                Horizon::default()
            }
        };

        let growth_rate_percent = match lookup(GROWTH_RATE_VAR) {
            Some(raw) => {
                let rate: f64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{GROWTH_RATE_VAR}={raw:?} is not a percentage"))?;
                if !rate.is_finite() {
                    bail!("{GROWTH_RATE_VAR} must be finite (got {raw:?})");
                }
                rate
            }
            None => DEFAULT_GROWTH_RATE,
        };

        let forecast_months = match lookup(FORECAST_MONTHS_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("{FORECAST_MONTHS_VAR}={raw:?} is not a month count"))?,
            None => DEFAULT_FORECAST_MONTHS,
        };

        let now = lookup(NOW_VAR)
            .map(|raw| {
                DateTime::parse_from_rfc3339(raw.trim())
                    .map(|dt| dt.with_timezone(&Utc))
                    .with_context(|| format!("{NOW_VAR}={raw:?} is not an RFC 3339 timestamp"))
            })
            .transpose()?;

        Ok(Self {
            snapshot_path,
            horizon,
            growth_rate_percent,
            forecast_months,
            now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_the_snapshot_is_set() {
        let cfg = AdvisorConfig::from_lookup(lookup(&[(SNAPSHOT_VAR, "demos/snapshot.json")])).unwrap();

        assert_eq!(cfg.snapshot_path, PathBuf::from("demos/snapshot.json"));
        assert_eq!(cfg.horizon, Horizon::Days30);
        assert_eq!(cfg.growth_rate_percent, DEFAULT_GROWTH_RATE);
        assert_eq!(cfg.forecast_months, DEFAULT_FORECAST_MONTHS);
        assert_eq!(cfg.now, None);
    }

    #[test]
    fn parses_every_setting() {
        let cfg = AdvisorConfig::from_lookup(lookup(&[
            (SNAPSHOT_VAR, "snap.json"),
            (HORIZON_VAR, "90"),
            (GROWTH_RATE_VAR, "12.5"),
            (FORECAST_MONTHS_VAR, "6"),
            (NOW_VAR, "2025-12-15T10:00:00+02:00"),
        ]))
        .unwrap();

        assert_eq!(cfg.horizon, Horizon::Days90);
        assert_eq!(cfg.growth_rate_percent, 12.5);
        assert_eq!(cfg.forecast_months, 6);
        assert_eq!(cfg.now.unwrap().to_rfc3339(), "2025-12-15T08:00:00+00:00");
    }

    #[test]
    fn missing_snapshot_is_an_error() {
        let err = AdvisorConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.to_string().contains(SNAPSHOT_VAR));
    }

    #[test]
    fn unsupported_horizon_is_rejected() {
        let err = AdvisorConfig::from_lookup(lookup(&[(SNAPSHOT_VAR, "s.json"), (HORIZON_VAR, "45")]))
            .unwrap_err();
        assert!(format!("{err:#}").contains("horizon must be 30, 60 or 90 days"));
    }

    #[test]
    fn non_finite_growth_rate_is_rejected() {
        let err = AdvisorConfig::from_lookup(lookup(&[(SNAPSHOT_VAR, "s.json"), (GROWTH_RATE_VAR, "inf")]))
            .unwrap_err();
        assert!(err.to_string().contains("must be finite"));
    }
}
