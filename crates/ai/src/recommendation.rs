use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use stockshift_core::{DomainError, Entity, ItemId, ValueObject};
use stockshift_inventory::{InventoryItem, Transaction};

use crate::demand::{DEMAND_WINDOW_DAYS, aggregate_outbound};
use crate::seasonal::{Season, seasonal_multiplier};

/// Buffer applied on top of projected demand (20%).
pub const SAFETY_MARGIN: f64 = 1.2;

/// Safety floor = reorder point × this factor.
pub const SAFETY_FLOOR_FACTOR: u64 = 2;

/// 60-day outbound units needed for `high` confidence.
pub const HIGH_CONFIDENCE_DEMAND: u64 = 20;

/// 60-day outbound units needed for `medium` confidence.
pub const MEDIUM_CONFIDENCE_DEMAND: u64 = 5;

/// Percent change reported when there is no current stock to compare against.
pub const NO_STOCK_CHANGE_PERCENT: i64 = 100;

/// Forward period a recommendation is sized for.
///
/// Closed set: anything other than 30, 60 or 90 days is rejected at the
/// boundary (`Horizon::try_from`) rather than narrowed silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Horizon {
    #[default]
    Days30,
    Days60,
    Days90,
}

impl Horizon {
    pub const ALL: [Horizon; 3] = [Horizon::Days30, Horizon::Days60, Horizon::Days90];

    pub fn days(self) -> u32 {
        match self {
            Horizon::Days30 => 30,
            Horizon::Days60 => 60,
            Horizon::Days90 => 90,
        }
    }
}

impl TryFrom<u32> for Horizon {
    type Error = DomainError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            30 => Ok(Horizon::Days30),
            60 => Ok(Horizon::Days60),
            90 => Ok(Horizon::Days90),
            other => Err(DomainError::validation(format!(
                "horizon must be 30, 60 or 90 days (got {other})"
            ))),
        }
    }
}

impl From<Horizon> for u32 {
    fn from(value: Horizon) -> Self {
        value.days()
    }
}

impl core::fmt::Display for Horizon {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} days", self.days())
    }
}

impl ValueObject for Horizon {}

/// How much observed demand backs a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Tier from 60-day outbound demand only.
    pub fn from_observed_demand(units: u64) -> Self {
        if units >= HIGH_CONFIDENCE_DEMAND {
            Confidence::High
        } else if units >= MEDIUM_CONFIDENCE_DEMAND {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// Stock recommendation for one item.
///
/// Freshly computed on every call and never persisted; `id` is only
/// meaningful within the invocation that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiRecommendation {
    pub id: String,
    pub item_id: ItemId,
    pub current_stock: u64,
    pub recommended_stock: u64,
    pub change_percent: i64,
    pub rationale: String,
    pub horizon: Horizon,
    pub confidence: Confidence,
    pub created_at: DateTime<Utc>,
}

impl AiRecommendation {
    pub fn increases_stock(&self) -> bool {
        self.recommended_stock > self.current_stock
    }
}

/// Recommend target stock levels for every item, preserving input order.
///
/// Demand is observed over the trailing 60 days ending at `now`; the horizon
/// only scales the projection. Never fails: degenerate arithmetic falls back
/// to the safety floor (reorder point × 2).
pub fn recommend(
    items: &[InventoryItem],
    transactions: &[Transaction],
    horizon: Horizon,
    now: DateTime<Utc>,
) -> Vec<AiRecommendation> {
    let demand = aggregate_outbound(items, transactions, now);
    let month0 = now.month0();

    let recommendations: Vec<AiRecommendation> = items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let observed = demand.get(item.id()).copied().unwrap_or(0);
            synthesize(idx + 1, item, observed, horizon, month0, now)
        })
        .collect();

    debug!(
        items = items.len(),
        transactions = transactions.len(),
        horizon_days = horizon.days(),
        increases = recommendations.iter().filter(|r| r.increases_stock()).count(),
        "synthesized stock recommendations"
    );

    recommendations
}

/// [`recommend`] evaluated at the current wall-clock time.
pub fn recommend_now(
    items: &[InventoryItem],
    transactions: &[Transaction],
    horizon: Horizon,
) -> Vec<AiRecommendation> {
    recommend(items, transactions, horizon, Utc::now())
}

fn synthesize(
    seq: usize,
    item: &InventoryItem,
    observed: u64,
    horizon: Horizon,
    month0: u32,
    now: DateTime<Utc>,
) -> AiRecommendation {
    let avg_daily = if observed == 0 {
        0.0
    } else {
        observed as f64 / DEMAND_WINDOW_DAYS as f64
    };
    let base = avg_daily * f64::from(horizon.days());
    let multiplier = seasonal_multiplier(month0, &item.category);
    let projected = base * multiplier;
    let raw = (projected * SAFETY_MARGIN).ceil();

    let recommended = apply_safety_floor(raw, item.reorder_point);
    let change_percent = change_percent(item.quantity, recommended);

    let shortfall = recommended.saturating_sub(item.quantity);
    let investment = item.unit_cost * shortfall as f64;

    let rationale = compose_rationale(&RationaleInputs {
        item,
        observed,
        avg_daily,
        projected,
        multiplier,
        season: Season::for_month(month0),
        horizon,
        investment,
    });

    AiRecommendation {
        id: format!("rec-{seq}"),
        item_id: item.id().clone(),
        current_stock: item.quantity,
        recommended_stock: recommended,
        change_percent,
        rationale,
        horizon,
        confidence: Confidence::from_observed_demand(observed),
        created_at: now,
    }
}

fn apply_safety_floor(raw: f64, reorder_point: u64) -> u64 {
    if !raw.is_finite() || raw < reorder_point as f64 {
        reorder_point.saturating_mul(SAFETY_FLOOR_FACTOR)
    } else {
        // Finite and >= 0 here; `as` saturates on overflow.
        raw as u64
    }
}

fn change_percent(current: u64, recommended: u64) -> i64 {
    if current == 0 {
        return NO_STOCK_CHANGE_PERCENT;
    }
    let current = current as f64;
    ((recommended as f64 - current) / current * 100.0).round() as i64
}

struct RationaleInputs<'a> {
    item: &'a InventoryItem,
    observed: u64,
    avg_daily: f64,
    projected: f64,
    multiplier: f64,
    season: Season,
    horizon: Horizon,
    investment: f64,
}

fn compose_rationale(input: &RationaleInputs<'_>) -> String {
    let mut clauses: Vec<String> = Vec::with_capacity(4);

    if input.observed > 0 {
        clauses.push(format!(
            "{} units shipped in the last {DEMAND_WINDOW_DAYS} days (~{:.1}/day) project to {:.0} units over the next {}.",
            input.observed, input.avg_daily, input.projected, input.horizon
        ));
    } else {
        clauses.push(format!(
            "No outbound movement in the last {DEMAND_WINDOW_DAYS} days; holding safety stock of {} units ({SAFETY_FLOOR_FACTOR}x reorder point).",
            input.item.reorder_point.saturating_mul(SAFETY_FLOOR_FACTOR)
        ));
    }

    match input.season {
        Season::Holiday => clauses.push(format!(
            "December holiday demand applies a {:.1}x seasonal multiplier for {}.",
            input.multiplier, input.item.category
        )),
        Season::Q4Ramp => clauses.push(format!(
            "Q4 seasonal uplift of {:.1}x applied.",
            input.multiplier
        )),
        Season::Regular => {}
    }

    clauses.push(format!(
        "Sized to cover {} of demand with a 20% safety buffer.",
        input.horizon
    ));
    clauses.push(format!(
        "Approximate additional investment: {}.",
        format_currency(input.investment)
    ));

    clauses.join(" ")
}

/// Format an amount as dollars with thousands separators and two decimals
/// (`$1,234.50`). Non-finite amounts render as `$0.00`.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = (amount.abs() * 100.0).round() as u128;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}
