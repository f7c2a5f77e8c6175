use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockshift_core::{Entity, ItemId};
use stockshift_inventory::{InventoryItem, Transaction};

use crate::demand::aggregate_outbound_within;

/// Trailing window used for the short-term burn rate.
pub const STOCKOUT_WINDOW_DAYS: i64 = 7;

/// How soon an item runs out at its current burn rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Critical,
    High,
    Medium,
    Low,
}

impl Urgency {
    /// `critical` < 3 days, `high` < 7, `medium` < 14, otherwise `low`.
    /// No burn rate (`None`) is `low`.
    pub fn from_days_until_stockout(days: Option<u64>) -> Self {
        match days {
            Some(d) if d < 3 => Urgency::Critical,
            Some(d) if d < 7 => Urgency::High,
            Some(d) if d < 14 => Urgency::Medium,
            _ => Urgency::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockoutRisk {
    pub item_id: ItemId,
    pub current_stock: u64,
    /// Average outbound units per day over the trailing 7 days.
    pub avg_daily_demand: f64,
    /// `None` when nothing shipped in the window.
    pub days_until_stockout: Option<u64>,
    pub urgency: Urgency,
}

/// Days of cover for every item at its trailing 7-day burn rate, in input order.
pub fn assess_stockout_risk(
    items: &[InventoryItem],
    transactions: &[Transaction],
    now: DateTime<Utc>,
) -> Vec<StockoutRisk> {
    let demand = aggregate_outbound_within(items, transactions, now, STOCKOUT_WINDOW_DAYS);

    items
        .iter()
        .map(|item| {
            let shipped = demand.get(item.id()).copied().unwrap_or(0);
            let avg_daily_demand = shipped as f64 / STOCKOUT_WINDOW_DAYS as f64;
            let days_until_stockout = if shipped == 0 {
                None
            } else {
                Some((item.quantity as f64 / avg_daily_demand).floor() as u64)
            };

            StockoutRisk {
                item_id: item.id().clone(),
                current_stock: item.quantity,
                avg_daily_demand,
                days_until_stockout,
                urgency: Urgency::from_days_until_stockout(days_until_stockout),
            }
        })
        .collect()
}
