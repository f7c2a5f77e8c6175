use serde::{Deserialize, Serialize};
use tracing::debug;

use stockshift_core::{Entity, ItemId};
use stockshift_inventory::InventoryItem;

/// Items at or below reorder point × this factor are costed for reorder.
pub const REORDER_BAND_FACTOR: f64 = 1.5;

/// A reorder restocks reorder point × this many units.
pub const REORDER_BATCH_FACTOR: f64 = 2.0;

/// Display label for how close an item is to its reorder point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThresholdStatus {
    /// Quantity at or below the reorder point.
    #[serde(rename = "below threshold")]
    Below,
    /// Quantity above the reorder point but within the 1.5× band.
    #[serde(rename = "near threshold")]
    Near,
}

impl core::fmt::Display for ThresholdStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ThresholdStatus::Below => f.write_str("below threshold"),
            ThresholdStatus::Near => f.write_str("near threshold"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderCostLine {
    pub item_id: ItemId,
    pub name: String,
    pub quantity: u64,
    pub reorder_point: u64,
    pub unit_cost: f64,
    /// reorder point × unit cost × 2.
    pub estimated_cost: f64,
    pub status: ThresholdStatus,
}

/// Upcoming reorder spend for items near or below their reorder point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReorderCostForecast {
    pub lines: Vec<ReorderCostLine>,
    pub total_cost: f64,
}

/// Cost out a reorder for every item with quantity ≤ reorder point × 1.5,
/// preserving input order.
pub fn forecast_reorder_costs(items: &[InventoryItem]) -> ReorderCostForecast {
    let mut forecast = ReorderCostForecast::default();

    for item in items {
        let reorder_point = item.reorder_point as f64;
        if item.quantity as f64 > reorder_point * REORDER_BAND_FACTOR {
            continue;
        }

        let status = if item.quantity <= item.reorder_point {
            ThresholdStatus::Below
        } else {
            ThresholdStatus::Near
        };
        let estimated_cost = reorder_point * item.unit_cost * REORDER_BATCH_FACTOR;

        forecast.total_cost += estimated_cost;
        forecast.lines.push(ReorderCostLine {
            item_id: item.id().clone(),
            name: item.name.clone(),
            quantity: item.quantity,
            reorder_point: item.reorder_point,
            unit_cost: item.unit_cost,
            estimated_cost,
            status,
        });
    }

    debug!(
        items = items.len(),
        flagged = forecast.lines.len(),
        total_cost = forecast.total_cost,
        "forecast reorder costs"
    );

    forecast
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(id: &str, quantity: u64, reorder_point: u64, unit_cost: f64) -> InventoryItem {
        InventoryItem::new(id.parse().unwrap(), id, "Raw Materials", quantity, unit_cost, reorder_point)
    }

    #[test]
    fn item_at_the_band_edge_is_near_threshold() {
        let forecast = forecast_reorder_costs(&[item("A", 15, 10, 4.0)]);

        assert_eq!(forecast.lines.len(), 1);
        assert_eq!(forecast.lines[0].estimated_cost, 80.0);
        assert_eq!(forecast.lines[0].status, ThresholdStatus::Near);
        assert_eq!(forecast.total_cost, 80.0);
    }

    #[test]
    fn labels_and_filtering() {
        let forecast = forecast_reorder_costs(&[
            item("BELOW", 10, 10, 2.0),
            item("OK", 16, 10, 4.0),
            item("EMPTY", 0, 5, 1.5),
        ]);

        let ids: Vec<_> = forecast.lines.iter().map(|l| l.item_id.as_str()).collect();
        assert_eq!(ids, vec!["BELOW", "EMPTY"]);
        assert_eq!(forecast.lines[0].status, ThresholdStatus::Below);
        assert_eq!(forecast.lines[1].status, ThresholdStatus::Below);
        assert_eq!(forecast.total_cost, 40.0 + 15.0);
    }

    #[test]
    fn status_serializes_as_display_label() {
        assert_eq!(
            serde_json::to_string(&ThresholdStatus::Near).unwrap(),
            "\"near threshold\""
        );
        assert_eq!(ThresholdStatus::Below.to_string(), "below threshold");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the total is the sum of the line estimates and every
        /// flagged item sits inside the 1.5× band.
        #[test]
        fn total_matches_lines(
            stock_levels in prop::collection::vec((0u64..500, 0u64..300, 0.0f64..100.0), 0..20)
        ) {
            let items: Vec<_> = stock_levels
                .iter()
                .enumerate()
                .map(|(i, (q, rp, c))| item(&format!("I{i}"), *q, *rp, *c))
                .collect();

            let forecast = forecast_reorder_costs(&items);

            let sum: f64 = forecast.lines.iter().map(|l| l.estimated_cost).sum();
            prop_assert!((forecast.total_cost - sum).abs() < 1e-6);
            for line in &forecast.lines {
                prop_assert!(line.quantity as f64 <= line.reorder_point as f64 * 1.5);
            }
        }
    }
}
