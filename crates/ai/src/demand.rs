use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use stockshift_core::{Entity, ItemId};
use stockshift_inventory::{InventoryItem, Transaction};

/// Observation window for demand used by stock recommendations.
///
/// Fixed regardless of the requested horizon: the horizon scales the
/// projection, not how much history is observed.
pub const DEMAND_WINDOW_DAYS: i64 = 60;

/// Total outbound quantity per item.
pub type DemandByItem = HashMap<ItemId, u64>;

/// Outbound quantity per item within (`now - 60d`, `now`].
pub fn aggregate_outbound(
    items: &[InventoryItem],
    transactions: &[Transaction],
    now: DateTime<Utc>,
) -> DemandByItem {
    aggregate_outbound_within(items, transactions, now, DEMAND_WINDOW_DAYS)
}

/// Outbound quantity per item within (`now - window_days`, `now`].
///
/// Every supplied item is present in the result (zero when nothing matched).
/// Inbound movements, movements outside the window and movements for items
/// not in `items` are ignored.
pub fn aggregate_outbound_within(
    items: &[InventoryItem],
    transactions: &[Transaction],
    now: DateTime<Utc>,
    window_days: i64,
) -> DemandByItem {
    // `None` when the window reaches past the earliest representable instant;
    // the window is then unbounded below.
    let window_start = now.checked_sub_signed(Duration::days(window_days));

    let mut demand: DemandByItem = items.iter().map(|item| (item.id().clone(), 0)).collect();

    for tx in transactions {
        let before_window = window_start.is_some_and(|start| tx.occurred_at <= start);
        if !tx.is_outbound() || before_window || tx.occurred_at > now {
            continue;
        }
        if let Some(total) = demand.get_mut(&tx.item_id) {
            *total = total.saturating_add(tx.quantity);
        }
    }

    demand
}
