use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockshift_core::{Entity, ItemId, TransactionId};

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Goods received into stock.
    In,
    /// Goods shipped out of stock (demand).
    Out,
}

/// Immutable stock-movement log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub item_id: ItemId,
    #[serde(rename = "type")]
    pub direction: Direction,
    pub quantity: u64,
    pub occurred_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        item_id: ItemId,
        direction: Direction,
        quantity: u64,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            item_id,
            direction,
            quantity,
            occurred_at,
        }
    }

    pub fn is_outbound(&self) -> bool {
        self.direction == Direction::Out
    }
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_uses_in_out_labels() {
        let tx: Transaction = serde_json::from_str(
            r#"{
                "id": "tx-1",
                "item_id": "ELEC-PCB-001",
                "type": "out",
                "quantity": 12,
                "occurred_at": "2025-12-05T09:30:00Z"
            }"#,
        )
        .unwrap();

        assert!(tx.is_outbound());
        assert_eq!(serde_json::to_string(&Direction::In).unwrap(), "\"in\"");
    }
}
