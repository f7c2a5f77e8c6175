use serde::{Deserialize, Serialize};

use stockshift_core::{Entity, ItemId, ValueObject};

/// Item category name (e.g. `Electronics`, `Office Supplies`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl ValueObject for Category {}

/// Snapshot of an inventory item as held by the CRUD layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    /// Units currently on hand.
    pub quantity: u64,
    /// Cost per unit in currency units (e.g. dollars).
    pub unit_cost: f64,
    /// Stock level below which replenishment is advised.
    pub reorder_point: u64,
}

impl InventoryItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        category: impl Into<Category>,
        quantity: u64,
        unit_cost: f64,
        reorder_point: u64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            quantity,
            unit_cost,
            reorder_point,
        }
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_crud_json() {
        let item: InventoryItem = serde_json::from_str(
            r#"{
                "id": "PKG-BOX-12C",
                "name": "Cardboard Box 12x12x12",
                "category": "Packaging",
                "quantity": 420,
                "unit_cost": 1.2,
                "reorder_point": 300
            }"#,
        )
        .unwrap();

        assert_eq!(item.id().as_str(), "PKG-BOX-12C");
        assert_eq!(item.category, Category::from("Packaging"));
        assert_eq!(item.reorder_point, 300);
    }
}
