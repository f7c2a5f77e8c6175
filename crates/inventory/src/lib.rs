//! Inventory read model.
//!
//! Items and stock movements as supplied by the inventory CRUD layer. The
//! advisory crates only read these types; nothing here mutates stock.

pub mod item;
pub mod transaction;

pub use item::{Category, InventoryItem};
pub use transaction::{Direction, Transaction};
