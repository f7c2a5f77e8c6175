use serde::{Deserialize, Serialize};

use stockshift_inventory::{InventoryItem, Transaction};

use crate::result::{AiError, AiResult};

/// Read-only inventory state handed to advisory jobs.
///
/// Supplied fresh by the caller (CRUD layer export, JSON file, test fixture);
/// jobs never write back to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub items: Vec<InventoryItem>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// A self-contained advisory inference unit.
///
/// Jobs consume a snapshot via their `Input` type and stay storage-agnostic.
/// Running a job twice on the same input yields the same result.
pub trait AiJob: Send + Sync + 'static {
    type Input: Send + Sync + 'static;

    /// The input snapshot the job will run on.
    fn input(&self) -> &Self::Input;

    /// Execute the job and return an insight.
    ///
    /// Must not mutate inventory state.
    fn run(&self) -> Result<AiResult, AiError>;
}
