//! `stockshift-ai`
//!
//! **Responsibility:** rule-based stock advisory engine.
//!
//! This crate is intentionally **advisory only**:
//! - It reads inventory snapshots and the transaction log; it never mutates them.
//! - It performs no IO and never reads the system clock inside a transform
//!   (`now` is always passed in).
//! - It emits **recommendations and insights**, not stock adjustments.

pub mod demand;
pub mod job;
pub mod recommendation;
pub mod result;
pub mod seasonal;
pub mod stock_job;
pub mod stockout;

pub use demand::{DEMAND_WINDOW_DAYS, DemandByItem, aggregate_outbound, aggregate_outbound_within};
pub use job::{AiJob, InventorySnapshot};
pub use recommendation::{
    AiRecommendation, Confidence, Horizon, format_currency, recommend, recommend_now,
};
pub use result::{AiError, AiResult};
pub use seasonal::{Season, seasonal_multiplier};
pub use stock_job::{StockAssessment, StockRecommendationJob};
pub use stockout::{StockoutRisk, Urgency, assess_stockout_risk};
