//! Financial outlook: what-if forecast series and the projections derived
//! from it.
//!
//! Deterministic transforms over caller-supplied summaries (no IO, no state).
//! Every growth-rate change re-runs the whole pipeline.

pub mod cash_flow;
pub mod forecast;
pub mod reorder;

pub use cash_flow::{CashFlowProjection, CashFlowRow, project_cash_flow};
pub use forecast::{
    FinancialSummaryPoint, ForecastPoint, PointKind, ScenarioAdjustment, SeriesSegments,
    build_forecast_series, project_baseline, segments,
};
pub use reorder::{ReorderCostForecast, ReorderCostLine, ThresholdStatus, forecast_reorder_costs};
