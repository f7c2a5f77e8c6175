use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use stockshift_ai::{
    AiError, AiRecommendation, AiResult, Horizon, InventorySnapshot, StockAssessment,
    StockRecommendationJob, StockoutRisk,
};
use stockshift_finance::{
    CashFlowProjection, FinancialSummaryPoint, ForecastPoint, ReorderCostForecast,
    build_forecast_series, forecast_reorder_costs, project_baseline, project_cash_flow,
};

use crate::config::AdvisorConfig;

/// Snapshot file layout: inventory, transaction log and monthly financials.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AdvisorInput {
    #[serde(flatten)]
    pub inventory: InventorySnapshot,
    /// Historical monthly summaries, oldest first.
    #[serde(default)]
    pub financials: Vec<FinancialSummaryPoint>,
    /// Baseline forward months; projected from `financials` when empty.
    #[serde(default)]
    pub forecast_baseline: Vec<FinancialSummaryPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisorReport {
    pub generated_at: DateTime<Utc>,
    pub horizon: Horizon,
    pub growth_rate_percent: f64,
    pub recommendations: Vec<AiRecommendation>,
    pub stockout_risks: Vec<StockoutRisk>,
    pub forecast: Vec<ForecastPoint>,
    pub cash_flow: CashFlowProjection,
    pub reorder_costs: ReorderCostForecast,
    pub insight: AiResult,
}

/// Run every advisory view over one snapshot at a fixed `now`.
pub fn build_report(
    input: &AdvisorInput,
    config: &AdvisorConfig,
    now: DateTime<Utc>,
) -> Result<AdvisorReport, AiError> {
    let StockAssessment {
        recommendations,
        stockout_risks,
        insight,
    } = StockRecommendationJob::new(input.inventory.clone(), now)
        .with_horizon(config.horizon)
        .assess()?;

    let baseline = if input.forecast_baseline.is_empty() {
        project_baseline(&input.financials, config.forecast_months)
    } else {
        input.forecast_baseline.clone()
    };
    let forecast = build_forecast_series(&input.financials, &baseline, config.growth_rate_percent);
    let cash_flow = project_cash_flow(&forecast);
    let reorder_costs = forecast_reorder_costs(&input.inventory.items);

    info!(
        items = input.inventory.items.len(),
        horizon_days = config.horizon.days(),
        growth_rate_percent = config.growth_rate_percent,
        reorder_total = reorder_costs.total_cost,
        "advisor report built"
    );

    Ok(AdvisorReport {
        generated_at: now,
        horizon: config.horizon,
        growth_rate_percent: config.growth_rate_percent,
        recommendations,
        stockout_risks,
        forecast,
        cash_flow,
        reorder_costs,
        insight,
    })
}
