use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::forecast::ForecastPoint;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowRow {
    pub month: NaiveDate,
    pub revenue: f64,
    pub cost: f64,
    /// `revenue - cost`.
    pub net: f64,
}

/// Projected cash flow over the forecast months of a series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CashFlowProjection {
    pub rows: Vec<CashFlowRow>,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub total_net: f64,
}

/// Cash flow of the `forecast` points only; historical and bridge points are
/// skipped. Totals are plain sums of the rows.
pub fn project_cash_flow(points: &[ForecastPoint]) -> CashFlowProjection {
    let mut projection = CashFlowProjection::default();

    for point in points.iter().filter(|p| p.is_forecast()) {
        let net = point.revenue - point.cost;
        projection.total_revenue += point.revenue;
        projection.total_cost += point.cost;
        projection.total_net += net;
        projection.rows.push(CashFlowRow {
            month: point.month,
            revenue: point.revenue,
            cost: point.cost,
            net,
        });
    }

    debug!(
        months = projection.rows.len(),
        total_net = projection.total_net,
        "projected cash flow"
    );

    projection
}
