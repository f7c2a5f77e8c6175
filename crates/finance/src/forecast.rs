use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use stockshift_core::ValueObject;

/// Trailing months averaged by [`project_baseline`].
pub const BASELINE_TRAILING_MONTHS: usize = 3;

/// Monthly revenue/cost summary from the reporting layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummaryPoint {
    /// First day of the month the summary covers.
    pub month: NaiveDate,
    pub revenue: f64,
    pub cost: f64,
}

impl FinancialSummaryPoint {
    pub fn new(month: NaiveDate, revenue: f64, cost: f64) -> Self {
        Self { month, revenue, cost }
    }

    pub fn profit(&self) -> f64 {
        self.revenue - self.cost
    }
}

impl ValueObject for FinancialSummaryPoint {}

/// Role of a point in the combined series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    /// Reported fact, passed through unchanged.
    Historical,
    /// Synthetic forward month with the scenario applied.
    Forecast,
    /// Copy of the last historical point that starts the forecast segment so the
    /// two drawn segments join up.
    Bridge,
}

/// Point of the combined historical + forecast series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub month: NaiveDate,
    pub revenue: f64,
    pub cost: f64,
    /// Always `revenue - cost` of this point.
    pub profit: f64,
    pub kind: PointKind,
}

impl ForecastPoint {
    pub fn new(month: NaiveDate, revenue: f64, cost: f64, kind: PointKind) -> Self {
        Self {
            month,
            revenue,
            cost,
            profit: revenue - cost,
            kind,
        }
    }

    fn from_summary(point: &FinancialSummaryPoint, kind: PointKind) -> Self {
        Self::new(point.month, point.revenue, point.cost, kind)
    }

    pub fn is_forecast(&self) -> bool {
        self.kind == PointKind::Forecast
    }
}

/// What-if growth scenario applied to forward months only.
///
/// Revenue scales by `1 + g/100`, cost by `1 + g/200`: costs grow at half the
/// revenue rate (operating leverage).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioAdjustment {
    pub growth_rate_percent: f64,
}

impl ScenarioAdjustment {
    /// Non-finite rates normalize to 0 (baseline).
    pub fn new(growth_rate_percent: f64) -> Self {
        let growth_rate_percent = if growth_rate_percent.is_finite() {
            growth_rate_percent
        } else {
            0.0
        };
        Self { growth_rate_percent }
    }

    /// Revenue multiplier, never negative.
    pub fn revenue_factor(&self) -> f64 {
        (1.0 + self.growth_rate_percent / 100.0).max(0.0)
    }

    /// Cost multiplier, never negative.
    pub fn cost_factor(&self) -> f64 {
        (1.0 + self.growth_rate_percent / 200.0).max(0.0)
    }

    /// Scale a baseline forward month; profit is recomputed from the scaled figures.
    pub fn apply(&self, baseline: &FinancialSummaryPoint) -> ForecastPoint {
        ForecastPoint::new(
            baseline.month,
            baseline.revenue * self.revenue_factor(),
            baseline.cost * self.cost_factor(),
            PointKind::Forecast,
        )
    }
}

impl ValueObject for ScenarioAdjustment {}

/// Join reported history with scenario-adjusted forward months.
///
/// Output order: historical points (unchanged), then a bridge copy of the last
/// historical point (only when both sides are non-empty), then forecast points.
pub fn build_forecast_series(
    historical: &[FinancialSummaryPoint],
    baseline_forward: &[FinancialSummaryPoint],
    growth_rate_percent: f64,
) -> Vec<ForecastPoint> {
    let scenario = ScenarioAdjustment::new(growth_rate_percent);

    let mut series = Vec::with_capacity(historical.len() + baseline_forward.len() + 1);
    series.extend(
        historical
            .iter()
            .map(|p| ForecastPoint::from_summary(p, PointKind::Historical)),
    );

    if !baseline_forward.is_empty() {
        if let Some(last) = historical.last() {
            series.push(ForecastPoint::from_summary(last, PointKind::Bridge));
        }
    }

    series.extend(baseline_forward.iter().map(|p| scenario.apply(p)));

    debug!(
        historical = historical.len(),
        forecast = baseline_forward.len(),
        growth_rate_percent = scenario.growth_rate_percent,
        "built forecast series"
    );

    series
}

/// Baseline forward months for callers with no external baseline.
///
/// Each of the `months` following the last historical month repeats the mean
/// revenue and mean cost of the trailing (up to) three historical months.
/// Empty when there is no history.
pub fn project_baseline(historical: &[FinancialSummaryPoint], months: usize) -> Vec<FinancialSummaryPoint> {
    let Some(last) = historical.last() else {
        return Vec::new();
    };

    let trailing = &historical[historical.len().saturating_sub(BASELINE_TRAILING_MONTHS)..];
    let n = trailing.len() as f64;
    let revenue = trailing.iter().map(|p| p.revenue).sum::<f64>() / n;
    let cost = trailing.iter().map(|p| p.cost).sum::<f64>() / n;

    (1..=months)
        .map_while(|offset| {
            let month = last.month.checked_add_months(Months::new(u32::try_from(offset).ok()?))?;
            Some(FinancialSummaryPoint::new(month, revenue, cost))
        })
        .collect()
}

/// The two separately drawn segments of a series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesSegments<'a> {
    /// Historical points.
    pub historical: Vec<&'a ForecastPoint>,
    /// Bridge point (if any) followed by forecast points.
    pub forecast: Vec<&'a ForecastPoint>,
}

impl SeriesSegments<'_> {
    /// The series without the bridge duplicate: one entry per month.
    pub fn values(&self) -> Vec<&ForecastPoint> {
        self.historical
            .iter()
            .chain(self.forecast.iter())
            .copied()
            .filter(|p| p.kind != PointKind::Bridge)
            .collect()
    }
}

/// Split a built series into its drawn segments.
pub fn segments(points: &[ForecastPoint]) -> SeriesSegments<'_> {
    let mut out = SeriesSegments::default();
    for point in points {
        match point.kind {
            PointKind::Historical => out.historical.push(point),
            PointKind::Bridge | PointKind::Forecast => out.forecast.push(point),
        }
    }
    out
}
