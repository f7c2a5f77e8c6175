use chrono::{DateTime, Utc};
use serde_json::json;

use crate::job::{AiJob, InventorySnapshot};
use crate::recommendation::{AiRecommendation, Confidence, Horizon, recommend};
use crate::result::{AiError, AiResult};
use crate::stockout::{StockoutRisk, Urgency, assess_stockout_risk};

/// Typed per-item views of one job pass plus the summarizing insight.
#[derive(Debug, Clone, PartialEq)]
pub struct StockAssessment {
    pub recommendations: Vec<AiRecommendation>,
    pub stockout_risks: Vec<StockoutRisk>,
    pub insight: AiResult,
}

/// Stock recommendation job over an inventory snapshot.
///
/// Model:
/// - Aggregate 60-day outbound demand per item.
/// - Size each item for the horizon with a seasonal multiplier and a 20% buffer,
///   floored at twice the reorder point.
/// - Attach 7-day stockout urgency per item.
///
/// `now` is fixed at construction so reruns are reproducible.
#[derive(Debug, Clone)]
pub struct StockRecommendationJob {
    input: InventorySnapshot,
    horizon: Horizon,
    now: DateTime<Utc>,
}

impl StockRecommendationJob {
    pub fn new(input: InventorySnapshot, now: DateTime<Utc>) -> Self {
        Self {
            input,
            horizon: Horizon::default(),
            now,
        }
    }

    pub fn with_horizon(mut self, horizon: Horizon) -> Self {
        self.horizon = horizon;
        self
    }

    /// Per-item recommendations without the insight envelope.
    pub fn recommendations(&self) -> Vec<AiRecommendation> {
        recommend(&self.input.items, &self.input.transactions, self.horizon, self.now)
    }

    /// Evaluate recommendations and stockout risks once and summarize them.
    pub fn assess(&self) -> Result<StockAssessment, AiError> {
        let recommendations = self.recommendations();
        let risks = assess_stockout_risk(&self.input.items, &self.input.transactions, self.now);

        let increases = recommendations.iter().filter(|r| r.increases_stock()).count();
        let high = recommendations
            .iter()
            .filter(|r| r.confidence == Confidence::High)
            .count();
        let urgent = risks
            .iter()
            .filter(|r| matches!(r.urgency, Urgency::Critical | Urgency::High))
            .count();

        let confidence = if recommendations.is_empty() {
            1.0
        } else {
            high as f64 / recommendations.len() as f64
        };

        let insight = AiResult::new(increases as f64, confidence)
            .with_explanation(format!(
                "{increases} of {} item(s) need more stock over the next {}; {urgent} at high or critical stockout risk",
                recommendations.len(),
                self.horizon
            ))
            .with_metadata(json!({
                "kind": "inventory.stock_recommendation",
                "horizon_days": self.horizon.days(),
                "evaluated_at": self.now.to_rfc3339(),
                "recommendations": serde_json::to_value(&recommendations)?,
                "stockout_risks": serde_json::to_value(&risks)?,
            }));

        Ok(StockAssessment {
            recommendations,
            stockout_risks: risks,
            insight,
        })
    }
}

impl AiJob for StockRecommendationJob {
    type Input = InventorySnapshot;

    fn input(&self) -> &Self::Input {
        &self.input
    }

    fn run(&self) -> Result<AiResult, AiError> {
        self.assess().map(|assessment| assessment.insight)
    }
}
