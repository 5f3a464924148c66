//! Organizational risk assessment (local, deterministic).

use async_trait::async_trait;

use crate::catalog::ToolDescriptor;
use crate::category::Category;
use crate::engine::envelope::{ResultEnvelope, RiskReport};
use crate::engine::input::ExecutionInput;
use crate::engine::traits::ToolStrategy;

const WEIGHT_NETWORK: f64 = 0.30;
const WEIGHT_USERS: f64 = 0.20;
const WEIGHT_DATA: f64 = 0.30;
const WEIGHT_COMPLIANCE: f64 = 0.20;

/// Weighted risk score over the four assessment axes, each in 1..=10.
///
/// Level thresholds apply to the raw weighted total; the reported score is
/// rounded to one decimal afterwards.
pub fn assess(network: i64, users: i64, data: i64, compliance: i64) -> RiskReport {
    let total = WEIGHT_NETWORK * network as f64
        + WEIGHT_USERS * users as f64
        + WEIGHT_DATA * data as f64
        + WEIGHT_COMPLIANCE * compliance as f64;

    let (level, color) = if total >= 7.0 {
        ("Critique", "red")
    } else if total >= 5.0 {
        ("Élevé", "orange")
    } else if total >= 3.0 {
        ("Moyen", "yellow")
    } else {
        ("Faible", "green")
    };

    RiskReport {
        level: level.to_string(),
        score: (total * 10.0).round() / 10.0,
        color: color.to_string(),
    }
}

/// Risk calculator strategy.
///
/// The shells validate 1..=10 before dispatch; as a second line for direct
/// engine callers, unparsable or out-of-range values are clamped to the form
/// default / bounds rather than crashing the run.
pub struct RiskAssessmentStrategy;

impl RiskAssessmentStrategy {
    fn axis(input: &ExecutionInput, field: &str) -> i64 {
        input
            .str_or(field, "5")
            .trim()
            .parse::<i64>()
            .unwrap_or(5)
            .clamp(1, 10)
    }
}

#[async_trait]
impl ToolStrategy for RiskAssessmentStrategy {
    fn category(&self) -> Option<Category> {
        Some(Category::Risk)
    }

    async fn execute(
        &self,
        _descriptor: &ToolDescriptor,
        input: &ExecutionInput,
    ) -> ResultEnvelope {
        ResultEnvelope::Risk(assess(
            Self::axis(input, "network"),
            Self::axis(input, "users"),
            Self::axis(input, "data"),
            Self::axis(input, "compliance"),
        ))
    }
}
