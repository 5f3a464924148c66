//! HTTP security-header analysis (delegated).

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::capability::{Capability, FN_HEADER_ANALYZER};
use crate::catalog::ToolDescriptor;
use crate::category::Category;
use crate::engine::envelope::{HeaderReport, ResultEnvelope};
use crate::engine::input::ExecutionInput;
use crate::engine::traits::ToolStrategy;

pub struct HeaderAnalysisStrategy {
    capability: Arc<dyn Capability>,
}

impl HeaderAnalysisStrategy {
    pub fn new(capability: Arc<dyn Capability>) -> Self {
        Self { capability }
    }

    async fn analyze(&self, url: &str) -> Result<HeaderReport> {
        let response = self
            .capability
            .invoke(FN_HEADER_ANALYZER, json!({ "url": url }))
            .await?;
        Ok(serde_json::from_value(response)?)
    }
}

#[async_trait]
impl ToolStrategy for HeaderAnalysisStrategy {
    fn category(&self) -> Option<Category> {
        Some(Category::Headers)
    }

    async fn execute(
        &self,
        descriptor: &ToolDescriptor,
        input: &ExecutionInput,
    ) -> ResultEnvelope {
        let url = input.str_or("url", "");
        match self.analyze(&url).await {
            Ok(report) => ResultEnvelope::Headers(report),
            Err(err) => {
                warn!(tool_id = %descriptor.id, error = %err, "header analysis failed");
                ResultEnvelope::Headers(HeaderReport::analysis_error())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::testing::{descriptor, FailingCapability, StaticCapability};

    #[tokio::test]
    async fn success_parses_headers_and_grade() {
        let capability = Arc::new(StaticCapability::new(json!({
            "score": 85,
            "grade": "B",
            "securityHeaders": {
                "Strict-Transport-Security": {"present": true, "description": "Force HTTPS"},
                "Content-Security-Policy": {"present": false, "description": "Empêche les attaques XSS"}
            },
            "recommendations": [
                {"header": "Content-Security-Policy", "description": "Ajoutez une CSP"}
            ]
        })));
        let strategy = HeaderAnalysisStrategy::new(capability);
        let input = ExecutionInput::from_pairs([("url", "https://example.com")]);

        match strategy.execute(&descriptor("security"), &input).await {
            ResultEnvelope::Headers(report) => {
                assert_eq!(report.grade, "B");
                assert!(report.security_headers["Strict-Transport-Security"].present);
                assert_eq!(report.recommendations.len(), 1);
            }
            other => panic!("expected header report, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failure_maps_to_the_analysis_error_shape() {
        let strategy = HeaderAnalysisStrategy::new(Arc::new(FailingCapability));
        let input = ExecutionInput::from_pairs([("url", "https://example.com")]);

        match strategy.execute(&descriptor("security"), &input).await {
            ResultEnvelope::Headers(report) => {
                assert_eq!(report, HeaderReport::analysis_error());
                assert_eq!(report.grade, "F");
                assert_eq!(report.score, 0);
            }
            other => panic!("expected header report, got {other:?}"),
        }
    }
}
