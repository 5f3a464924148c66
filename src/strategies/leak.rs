//! Data breach lookup (delegated).

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::capability::{Capability, FN_BREACH_CHECKER};
use crate::catalog::ToolDescriptor;
use crate::category::Category;
use crate::engine::envelope::{LeakReport, ResultEnvelope};
use crate::engine::input::ExecutionInput;
use crate::engine::traits::ToolStrategy;

pub struct BreachCheckStrategy {
    capability: Arc<dyn Capability>,
}

impl BreachCheckStrategy {
    pub fn new(capability: Arc<dyn Capability>) -> Self {
        Self { capability }
    }

    async fn check(&self, email: &str) -> Result<LeakReport> {
        let response = self
            .capability
            .invoke(FN_BREACH_CHECKER, json!({ "email": email }))
            .await?;
        Ok(serde_json::from_value(response)?)
    }
}

#[async_trait]
impl ToolStrategy for BreachCheckStrategy {
    fn category(&self) -> Option<Category> {
        Some(Category::Leak)
    }

    async fn execute(
        &self,
        descriptor: &ToolDescriptor,
        input: &ExecutionInput,
    ) -> ResultEnvelope {
        let email = input.str_or("email", "");
        match self.check(&email).await {
            Ok(report) => ResultEnvelope::Leak(report),
            Err(err) => {
                warn!(tool_id = %descriptor.id, error = %err, "breach check failed");
                ResultEnvelope::Leak(LeakReport::check_error())
            }
        }
    }
}
