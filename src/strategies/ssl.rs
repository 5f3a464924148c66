//! SSL/TLS configuration probe (delegated).

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::capability::{Capability, FN_SSL_CHECKER};
use crate::catalog::ToolDescriptor;
use crate::category::Category;
use crate::engine::envelope::{ResultEnvelope, SslReport};
use crate::engine::input::ExecutionInput;
use crate::engine::traits::ToolStrategy;

pub struct SslProbeStrategy {
    capability: Arc<dyn Capability>,
}

impl SslProbeStrategy {
    pub fn new(capability: Arc<dyn Capability>) -> Self {
        Self { capability }
    }

    async fn probe(&self, domain: &str) -> Result<SslReport> {
        let response = self
            .capability
            .invoke(FN_SSL_CHECKER, json!({ "domain": domain }))
            .await?;
        Ok(serde_json::from_value(response)?)
    }
}

#[async_trait]
impl ToolStrategy for SslProbeStrategy {
    fn category(&self) -> Option<Category> {
        Some(Category::Ssl)
    }

    async fn execute(
        &self,
        descriptor: &ToolDescriptor,
        input: &ExecutionInput,
    ) -> ResultEnvelope {
        let domain = input.str_or("domain", "");
        match self.probe(&domain).await {
            Ok(report) => ResultEnvelope::Ssl(report),
            Err(err) => {
                warn!(tool_id = %descriptor.id, error = %err, "ssl probe failed");
                ResultEnvelope::Ssl(SslReport::probe_error())
            }
        }
    }
}
