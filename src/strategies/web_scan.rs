//! Web vulnerability scan (delegated).

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::capability::{Capability, FN_VULNERABILITY_SCANNER};
use crate::catalog::ToolDescriptor;
use crate::category::Category;
use crate::engine::envelope::{ResultEnvelope, WebScanReport};
use crate::engine::input::ExecutionInput;
use crate::engine::traits::ToolStrategy;

const DEFAULT_TARGET: &str = "https://example.com";
const DEFAULT_SCAN_TYPE: &str = "Security Headers & Configuration";

pub struct WebScanStrategy {
    capability: Arc<dyn Capability>,
}

impl WebScanStrategy {
    pub fn new(capability: Arc<dyn Capability>) -> Self {
        Self { capability }
    }

    async fn scan(&self, target: &str, scan_type: &str) -> Result<WebScanReport> {
        let response = self
            .capability
            .invoke(
                FN_VULNERABILITY_SCANNER,
                json!({ "target": target, "scanType": scan_type }),
            )
            .await?;
        Ok(serde_json::from_value(response)?)
    }
}

#[async_trait]
impl ToolStrategy for WebScanStrategy {
    fn category(&self) -> Option<Category> {
        Some(Category::WebSecurity)
    }

    async fn execute(
        &self,
        descriptor: &ToolDescriptor,
        input: &ExecutionInput,
    ) -> ResultEnvelope {
        let target = input.str_or("target", DEFAULT_TARGET);
        let scan_type = input.str_or("scanType", DEFAULT_SCAN_TYPE);
        match self.scan(&target, &scan_type).await {
            Ok(report) => ResultEnvelope::WebSecurity(report),
            Err(err) => {
                warn!(tool_id = %descriptor.id, error = %err, "vulnerability scan failed");
                ResultEnvelope::WebSecurity(WebScanReport::scan_error())
            }
        }
    }
}
