//! Port scan (delegated).

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::capability::{Capability, FN_PORT_SCANNER};
use crate::catalog::ToolDescriptor;
use crate::category::Category;
use crate::engine::envelope::{PortScanReport, ResultEnvelope};
use crate::engine::input::ExecutionInput;
use crate::engine::traits::ToolStrategy;

const DEFAULT_TARGET: &str = "example.com";
const DEFAULT_SCAN_TYPE: &str = "Common Ports Scan";

pub struct PortScanStrategy {
    capability: Arc<dyn Capability>,
}

impl PortScanStrategy {
    pub fn new(capability: Arc<dyn Capability>) -> Self {
        Self { capability }
    }

    async fn scan(&self, target: &str, scan_type: &str) -> Result<PortScanReport> {
        let response = self
            .capability
            .invoke(
                FN_PORT_SCANNER,
                json!({ "target": target, "scanType": scan_type }),
            )
            .await?;
        Ok(serde_json::from_value(response)?)
    }
}

#[async_trait]
impl ToolStrategy for PortScanStrategy {
    fn category(&self) -> Option<Category> {
        Some(Category::NetworkSecurity)
    }

    async fn execute(
        &self,
        descriptor: &ToolDescriptor,
        input: &ExecutionInput,
    ) -> ResultEnvelope {
        let target = input.str_or("target", DEFAULT_TARGET);
        let scan_type = input.str_or("scanType", DEFAULT_SCAN_TYPE);
        match self.scan(&target, &scan_type).await {
            Ok(report) => ResultEnvelope::PortScan(report),
            Err(err) => {
                warn!(tool_id = %descriptor.id, error = %err, "port scan failed");
                ResultEnvelope::PortScan(PortScanReport::scan_error(&target))
            }
        }
    }
}
