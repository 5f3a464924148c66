//! Password generation (delegated).

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

use crate::capability::{Capability, FN_PASSWORD_GENERATOR};
use crate::catalog::ToolDescriptor;
use crate::category::Category;
use crate::engine::envelope::{PasswordReport, ResultEnvelope};
use crate::engine::input::ExecutionInput;
use crate::engine::traits::ToolStrategy;

/// Generation request: fixed length 16, both letter cases always on, numbers
/// and special characters passed through from the descriptor config. Absent
/// config flags are omitted from the wire body, leaving the choice to the
/// remote function's own defaults.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationRequest {
    length: u32,
    include_uppercase: bool,
    include_lowercase: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    include_numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    include_special_chars: Option<bool>,
}

impl GenerationRequest {
    fn from_config(config: &Value) -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: config.get("includeNumbers").and_then(Value::as_bool),
            include_special_chars: config.get("includeSpecialChars").and_then(Value::as_bool),
        }
    }
}

pub struct PasswordGeneratorStrategy {
    capability: Arc<dyn Capability>,
}

impl PasswordGeneratorStrategy {
    pub fn new(capability: Arc<dyn Capability>) -> Self {
        Self { capability }
    }

    async fn generate(&self, config: &Value) -> Result<PasswordReport> {
        let request = GenerationRequest::from_config(config);
        let response = self
            .capability
            .invoke(FN_PASSWORD_GENERATOR, serde_json::to_value(request)?)
            .await?;
        Ok(serde_json::from_value(response)?)
    }
}

#[async_trait]
impl ToolStrategy for PasswordGeneratorStrategy {
    fn category(&self) -> Option<Category> {
        Some(Category::Password)
    }

    async fn execute(
        &self,
        descriptor: &ToolDescriptor,
        _input: &ExecutionInput,
    ) -> ResultEnvelope {
        match self.generate(&descriptor.config).await {
            Ok(report) => ResultEnvelope::Password(report),
            Err(err) => {
                warn!(tool_id = %descriptor.id, error = %err, "password generation failed");
                ResultEnvelope::Password(PasswordReport::generation_error())
            }
        }
    }
}
