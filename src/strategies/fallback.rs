//! Soft fallback for categories without a registered strategy.

use async_trait::async_trait;

use crate::catalog::ToolDescriptor;
use crate::category::Category;
use crate::engine::envelope::{ResultEnvelope, NOT_IMPLEMENTED};
use crate::engine::input::ExecutionInput;
use crate::engine::traits::ToolStrategy;

/// Returns the literal "not implemented" payload. Not an error: the catalog
/// may carry categories this binary has no strategy for yet.
pub struct NotImplementedStrategy;

#[async_trait]
impl ToolStrategy for NotImplementedStrategy {
    fn category(&self) -> Option<Category> {
        None
    }

    async fn execute(
        &self,
        _descriptor: &ToolDescriptor,
        _input: &ExecutionInput,
    ) -> ResultEnvelope {
        ResultEnvelope::NotImplemented(NOT_IMPLEMENTED.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::testing::descriptor;

    #[tokio::test]
    async fn returns_the_literal_payload() {
        let strategy = NotImplementedStrategy;
        let envelope = strategy
            .execute(&descriptor("quantum hacking"), &ExecutionInput::new())
            .await;
        assert_eq!(
            envelope,
            ResultEnvelope::NotImplemented("Outil non implémenté".into())
        );
    }
}
