//! Execution strategy seam.

use async_trait::async_trait;

use crate::catalog::ToolDescriptor;
use crate::category::Category;

use super::envelope::ResultEnvelope;
use super::input::ExecutionInput;

/// One execution strategy, keyed by the category it serves.
///
/// Strategies are pure functions of `(descriptor.config, input)`: local ones
/// compute synchronously (possibly drawing from the injected RNG), delegated
/// ones await an external capability. A strategy never returns an error: a
/// failed delegated call is mapped to the category's zero-value error
/// envelope inside the strategy, so callers always get something to render.
#[async_trait]
pub trait ToolStrategy: Send + Sync {
    /// The category this strategy serves. `None` marks a fallback-only
    /// strategy, which cannot be registered under a category.
    fn category(&self) -> Option<Category>;

    async fn execute(
        &self,
        descriptor: &ToolDescriptor,
        input: &ExecutionInput,
    ) -> ResultEnvelope;
}
