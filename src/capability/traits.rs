//! External capability seam for delegated tool categories.

use async_trait::async_trait;
use serde_json::Value;

/// An opaque remote capability: named functions taking and returning
/// structured JSON.
///
/// Implementations reject (return `Err`) on any transport or remote failure;
/// the calling strategy maps that into its category's error envelope. The
/// engine never sees a capability error escape a strategy.
#[async_trait]
pub trait Capability: Send + Sync {
    async fn invoke(&self, function: &str, body: Value) -> anyhow::Result<Value>;

    fn name(&self) -> &str;
}
