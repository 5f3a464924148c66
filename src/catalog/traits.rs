//! Tool descriptor model and catalog seam.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One catalog entry describing a selectable tool.
///
/// Created by the external content store and immutable once loaded; the
/// engine never mutates a descriptor. `category` is the raw backend label
/// (casing varies) and `config` is free-form per-tool configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default = "empty_config")]
    pub config: Value,
}

fn empty_config() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Read-only source of active tool descriptors, ordered by name.
#[async_trait]
pub trait ToolCatalog: Send + Sync {
    async fn fetch_active(&self) -> Result<Vec<ToolDescriptor>>;

    fn name(&self) -> &str;
}
