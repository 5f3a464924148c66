//! Remote catalog backed by the managed content store's REST interface.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::traits::{ToolCatalog, ToolDescriptor};

/// Queries `{base}/rest/v1/tools` for active descriptors ordered by name.
pub struct HttpCatalog {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl HttpCatalog {
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(ToString::to_string),
            client: Client::builder()
                .timeout(Duration::from_secs(15))
                .connect_timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn tools_url(&self) -> String {
        format!(
            "{}/rest/v1/tools?select=*&is_active=eq.true&order=name",
            self.base_url
        )
    }
}

#[async_trait]
impl ToolCatalog for HttpCatalog {
    async fn fetch_active(&self) -> Result<Vec<ToolDescriptor>> {
        let mut request = self.client.get(self.tools_url());
        if let Some(key) = &self.api_key {
            request = request
                .header("apikey", key)
                .header("Authorization", format!("Bearer {key}"));
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let error = response.text().await.unwrap_or_default();
            anyhow::bail!("catalog error ({status}): {error}");
        }

        let mut descriptors: Vec<ToolDescriptor> = response.json().await?;
        // The query already orders by name; re-sort as a belt check so the
        // shells can rely on it.
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(descriptors)
    }

    fn name(&self) -> &str {
        "http"
    }
}
