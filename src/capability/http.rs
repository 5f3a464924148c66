//! HTTP-backed capability client.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::traits::Capability;

/// Invokes capability functions as `POST {base}/functions/v1/{function}` with
/// a JSON body, the invocation scheme of the managed backend the content
/// store lives on.
pub struct HttpCapability {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl HttpCapability {
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self::with_timeouts(base_url, api_key, 30, 10)
    }

    pub fn with_timeouts(
        base_url: &str,
        api_key: Option<&str>,
        request_timeout_secs: u64,
        connect_timeout_secs: u64,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(ToString::to_string),
            client: Client::builder()
                .timeout(Duration::from_secs(request_timeout_secs))
                .connect_timeout(Duration::from_secs(connect_timeout_secs))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn function_url(&self, function: &str) -> String {
        format!("{}/functions/v1/{function}", self.base_url)
    }
}

#[async_trait]
impl Capability for HttpCapability {
    async fn invoke(&self, function: &str, body: Value) -> anyhow::Result<Value> {
        let mut request = self.client.post(self.function_url(function)).json(&body);
        if let Some(key) = &self.api_key {
            request = request
                .header("apikey", key)
                .header("Authorization", format!("Bearer {key}"));
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let error = response.text().await.unwrap_or_default();
            anyhow::bail!("capability {function} error ({status}): {error}");
        }

        Ok(response.json().await?)
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash() {
        let capability = HttpCapability::new("http://127.0.0.1:54321/", None);
        assert_eq!(
            capability.function_url("security-breach-checker"),
            "http://127.0.0.1:54321/functions/v1/security-breach-checker"
        );
    }

    #[test]
    fn creates_without_key() {
        let capability = HttpCapability::new("http://127.0.0.1:54321", None);
        assert!(capability.api_key.is_none());
    }

    #[tokio::test]
    async fn invoke_fails_against_unroutable_endpoint() {
        // Reserved TEST-NET address: connection must fail fast, and the error
        // must surface as Err rather than a panic.
        let capability =
            HttpCapability::with_timeouts("http://192.0.2.1:1", Some("anon-key"), 1, 1);
        let result = capability
            .invoke("security-ssl-checker", serde_json::json!({"domain": "example.com"}))
            .await;
        assert!(result.is_err());
    }
}
