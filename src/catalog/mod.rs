//! Tool descriptor catalog.
//!
//! Descriptors come from an external content store ([`HttpCatalog`]) or from
//! the built-in demo set ([`StaticCatalog`]) when no backend is configured.
//! A fetch failure is not fatal anywhere: shells log it and present an empty
//! catalog.

pub mod http;
pub mod in_memory;
pub mod traits;

pub use http::HttpCatalog;
pub use in_memory::StaticCatalog;
pub use traits::{ToolCatalog, ToolDescriptor};

use crate::config::Config;
use std::sync::Arc;

/// Factory: the configured remote catalog, or the demo catalog without one.
pub fn create_catalog(config: &Config) -> Arc<dyn ToolCatalog> {
    match &config.catalog.base_url {
        Some(base_url) => Arc::new(HttpCatalog::new(
            base_url,
            config.catalog.api_key.as_deref(),
        )),
        None => Arc::new(StaticCatalog::demo()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_defaults_to_demo_catalog() {
        let config = Config::default();
        assert_eq!(create_catalog(&config).name(), "static");
    }

    #[test]
    fn factory_uses_http_when_configured() {
        let mut config = Config::default();
        config.catalog.base_url = Some("https://content.example.com".into());
        assert_eq!(create_catalog(&config).name(), "http");
    }
}
