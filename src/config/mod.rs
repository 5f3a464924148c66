pub mod schema;

pub use schema::{CapabilityConfig, CatalogConfig, Config, GatewayConfig, SimulationConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reexported_config_default_is_constructible() {
        let config = Config::default();
        assert!(!config.capability.base_url.is_empty());
        assert!(config.gateway.port > 0);
    }
}
