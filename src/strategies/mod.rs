//! Per-category execution strategies.
//!
//! Each strategy implements [`ToolStrategy`](crate::engine::ToolStrategy) in
//! its own submodule: local ones compute in place (the randomized ones draw
//! from the injected [`SharedRng`]), delegated ones post to an external
//! capability and map any failure to their category's error envelope.
//!
//! [`default_registry`] assembles the full set behind the
//! [`NotImplementedStrategy`] fallback.

pub mod capture;
pub mod fallback;
pub mod headers;
pub mod leak;
pub mod password;
pub mod pentest;
pub mod phishing;
pub mod port_scan;
pub mod risk;
pub mod ssl;
pub mod web_scan;

pub use capture::CaptureSimulationStrategy;
pub use fallback::NotImplementedStrategy;
pub use headers::HeaderAnalysisStrategy;
pub use leak::BreachCheckStrategy;
pub use password::PasswordGeneratorStrategy;
pub use pentest::ExploitSimulationStrategy;
pub use phishing::PhishingScenarioStrategy;
pub use port_scan::PortScanStrategy;
pub use risk::RiskAssessmentStrategy;
pub use ssl::SslProbeStrategy;
pub use web_scan::WebScanStrategy;

use crate::capability::Capability;
use crate::engine::registry::StrategyRegistry;
use crate::engine::traits::ToolStrategy;
use crate::util::SharedRng;
use std::sync::Arc;

/// Create the default strategy set (10 categories).
pub fn default_strategies(
    capability: Arc<dyn Capability>,
    rng: SharedRng,
) -> Vec<Box<dyn ToolStrategy>> {
    vec![
        Box::new(PasswordGeneratorStrategy::new(capability.clone())),
        Box::new(RiskAssessmentStrategy),
        Box::new(PhishingScenarioStrategy),
        Box::new(BreachCheckStrategy::new(capability.clone())),
        Box::new(HeaderAnalysisStrategy::new(capability.clone())),
        Box::new(SslProbeStrategy::new(capability.clone())),
        Box::new(WebScanStrategy::new(capability.clone())),
        Box::new(ExploitSimulationStrategy::new(rng.clone())),
        Box::new(PortScanStrategy::new(capability)),
        Box::new(CaptureSimulationStrategy::new(rng)),
    ]
}

/// Assemble the default registry: every category strategy plus the
/// not-implemented fallback.
pub fn default_registry(capability: Arc<dyn Capability>, rng: SharedRng) -> StrategyRegistry {
    let mut registry = StrategyRegistry::new(Box::new(NotImplementedStrategy));
    for strategy in default_strategies(capability, rng) {
        registry
            .register(strategy)
            .expect("default strategies have unique categories");
    }
    registry
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared doubles for strategy tests.

    use crate::capability::Capability;
    use crate::catalog::ToolDescriptor;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::Value;

    pub fn descriptor(category: &str) -> ToolDescriptor {
        ToolDescriptor {
            id: "t1".into(),
            name: "test tool".into(),
            description: String::new(),
            category: category.to_string(),
            config: serde_json::json!({}),
        }
    }

    /// Always returns a clone of the configured response.
    pub struct StaticCapability {
        response: Value,
    }

    impl StaticCapability {
        pub fn new(response: Value) -> Self {
            Self { response }
        }
    }

    #[async_trait]
    impl Capability for StaticCapability {
        async fn invoke(&self, _function: &str, _body: Value) -> anyhow::Result<Value> {
            Ok(self.response.clone())
        }

        fn name(&self) -> &str {
            "static"
        }
    }

    /// Always fails, like an unreachable backend.
    pub struct FailingCapability;

    #[async_trait]
    impl Capability for FailingCapability {
        async fn invoke(&self, function: &str, _body: Value) -> anyhow::Result<Value> {
            anyhow::bail!("capability {function} unreachable")
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    /// Records the last call and returns the configured response.
    pub struct RecordingCapability {
        response: Value,
        last: Mutex<Option<(String, Value)>>,
    }

    impl RecordingCapability {
        pub fn new(response: Value) -> Self {
            Self {
                response,
                last: Mutex::new(None),
            }
        }

        pub fn last_call(&self) -> Option<(String, Value)> {
            self.last.lock().clone()
        }
    }

    #[async_trait]
    impl Capability for RecordingCapability {
        async fn invoke(&self, function: &str, body: Value) -> anyhow::Result<Value> {
            *self.last.lock() = Some((function.to_string(), body));
            Ok(self.response.clone())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use super::testing::FailingCapability;

    #[test]
    fn default_strategies_has_expected_count() {
        let strategies = default_strategies(Arc::new(FailingCapability), SharedRng::seeded(0));
        assert_eq!(strategies.len(), 10);
    }

    #[test]
    fn default_strategies_cover_every_category_once() {
        let strategies = default_strategies(Arc::new(FailingCapability), SharedRng::seeded(0));
        let mut categories: Vec<Category> = strategies
            .iter()
            .map(|s| s.category().expect("default strategies are categorized"))
            .collect();
        categories.sort_by_key(|c| c.label());
        categories.dedup();
        assert_eq!(categories.len(), 10);
    }

    #[test]
    fn default_registry_registers_everything() {
        let registry = default_registry(Arc::new(FailingCapability), SharedRng::seeded(0));
        assert_eq!(registry.len(), 10);
        for category in Category::all() {
            assert_eq!(
                registry.resolve(category.label()).category(),
                Some(category)
            );
        }
    }

    #[test]
    fn default_registry_resolution_is_case_insensitive() {
        let registry = default_registry(Arc::new(FailingCapability), SharedRng::seeded(0));
        assert_eq!(
            registry.resolve("Web Security").category(),
            registry.resolve("web security").category()
        );
        assert_eq!(
            registry.resolve("Penetration Testing").category(),
            Some(Category::PenetrationTesting)
        );
    }

    #[tokio::test]
    async fn password_run_caches_the_remote_payload_under_the_tool_id() {
        use crate::catalog::ToolDescriptor;
        use crate::engine::envelope::{PasswordReport, ResultEnvelope};
        use crate::engine::{Dispatcher, ExecutionInput};
        use crate::strategies::testing::StaticCapability;

        let response = serde_json::json!({
            "password": "Ab3!xQz9mN7@pL2k",
            "strength": "Strong",
            "entropy": 78.0,
            "length": 16
        });
        let registry =
            default_registry(Arc::new(StaticCapability::new(response)), SharedRng::seeded(0));
        let dispatcher = Dispatcher::new(registry);

        let tool = ToolDescriptor {
            id: "t1".into(),
            name: "Générateur de mots de passe".into(),
            description: String::new(),
            category: "password".into(),
            config: serde_json::json!({"includeNumbers": true, "includeSpecialChars": true}),
        };

        dispatcher.execute(&tool, &ExecutionInput::new()).await;

        let expected = ResultEnvelope::Password(PasswordReport {
            password: "Ab3!xQz9mN7@pL2k".into(),
            strength: "Strong".into(),
            entropy: 78.0,
            length: Some(16),
        });
        assert_eq!(dispatcher.cache().get("t1"), Some(expected));
    }
}
