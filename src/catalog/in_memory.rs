//! In-memory catalog: fixed descriptor list, used offline and in tests.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;

use super::traits::{ToolCatalog, ToolDescriptor};

/// A catalog holding a fixed set of descriptors, served ordered by name.
pub struct StaticCatalog {
    descriptors: Vec<ToolDescriptor>,
}

impl StaticCatalog {
    pub fn new(mut descriptors: Vec<ToolDescriptor>) -> Self {
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        Self { descriptors }
    }

    /// The built-in demo catalog: one tool per implemented category, with the
    /// mixed label casing the content backend actually uses.
    pub fn demo() -> Self {
        let tool = |id: &str, name: &str, description: &str, category: &str| ToolDescriptor {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            config: json!({}),
        };

        let mut descriptors = vec![
            ToolDescriptor {
                id: "demo-password".into(),
                name: "Générateur de mots de passe".into(),
                description: "Génère des mots de passe robustes de 16 caractères.".into(),
                category: "password".into(),
                config: json!({"includeNumbers": true, "includeSpecialChars": true}),
            },
            tool(
                "demo-risk",
                "Calculateur de risques",
                "Évalue le niveau de risque de votre organisation.",
                "risk",
            ),
            tool(
                "demo-phishing",
                "Simulateur de phishing",
                "Scénarios de sensibilisation au phishing.",
                "phishing",
            ),
            tool(
                "demo-leak",
                "Vérificateur de fuites de données",
                "Vérifie si un email apparaît dans des fuites connues.",
                "leak",
            ),
            tool(
                "demo-headers",
                "Analyseur d'en-têtes HTTP",
                "Analyse les en-têtes de sécurité d'un site web.",
                "security",
            ),
            tool(
                "demo-ssl",
                "Testeur SSL/TLS",
                "Teste la configuration SSL/TLS d'un domaine.",
                "ssl",
            ),
            tool(
                "demo-webscan",
                "Scanner de vulnérabilités web",
                "Scan de vulnérabilités web simulé.",
                "Web Security",
            ),
            tool(
                "demo-pentest",
                "Simulateur Metasploit",
                "Simulation pédagogique d'exploitation.",
                "Penetration Testing",
            ),
            tool(
                "demo-portscan",
                "Scanner de ports",
                "Scan de ports simulé sur une cible.",
                "Network Security",
            ),
            tool(
                "demo-capture",
                "Analyseur de trafic réseau",
                "Capture de trafic réseau simulée.",
                "Network Analysis",
            ),
        ];
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        Self { descriptors }
    }
}

#[async_trait]
impl ToolCatalog for StaticCatalog {
    async fn fetch_active(&self) -> Result<Vec<ToolDescriptor>> {
        Ok(self.descriptors.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[tokio::test]
    async fn demo_catalog_is_ordered_by_name() {
        let descriptors = StaticCatalog::demo().fetch_active().await.unwrap();
        let names: Vec<&str> = descriptors.iter().map(|d| d.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[tokio::test]
    async fn demo_catalog_covers_every_category() {
        let descriptors = StaticCatalog::demo().fetch_active().await.unwrap();
        assert_eq!(descriptors.len(), 10);

        let mut categories: Vec<Category> = descriptors
            .iter()
            .map(|d| Category::parse(&d.category).expect("demo category must parse"))
            .collect();
        categories.sort_by_key(|c| c.label());
        categories.dedup();
        assert_eq!(categories.len(), 10);
    }

    #[tokio::test]
    async fn demo_ids_are_unique() {
        let descriptors = StaticCatalog::demo().fetch_active().await.unwrap();
        let mut ids: Vec<&str> = descriptors.iter().map(|d| d.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), descriptors.len());
    }

    #[tokio::test]
    async fn new_sorts_by_name() {
        let catalog = StaticCatalog::new(vec![
            ToolDescriptor {
                id: "b".into(),
                name: "Zèbre".into(),
                description: String::new(),
                category: "risk".into(),
                config: json!({}),
            },
            ToolDescriptor {
                id: "a".into(),
                name: "Alpha".into(),
                description: String::new(),
                category: "risk".into(),
                config: json!({}),
            },
        ]);
        let descriptors = catalog.fetch_active().await.unwrap();
        assert_eq!(descriptors[0].name, "Alpha");
    }
}
