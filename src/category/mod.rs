//! Tool categories and their input form contracts.
//!
//! A category is the key that selects everything about a tool: which input
//! fields its form collects ([`forms`]), which execution strategy runs it, and
//! which result layout renders it. Descriptor labels come from the content
//! backend with inconsistent casing ("Web Security" vs "web security"), so all
//! lookups go through [`Category::parse`], which normalizes before matching.

pub mod forms;

pub use forms::{FieldKind, FormField};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of implemented tool categories.
///
/// Descriptors may carry labels outside this set; those resolve to the
/// registry's fallback strategy rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Password,
    Risk,
    Phishing,
    Leak,
    /// HTTP security-header analysis. The backend labels this `security`.
    Headers,
    Ssl,
    WebSecurity,
    PenetrationTesting,
    NetworkSecurity,
    NetworkAnalysis,
}

impl Category {
    /// Parse a descriptor label, tolerating casing and surrounding whitespace.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "password" => Some(Self::Password),
            "risk" => Some(Self::Risk),
            "phishing" => Some(Self::Phishing),
            "leak" => Some(Self::Leak),
            "security" => Some(Self::Headers),
            "ssl" => Some(Self::Ssl),
            "web security" => Some(Self::WebSecurity),
            "penetration testing" => Some(Self::PenetrationTesting),
            "network security" => Some(Self::NetworkSecurity),
            "network analysis" => Some(Self::NetworkAnalysis),
            _ => None,
        }
    }

    /// Canonical lower-case label as the content backend spells it.
    pub fn label(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Risk => "risk",
            Self::Phishing => "phishing",
            Self::Leak => "leak",
            Self::Headers => "security",
            Self::Ssl => "ssl",
            Self::WebSecurity => "web security",
            Self::PenetrationTesting => "penetration testing",
            Self::NetworkSecurity => "network security",
            Self::NetworkAnalysis => "network analysis",
        }
    }

    pub fn all() -> [Self; 10] {
        [
            Self::Password,
            Self::Risk,
            Self::Phishing,
            Self::Leak,
            Self::Headers,
            Self::Ssl,
            Self::WebSecurity,
            Self::PenetrationTesting,
            Self::NetworkSecurity,
            Self::NetworkAnalysis,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Category::parse("Web Security"), Some(Category::WebSecurity));
        assert_eq!(Category::parse("web security"), Some(Category::WebSecurity));
        assert_eq!(
            Category::parse("Penetration Testing"),
            Some(Category::PenetrationTesting)
        );
        assert_eq!(
            Category::parse("NETWORK ANALYSIS"),
            Some(Category::NetworkAnalysis)
        );
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(Category::parse("  ssl "), Some(Category::Ssl));
    }

    #[test]
    fn parse_rejects_unknown_labels() {
        assert_eq!(Category::parse("quantum hacking"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn labels_round_trip() {
        for category in Category::all() {
            assert_eq!(Category::parse(category.label()), Some(category));
        }
    }

    #[test]
    fn security_label_maps_to_headers() {
        assert_eq!(Category::parse("security"), Some(Category::Headers));
        assert_eq!(Category::Headers.label(), "security");
    }
}
