//! Result envelopes: the normalized success-or-error payload of one execution.
//!
//! Each category owns its payload shape, and every delegated category also
//! defines a zero-value error shape so the rendering layer never has to branch
//! on "did this throw". Envelopes serialize untagged so the JSON a shell sees
//! is exactly the category payload, with wire field names in camelCase.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of one tool execution, keyed by descriptor id in the result cache.
///
/// An envelope for a given tool id is always replaced whole by the next
/// execution for that id, never merged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResultEnvelope {
    Password(PasswordReport),
    Risk(RiskReport),
    /// An opaque educational scenario string, never executed or sent anywhere.
    Phishing(String),
    Leak(LeakReport),
    Headers(HeaderReport),
    Ssl(SslReport),
    WebSecurity(WebScanReport),
    Pentest(ExploitRun),
    PortScan(PortScanReport),
    Capture(CaptureReport),
    /// Soft fallback for categories without a registered strategy.
    NotImplemented(String),
}

/// Literal payload returned for unregistered categories.
pub const NOT_IMPLEMENTED: &str = "Outil non implémenté";

// ── password ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordReport {
    pub password: String,
    pub strength: String,
    #[serde(default)]
    pub entropy: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
}

impl PasswordReport {
    pub fn generation_error() -> Self {
        Self {
            password: "Erreur de génération".into(),
            strength: "Erreur".into(),
            entropy: 0.0,
            length: None,
        }
    }
}

// ── risk ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub level: String,
    /// Weighted total, rounded to one decimal.
    pub score: f64,
    pub color: String,
}

// ── leak ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeakReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub is_compromised: bool,
    #[serde(default)]
    pub breach_count: u32,
    #[serde(default)]
    pub breaches: Vec<Breach>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

impl LeakReport {
    pub fn check_error() -> Self {
        Self {
            error: Some("Erreur de vérification".into()),
            is_compromised: false,
            breach_count: 0,
            breaches: Vec::new(),
            recommendations: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breach {
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub records: u64,
    #[serde(default)]
    pub data_types: Vec<String>,
}

// ── security headers ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub grade: String,
    /// Ordered map keeps the rendered header list stable.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub security_headers: BTreeMap<String, HeaderStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<HeaderRecommendation>,
}

impl HeaderReport {
    pub fn analysis_error() -> Self {
        Self {
            error: Some("Erreur d'analyse".into()),
            score: 0,
            grade: "F".into(),
            security_headers: BTreeMap::new(),
            recommendations: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderStatus {
    pub present: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderRecommendation {
    pub header: String,
    #[serde(default)]
    pub description: String,
}

// ── ssl ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SslReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl: Option<SslDetails>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<SslIssue>,
}

impl SslReport {
    pub fn probe_error() -> Self {
        Self {
            error: Some("Erreur de test SSL".into()),
            score: 0,
            grade: "F".into(),
            ssl: None,
            issues: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SslDetails {
    pub enabled: bool,
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub hsts: HstsPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HstsPolicy {
    pub enabled: bool,
    pub max_age: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SslIssue {
    pub severity: String,
    pub description: String,
}

// ── web security ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebScanReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_type: Option<String>,
    #[serde(default)]
    pub risk_level: String,
    #[serde(default)]
    pub total_found: u32,
    #[serde(default)]
    pub checks_performed: u32,
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
}

impl WebScanReport {
    pub fn scan_error() -> Self {
        Self {
            error: Some("Erreur de scan".into()),
            scan_type: Some("Error".into()),
            risk_level: "Unknown".into(),
            total_found: 0,
            checks_performed: 0,
            vulnerabilities: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: String,
    #[serde(default)]
    pub description: String,
}

// ── penetration testing ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExploitRun {
    pub target: String,
    pub exploit: String,
    pub payload: String,
    pub status: String,
    pub sessions: u32,
}

// ── network security ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortScanReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub open_ports: Vec<OpenPort>,
    #[serde(default)]
    pub statistics: PortStatistics,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_issues: Vec<SecurityIssue>,
}

impl PortScanReport {
    pub fn scan_error(target: &str) -> Self {
        Self {
            error: Some("Erreur de scan de ports".into()),
            target: target.to_string(),
            open_ports: Vec::new(),
            statistics: PortStatistics::default(),
            security_issues: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenPort {
    pub port: u16,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortStatistics {
    pub total_scanned: u32,
    pub open_ports: u32,
    pub closed_ports: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityIssue {
    pub issue: String,
    pub severity: String,
    #[serde(default)]
    pub description: String,
}

// ── network analysis ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureReport {
    pub interface: String,
    pub duration: String,
    pub total_packets: u32,
    pub protocols: Vec<ProtocolCount>,
    pub top_talkers: Vec<String>,
    pub suspicious_activity: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolCount {
    pub name: String,
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_untagged() {
        let envelope = ResultEnvelope::Phishing("Votre compte sera suspendu.".into());
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#""Votre compte sera suspendu.""#
        );

        let envelope = ResultEnvelope::NotImplemented(NOT_IMPLEMENTED.into());
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#""Outil non implémenté""#
        );
    }

    #[test]
    fn password_error_shape_omits_length() {
        let report = PasswordReport::generation_error();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "password": "Erreur de génération",
                "strength": "Erreur",
                "entropy": 0.0
            })
        );
    }

    #[test]
    fn leak_error_shape_matches_contract() {
        let json = serde_json::to_value(LeakReport::check_error()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": "Erreur de vérification",
                "isCompromised": false,
                "breachCount": 0,
                "breaches": []
            })
        );
    }

    #[test]
    fn leak_success_deserializes_with_defaults() {
        let report: LeakReport = serde_json::from_str(r#"{"isCompromised":false}"#).unwrap();
        assert!(!report.is_compromised);
        assert_eq!(report.breach_count, 0);
        assert!(report.breaches.is_empty());
        assert!(report.error.is_none());
    }

    #[test]
    fn leak_breach_wire_names_are_camel_case() {
        let json = r#"{
            "isCompromised": true,
            "breachCount": 1,
            "breaches": [{"name":"BigCorp","date":"2021-03-01","severity":"high",
                          "records": 3500000, "dataTypes":["emails","passwords"]}],
            "recommendations": ["Changez vos mots de passe"]
        }"#;
        let report: LeakReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.breaches[0].data_types, vec!["emails", "passwords"]);
        assert_eq!(report.breaches[0].records, 3_500_000);
    }

    #[test]
    fn header_report_round_trips() {
        let json = r#"{
            "score": 85, "grade": "B",
            "securityHeaders": {
                "Content-Security-Policy": {"present": false, "description": "Empêche les attaques XSS"},
                "Strict-Transport-Security": {"present": true, "description": "Force HTTPS"}
            },
            "recommendations": [{"header":"Content-Security-Policy","description":"Ajoutez une CSP"}]
        }"#;
        let report: HeaderReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.score, 85);
        assert!(report.security_headers["Strict-Transport-Security"].present);

        let back = serde_json::to_value(&report).unwrap();
        assert_eq!(back["securityHeaders"]["Content-Security-Policy"]["present"], false);
    }

    #[test]
    fn ssl_report_parses_hsts_max_age() {
        let json = r#"{
            "score": 92, "grade": "A",
            "ssl": {"enabled": true, "protocol": "TLS 1.3",
                    "hsts": {"enabled": true, "maxAge": 31536000}},
            "issues": [{"severity":"medium","description":"Certificat proche de l'expiration"}]
        }"#;
        let report: SslReport = serde_json::from_str(json).unwrap();
        let ssl = report.ssl.unwrap();
        assert_eq!(ssl.hsts.max_age, 31_536_000);
        assert_eq!(report.issues.len(), 1);
    }

    #[test]
    fn ssl_error_shape_matches_contract() {
        let json = serde_json::to_value(SslReport::probe_error()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": "Erreur de test SSL",
                "score": 0,
                "grade": "F"
            })
        );
    }

    #[test]
    fn web_scan_vulnerability_uses_type_wire_name() {
        let json = r#"{
            "riskLevel": "Medium", "totalFound": 1, "checksPerformed": 12,
            "vulnerabilities": [{"type":"Missing CSP","severity":"MEDIUM","description":"..."}]
        }"#;
        let report: WebScanReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.vulnerabilities[0].kind, "Missing CSP");

        let back = serde_json::to_value(&report).unwrap();
        assert_eq!(back["vulnerabilities"][0]["type"], "Missing CSP");
    }

    #[test]
    fn port_scan_error_zeroes_statistics_and_keeps_target() {
        let report = PortScanReport::scan_error("intranet.local");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": "Erreur de scan de ports",
                "target": "intranet.local",
                "openPorts": [],
                "statistics": {"totalScanned": 0, "openPorts": 0, "closedPorts": 0}
            })
        );
    }

    #[test]
    fn capture_report_wire_names() {
        let report = CaptureReport {
            interface: "eth0".into(),
            duration: "5 minutes".into(),
            total_packets: 4242,
            protocols: vec![ProtocolCount {
                name: "DNS".into(),
                count: 120,
            }],
            top_talkers: vec!["192.168.1.1".into()],
            suspicious_activity: vec![],
        };
        let json = serde_json::to_value(ResultEnvelope::Capture(report)).unwrap();
        assert_eq!(json["totalPackets"], 4242);
        assert_eq!(json["topTalkers"][0], "192.168.1.1");
        assert_eq!(json["suspiciousActivity"], serde_json::json!([]));
    }
}
