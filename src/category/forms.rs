//! Per-category input form contracts.
//!
//! The registry resolves a category to the field set its form collects. The
//! shells (CLI and gateway) fill declared defaults, then validate before
//! dispatch; a [`ValidationError`] is surfaced inline and the strategy never
//! runs. Select membership is not validated: the phishing
//! strategy's own "Scénario non trouvé" fallback covers unknown combinations.

use super::Category;
use crate::engine::input::{ExecutionInput, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Integer constrained to `min..=max`, pre-filled with `default`.
    Int { min: i64, max: i64, default: i64 },
    Text {
        placeholder: &'static str,
        required: bool,
    },
    Email,
    Url,
    Select {
        options: &'static [&'static str],
        default: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn int_field(name: &'static str, label: &'static str) -> FormField {
    FormField {
        name,
        label,
        kind: FieldKind::Int {
            min: 1,
            max: 10,
            default: 5,
        },
    }
}

const PASSWORD_FORM: &[FormField] = &[];

const RISK_FORM: &[FormField] = &[
    int_field("network", "Sécurité réseau (1-10)"),
    int_field("users", "Formation utilisateurs (1-10)"),
    int_field("data", "Protection des données (1-10)"),
    int_field("compliance", "Conformité (1-10)"),
];

const PHISHING_FORM: &[FormField] = &[
    FormField {
        name: "template",
        label: "Type de scénario",
        kind: FieldKind::Select {
            options: &["banking", "social", "work"],
            default: "banking",
        },
    },
    FormField {
        name: "difficulty",
        label: "Difficulté",
        kind: FieldKind::Select {
            options: &["easy", "medium", "hard"],
            default: "medium",
        },
    },
];

const LEAK_FORM: &[FormField] = &[FormField {
    name: "email",
    label: "Adresse email",
    kind: FieldKind::Email,
}];

const HEADERS_FORM: &[FormField] = &[FormField {
    name: "url",
    label: "URL du site web",
    kind: FieldKind::Url,
}];

const SSL_FORM: &[FormField] = &[FormField {
    name: "domain",
    label: "Nom de domaine",
    kind: FieldKind::Text {
        placeholder: "example.com",
        required: true,
    },
}];

const WEB_SECURITY_FORM: &[FormField] = &[
    FormField {
        name: "target",
        label: "URL cible",
        kind: FieldKind::Url,
    },
    FormField {
        name: "scanType",
        label: "Type de scan",
        kind: FieldKind::Select {
            options: &["Security Headers & Configuration", "Full Security Audit"],
            default: "Security Headers & Configuration",
        },
    },
];

const PENTEST_FORM: &[FormField] = &[FormField {
    name: "target",
    label: "Cible",
    kind: FieldKind::Text {
        placeholder: "192.168.1.100",
        required: true,
    },
}];

const NETWORK_SECURITY_FORM: &[FormField] = &[
    FormField {
        name: "target",
        label: "Cible (domaine ou IP)",
        kind: FieldKind::Text {
            placeholder: "example.com",
            required: true,
        },
    },
    FormField {
        name: "scanType",
        label: "Type de scan",
        kind: FieldKind::Select {
            options: &["Common Ports Scan", "Full Port Scan"],
            default: "Common Ports Scan",
        },
    },
];

const NETWORK_ANALYSIS_FORM: &[FormField] = &[
    FormField {
        name: "interface",
        label: "Interface réseau",
        kind: FieldKind::Select {
            options: &["eth0", "wlan0", "lo"],
            default: "eth0",
        },
    },
    FormField {
        name: "duration",
        label: "Durée de capture",
        kind: FieldKind::Select {
            options: &["1 minute", "5 minutes", "10 minutes", "30 minutes"],
            default: "5 minutes",
        },
    },
];

/// The form contract for a category.
pub fn form_contract(category: Category) -> &'static [FormField] {
    match category {
        Category::Password => PASSWORD_FORM,
        Category::Risk => RISK_FORM,
        Category::Phishing => PHISHING_FORM,
        Category::Leak => LEAK_FORM,
        Category::Headers => HEADERS_FORM,
        Category::Ssl => SSL_FORM,
        Category::WebSecurity => WEB_SECURITY_FORM,
        Category::PenetrationTesting => PENTEST_FORM,
        Category::NetworkSecurity => NETWORK_SECURITY_FORM,
        Category::NetworkAnalysis => NETWORK_ANALYSIS_FORM,
    }
}

/// Fill declared defaults for fields the caller left out.
pub fn apply_defaults(fields: &[FormField], input: &mut ExecutionInput) {
    for field in fields {
        if input.get(field.name).is_some() {
            continue;
        }
        match field.kind {
            FieldKind::Int { default, .. } => {
                input.set(field.name, default.to_string());
            }
            FieldKind::Select { default, .. } => {
                input.set(field.name, default);
            }
            FieldKind::Text { .. } | FieldKind::Email | FieldKind::Url => {}
        }
    }
}

/// Validate `input` against a form contract.
pub fn validate(fields: &[FormField], input: &ExecutionInput) -> Result<(), ValidationError> {
    for field in fields {
        match field.kind {
            FieldKind::Int { min, max, .. } => {
                input.int_in_range(field.name, min, max)?;
            }
            FieldKind::Text { required, .. } => {
                if required {
                    input.required_str(field.name)?;
                }
            }
            FieldKind::Email => {
                let value = input.required_str(field.name)?;
                if !value.contains('@') {
                    return Err(ValidationError::InvalidEmail {
                        field: field.name.to_string(),
                    });
                }
            }
            FieldKind::Url => {
                let value = input.required_str(field.name)?;
                if !value.starts_with("http://") && !value.starts_with("https://") {
                    return Err(ValidationError::InvalidUrl {
                        field: field.name.to_string(),
                    });
                }
            }
            // Unknown select values fall through to the strategy's own
            // fallback handling.
            FieldKind::Select { .. } => {}
        }
    }
    Ok(())
}
