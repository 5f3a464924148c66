//! Raw execution input collected from a tool form.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Input validation failure, surfaced inline before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("champ requis manquant : {0}")]
    MissingField(String),
    #[error("le champ {field} doit être un entier (reçu \"{value}\")")]
    NotAnInteger { field: String, value: String },
    #[error("le champ {field} doit être entre {min} et {max} (reçu {value})")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("le champ {field} doit être une adresse email valide")]
    InvalidEmail { field: String },
    #[error("le champ {field} doit être une URL http(s)")]
    InvalidUrl { field: String },
}

/// Untyped field-name → string-value mapping produced by a form.
///
/// Values arrive as strings regardless of the field's declared kind; numeric
/// fields are parsed as integers on access, mirroring how the form layer
/// submits them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ExecutionInput(HashMap<String, String>);

impl ExecutionInput {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) -> &mut Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// The field's value, or `default` when absent or blank.
    pub fn str_or(&self, field: &str, default: &str) -> String {
        match self.get(field) {
            Some(value) if !value.trim().is_empty() => value.to_string(),
            _ => default.to_string(),
        }
    }

    pub fn required_str(&self, field: &str) -> Result<&str, ValidationError> {
        match self.get(field) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ValidationError::MissingField(field.to_string())),
        }
    }

    /// Parse the field as an integer and reject values outside `min..=max`.
    pub fn int_in_range(
        &self,
        field: &str,
        min: i64,
        max: i64,
    ) -> Result<i64, ValidationError> {
        let raw = self.required_str(field)?;
        let value: i64 = raw
            .trim()
            .parse()
            .map_err(|_| ValidationError::NotAnInteger {
                field: field.to_string(),
                value: raw.to_string(),
            })?;
        if value < min || value > max {
            return Err(ValidationError::OutOfRange {
                field: field.to_string(),
                value,
                min,
                max,
            });
        }
        Ok(value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_or_falls_back_on_missing_and_blank() {
        let mut input = ExecutionInput::new();
        input.set("target", "   ");
        assert_eq!(input.str_or("target", "example.com"), "example.com");
        assert_eq!(input.str_or("absent", "x"), "x");
        input.set("target", "10.0.0.1");
        assert_eq!(input.str_or("target", "example.com"), "10.0.0.1");
    }

    #[test]
    fn required_str_rejects_missing() {
        let input = ExecutionInput::new();
        assert_eq!(
            input.required_str("email"),
            Err(ValidationError::MissingField("email".into()))
        );
    }

    #[test]
    fn int_in_range_parses_and_bounds() {
        let mut input = ExecutionInput::new();
        input.set("network", "7");
        assert_eq!(input.int_in_range("network", 1, 10), Ok(7));

        input.set("network", "11");
        assert_eq!(
            input.int_in_range("network", 1, 10),
            Err(ValidationError::OutOfRange {
                field: "network".into(),
                value: 11,
                min: 1,
                max: 10
            })
        );

        input.set("network", "five");
        assert!(matches!(
            input.int_in_range("network", 1, 10),
            Err(ValidationError::NotAnInteger { .. })
        ));
    }

    #[test]
    fn serde_is_a_transparent_map() {
        let input = ExecutionInput::from_pairs([("email", "a@b.fr")]);
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"email":"a@b.fr"}"#);
        let back: ExecutionInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }
}
