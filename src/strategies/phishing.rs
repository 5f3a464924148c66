//! Phishing awareness scenarios (local, deterministic).
//!
//! A fixed template × difficulty table of educational example messages. The
//! result is an opaque string shown to the user for awareness training; it
//! is never executed or sent anywhere.

use async_trait::async_trait;

use crate::catalog::ToolDescriptor;
use crate::category::Category;
use crate::engine::envelope::ResultEnvelope;
use crate::engine::input::ExecutionInput;
use crate::engine::traits::ToolStrategy;

pub const SCENARIO_NOT_FOUND: &str = "Scénario non trouvé";

/// Scenario lookup. Unknown `(template, difficulty)` pairs return the literal
/// not-found message rather than an error.
pub fn scenario(template: &str, difficulty: &str) -> &'static str {
    match (template, difficulty) {
        ("banking", "easy") => "Votre compte sera suspendu. Cliquez ici pour vérifier.",
        ("banking", "medium") => "Activité suspecte détectée. Confirmez votre identité.",
        ("banking", "hard") => "Mise à jour de sécurité requise pour votre compte bancaire.",
        ("social", "easy") => "Vous avez reçu un message privé. Cliquez pour voir.",
        ("social", "medium") => "Votre compte a été signalé. Vérifiez maintenant.",
        ("social", "hard") => "Nouvelle politique de confidentialité à accepter.",
        ("work", "easy") => "Votre mot de passe expire aujourd'hui. Changez-le maintenant.",
        ("work", "medium") => "Document urgent nécessitant votre signature électronique.",
        ("work", "hard") => "Mise à jour du système RH - Action requise.",
        _ => SCENARIO_NOT_FOUND,
    }
}

pub struct PhishingScenarioStrategy;

#[async_trait]
impl ToolStrategy for PhishingScenarioStrategy {
    fn category(&self) -> Option<Category> {
        Some(Category::Phishing)
    }

    async fn execute(
        &self,
        _descriptor: &ToolDescriptor,
        input: &ExecutionInput,
    ) -> ResultEnvelope {
        let template = input.str_or("template", "banking");
        let difficulty = input.str_or("difficulty", "medium");
        ResultEnvelope::Phishing(scenario(&template, &difficulty).to_string())
    }
}
