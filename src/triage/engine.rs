use std::sync::Arc;

use crate::knowledge::KnowledgeBase;

use super::emergency::first_emergency_phrase;
use super::matcher::analyze;
use super::messages::{emergency_advice, no_match_advice};
use super::types::{TriageError, TriageOutcome};

/// Trim and lowercase raw user input.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Composes emergency detection and symptom matching over a shared,
/// read-only knowledge base. Cheap to clone; holds no mutable state.
#[derive(Debug, Clone)]
pub struct TriageEngine {
    knowledge: Arc<KnowledgeBase>,
}

impl TriageEngine {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Resolve one message. Emergency phrases short-circuit matching.
    pub fn triage(&self, raw: &str) -> Result<TriageOutcome, TriageError> {
        let text = normalize(raw);
        if text.is_empty() {
            return Err(TriageError::EmptyInput);
        }

        if let Some(phrase) = first_emergency_phrase(&text, self.knowledge.emergency_phrases()) {
            // Phrase only; the message itself stays out of the logs.
            tracing::warn!(phrase, "Emergency phrase detected");
            return Ok(TriageOutcome::Emergency(emergency_advice()));
        }

        let outcome = match analyze(&text, self.knowledge.conditions()) {
            Some(result) => {
                tracing::info!(
                    condition = %result.name,
                    match_count = result.match_count,
                    "Symptoms matched a condition"
                );
                TriageOutcome::Diagnosis(result)
            }
            None => {
                tracing::info!("No condition matched");
                TriageOutcome::NoMatch(no_match_advice())
            }
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{ConditionRecord, Severity};

    fn builtin_engine() -> TriageEngine {
        TriageEngine::new(Arc::new(KnowledgeBase::builtin()))
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Sore THROAT \n"), "sore throat");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn empty_input_is_rejected() {
        let engine = builtin_engine();
        assert_eq!(engine.triage(""), Err(TriageError::EmptyInput));
        assert_eq!(engine.triage(" \t\n"), Err(TriageError::EmptyInput));
    }

    #[test]
    fn emergency_short_circuits_matching() {
        let engine = builtin_engine();
        let outcome = engine.triage("I can't breathe").unwrap();
        assert!(matches!(outcome, TriageOutcome::Emergency(_)));
    }

    #[test]
    fn emergency_wins_over_symptom_match() {
        // "difficulty breathing" is both an emergency phrase and an asthma symptom.
        let engine = builtin_engine();
        let outcome = engine.triage("wheezing and difficulty breathing").unwrap();
        assert_eq!(outcome.kind(), "emergency");
    }

    #[test]
    fn uppercase_input_matches() {
        let engine = builtin_engine();
        match engine.triage("I have a RUNNY NOSE and Sneezing").unwrap() {
            TriageOutcome::Diagnosis(result) => {
                assert_eq!(result.name, "common cold");
                assert_eq!(result.match_count, 2);
                assert_eq!(result.severity, Severity::Mild);
            }
            other => panic!("expected diagnosis, got {other:?}"),
        }
    }

    #[test]
    fn unknown_symptoms_give_no_match() {
        let engine = builtin_engine();
        let outcome = engine.triage("purple elephants").unwrap();
        assert!(matches!(outcome, TriageOutcome::NoMatch(_)));
    }

    #[test]
    fn custom_knowledge_base_is_used() {
        let kb = KnowledgeBase::new(
            vec![ConditionRecord {
                name: "hay fever".into(),
                symptoms: vec!["itchy eyes".into()],
                description: "Seasonal.".into(),
                recommendation: "Antihistamines.".into(),
                severity: Severity::Mild,
            }],
            vec!["anaphylaxis".into()],
        )
        .unwrap();
        let engine = TriageEngine::new(Arc::new(kb));

        assert_eq!(engine.triage("itchy eyes").unwrap().kind(), "diagnosis");
        assert_eq!(engine.triage("possible anaphylaxis").unwrap().kind(), "emergency");
        // Not an emergency phrase in this table.
        assert_eq!(engine.triage("chest pain").unwrap().kind(), "no_match");
    }

    #[test]
    fn outcome_serializes_with_type_tag() {
        let engine = builtin_engine();

        let json = serde_json::to_value(engine.triage("runny nose, sneezing").unwrap()).unwrap();
        assert_eq!(json["type"], "diagnosis");
        assert_eq!(json["disease"], "common cold");
        assert_eq!(json["severity"], "mild");
        assert_eq!(json["match_count"], 2);
        assert!(json["info"].is_string());
        assert!(json["recommendations"].is_string());

        let json = serde_json::to_value(engine.triage("chest pain").unwrap()).unwrap();
        assert_eq!(json["type"], "emergency");
        assert_eq!(json["emergency_info"]["title"], "EMERGENCY - Seek Immediate Help");
        assert_eq!(json["emergency_info"]["instructions"].as_array().unwrap().len(), 4);

        let json = serde_json::to_value(engine.triage("purple elephants").unwrap()).unwrap();
        assert_eq!(json["type"], "no_match");
        assert_eq!(json["suggestions"].as_array().unwrap().len(), 4);
    }
}
