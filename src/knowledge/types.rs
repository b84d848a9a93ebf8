use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Advisory severity label attached to a condition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    /// Severe or higher.
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

// ---------------------------------------------------------------------------
// ConditionRecord
// ---------------------------------------------------------------------------

/// One named condition with its symptom phrases and static advice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionRecord {
    pub name: String,
    /// Lowercase phrases, possibly multi-word. Order is preserved.
    pub symptoms: Vec<String>,
    #[serde(rename = "info")]
    pub description: String,
    #[serde(rename = "recommendations")]
    pub recommendation: String,
    pub severity: Severity,
}

// ---------------------------------------------------------------------------
// KnowledgeBase
// ---------------------------------------------------------------------------

/// Ordered, read-only table of conditions plus the emergency phrase list.
///
/// Definition order is significant: the matcher breaks ties in favour of
/// the condition defined first.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    conditions: Vec<ConditionRecord>,
    emergency_phrases: Vec<String>,
}

/// On-disk shape of a knowledge base file.
#[derive(Debug, Deserialize)]
struct KnowledgeBaseFile {
    conditions: Vec<ConditionRecord>,
    emergency_phrases: Vec<String>,
}

impl KnowledgeBase {
    /// Build a validated knowledge base.
    pub fn new(
        conditions: Vec<ConditionRecord>,
        emergency_phrases: Vec<String>,
    ) -> Result<Self, KnowledgeError> {
        if conditions.is_empty() {
            return Err(KnowledgeError::Empty);
        }

        let mut seen = HashSet::with_capacity(conditions.len());
        for condition in &conditions {
            let key = condition.name.trim().to_lowercase();
            if key.is_empty() {
                return Err(KnowledgeError::BlankName);
            }
            if !seen.insert(key) {
                return Err(KnowledgeError::DuplicateCondition(condition.name.clone()));
            }
            if condition.symptoms.is_empty() {
                return Err(KnowledgeError::NoSymptoms(condition.name.clone()));
            }
            let mut phrases = HashSet::with_capacity(condition.symptoms.len());
            for phrase in &condition.symptoms {
                validate_phrase(phrase)?;
                if !phrases.insert(phrase.as_str()) {
                    return Err(KnowledgeError::DuplicatePhrase(
                        condition.name.clone(),
                        phrase.clone(),
                    ));
                }
            }
        }

        for phrase in &emergency_phrases {
            validate_phrase(phrase)?;
        }

        Ok(Self {
            conditions,
            emergency_phrases,
        })
    }

    /// Assemble without validation. Only for tables checked by tests.
    pub(super) fn from_parts(
        conditions: Vec<ConditionRecord>,
        emergency_phrases: Vec<String>,
    ) -> Self {
        Self {
            conditions,
            emergency_phrases,
        }
    }

    /// Load and validate a knowledge base from a JSON file.
    pub fn load(path: &Path) -> Result<Self, KnowledgeError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| KnowledgeError::Read(path.display().to_string(), e.to_string()))?;
        let file: KnowledgeBaseFile = serde_json::from_str(&json)
            .map_err(|e| KnowledgeError::Parse(path.display().to_string(), e.to_string()))?;

        let kb = Self::new(file.conditions, file.emergency_phrases)?;
        tracing::info!(
            path = %path.display(),
            conditions = kb.conditions.len(),
            emergency_phrases = kb.emergency_phrases.len(),
            "Knowledge base loaded"
        );
        Ok(kb)
    }

    /// Conditions in definition order.
    pub fn conditions(&self) -> &[ConditionRecord] {
        &self.conditions
    }

    /// Emergency phrases in definition order.
    pub fn emergency_phrases(&self) -> &[String] {
        &self.emergency_phrases
    }

    /// Case-insensitive lookup by condition name.
    pub fn get(&self, name: &str) -> Option<&ConditionRecord> {
        let wanted = name.trim().to_lowercase();
        self.conditions
            .iter()
            .find(|c| c.name.to_lowercase() == wanted)
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// Phrases are matched against trimmed, lowercased input, so anything
/// else could never match.
fn validate_phrase(phrase: &str) -> Result<(), KnowledgeError> {
    if phrase.trim().is_empty() || phrase.trim() != phrase || phrase.to_lowercase() != phrase {
        return Err(KnowledgeError::InvalidPhrase(phrase.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// KnowledgeError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Failed to read knowledge base {0}: {1}")]
    Read(String, String),

    #[error("Failed to parse knowledge base {0}: {1}")]
    Parse(String, String),

    #[error("Knowledge base has no conditions")]
    Empty,

    #[error("Condition name is blank")]
    BlankName,

    #[error("Duplicate condition name: {0}")]
    DuplicateCondition(String),

    #[error("Condition has no symptom phrases: {0}")]
    NoSymptoms(String),

    #[error("Condition {0} lists phrase {1:?} twice")]
    DuplicatePhrase(String, String),

    #[error("Phrase must be non-empty, trimmed and lowercase: {0:?}")]
    InvalidPhrase(String),
}
