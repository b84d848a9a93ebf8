use serde::Serialize;
use thiserror::Error;

use crate::knowledge::{ConditionRecord, Severity};

/// Best-scoring condition for one request. `match_count` is always > 0.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchResult {
    #[serde(rename = "disease")]
    pub name: String,
    #[serde(rename = "info")]
    pub description: String,
    #[serde(rename = "recommendations")]
    pub recommendation: String,
    pub severity: Severity,
    pub match_count: usize,
}

impl MatchResult {
    pub fn from_record(record: &ConditionRecord, match_count: usize) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            recommendation: record.recommendation.clone(),
            severity: record.severity,
            match_count,
        }
    }
}

/// Fixed urgent-care payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmergencyAdvice {
    pub message: &'static str,
    pub emergency_info: EmergencyInfo,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmergencyInfo {
    pub title: &'static str,
    pub instructions: &'static [&'static str],
}

/// Fixed generic guidance when nothing matched.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NoMatchAdvice {
    pub message: &'static str,
    pub suggestions: &'static [&'static str],
}

/// What a request resolves to. Serialized with a `type` tag.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TriageOutcome {
    Emergency(EmergencyAdvice),
    Diagnosis(MatchResult),
    NoMatch(NoMatchAdvice),
}

impl TriageOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Emergency(_) => "emergency",
            Self::Diagnosis(_) => "diagnosis",
            Self::NoMatch(_) => "no_match",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TriageError {
    #[error("No message provided")]
    EmptyInput,
}
