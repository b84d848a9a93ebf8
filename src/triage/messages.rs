//! Static advisory content returned alongside triage outcomes.

use super::types::{EmergencyAdvice, EmergencyInfo, NoMatchAdvice};

pub const EMERGENCY_MESSAGE: &str =
    "I've detected symptoms that may require immediate medical attention.";

pub const EMERGENCY_TITLE: &str = "EMERGENCY - Seek Immediate Help";

pub static EMERGENCY_INSTRUCTIONS: &[&str] = &[
    "Call 911 or your local emergency number immediately",
    "Go to the nearest emergency room",
    "Do NOT wait or try to treat this at home",
    "If you're experiencing a mental health crisis, call 988 (Suicide & Crisis Lifeline)",
];

pub const NO_MATCH_MESSAGE: &str =
    "I couldn't match your symptoms to a specific condition in my database.";

pub static NO_MATCH_SUGGESTIONS: &[&str] = &[
    "Monitor your symptoms for any changes",
    "Keep track of when symptoms started and their severity",
    "Consider scheduling an appointment with your doctor",
    "Call your healthcare provider if symptoms worsen",
];

pub fn emergency_advice() -> EmergencyAdvice {
    EmergencyAdvice {
        message: EMERGENCY_MESSAGE,
        emergency_info: EmergencyInfo {
            title: EMERGENCY_TITLE,
            instructions: EMERGENCY_INSTRUCTIONS,
        },
    }
}

pub fn no_match_advice() -> NoMatchAdvice {
    NoMatchAdvice {
        message: NO_MATCH_MESSAGE,
        suggestions: NO_MATCH_SUGGESTIONS,
    }
}
