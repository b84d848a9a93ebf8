//! Symptom triage: emergency detection, then knowledge-base matching.
//!
//! Both stages are pure functions over normalized text and the read-only
//! knowledge base, so a single engine can be shared by every request.

pub mod emergency;
pub mod engine;
pub mod matcher;
pub mod messages;
pub mod types;

pub use emergency::is_emergency;
pub use engine::{normalize, TriageEngine};
pub use matcher::analyze;
pub use types::{MatchResult, TriageError, TriageOutcome};
