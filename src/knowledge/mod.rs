//! Static knowledge base: conditions with symptom phrases, plus the
//! emergency phrase list. Read-only after startup.

pub mod builtin;
pub mod types;

pub use builtin::BUILTIN;
pub use types::{ConditionRecord, KnowledgeBase, KnowledgeError, Severity};
