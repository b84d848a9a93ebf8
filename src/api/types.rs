use crate::triage::TriageEngine;

/// Shared context for all routes. Cloned per request; the engine holds
/// the knowledge base behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ApiContext {
    pub engine: TriageEngine,
    /// Longest accepted message, in characters.
    pub max_message_chars: usize,
}

impl ApiContext {
    pub fn new(engine: TriageEngine, max_message_chars: usize) -> Self {
        Self {
            engine,
            max_message_chars,
        }
    }
}
