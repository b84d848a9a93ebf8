//! Symptom matching with whole-phrase boundaries.
//!
//! A phrase counts only when it is bounded on both sides by a non-word
//! character or the edge of the text. Phrases are literal text, so
//! punctuation inside a phrase has no special meaning.

use crate::knowledge::ConditionRecord;

use super::types::MatchResult;

/// Word characters: Unicode alphanumerics and underscore.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn boundary_before(text: &str, start: usize) -> bool {
    text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !is_word_char(c))
}

fn boundary_after(text: &str, end: usize) -> bool {
    text[end..].chars().next().map_or(true, |c| !is_word_char(c))
}

/// Whether `phrase` occurs in `text` as a whole phrase.
///
/// Every occurrence is tried, overlapping ones included, so a rejected
/// first hit does not hide a valid later one.
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }

    let mut from = 0;
    while let Some(offset) = text[from..].find(phrase) {
        let start = from + offset;
        let end = start + phrase.len();
        if boundary_before(text, start) && boundary_after(text, end) {
            return true;
        }
        // Step one char past this hit.
        from = start + text[start..].chars().next().map_or(1, char::len_utf8);
    }
    false
}

/// Number of the record's symptom phrases present in `text`.
pub fn count_matches(text: &str, record: &ConditionRecord) -> usize {
    record
        .symptoms
        .iter()
        .filter(|phrase| contains_phrase(text, phrase))
        .count()
}

/// Best-scoring condition for `text`, or `None` when nothing matches.
///
/// Conditions are scanned in definition order and the leader is replaced
/// only on a strictly higher count, so ties go to the earlier condition.
pub fn analyze(text: &str, conditions: &[ConditionRecord]) -> Option<MatchResult> {
    let mut best: Option<(&ConditionRecord, usize)> = None;

    for record in conditions {
        let count = count_matches(text, record);
        if count == 0 {
            continue;
        }
        tracing::debug!(condition = %record.name, match_count = count, "Condition matched");

        if best.map_or(true, |(_, top)| count > top) {
            best = Some((record, count));
        }
    }

    best.map(|(record, count)| MatchResult::from_record(record, count))
}
