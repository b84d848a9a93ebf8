//! Emergency phrase detection.
//!
//! Plain substring containment, no word boundaries: "seizures" and
//! "my chest pain" both trigger. This is intentionally looser than the
//! symptom matcher so that emergencies over-trigger rather than slip by.

/// First phrase, in list order, contained anywhere in `text`.
///
/// `text` is expected to be trimmed and lowercased already.
pub fn first_emergency_phrase<'a>(text: &str, phrases: &'a [String]) -> Option<&'a str> {
    if text.is_empty() {
        return None;
    }
    phrases
        .iter()
        .map(String::as_str)
        .find(|phrase| text.contains(phrase))
}

/// Whether any emergency phrase occurs in `text`.
pub fn is_emergency(text: &str, phrases: &[String]) -> bool {
    first_emergency_phrase(text, phrases).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::BUILTIN;

    fn phrases() -> &'static [String] {
        BUILTIN.emergency_phrases()
    }

    #[test]
    fn detects_phrase_mid_sentence() {
        assert!(is_emergency("my chest pain is bad", phrases()));
    }

    #[test]
    fn detects_apostrophe_phrase() {
        assert!(is_emergency("i can't breathe", phrases()));
    }

    #[test]
    fn substring_without_word_boundary_still_triggers() {
        assert!(is_emergency("she had seizures last night", phrases()));
        assert!(is_emergency("possible foodpoisoning", phrases()));
    }

    #[test]
    fn empty_text_never_matches() {
        assert!(!is_emergency("", phrases()));
        assert_eq!(first_emergency_phrase("", phrases()), None);
    }

    #[test]
    fn ordinary_symptoms_do_not_trigger() {
        assert!(!is_emergency("i have a runny nose and sneezing", phrases()));
        assert!(!is_emergency("purple elephants", phrases()));
    }

    #[test]
    fn first_phrase_follows_list_order() {
        // "crushing chest pain" also contains "chest pain", which is listed first.
        assert_eq!(
            first_emergency_phrase("crushing chest pain", phrases()),
            Some("chest pain")
        );
        assert_eq!(
            first_emergency_phrase("slurred speech and confusion", phrases()),
            Some("confusion")
        );
    }

    #[test]
    fn repeated_calls_agree() {
        let text = "sudden severe headache";
        assert_eq!(is_emergency(text, phrases()), is_emergency(text, phrases()));
    }
}
