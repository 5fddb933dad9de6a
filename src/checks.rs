//! The three leaf predicates a submission must pass
//!
//! - `is_possible`: letters available in the root word, with multiplicity
//! - `is_original`: not already accepted this round
//! - `is_real`: long enough and spelled correctly according to the oracle

use crate::dictionary::Dictionary;

/// Minimum word length for an accepted submission
pub const MIN_WORD_LENGTH: usize = 3;

/// Length as the oracle measures it (UTF-16 code units).
pub fn encoded_len(word: &str) -> usize {
    word.encode_utf16().count()
}

/// Check that every letter of `candidate` can be taken from `root`, each root
/// letter used at most once. An empty candidate is trivially possible.
pub fn is_possible(root: &str, candidate: &str) -> bool {
    let mut available: Vec<char> = root.to_lowercase().chars().collect();

    for c in candidate.chars() {
        if let Some(pos) = available.iter().position(|&r| r == c) {
            available.remove(pos);
        } else {
            return false;
        }
    }
    true
}

pub fn is_original(used_words: &[String], candidate: &str) -> bool {
    !used_words.iter().any(|word| word == candidate)
}

/// Check the length floor, then ask the oracle about the whole candidate.
///
/// The oracle is not consulted for candidates shorter than `min_length`.
/// An oracle failure counts as "not real".
pub fn is_real<D: Dictionary + ?Sized>(
    candidate: &str,
    min_length: usize,
    language: &str,
    dictionary: &D,
) -> bool {
    if encoded_len(candidate) < min_length {
        return false;
    }

    match dictionary.check_spelling(candidate, language) {
        Ok(misspelled) => misspelled.is_none(),
        Err(e) => {
            log::warn!("Dictionary lookup failed for '{candidate}': {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Span, WordListDictionary};
    use crate::error::Result;
    use std::cell::Cell;

    /// Oracle that counts how often it is asked
    struct CountingDictionary {
        inner: WordListDictionary,
        calls: Cell<usize>,
    }

    impl CountingDictionary {
        fn new(words: &str) -> Self {
            Self {
                inner: WordListDictionary::from_word_list(words, "en"),
                calls: Cell::new(0),
            }
        }
    }

    impl Dictionary for CountingDictionary {
        fn check_spelling(&self, text: &str, language: &str) -> Result<Option<Span>> {
            self.calls.set(self.calls.get() + 1);
            self.inner.check_spelling(text, language)
        }
    }

    #[test]
    fn test_is_possible_simple() {
        assert!(is_possible("eagle", "gale"));
        assert!(is_possible("eagle", "age"));
        assert!(is_possible("silkworm", "work"));
        assert!(!is_possible("eagle", "xyz"));
    }

    #[test]
    fn test_is_possible_respects_multiplicity() {
        // One 'l' in "eagle"
        assert!(!is_possible("eagle", "gall"));
        // Two 'e's in "eagle"
        assert!(is_possible("eagle", "glee"));
        assert!(!is_possible("eagle", "eee"));
    }

    #[test]
    fn test_is_possible_order_does_not_matter() {
        assert!(is_possible("eagle", "elgae"));
        assert!(is_possible("eagle", "eagle"));
    }

    #[test]
    fn test_is_possible_empty_candidate() {
        assert!(is_possible("eagle", ""));
        assert!(is_possible("", ""));
        assert!(!is_possible("", "a"));
    }

    #[test]
    fn test_is_possible_lowercases_root_only() {
        assert!(is_possible("EAGLE", "gale"));
        assert!(!is_possible("eagle", "GALE"));
    }

    #[test]
    fn test_is_original() {
        let used = vec!["gale".to_string(), "age".to_string()];
        assert!(!is_original(&used, "gale"));
        assert!(!is_original(&used, "age"));
        assert!(is_original(&used, "lag"));
        assert!(is_original(&used, "gal"));
        assert!(is_original(&[], "gale"));
    }

    #[test]
    fn test_is_real_accepts_dictionary_word() {
        let dictionary = CountingDictionary::new("gale\nlag");
        assert!(is_real("gale", MIN_WORD_LENGTH, "en", &dictionary));
        assert!(is_real("lag", MIN_WORD_LENGTH, "en", &dictionary));
        assert_eq!(dictionary.calls.get(), 2);
    }

    #[test]
    fn test_is_real_rejects_unknown_word() {
        let dictionary = CountingDictionary::new("gale");
        assert!(!is_real("gael", MIN_WORD_LENGTH, "en", &dictionary));
        assert_eq!(dictionary.calls.get(), 1);
    }

    #[test]
    fn test_is_real_short_circuits_before_oracle() {
        let dictionary = CountingDictionary::new("ag\na");
        assert!(!is_real("ag", MIN_WORD_LENGTH, "en", &dictionary));
        assert!(!is_real("a", MIN_WORD_LENGTH, "en", &dictionary));
        assert!(!is_real("", MIN_WORD_LENGTH, "en", &dictionary));
        assert_eq!(dictionary.calls.get(), 0);
    }

    #[test]
    fn test_is_real_oracle_failure_is_not_real() {
        let dictionary = CountingDictionary::new("gale");
        assert!(!is_real("gale", MIN_WORD_LENGTH, "fr", &dictionary));
        assert_eq!(dictionary.calls.get(), 1);
    }

    #[test]
    fn test_encoded_len_counts_utf16_units() {
        assert_eq!(encoded_len("gale"), 4);
        assert_eq!(encoded_len("é"), 1);
        // One char, two UTF-16 code units
        assert_eq!(encoded_len("\u{1D11E}"), 2);
        assert_eq!("\u{1D11E}".chars().count(), 1);
    }

    #[test]
    fn test_is_real_length_uses_encoded_len() {
        // Two chars but three UTF-16 units, so the oracle is consulted.
        let dictionary = CountingDictionary::new("a\u{10428}");
        assert!(is_real("a\u{10428}", MIN_WORD_LENGTH, "en", &dictionary));
        assert_eq!(dictionary.calls.get(), 1);
    }
}
