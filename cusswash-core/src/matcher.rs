// cusswash-core/src/matcher.rs
//! Single-token matching against the profanity dictionary.
//!
//! A token is normalized (lowercased, letter runs collapsed to fixpoint) and
//! looked up against the word list by exact equality. Case is normalized
//! here, once, so every dictionary lookup in the pipeline sees the same
//! casing rules.
//!
//! License: MIT OR Apache-2.0

use crate::collapse::collapse_letter_runs;
use crate::wordlist::WordList;

/// Outcome of matching one token against the dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    /// True when the normalized token equals a dictionary entry.
    pub is_sanitized: bool,
    /// The token with the match masked. Empty when `is_sanitized` is false.
    pub sanitized: String,
    /// The token after lowercasing and letter-run collapsing. Always
    /// populated, even when nothing matched.
    pub normalized: String,
}

/// An asterisk run of the given length.
pub fn mask(len: usize) -> String {
    "*".repeat(len)
}

/// Normalizes `token` and checks it against `list`.
///
/// On a match the mask length equals the matched entry's length, not the
/// token's. If the entry occurs literally inside the original token, its
/// first occurrence is spliced over; a token whose letters only collapse to
/// the entry (e.g. "shiiit") does not contain it literally, and is replaced
/// wholesale by the mask. Either way the visible mask can be shorter than
/// the token it stands for.
pub fn match_token(list: &WordList, token: &str) -> MatchOutcome {
    let lowered = token.to_ascii_lowercase();
    let normalized = collapse_letter_runs(&lowered);

    let Some(entry) = list.find(&normalized) else {
        return MatchOutcome {
            is_sanitized: false,
            sanitized: String::new(),
            normalized,
        };
    };

    let mask = mask(entry.chars().count());
    let sanitized = match lowered.find(entry) {
        Some(start) => {
            let mut out = String::with_capacity(token.len());
            out.push_str(&token[..start]);
            out.push_str(&mask);
            out.push_str(&token[start + entry.len()..]);
            out
        }
        None => mask,
    };

    MatchOutcome {
        is_sanitized: true,
        sanitized,
        normalized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> WordList {
        WordList::from_words(vec!["shit".to_string(), "fuck".to_string()])
    }

    #[test]
    fn clean_token_is_not_sanitized() {
        let outcome = match_token(&list(), "water");
        assert!(!outcome.is_sanitized);
        assert_eq!(outcome.sanitized, "");
        assert_eq!(outcome.normalized, "water");
    }

    #[test]
    fn clean_token_with_a_run_is_collapsed_but_not_sanitized() {
        let outcome = match_token(&list(), "hello");
        assert!(!outcome.is_sanitized);
        assert_eq!(outcome.normalized, "helo");
    }

    #[test]
    fn normalized_is_populated_without_a_match() {
        let outcome = match_token(&list(), "loooong");
        assert!(!outcome.is_sanitized);
        assert_eq!(outcome.normalized, "long");
    }

    #[test]
    fn exact_entry_is_fully_masked() {
        let outcome = match_token(&list(), "shit");
        assert!(outcome.is_sanitized);
        assert_eq!(outcome.sanitized, "****");
        assert_eq!(outcome.normalized, "shit");
    }

    #[test]
    fn case_is_normalized_before_lookup() {
        let outcome = match_token(&list(), "ShIt");
        assert!(outcome.is_sanitized);
        assert_eq!(outcome.sanitized, "****");
    }

    #[test]
    fn elongated_token_is_replaced_wholesale() {
        // "shiiit" collapses to the entry but does not contain it literally.
        let outcome = match_token(&list(), "shiiit");
        assert!(outcome.is_sanitized);
        assert_eq!(outcome.sanitized, "****");
        assert_eq!(outcome.normalized, "shit");
    }

    #[test]
    fn mask_length_follows_the_entry_not_the_token() {
        // "sshit" collapses to "shit" and contains it at offset 1; only
        // the entry's span is masked, leaving the stray leading letter.
        let outcome = match_token(&list(), "sshit");
        assert!(outcome.is_sanitized);
        assert_eq!(outcome.sanitized, "s****");
    }

    #[test]
    fn empty_list_never_matches() {
        let outcome = match_token(&WordList::default(), "fuck");
        assert!(!outcome.is_sanitized);
    }
}
