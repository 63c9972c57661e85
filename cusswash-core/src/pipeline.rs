// cusswash-core/src/pipeline.rs
//! The three-pass sanitize pipeline.
//!
//! A phrase flows through three fixed passes, each taking and returning an
//! owned working string:
//!
//! 1. **Space-insertion pass**: collapses whitespace runs, then hunts for
//!    dictionary words spelled with spaces between their letters.
//! 2. **Concurrent-letter pass**: collapses elongated tokens and masks
//!    those that normalize to a dictionary entry.
//! 3. **Symbol pass**: rewrites obfuscation symbols word by word and masks
//!    words whose normalized form is a dictionary entry.
//!
//! Symbol replacement and lowercasing are confined to a byte-aligned
//! "shadow" of the phrase used only for matching; the returned phrase is
//! altered by masks and whitespace collapsing alone, so clean text passes
//! through byte for byte.
//!
//! License: MIT OR Apache-2.0

use log::{debug, trace};

use crate::candidates::spaced_variants;
use crate::collapse::collapse_whitespace_runs;
use crate::matcher;
use crate::symbols;
use crate::wordlist::WordList;

/// Applies the sanitize passes to whole phrases.
///
/// The word list is immutable for the sanitizer's lifetime, so one instance
/// can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    words: WordList,
}

impl Sanitizer {
    pub fn new(words: WordList) -> Self {
        Self { words }
    }

    /// The dictionary this sanitizer matches against.
    pub fn word_list(&self) -> &WordList {
        &self.words
    }

    /// Sanitizes one phrase, masking every detected profane word with a run
    /// of asterisks equal in length to the matched dictionary entry.
    /// Non-profane text passes through unchanged, except that runs of
    /// identical whitespace characters are collapsed.
    pub fn sanitize(&self, phrase: &str) -> String {
        let out = self.sanitize_spaced(phrase);
        let out = self.sanitize_elongated(&out);
        let out = self.sanitize_symbols(&out);
        debug!("Sanitized phrase: {:?} -> {:?}", phrase, out);
        out
    }

    /// Space-insertion pass. For every dictionary word, every spacing
    /// variant is searched in the matching shadow; each hit masks the
    /// matched range with asterisks equal to the variant's space-stripped
    /// length, and the search resumes past the mask until no occurrence is
    /// left. The working phrase is shared across all words and variants, so
    /// later replacements see earlier masks.
    fn sanitize_spaced(&self, phrase: &str) -> String {
        let mut out = collapse_whitespace_runs(phrase);
        let mut shadow = matching_shadow(&out);

        for word in self.words.words() {
            for candidate in spaced_variants(word) {
                let mut search_from = 0;
                while let Some(pos) = shadow[search_from..].find(&candidate) {
                    let start = search_from + pos;
                    trace!("Spaced candidate {:?} matched at byte {}.", candidate, start);
                    let end = start + candidate.len();
                    let mask = matcher::mask(word.chars().count());
                    search_from = start + mask.len();
                    out.replace_range(start..end, &mask);
                    shadow = matching_shadow(&out);
                }
            }
        }
        out
    }

    /// Concurrent-letter pass. Splits on single spaces and runs each token
    /// through the matcher; a match replaces the first occurrence of the
    /// original token text anywhere in the phrase, which redacts an earlier
    /// duplicate of the token rather than the token's own position.
    fn sanitize_elongated(&self, phrase: &str) -> String {
        let mut out = phrase.to_string();
        for token in phrase.split(' ') {
            if token.is_empty() {
                continue;
            }
            let outcome = matcher::match_token(&self.words, token);
            if outcome.is_sanitized {
                trace!("Elongated token {:?} normalized to {:?}.", token, outcome.normalized);
                out = out.replacen(token, &outcome.sanitized, 1);
            }
        }
        out
    }

    /// Symbol pass. Words without any symbol replacement are skipped; the
    /// rest are matched in their normalized form and masked word-scoped.
    fn sanitize_symbols(&self, phrase: &str) -> String {
        let mut out = phrase.to_string();
        for word in phrase.split(' ') {
            if word.is_empty() {
                continue;
            }
            let replaced = symbols::normalize_word(word);
            if replaced == word {
                continue;
            }
            let outcome = matcher::match_token(&self.words, &replaced);
            if outcome.is_sanitized {
                trace!("Symbol word {:?} normalized to {:?}.", word, outcome.normalized);
                out = out.replacen(word, &outcome.sanitized, 1);
            }
        }
        out
    }
}

/// One-shot convenience wrapper for non-interactive use.
pub fn sanitize_phrase(words: WordList, phrase: &str) -> String {
    Sanitizer::new(words).sanitize(phrase)
}

/// The normalized view a phrase is matched against: word-scoped symbol
/// replacement, then ASCII lowercasing. Both steps preserve byte length, so
/// every byte offset in the shadow is valid in the real phrase.
fn matching_shadow(phrase: &str) -> String {
    symbols::normalize_phrase(phrase).to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitizer() -> Sanitizer {
        Sanitizer::new(WordList::from_words(vec![
            "shit".to_string(),
            "fuck".to_string(),
        ]))
    }

    #[test]
    fn shadow_offsets_line_up_with_the_phrase() {
        let phrase = "Sh!t Happens";
        let shadow = matching_shadow(phrase);
        assert_eq!(shadow, "shit happens");
        assert_eq!(shadow.len(), phrase.len());
    }

    #[test]
    fn spaced_pass_masks_with_space_stripped_length() {
        assert_eq!(sanitizer().sanitize_spaced("s h i t happens"), "**** happens");
    }

    #[test]
    fn spaced_pass_masks_every_occurrence_of_a_candidate() {
        assert_eq!(sanitizer().sanitize_spaced("s h i t s h i t"), "**** ****");
        assert_eq!(sanitizer().sanitize_spaced("shit ok shit"), "**** ok ****");
    }

    #[test]
    fn elongated_pass_redacts_the_earliest_duplicate_first() {
        // Each token's match replaces the first occurrence of its text.
        assert_eq!(sanitizer().sanitize_elongated("shiit shiit"), "**** ****");
    }

    #[test]
    fn symbol_pass_skips_words_without_replacements() {
        assert_eq!(sanitizer().sanitize_symbols("nothing here"), "nothing here");
    }

    #[test]
    fn empty_word_list_is_the_identity_transform() {
        let sanitizer = Sanitizer::new(WordList::default());
        assert_eq!(sanitizer.sanitize("$hit fuuuck s h i t"), "$hit fuuuck s h i t");
    }
}
