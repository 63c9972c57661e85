// cusswash-core/src/symbols.rs
//! Obfuscation-symbol normalization.
//!
//! A fixed table maps symbols that commonly stand in for letters back to the
//! letter they imitate. A symbol in the last position of a word is left
//! alone: a trailing "$" or "!" is presumed to be punctuation rather than an
//! obfuscation. The trailing-position check is evaluated against the word,
//! never against the whole phrase.
//!
//! Both transforms map single-byte ASCII symbols to single-byte ASCII
//! letters, so output byte offsets always equal input byte offsets. The
//! pipeline's shadow matching depends on that.
//!
//! License: MIT OR Apache-2.0

/// A single symbol-to-letter substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolMapping {
    /// The obfuscation symbol as it appears in input text.
    pub symbol: char,
    /// The letter the symbol stands in for.
    pub letter: char,
}

/// The active substitution table, in iteration order.
pub const SYMBOL_MAPPINGS: &[SymbolMapping] = &[
    SymbolMapping { symbol: '$', letter: 's' },
    SymbolMapping { symbol: '!', letter: 'i' },
];

fn mapping_for(c: char) -> Option<&'static SymbolMapping> {
    SYMBOL_MAPPINGS.iter().find(|m| m.symbol == c)
}

/// Replaces every mapped symbol in `word` with its letter, except when the
/// symbol is the word's last character.
pub fn normalize_word(word: &str) -> String {
    let char_count = word.chars().count();
    word.chars()
        .enumerate()
        .map(|(i, c)| {
            if i + 1 == char_count {
                return c;
            }
            mapping_for(c).map_or(c, |m| m.letter)
        })
        .collect()
}

/// Applies [`normalize_word`] to each space-separated word of a phrase,
/// preserving the separators.
pub fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(normalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_mapped_symbols() {
        assert_eq!(normalize_word("$hit"), "shit");
        assert_eq!(normalize_word("sh!t"), "shit");
        assert_eq!(normalize_word("$h!t"), "shit");
    }

    #[test]
    fn trailing_symbol_is_left_as_punctuation() {
        assert_eq!(normalize_word("wow!"), "wow!");
        assert_eq!(normalize_word("cost$"), "cost$");
    }

    #[test]
    fn single_symbol_word_is_its_own_last_character() {
        assert_eq!(normalize_word("$"), "$");
        assert_eq!(normalize_word("!"), "!");
    }

    #[test]
    fn unmapped_characters_pass_through() {
        assert_eq!(normalize_word("he#llo"), "he#llo");
    }

    #[test]
    fn phrase_normalization_is_word_scoped() {
        // The "!" ends its word, so it stays, even though more of the
        // phrase follows it.
        assert_eq!(normalize_phrase("sh!t happens!"), "shit happens!");
        assert_eq!(normalize_phrase("no! $top"), "no! stop");
    }

    #[test]
    fn phrase_normalization_preserves_byte_length() {
        let phrase = "$h!t co$t$ money!";
        assert_eq!(normalize_phrase(phrase).len(), phrase.len());
    }
}
