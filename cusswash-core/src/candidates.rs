// cusswash-core/src/candidates.rs
//! Spaced-variant generation for dictionary words.
//!
//! A profane word of n characters has n-1 gaps between adjacent characters,
//! and each gap independently receives either nothing or a single space,
//! giving 2^(n-1) variants ("shit", "s hit", "sh it", "s h it", ...). The
//! pipeline scans the phrase for every variant, so spaced-out evasions are
//! caught no matter how many spaces were inserted or where.
//!
//! Variants are produced lazily by an iterator rather than materialized,
//! which keeps the exponential candidate space off the heap.
//!
//! License: MIT OR Apache-2.0

/// Lazy iterator over every spacing variant of a word.
///
/// Each yielded variant, with its spaces removed, equals the original word.
/// The first variant is always the unspaced word itself. The empty word
/// yields nothing.
#[derive(Debug, Clone)]
pub struct SpacedVariants {
    chars: Vec<char>,
    mask: u64,
    count: u64,
}

/// Returns the spacing variants of `word` in gap order: bit i of the
/// internal counter controls the gap after character i, lowest gap first.
pub fn spaced_variants(word: &str) -> SpacedVariants {
    let chars: Vec<char> = word.chars().collect();
    let gaps = chars.len().saturating_sub(1) as u32;
    // One counter bit per gap. Entries past 64 characters are rejected at
    // load time; anything longer that reaches here yields no variants
    // instead of a wrapped count.
    let count = if chars.is_empty() {
        0
    } else {
        1u64.checked_shl(gaps).unwrap_or(0)
    };
    SpacedVariants { chars, mask: 0, count }
}

impl Iterator for SpacedVariants {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.mask >= self.count {
            return None;
        }
        let mut variant = String::with_capacity(self.chars.len() * 2);
        for (i, &c) in self.chars.iter().enumerate() {
            variant.push(c);
            if i + 1 < self.chars.len() && (self.mask >> i) & 1 == 1 {
                variant.push(' ');
            }
        }
        self.mask += 1;
        Some(variant)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.mask) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SpacedVariants {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_character_word_yields_itself() {
        let variants: Vec<String> = spaced_variants("a").collect();
        assert_eq!(variants, vec!["a"]);
    }

    #[test]
    fn empty_word_yields_nothing() {
        assert_eq!(spaced_variants("").count(), 0);
    }

    #[test]
    fn overlong_word_yields_nothing_instead_of_a_wrapped_count() {
        // 65 characters is 64 gaps, one past what the counter can hold.
        let word = "a".repeat(65);
        assert_eq!(spaced_variants(&word).count(), 0);
        // The longest admissible entry still counts its variants exactly.
        let word = "a".repeat(64);
        assert_eq!(spaced_variants(&word).len(), 1usize << 63);
    }

    #[test]
    fn variant_count_is_two_to_the_gaps() {
        assert_eq!(spaced_variants("ab").len(), 2);
        assert_eq!(spaced_variants("shit").len(), 8);
        assert_eq!(spaced_variants("wanker").len(), 32);
    }

    #[test]
    fn first_variant_is_the_unspaced_word() {
        assert_eq!(spaced_variants("shit").next().as_deref(), Some("shit"));
    }

    #[test]
    fn gap_order_matches_recursive_expansion() {
        let variants: Vec<String> = spaced_variants("abc").collect();
        assert_eq!(variants, vec!["abc", "a bc", "ab c", "a b c"]);
    }

    #[test]
    fn stripping_spaces_recovers_the_word() {
        for variant in spaced_variants("fuck") {
            assert_eq!(variant.replace(' ', ""), "fuck");
        }
    }
}
