// cusswash-core/src/lib.rs
//! # Cusswash Core Library
//!
//! `cusswash-core` provides the profanity-matching and normalization logic
//! behind the `cusswash` CLI. Given a phrase, it detects profane words even
//! when they are obfuscated with symbol substitution ("$hit"), elongated
//! letters ("shiiiit"), or inserted spaces ("s h i t"), and masks each match
//! with a run of asterisks equal in length to the matched dictionary entry.
//!
//! The library is pure and stateless: one sanitize call processes one phrase
//! to completion, with no I/O beyond the initial word-list load and no state
//! shared between calls.
//!
//! ## Modules
//!
//! * `wordlist`: The profanity dictionary (loading, validation, and lookup).
//! * `symbols`: Symbol-to-letter normalization with the trailing-punctuation
//!   exception.
//! * `collapse`: Repeated-letter and repeated-whitespace run collapsing.
//! * `candidates`: Lazy generation of the spaced variants of a word.
//! * `matcher`: Single-token normalization, lookup, and masking.
//! * `pipeline`: The three-pass [`Sanitizer`] that composes the above.
//! * `errors`: The library error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use cusswash_core::{Sanitizer, WordList};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let words = WordList::load_default()?;
//!     let sanitizer = Sanitizer::new(words);
//!
//!     assert_eq!(sanitizer.sanitize("$hit happens"), "**** happens");
//!     assert_eq!(sanitizer.sanitize("tea time"), "tea time");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible loading uses `anyhow::Error` at composition points and the
//! typed [`CusswashError`] for programmatic handling. A word list that fails
//! to load can degrade to an empty list
//! ([`WordList::load_from_file_or_empty`]), under which every sanitize call
//! is an identity transform.
//!
//! ## Concurrency
//!
//! The word list is read-only after load and [`Sanitizer`] takes `&self`,
//! so one instance can serve concurrent callers without locking.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod candidates;
pub mod collapse;
pub mod errors;
pub mod matcher;
pub mod pipeline;
pub mod symbols;
pub mod wordlist;

/// Re-exports the dictionary type, its loaders, and the entry-length cap.
pub use wordlist::{WordList, MAX_WORD_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::CusswashError;

/// Re-exports the pipeline entry points.
pub use pipeline::{sanitize_phrase, Sanitizer};

/// Re-exports single-token matching for callers that work word by word.
pub use matcher::{match_token, MatchOutcome};

/// Re-exports the symbol substitution table.
pub use symbols::{SymbolMapping, SYMBOL_MAPPINGS};

/// Re-exports spaced-variant generation.
pub use candidates::{spaced_variants, SpacedVariants};
