// cusswash/src/lib.rs
//! # Cusswash CLI
//!
//! The command-line front end for the `cusswash-core` profanity sanitizer:
//! one phrase in, one sanitized phrase out.

pub mod cli;
pub mod logger;
