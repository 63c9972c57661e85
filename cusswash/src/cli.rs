// cusswash/src/cli.rs
//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Mask profane words in a phrase, evasion tricks included.
#[derive(Parser, Debug)]
#[command(name = "cusswash", author, version, about)]
pub struct Cli {
    /// The phrase to sanitize
    pub phrase: String,

    /// Load the profanity dictionary from a JSON file (an array of
    /// lowercase words) instead of the embedded default list. A file that
    /// fails to load leaves the phrase unmasked.
    #[arg(long, short = 'w', value_name = "FILE")]
    pub wordlist: Option<PathBuf>,

    /// Suppress internal logging
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,
}
