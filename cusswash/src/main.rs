// cusswash/src/main.rs
//! Cusswash entry point.
//!
//! Loads the profanity dictionary, sanitizes the one phrase argument, and
//! prints the result to standard output.

use anyhow::Result;
use clap::Parser;
use cusswash::cli::Cli;
use cusswash::logger;
use cusswash_core::{Sanitizer, WordList};

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.verbose {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(Some(log::LevelFilter::Warn));
    }

    let words = match &args.wordlist {
        Some(path) => WordList::load_from_file_or_empty(path),
        None => WordList::load_default()?,
    };

    let sanitizer = Sanitizer::new(words);
    println!("{}", sanitizer.sanitize(&args.phrase));

    Ok(())
}
