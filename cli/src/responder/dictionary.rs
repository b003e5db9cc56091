//! # Dictionary Lookup
//!
//! File: cli/src/responder/dictionary.rs
//!
//! The first whitespace token of the lowercased input that is a known word
//! wins. Punctuation is not stripped, so `python?` does not match `python`.
//!
use super::lexicon::DICTIONARY;

/// Number of words offered when nothing matches.
const LISTED_WORDS: usize = 10;

/// `define(text)`: the definition of the first known word in `text`.
pub fn define(text: &str) -> String {
    let lowered = text.to_lowercase();
    let entry = lowered
        .split_whitespace()
        .find_map(|token| DICTIONARY.iter().find(|(word, _)| *word == token));

    match entry {
        Some((word, definition)) => format!("**{}**: {}", capitalize(word), definition),
        None => {
            let words: Vec<&str> = DICTIONARY
                .iter()
                .take(LISTED_WORDS)
                .map(|(word, _)| *word)
                .collect();
            format!(
                "Available words: {}...\nTry asking 'definition of python' or 'what is algorithm'",
                words.join(", ")
            )
        }
    }
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
