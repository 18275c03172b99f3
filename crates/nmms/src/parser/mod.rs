//! Parsing of sentences in the supported dialects

pub mod atoms;
pub mod dialect;
pub mod sentence;


pub use dialect::Dialect;
pub use sentence::{is_atomic, parse_sentence};

use crate::syntax::Atom;

/// Parse `text` and return its atom if the result is atomic
pub fn parse_atom(text: &str, dialect: Dialect) -> Option<Atom> {
    match parse_sentence(text, dialect) {
        Ok(crate::syntax::Sentence::Atom(atom)) => Some(atom),
        _ => None,
    }
}

/// Canonical spelling of `text` if it parses, otherwise the trimmed input
pub fn canonicalize(text: &str, dialect: Dialect) -> String {
    match parse_sentence(text, dialect) {
        Ok(sentence) => sentence.to_string(),
        Err(_) => text.trim().to_string(),
    }
}
