//! Line-oriented statements used by the command-line front end
//!
//! ```text
//! atom Man(socrates) "Socrates is a man"
//! Man(socrates), hasChild(socrates,x) |~ Parent(socrates)
//! schema subClassOf Man Mortal "all men are mortal"
//! schema jointCommitment ChestPain,ElevatedTroponin MI
//! Man(socrates) => Mortal(socrates)
//! ```
//!
//! Commas inside parentheses do not separate sentences, so role
//! assertions can appear in lists.

use crate::base::{Schema, SchemaKind};
use crate::error::StatementError;
use crate::syntax::Sequent;

/// Something a `tell` statement adds to a base
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TellStatement {
    Atom {
        sentence: String,
        annotation: Option<String>,
    },
    Consequence(Sequent),
    Schema {
        schema: Schema,
        annotation: Option<String>,
    },
}

/// Parse `atom X ["note"]`, `A, B |~ C, D` or `schema <type> <arg1> <arg2> ["note"]`
pub fn parse_tell(line: &str) -> Result<TellStatement, StatementError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(StatementError::Empty);
    }

    if let Some(rest) = strip_keyword(line, "atom") {
        let (sentence, annotation) = split_annotation(rest);
        if sentence.is_empty() {
            return Err(StatementError::Tell(line.to_string()));
        }
        return Ok(TellStatement::Atom {
            sentence: sentence.to_string(),
            annotation,
        });
    }

    if let Some(rest) = strip_keyword(line, "schema") {
        return parse_schema(rest).ok_or_else(|| StatementError::Schema(line.to_string()));
    }

    let (antecedent, consequent) = line
        .split_once("|~")
        .ok_or_else(|| StatementError::Tell(line.to_string()))?;
    Ok(TellStatement::Consequence(Sequent::new(
        split_sentences(antecedent),
        split_sentences(consequent),
    )))
}

/// Parse `A, B => C, D`; either side may be empty
pub fn parse_sequent(line: &str) -> Result<Sequent, StatementError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(StatementError::Empty);
    }
    let (antecedent, consequent) = line
        .split_once("=>")
        .ok_or_else(|| StatementError::Sequent(line.to_string()))?;
    if consequent.contains("=>") {
        return Err(StatementError::Sequent(line.to_string()));
    }
    Ok(Sequent::new(
        split_sentences(antecedent),
        split_sentences(consequent),
    ))
}

/// Split a comma-separated sentence list, ignoring commas inside parentheses
pub fn split_sentences(list: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in list.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                sentences.push(&list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    sentences.push(&list[start..]);
    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let head = line.get(..keyword.len())?;
    let rest = &line[keyword.len()..];
    (head.eq_ignore_ascii_case(keyword) && rest.starts_with(char::is_whitespace)).then_some(rest)
}

/// Split off a trailing quoted note; an unterminated quote runs to the end.
///
/// A note opens only with a quote at the start of a word, so primed
/// atoms such as `p'` stay intact.
fn split_annotation(text: &str) -> (&str, Option<String>) {
    let opener = text.char_indices().find(|&(i, c)| {
        (c == '"' || c == '\'') && text[..i].ends_with(char::is_whitespace)
    });
    let Some((open, _)) = opener else {
        return (text.trim(), None);
    };
    let quote = &text[open..open + 1];
    let after = &text[open + 1..];
    let note = match after.find(quote) {
        Some(close) => &after[..close],
        None => after.trim(),
    };
    let note = (!note.is_empty()).then(|| note.to_string());
    (text[..open].trim(), note)
}

fn parse_schema(rest: &str) -> Option<TellStatement> {
    let (body, annotation) = split_annotation(rest);
    let mut parts = body.split_whitespace();
    let kind: SchemaKind = parts.next()?.parse().ok()?;
    let arg1 = parts.next()?;
    let arg2 = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let schema = match kind {
        SchemaKind::JointCommitment => Schema::joint_commitment(arg1.split(','), arg2).ok()?,
        kind => Schema::binary(kind, arg1, arg2)?,
    };
    Some(TellStatement::Schema { schema, annotation })
}
