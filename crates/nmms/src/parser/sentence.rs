//! Sentence parser
//!
//! Precedence, loosest first: `->` (right associative), `|`, `&`, then
//! prefix `~`. `|` and `&` associate to the left. Outer parentheses that
//! enclose the whole input are stripped before anything else. The Unicode
//! forms `→ ∨ ∧ ¬` are accepted as aliases.

use super::Dialect;
use crate::error::{Side, SyntaxError, SyntaxErrorKind};
use crate::syntax::Sentence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Connective {
    Implies,
    Or,
    And,
}

impl Connective {
    fn symbol(self) -> &'static str {
        match self {
            Connective::Implies => "->",
            Connective::Or => "|",
            Connective::And => "&",
        }
    }
}

/// A connective occurrence at parenthesis depth 0, as a byte range
#[derive(Debug, Clone, Copy)]
struct Split {
    connective: Connective,
    start: usize,
    end: usize,
}

/// Deepest nesting of connectives a sentence may have
pub const MAX_NESTING: usize = 512;

/// Parse `text` as a sentence of `dialect`
pub fn parse_sentence(text: &str, dialect: Dialect) -> Result<Sentence, SyntaxError> {
    parse_fragment(text, dialect, 0)
}

/// Whether `text` parses as an atomic sentence of `dialect`.
///
/// Compound sentences and unparseable strings are both non-atomic.
pub fn is_atomic(text: &str, dialect: Dialect) -> bool {
    parse_sentence(text, dialect).is_ok_and(|sentence| sentence.is_atomic())
}

fn fail(text: &str, dialect: Dialect, kind: SyntaxErrorKind) -> SyntaxError {
    SyntaxError {
        text: text.trim().to_string(),
        dialect,
        kind,
    }
}

/// Parse a fragment found `depth` connectives below the top
fn parse_fragment(text: &str, dialect: Dialect, depth: usize) -> Result<Sentence, SyntaxError> {
    let mut s = text.trim();
    if s.is_empty() {
        return Err(fail(s, dialect, SyntaxErrorKind::Empty));
    }
    let too_deep = |s: &str| {
        fail(
            s,
            dialect,
            SyntaxErrorKind::TooDeep {
                limit: MAX_NESTING,
            },
        )
    };

    // Outer parentheses and prefix negations are peeled off in place;
    // only binary connectives recurse.
    let mut splits = top_level_splits(s).map_err(|kind| fail(s, dialect, kind))?;
    let mut negations = 0usize;
    while splits.is_empty() {
        if is_wrapped(s) {
            s = s[1..s.len() - 1].trim();
            if s.is_empty() {
                return Err(fail(s, dialect, SyntaxErrorKind::Empty));
            }
            splits = top_level_splits(s).map_err(|kind| fail(s, dialect, kind))?;
        } else if let Some(rest) = s.strip_prefix('~').or_else(|| s.strip_prefix('¬')) {
            if rest.trim().is_empty() {
                return Err(fail(s, dialect, SyntaxErrorKind::MissingNegand));
            }
            negations += 1;
            if depth + negations > MAX_NESTING {
                return Err(too_deep(s));
            }
            s = rest.trim();
        } else {
            break;
        }
    }
    let depth = depth + negations;

    let principal = splits
        .iter()
        .find(|split| split.connective == Connective::Implies)
        .or_else(|| last_of(&splits, Connective::Or))
        .or_else(|| last_of(&splits, Connective::And));

    let sentence = match principal {
        Some(split) => {
            let left = s[..split.start].trim();
            let right = s[split.end..].trim();
            let operator = split.connective.symbol();
            if left.is_empty() {
                return Err(fail(
                    s,
                    dialect,
                    SyntaxErrorKind::MissingOperand {
                        operator,
                        side: Side::Left,
                    },
                ));
            }
            if right.is_empty() {
                return Err(fail(
                    s,
                    dialect,
                    SyntaxErrorKind::MissingOperand {
                        operator,
                        side: Side::Right,
                    },
                ));
            }
            if depth >= MAX_NESTING {
                return Err(too_deep(s));
            }
            let left = parse_fragment(left, dialect, depth + 1)?;
            let right = parse_fragment(right, dialect, depth + 1)?;
            match split.connective {
                Connective::Implies => Sentence::implies(left, right),
                Connective::Or => Sentence::or(left, right),
                Connective::And => Sentence::and(left, right),
            }
        }
        None => dialect.recognize_atom(s).map(Sentence::Atom).ok_or_else(|| {
            fail(
                s,
                dialect,
                SyntaxErrorKind::InvalidAtom {
                    expected: dialect.expected_atoms(),
                },
            )
        })?,
    };

    Ok((0..negations).fold(sentence, |inner, _| Sentence::not(inner)))
}

fn last_of(splits: &[Split], connective: Connective) -> Option<&Split> {
    splits.iter().rev().find(|split| split.connective == connective)
}

/// Locate every connective outside parentheses, checking balance on the way
fn top_level_splits(s: &str) -> Result<Vec<Split>, SyntaxErrorKind> {
    let mut depth = 0usize;
    let mut splits = Vec::new();
    let mut chars = s.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let connective = match c {
            '(' => {
                depth += 1;
                continue;
            }
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(SyntaxErrorKind::UnbalancedParentheses)?;
                continue;
            }
            _ if depth > 0 => continue,
            '-' if matches!(chars.peek(), Some((_, '>'))) => {
                chars.next();
                splits.push(Split {
                    connective: Connective::Implies,
                    start: i,
                    end: i + 2,
                });
                continue;
            }
            '→' => Connective::Implies,
            '|' | '∨' => Connective::Or,
            '&' | '∧' => Connective::And,
            _ => continue,
        };
        splits.push(Split {
            connective,
            start: i,
            end: i + c.len_utf8(),
        });
    }

    if depth != 0 {
        return Err(SyntaxErrorKind::UnbalancedParentheses);
    }
    Ok(splits)
}

/// Whether the first character opens a parenthesis closed by the last one
fn is_wrapped(s: &str) -> bool {
    if !s.starts_with('(') || !s.ends_with(')') {
        return false;
    }
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i == s.len() - 1;
                }
            }
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Atom;

    fn prop(s: &str) -> Sentence {
        parse_sentence(s, Dialect::Propositional).unwrap()
    }

    fn p(name: &str) -> Sentence {
        Atom::proposition(name).into()
    }

    #[test]
    fn test_atoms() {
        assert_eq!(prop("p"), p("p"));
        assert_eq!(prop("  (( p )) "), p("p"));
    }

    #[test]
    fn test_implication_is_right_associative() {
        assert_eq!(
            prop("a -> b -> c"),
            Sentence::implies(p("a"), Sentence::implies(p("b"), p("c")))
        );
        assert_eq!(
            prop("(a -> b) -> c"),
            Sentence::implies(Sentence::implies(p("a"), p("b")), p("c"))
        );
    }

    #[test]
    fn test_disjunction_and_conjunction_are_left_associative() {
        assert_eq!(
            prop("a | b | c"),
            Sentence::or(Sentence::or(p("a"), p("b")), p("c"))
        );
        assert_eq!(
            prop("a & b & c"),
            Sentence::and(Sentence::and(p("a"), p("b")), p("c"))
        );
    }

    #[test]
    fn test_precedence() {
        assert_eq!(
            prop("a & b | c -> d"),
            Sentence::implies(
                Sentence::or(Sentence::and(p("a"), p("b")), p("c")),
                p("d")
            )
        );
        assert_eq!(
            prop("~a & b"),
            Sentence::and(Sentence::not(p("a")), p("b"))
        );
        assert_eq!(
            prop("~(a & b)"),
            Sentence::not(Sentence::and(p("a"), p("b")))
        );
        assert_eq!(prop("~~a"), Sentence::not(Sentence::not(p("a"))));
    }

    #[test]
    fn test_unicode_aliases() {
        assert_eq!(prop("¬a ∧ b → c ∨ d"), prop("~a & b -> c | d"));
    }

    #[test]
    fn test_hyphenated_atom_is_not_an_implication() {
        assert_eq!(prop("x-y"), p("x-y"));
        assert_eq!(prop("x->y"), Sentence::implies(p("x"), p("y")));
    }

    #[test]
    fn test_errors() {
        let kind = |s: &str| parse_sentence(s, Dialect::Propositional).unwrap_err().kind;
        assert_eq!(kind(""), SyntaxErrorKind::Empty);
        assert_eq!(kind("   "), SyntaxErrorKind::Empty);
        assert_eq!(kind("()"), SyntaxErrorKind::Empty);
        assert_eq!(kind("~"), SyntaxErrorKind::MissingNegand);
        assert_eq!(kind("(p"), SyntaxErrorKind::UnbalancedParentheses);
        assert_eq!(kind("p)"), SyntaxErrorKind::UnbalancedParentheses);
        assert_eq!(
            kind("-> q"),
            SyntaxErrorKind::MissingOperand {
                operator: "->",
                side: Side::Left
            }
        );
        assert_eq!(
            kind("p &"),
            SyntaxErrorKind::MissingOperand {
                operator: "&",
                side: Side::Right
            }
        );
        assert!(matches!(kind("p q"), SyntaxErrorKind::InvalidAtom { .. }));
    }

    #[test]
    fn test_error_carries_fragment_and_dialect() {
        let err = parse_sentence("p & (q r)", Dialect::Propositional).unwrap_err();
        assert_eq!(err.text, "q r");
        assert_eq!(err.dialect, Dialect::Propositional);
    }

    #[test]
    fn test_structured_dialect() {
        let s = parse_sentence("Man(socrates) -> ~hasChild(socrates, x)", Dialect::Onto).unwrap();
        assert_eq!(
            s,
            Sentence::implies(
                Atom::concept("Man", "socrates").into(),
                Sentence::not(Atom::role("hasChild", "socrates", "x").into())
            )
        );
        assert_eq!(s.to_string(), "Man(socrates) -> ~hasChild(socrates,x)");
    }

    #[test]
    fn test_bare_atoms_rejected_in_structured_dialects() {
        for dialect in [Dialect::Rdfs, Dialect::Onto] {
            let err = parse_sentence("A", dialect).unwrap_err();
            assert!(matches!(err.kind, SyntaxErrorKind::InvalidAtom { .. }));
            assert!(err.to_string().contains(dialect.name()));
            assert!(parse_sentence("~A", dialect).is_err());
        }
    }

    #[test]
    fn test_deep_negation_parses_up_to_the_limit() {
        let text = format!("{}p", "~".repeat(MAX_NESTING));
        let sentence = prop(&text);
        assert!(!sentence.is_atomic());
        assert_eq!(sentence.to_string(), text);
    }

    #[test]
    fn test_excessive_nesting_is_a_syntax_error() {
        let kind = |s: &str| parse_sentence(s, Dialect::Propositional).unwrap_err().kind;
        let too_deep = SyntaxErrorKind::TooDeep { limit: MAX_NESTING };

        assert_eq!(kind(&format!("{}p", "~".repeat(5000))), too_deep);
        assert_eq!(kind(&format!("{}p{}", "~(".repeat(3000), ")".repeat(3000))), too_deep);
        assert_eq!(kind(&vec!["p"; 3000].join(" & ")), too_deep);
        assert_eq!(prop(&format!("{}p{}", "(".repeat(3000), ")".repeat(3000))), p("p"));
    }

    #[test]
    fn test_is_atomic() {
        assert!(is_atomic("p", Dialect::Propositional));
        assert!(!is_atomic("~p", Dialect::Propositional));
        assert!(!is_atomic("p q", Dialect::Propositional));
        assert!(is_atomic("Man(socrates)", Dialect::Rdfs));
        assert!(!is_atomic("p", Dialect::Rdfs));
    }
}
