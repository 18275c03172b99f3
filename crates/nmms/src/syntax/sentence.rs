//! Atomic and compound sentences

use serde::{Deserialize, Serialize};
use std::fmt;

/// An atomic sentence.
///
/// Propositional dialects use bare identifiers; the ontology dialects use
/// concept assertions `C(a)` and role assertions `R(a,b)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Atom {
    Proposition {
        name: String,
    },
    Concept {
        concept: String,
        individual: String,
    },
    Role {
        role: String,
        subject: String,
        object: String,
    },
}

impl Atom {
    /// Create a bare propositional atom
    pub fn proposition(name: impl Into<String>) -> Self {
        Atom::Proposition { name: name.into() }
    }

    /// Create a concept assertion `C(a)`
    pub fn concept(concept: impl Into<String>, individual: impl Into<String>) -> Self {
        Atom::Concept {
            concept: concept.into(),
            individual: individual.into(),
        }
    }

    /// Create a role assertion `R(a,b)`
    pub fn role(
        role: impl Into<String>,
        subject: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Atom::Role {
            role: role.into(),
            subject: subject.into(),
            object: object.into(),
        }
    }

    /// Individuals mentioned by this atom, in argument order
    pub fn individuals(&self) -> Vec<&str> {
        match self {
            Atom::Proposition { .. } => Vec::new(),
            Atom::Concept { individual, .. } => vec![individual.as_str()],
            Atom::Role {
                subject, object, ..
            } => vec![subject.as_str(), object.as_str()],
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Proposition { name } => write!(f, "{}", name),
            Atom::Concept {
                concept,
                individual,
            } => write!(f, "{}({})", concept, individual),
            Atom::Role {
                role,
                subject,
                object,
            } => write!(f, "{}({},{})", role, subject, object),
        }
    }
}

/// A sentence of the object language
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentence {
    Atom(Atom),
    Not(Box<Sentence>),
    And(Box<Sentence>, Box<Sentence>),
    Or(Box<Sentence>, Box<Sentence>),
    Implies(Box<Sentence>, Box<Sentence>),
}

impl Sentence {
    pub fn not(inner: Sentence) -> Self {
        Sentence::Not(Box::new(inner))
    }

    pub fn and(left: Sentence, right: Sentence) -> Self {
        Sentence::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Sentence, right: Sentence) -> Self {
        Sentence::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(antecedent: Sentence, consequent: Sentence) -> Self {
        Sentence::Implies(Box::new(antecedent), Box::new(consequent))
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self, Sentence::Atom(_))
    }

    fn is_binary(&self) -> bool {
        matches!(
            self,
            Sentence::And(..) | Sentence::Or(..) | Sentence::Implies(..)
        )
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_binary() {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }

    fn fmt_binary(
        f: &mut fmt::Formatter<'_>,
        left: &Sentence,
        symbol: &str,
        right: &Sentence,
    ) -> fmt::Result {
        left.fmt_operand(f)?;
        write!(f, " {} ", symbol)?;
        right.fmt_operand(f)
    }
}

impl From<Atom> for Sentence {
    fn from(atom: Atom) -> Self {
        Sentence::Atom(atom)
    }
}

/// Canonical form: binary operands are always parenthesized, so the
/// output parses back to the same tree.
impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentence::Atom(atom) => write!(f, "{}", atom),
            Sentence::Not(inner) => {
                write!(f, "~")?;
                inner.fmt_operand(f)
            }
            Sentence::And(l, r) => Sentence::fmt_binary(f, l, "&", r),
            Sentence::Or(l, r) => Sentence::fmt_binary(f, l, "|", r),
            Sentence::Implies(l, r) => Sentence::fmt_binary(f, l, "->", r),
        }
    }
}
