//! Object-language dialects

use super::atoms;
use crate::syntax::Atom;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which atomic forms a sentence may be built from.
///
/// The connectives are the same in every dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Bare identifiers such as `p`, `rain` or `A1`
    #[default]
    Propositional,
    /// Concept and role assertions with the RDFS schema vocabulary
    Rdfs,
    /// Concept and role assertions with the extended ontology vocabulary
    Onto,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Propositional, Dialect::Rdfs, Dialect::Onto];

    pub fn name(self) -> &'static str {
        match self {
            Dialect::Propositional => "NMMS",
            Dialect::Rdfs => "NMMS_RDFS",
            Dialect::Onto => "NMMS_Onto",
        }
    }

    /// Whether atoms are concept/role assertions rather than bare identifiers
    pub fn is_structured(self) -> bool {
        !matches!(self, Dialect::Propositional)
    }

    /// Human-readable description of the admissible atomic forms
    pub fn expected_atoms(self) -> &'static str {
        match self {
            Dialect::Propositional => "bare atoms such as p or rain",
            Dialect::Rdfs | Dialect::Onto => {
                "concept assertions C(a) or role assertions R(a,b)"
            }
        }
    }

    /// Recognize `text` as a whole atomic sentence of this dialect
    pub fn recognize_atom(self, text: &str) -> Option<Atom> {
        match self {
            Dialect::Propositional => atoms::proposition(text),
            Dialect::Rdfs | Dialect::Onto => atoms::assertion(text),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "propositional" | "prop" | "nmms" => Ok(Dialect::Propositional),
            "rdfs" | "nmms_rdfs" => Ok(Dialect::Rdfs),
            "onto" | "nmms_onto" => Ok(Dialect::Onto),
            other => Err(format!(
                "unknown dialect '{}'; expected one of: propositional, rdfs, onto",
                other
            )),
        }
    }
}
