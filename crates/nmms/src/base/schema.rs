//! Defeasible ontology schemas
//!
//! A schema is a pattern over atomic sequents, checked lazily when the
//! reasoner asks whether a sequent is an axiom. Schemas never chain:
//! `subClassOf(A,B)` and `subClassOf(B,C)` do not make `A(x) |~ C(x)` an
//! axiom, and every pattern fixes the exact cardinality of both sides so
//! that extra premises defeat the match.

use crate::error::BaseError;
use crate::syntax::Atom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Kind tag of a schema, as it appears in files and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaKind {
    #[serde(rename = "subClassOf")]
    SubClassOf,
    #[serde(rename = "range")]
    Range,
    #[serde(rename = "domain")]
    Domain,
    #[serde(rename = "subPropertyOf")]
    SubPropertyOf,
    #[serde(rename = "disjointWith")]
    DisjointWith,
    #[serde(rename = "disjointProperties")]
    DisjointProperties,
    #[serde(rename = "jointCommitment")]
    JointCommitment,
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 7] = [
        SchemaKind::SubClassOf,
        SchemaKind::Range,
        SchemaKind::Domain,
        SchemaKind::SubPropertyOf,
        SchemaKind::DisjointWith,
        SchemaKind::DisjointProperties,
        SchemaKind::JointCommitment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaKind::SubClassOf => "subClassOf",
            SchemaKind::Range => "range",
            SchemaKind::Domain => "domain",
            SchemaKind::SubPropertyOf => "subPropertyOf",
            SchemaKind::DisjointWith => "disjointWith",
            SchemaKind::DisjointProperties => "disjointProperties",
            SchemaKind::JointCommitment => "jointCommitment",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SchemaKind {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemaKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| BaseError::UnknownSchemaKind(s.to_string()))
    }
}

/// A registered schema.
///
/// Concept and role names are plain identifiers; `x`, `y` in the pattern
/// descriptions range over individuals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
    /// `{C(x)} |~ {D(x)}`
    SubClassOf { sub: String, sup: String },
    /// `{R(x,y)} |~ {C(y)}`
    Range { role: String, concept: String },
    /// `{R(x,y)} |~ {C(x)}`
    Domain { role: String, concept: String },
    /// `{R(x,y)} |~ {S(x,y)}`
    SubPropertyOf { sub: String, sup: String },
    /// `{C(x), D(x)} |~ {}`
    DisjointWith { first: String, second: String },
    /// `{R(x,y), S(x,y)} |~ {}`
    DisjointProperties { first: String, second: String },
    /// `{C1(x), ..., Cn(x)} |~ {D(x)}` with exactly the listed concepts
    JointCommitment {
        antecedent: BTreeSet<String>,
        consequent: String,
    },
}

impl Schema {
    /// Build a joint commitment, requiring at least two distinct concepts
    pub fn joint_commitment<I, S>(
        antecedent: I,
        consequent: impl Into<String>,
    ) -> Result<Self, BaseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let schema = Schema::JointCommitment {
            antecedent: antecedent
                .into_iter()
                .map(|c| c.as_ref().trim().to_string())
                .collect(),
            consequent: consequent.into(),
        };
        schema.validate()?;
        Ok(schema)
    }

    /// Build a two-argument schema; `None` for joint commitments
    pub fn binary(kind: SchemaKind, arg1: &str, arg2: &str) -> Option<Self> {
        let (arg1, arg2) = (arg1.to_string(), arg2.to_string());
        Some(match kind {
            SchemaKind::SubClassOf => Schema::SubClassOf { sub: arg1, sup: arg2 },
            SchemaKind::Range => Schema::Range {
                role: arg1,
                concept: arg2,
            },
            SchemaKind::Domain => Schema::Domain {
                role: arg1,
                concept: arg2,
            },
            SchemaKind::SubPropertyOf => Schema::SubPropertyOf { sub: arg1, sup: arg2 },
            SchemaKind::DisjointWith => Schema::DisjointWith {
                first: arg1,
                second: arg2,
            },
            SchemaKind::DisjointProperties => Schema::DisjointProperties {
                first: arg1,
                second: arg2,
            },
            SchemaKind::JointCommitment => return None,
        })
    }

    pub fn kind(&self) -> SchemaKind {
        match self {
            Schema::SubClassOf { .. } => SchemaKind::SubClassOf,
            Schema::Range { .. } => SchemaKind::Range,
            Schema::Domain { .. } => SchemaKind::Domain,
            Schema::SubPropertyOf { .. } => SchemaKind::SubPropertyOf,
            Schema::DisjointWith { .. } => SchemaKind::DisjointWith,
            Schema::DisjointProperties { .. } => SchemaKind::DisjointProperties,
            Schema::JointCommitment { .. } => SchemaKind::JointCommitment,
        }
    }

    /// Check the structural requirements of the schema's arguments
    pub fn validate(&self) -> Result<(), BaseError> {
        match self {
            Schema::JointCommitment { antecedent, .. } if antecedent.len() < 2 => {
                Err(BaseError::JointCommitmentArity {
                    count: antecedent.len(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Whether the atomic sequent `antecedent |~ consequent` instantiates
    /// this schema
    pub fn matches(&self, antecedent: &[Atom], consequent: &[Atom]) -> bool {
        match (self, antecedent, consequent) {
            (
                Schema::SubClassOf { sub, sup },
                [Atom::Concept {
                    concept: c,
                    individual: x,
                }],
                [Atom::Concept {
                    concept: d,
                    individual: y,
                }],
            ) => c == sub && d == sup && x == y,

            (
                Schema::Range { role, concept },
                [Atom::Role {
                    role: r, object: y, ..
                }],
                [Atom::Concept {
                    concept: c,
                    individual: z,
                }],
            ) => r == role && c == concept && y == z,

            (
                Schema::Domain { role, concept },
                [Atom::Role {
                    role: r, subject: x, ..
                }],
                [Atom::Concept {
                    concept: c,
                    individual: z,
                }],
            ) => r == role && c == concept && x == z,

            (
                Schema::SubPropertyOf { sub, sup },
                [Atom::Role {
                    role: r,
                    subject: x1,
                    object: y1,
                }],
                [Atom::Role {
                    role: s,
                    subject: x2,
                    object: y2,
                }],
            ) => r == sub && s == sup && x1 == x2 && y1 == y2,

            (
                Schema::DisjointWith { first, second },
                [Atom::Concept {
                    concept: c,
                    individual: x,
                }, Atom::Concept {
                    concept: d,
                    individual: y,
                }],
                [],
            ) => x == y && same_pair(c, d, first, second),

            (
                Schema::DisjointProperties { first, second },
                [Atom::Role {
                    role: r,
                    subject: x1,
                    object: y1,
                }, Atom::Role {
                    role: s,
                    subject: x2,
                    object: y2,
                }],
                [],
            ) => x1 == x2 && y1 == y2 && same_pair(r, s, first, second),

            (
                Schema::JointCommitment {
                    antecedent: concepts,
                    consequent: target,
                },
                premises,
                [Atom::Concept {
                    concept: d,
                    individual: x,
                }],
            ) => {
                d == target
                    && premises.len() == concepts.len()
                    && premises.iter().all(|premise| {
                        matches!(premise, Atom::Concept { individual, concept }
                            if individual == x && concepts.contains(concept))
                    })
                    && premises
                        .iter()
                        .filter_map(|premise| match premise {
                            Atom::Concept { concept, .. } => Some(concept.as_str()),
                            _ => None,
                        })
                        .collect::<BTreeSet<_>>()
                        .len()
                        == concepts.len()
            }

            _ => false,
        }
    }
}

fn same_pair(a: &str, b: &str, first: &str, second: &str) -> bool {
    (a == first && b == second) || (a == second && b == first)
}

/// Pattern description, e.g. `{Man(x)} |~ {Mortal(x)}`
impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::SubClassOf { sub, sup } => write!(f, "{{{}(x)}} |~ {{{}(x)}}", sub, sup),
            Schema::Range { role, concept } => {
                write!(f, "{{{}(x,y)}} |~ {{{}(y)}}", role, concept)
            }
            Schema::Domain { role, concept } => {
                write!(f, "{{{}(x,y)}} |~ {{{}(x)}}", role, concept)
            }
            Schema::SubPropertyOf { sub, sup } => {
                write!(f, "{{{}(x,y)}} |~ {{{}(x,y)}}", sub, sup)
            }
            Schema::DisjointWith { first, second } => {
                write!(f, "{{{}(x), {}(x)}} |~ {{}}", first, second)
            }
            Schema::DisjointProperties { first, second } => {
                write!(f, "{{{}(x,y), {}(x,y)}} |~ {{}}", first, second)
            }
            Schema::JointCommitment {
                antecedent,
                consequent,
            } => {
                write!(f, "{{")?;
                for (i, concept) in antecedent.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}(x)", concept)?;
                }
                write!(f, "}} |~ {{{}(x)}}", consequent)
            }
        }
    }
}

/// A schema together with its optional free-text annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRecord {
    pub schema: Schema,
    pub annotation: Option<String>,
}

impl SchemaRecord {
    pub fn new(schema: Schema, annotation: Option<String>) -> Self {
        SchemaRecord { schema, annotation }
    }
}
