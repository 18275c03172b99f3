//! Error types shared across the crate

use crate::base::SchemaKind;
use crate::parser::Dialect;
use std::fmt;
use std::io;
use thiserror::Error;

/// Which operand of a binary connective is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// What went wrong while parsing a sentence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    #[error("cannot parse an empty sentence")]
    Empty,

    #[error("'{operator}' has no {side} operand")]
    MissingOperand { operator: &'static str, side: Side },

    #[error("negation with no operand")]
    MissingNegand,

    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("not an atomic sentence; expected {expected}")]
    InvalidAtom { expected: &'static str },

    #[error("connectives nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// A sentence that could not be parsed under a dialect.
///
/// `text` is the fragment at which parsing failed, which is the whole
/// input unless the failure was inside an operand.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{dialect}: {kind} in {text:?}")]
pub struct SyntaxError {
    pub text: String,
    pub dialect: Dialect,
    pub kind: SyntaxErrorKind,
}

/// Errors raised while building, mutating or loading a material base.
///
/// Every mutation validates its whole input before committing anything.
#[derive(Error, Debug)]
pub enum BaseError {
    #[error("{context}: {sentence:?} is not valid in {dialect}; only {expected} may appear in the material base")]
    NotAtomic {
        sentence: String,
        dialect: Dialect,
        expected: &'static str,
        context: &'static str,
    },

    #[error("jointCommitment requires at least 2 distinct antecedent concepts, got {count}")]
    JointCommitmentArity { count: usize },

    #[error("{kind} schemas are not supported in {dialect}")]
    UnsupportedSchema { kind: SchemaKind, dialect: Dialect },

    #[error("unknown schema type: {0}")]
    UnknownSchemaKind(String),

    #[error("malformed {kind} schema: {reason}")]
    MalformedSchema { kind: SchemaKind, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Invalid reasoner configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_depth must be a positive integer, got {0}")]
    InvalidDepth(usize),
}

/// A command-layer statement that does not have the expected shape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatementError {
    #[error("empty statement")]
    Empty,

    #[error("invalid sequent {0:?}; expected 'A, B => C, D'")]
    Sequent(String),

    #[error("invalid tell statement {0:?}; expected \"atom X\" or \"A, B |~ C, D\"")]
    Tell(String),

    #[error("invalid schema line {0:?}; expected \"schema <type> <arg1> <arg2>\"")]
    Schema(String),
}

/// Umbrella error for callers that mix parsing, base mutation and configuration
#[derive(Error, Debug)]
pub enum NmmsError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Base(#[from] BaseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Statement(#[from] StatementError),
}
