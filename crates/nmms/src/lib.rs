//! NMMS: a non-monotonic, multi-succedent sequent calculus
//!
//! This library decides sequents `Γ ⇒ Δ` relative to a material base of
//! atomic, defeasible consequences. Logical vocabulary is introduced by
//! eight invertible rules that neither weaken nor cut, so the base's
//! non-monotonicity survives into complex sentences: adding a premise can
//! defeat an inference.
//!
//! Three dialects share the calculus: bare propositional atoms, and two
//! ontology dialects whose atoms are concept and role assertions with
//! lazily matched schemas such as `subClassOf`.

pub mod base;
pub mod commitment;
pub mod config;
pub mod error;
pub mod json;
pub mod parser;
pub mod prover;
pub mod statement;
pub mod syntax;

pub use base::{
    MaterialBase, Onto, OntoBase, PropositionalBase, Rdfs, RdfsBase, Schema, SchemaKind,
    SchemaProfile, SchemaRecord, StructuredBase, Vocabulary,
};
pub use commitment::{Commitment, CommitmentStore};
pub use config::ReasonerConfig;
pub use error::{
    BaseError, ConfigError, NmmsError, Side, StatementError, SyntaxError, SyntaxErrorKind,
};
pub use json::{BaseJson, PersistentBase};
pub use parser::{is_atomic, parse_sentence, Dialect};
pub use prover::{DerivationResult, Reasoner, Rule, TraceEntry, TraceEvent};
pub use statement::{parse_sequent, parse_tell, TellStatement};
pub use syntax::{Atom, Sentence, Sequent};
