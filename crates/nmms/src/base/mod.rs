//! Material bases: the atomic, non-logical consequence relations that
//! ground every derivation
//!
//! A base stores a language of atomic sentences and a set of atomic
//! sequents `Γ |~ Δ`. Structured bases additionally hold ontology schemas
//! which are matched lazily. The reasoner only ever sees a base through
//! [`MaterialBase`].

pub mod propositional;
pub mod schema;
pub mod structured;
pub mod vocabulary;

pub use propositional::PropositionalBase;
pub use schema::{Schema, SchemaKind, SchemaRecord};
pub use structured::{Onto, OntoBase, Rdfs, RdfsBase, SchemaProfile, StructuredBase};
pub use vocabulary::Vocabulary;

use crate::error::BaseError;
use crate::parser::{self, Dialect};
use crate::syntax::{Atom, Sequent};
use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeSet;

/// The interface between a material base and the proof search
pub trait MaterialBase {
    /// Dialect whose atoms this base admits
    fn dialect(&self) -> Dialect;

    /// Whether `sequent` is an axiom: containment, an exact stored
    /// consequence, or (for structured bases) a schema instance
    fn is_axiom(&self, sequent: &Sequent) -> bool;

    /// Whether `sentence` is atomic in this base's dialect
    fn is_atomic(&self, sentence: &str) -> bool {
        parser::is_atomic(sentence, self.dialect())
    }
}

impl<B: MaterialBase + ?Sized> MaterialBase for &B {
    fn dialect(&self) -> Dialect {
        (**self).dialect()
    }

    fn is_axiom(&self, sequent: &Sequent) -> bool {
        (**self).is_axiom(sequent)
    }

    fn is_atomic(&self, sentence: &str) -> bool {
        (**self).is_atomic(sentence)
    }
}

impl<B: MaterialBase + ?Sized> MaterialBase for Box<B> {
    fn dialect(&self) -> Dialect {
        (**self).dialect()
    }

    fn is_axiom(&self, sequent: &Sequent) -> bool {
        (**self).is_axiom(sequent)
    }

    fn is_atomic(&self, sentence: &str) -> bool {
        (**self).is_atomic(sentence)
    }
}

/// Storage shared by every base variant.
///
/// Sentences are kept in canonical spelling, so `R(a, b)` and `R(a,b)`
/// are the same atom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BaseCore {
    pub(crate) language: BTreeSet<String>,
    pub(crate) consequences: IndexSet<Sequent>,
    pub(crate) annotations: IndexMap<String, String>,
}

impl BaseCore {
    /// Parse `sentence` as an atom of `dialect`
    pub(crate) fn admit(
        dialect: Dialect,
        sentence: &str,
        context: &'static str,
    ) -> Result<Atom, BaseError> {
        parser::parse_atom(sentence, dialect).ok_or_else(|| BaseError::NotAtomic {
            sentence: sentence.trim().to_string(),
            dialect,
            expected: dialect.expected_atoms(),
            context,
        })
    }

    /// Validate both sides of a consequence before anything is stored
    pub(crate) fn admit_sequent<A, C>(
        dialect: Dialect,
        antecedent: A,
        consequent: C,
    ) -> Result<(Sequent, Vec<Atom>), BaseError>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let mut atoms = Vec::new();
        let mut admit_side = |side: Vec<String>| -> Result<BTreeSet<String>, BaseError> {
            side.iter()
                .map(|s| {
                    let atom = Self::admit(dialect, s, "add_consequence")?;
                    let canonical = atom.to_string();
                    atoms.push(atom);
                    Ok(canonical)
                })
                .collect()
        };
        let antecedent = admit_side(collect_strings(antecedent))?;
        let consequent = admit_side(collect_strings(consequent))?;
        Ok((Sequent::from_sets(antecedent, consequent), atoms))
    }

    pub(crate) fn insert_atom(&mut self, atom: &Atom) -> bool {
        self.language.insert(atom.to_string())
    }

    /// Store a validated consequence and add its sentences to the language
    pub(crate) fn insert_consequence(&mut self, sequent: Sequent) -> bool {
        self.language.extend(sequent.sentences().cloned());
        self.consequences.insert(sequent)
    }

    pub(crate) fn annotate(&mut self, sentence: &str, note: &str, dialect: Dialect) {
        self.annotations
            .insert(parser::canonicalize(sentence, dialect), note.to_string());
    }

    pub(crate) fn annotation(&self, sentence: &str, dialect: Dialect) -> Option<&str> {
        self.annotations
            .get(&parser::canonicalize(sentence, dialect))
            .map(String::as_str)
    }

    /// Containment or exact membership in the stored consequences
    pub(crate) fn contains_axiom(&self, sequent: &Sequent) -> bool {
        sequent.is_containment() || self.consequences.contains(sequent)
    }
}

fn collect_strings<I>(sentences: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    sentences
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect()
}
