//! Material base over bare propositional atoms

use super::{BaseCore, MaterialBase};
use crate::error::BaseError;
use crate::parser::Dialect;
use crate::syntax::Sequent;
use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeSet;
use tracing::debug;

/// A propositional material base.
///
/// Every stored sentence must be a bare atom; logically complex sentences
/// are rejected at the mutation that introduces them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropositionalBase {
    core: BaseCore,
}

impl PropositionalBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a base from an initial language and consequence set.
    ///
    /// Fails with [`BaseError::NotAtomic`] if any sentence is not a bare atom.
    pub fn from_parts<L, S, C>(language: L, consequences: C) -> Result<Self, BaseError>
    where
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
        C: IntoIterator<Item = Sequent>,
    {
        let mut base = Self::new();
        for sentence in language {
            base.add_atom(sentence.as_ref())?;
        }
        for sequent in consequences {
            base.add_consequence(&sequent.antecedent, &sequent.consequent)?;
        }
        debug!(
            atoms = base.core.language.len(),
            consequences = base.core.consequences.len(),
            "propositional base created"
        );
        Ok(base)
    }

    pub fn add_atom(&mut self, sentence: &str) -> Result<(), BaseError> {
        let atom = BaseCore::admit(Dialect::Propositional, sentence, "add_atom")?;
        if self.core.insert_atom(&atom) {
            debug!(%atom, "atom added");
        }
        Ok(())
    }

    /// Add `antecedent |~ consequent`; its sentences join the language
    pub fn add_consequence<A, C>(&mut self, antecedent: A, consequent: C) -> Result<(), BaseError>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let (sequent, _) = BaseCore::admit_sequent(Dialect::Propositional, antecedent, consequent)?;
        debug!(consequence = %sequent.display_with("|~"), "consequence added");
        self.core.insert_consequence(sequent);
        Ok(())
    }

    /// Attach a free-text note to a sentence
    pub fn annotate(&mut self, sentence: &str, note: &str) {
        self.core.annotate(sentence, note, Dialect::Propositional);
    }

    pub fn language(&self) -> &BTreeSet<String> {
        &self.core.language
    }

    pub fn consequences(&self) -> &IndexSet<Sequent> {
        &self.core.consequences
    }

    pub fn annotations(&self) -> &IndexMap<String, String> {
        &self.core.annotations
    }

    pub fn annotation(&self, sentence: &str) -> Option<&str> {
        self.core.annotation(sentence, Dialect::Propositional)
    }
}

impl MaterialBase for PropositionalBase {
    fn dialect(&self) -> Dialect {
        Dialect::Propositional
    }

    fn is_axiom(&self, sequent: &Sequent) -> bool {
        self.core.contains_axiom(sequent)
    }
}
