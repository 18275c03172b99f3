//! Individual, concept and role names seen by a structured base

use crate::syntax::Atom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Names extracted from every atom added to a structured base
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub individuals: BTreeSet<String>,
    pub concepts: BTreeSet<String>,
    pub roles: BTreeSet<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the names used by `atom`
    pub fn record(&mut self, atom: &Atom) {
        match atom {
            Atom::Proposition { .. } => return,
            Atom::Concept { concept, .. } => self.concepts.insert(concept.clone()),
            Atom::Role { role, .. } => self.roles.insert(role.clone()),
        };
        self.individuals
            .extend(atom.individuals().into_iter().map(str::to_string));
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty() && self.concepts.is_empty() && self.roles.is_empty()
    }
}
