//! Material bases over concept and role assertions, with schemas
//!
//! [`RdfsBase`] and [`OntoBase`] share one implementation parameterized by
//! a [`SchemaProfile`], which fixes the dialect and which schema kinds may
//! be registered.

use super::schema::{Schema, SchemaKind, SchemaRecord};
use super::vocabulary::Vocabulary;
use super::{BaseCore, MaterialBase};
use crate::error::BaseError;
use crate::parser::{self, Dialect};
use crate::syntax::{Atom, Sequent};
use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeSet;
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

/// Static description of a structured dialect
pub trait SchemaProfile: fmt::Debug + Clone + Default + PartialEq + Send + Sync + 'static {
    const DIALECT: Dialect;

    /// Key under which schemas are persisted
    const SCHEMA_KEY: &'static str;

    fn supports(kind: SchemaKind) -> bool;
}

/// The RDFS vocabulary: subClassOf, range, domain and subPropertyOf
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rdfs;

/// The RDFS vocabulary plus disjointness and joint commitments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Onto;

impl SchemaProfile for Rdfs {
    const DIALECT: Dialect = Dialect::Rdfs;
    const SCHEMA_KEY: &'static str = "rdfs_schemas";

    fn supports(kind: SchemaKind) -> bool {
        matches!(
            kind,
            SchemaKind::SubClassOf
                | SchemaKind::Range
                | SchemaKind::Domain
                | SchemaKind::SubPropertyOf
        )
    }
}

impl SchemaProfile for Onto {
    const DIALECT: Dialect = Dialect::Onto;
    const SCHEMA_KEY: &'static str = "onto_schemas";

    fn supports(_kind: SchemaKind) -> bool {
        true
    }
}

/// A material base whose atoms are concept and role assertions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredBase<P: SchemaProfile> {
    core: BaseCore,
    vocabulary: Vocabulary,
    schemas: Vec<SchemaRecord>,
    profile: PhantomData<P>,
}

pub type RdfsBase = StructuredBase<Rdfs>;
pub type OntoBase = StructuredBase<Onto>;

impl<P: SchemaProfile> StructuredBase<P> {
    pub fn new() -> Self {
        StructuredBase {
            core: BaseCore::default(),
            vocabulary: Vocabulary::new(),
            schemas: Vec::new(),
            profile: PhantomData,
        }
    }

    /// Build a base from an initial language and consequence set.
    ///
    /// Bare propositional atoms and complex sentences are rejected.
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
            dialect = %P::DIALECT,
            atoms = base.core.language.len(),
            consequences = base.core.consequences.len(),
            individuals = base.vocabulary.individuals.len(),
            "structured base created"
        );
        Ok(base)
    }

    pub fn add_atom(&mut self, sentence: &str) -> Result<(), BaseError> {
        let atom = BaseCore::admit(P::DIALECT, sentence, "add_atom")?;
        self.vocabulary.record(&atom);
        if self.core.insert_atom(&atom) {
            debug!(%atom, "atom added");
        }
        Ok(())
    }

    /// Add `antecedent |~ consequent`; its sentences join the language and
    /// their names join the vocabulary
    pub fn add_consequence<A, C>(&mut self, antecedent: A, consequent: C) -> Result<(), BaseError>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let (sequent, atoms) = BaseCore::admit_sequent(P::DIALECT, antecedent, consequent)?;
        for atom in &atoms {
            self.vocabulary.record(atom);
        }
        debug!(consequence = %sequent.display_with("|~"), "consequence added");
        self.core.insert_consequence(sequent);
        Ok(())
    }

    /// Add the role assertion `role(subject,object)` to the language
    pub fn add_individual(
        &mut self,
        role: &str,
        subject: &str,
        object: &str,
    ) -> Result<(), BaseError> {
        self.add_atom(&format!("{}({},{})", role.trim(), subject.trim(), object.trim()))
    }

    /// Register a schema after checking it against this dialect
    pub fn register(
        &mut self,
        schema: Schema,
        annotation: Option<String>,
    ) -> Result<(), BaseError> {
        let kind = schema.kind();
        if !P::supports(kind) {
            return Err(BaseError::UnsupportedSchema {
                kind,
                dialect: P::DIALECT,
            });
        }
        schema.validate()?;
        self.push_schema(SchemaRecord::new(schema, annotation));
        Ok(())
    }

    /// `{C(x)} |~ {D(x)}` for every individual x
    pub fn register_subclass(&mut self, sub: &str, sup: &str, annotation: Option<&str>) {
        self.push_schema(SchemaRecord::new(
            Schema::SubClassOf {
                sub: sub.trim().to_string(),
                sup: sup.trim().to_string(),
            },
            annotation.map(str::to_string),
        ));
    }

    /// `{R(x,y)} |~ {C(y)}`
    pub fn register_range(&mut self, role: &str, concept: &str, annotation: Option<&str>) {
        self.push_schema(SchemaRecord::new(
            Schema::Range {
                role: role.trim().to_string(),
                concept: concept.trim().to_string(),
            },
            annotation.map(str::to_string),
        ));
    }

    /// `{R(x,y)} |~ {C(x)}`
    pub fn register_domain(&mut self, role: &str, concept: &str, annotation: Option<&str>) {
        self.push_schema(SchemaRecord::new(
            Schema::Domain {
                role: role.trim().to_string(),
                concept: concept.trim().to_string(),
            },
            annotation.map(str::to_string),
        ));
    }

    /// `{R(x,y)} |~ {S(x,y)}`
    pub fn register_subproperty(&mut self, sub: &str, sup: &str, annotation: Option<&str>) {
        self.push_schema(SchemaRecord::new(
            Schema::SubPropertyOf {
                sub: sub.trim().to_string(),
                sup: sup.trim().to_string(),
            },
            annotation.map(str::to_string),
        ));
    }

    fn push_schema(&mut self, record: SchemaRecord) {
        debug!(kind = %record.schema.kind(), pattern = %record.schema, "schema registered");
        self.schemas.push(record);
    }

    pub fn annotate(&mut self, sentence: &str, note: &str) {
        self.core.annotate(sentence, note, P::DIALECT);
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
        self.core.annotation(sentence, P::DIALECT)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub(crate) fn vocabulary_mut(&mut self) -> &mut Vocabulary {
        &mut self.vocabulary
    }

    pub fn individuals(&self) -> &BTreeSet<String> {
        &self.vocabulary.individuals
    }

    pub fn concepts(&self) -> &BTreeSet<String> {
        &self.vocabulary.concepts
    }

    pub fn roles(&self) -> &BTreeSet<String> {
        &self.vocabulary.roles
    }

    /// Registered schemas in registration order
    pub fn schemas(&self) -> &[SchemaRecord] {
        &self.schemas
    }

    /// Whether some registered schema has `sequent` as an instance.
    ///
    /// Every sentence must be an atom of this dialect; anything else
    /// never matches.
    fn matches_schema(&self, sequent: &Sequent) -> bool {
        if self.schemas.is_empty() {
            return false;
        }
        let parse_side = |side: &BTreeSet<String>| -> Option<Vec<Atom>> {
            side.iter()
                .map(|s| parser::parse_atom(s, P::DIALECT))
                .collect()
        };
        let (Some(antecedent), Some(consequent)) =
            (parse_side(&sequent.antecedent), parse_side(&sequent.consequent))
        else {
            return false;
        };
        self.schemas
            .iter()
            .any(|record| record.schema.matches(&antecedent, &consequent))
    }
}

impl StructuredBase<Onto> {
    /// `{C(x), D(x)} |~ {}`
    pub fn register_disjoint(&mut self, first: &str, second: &str, annotation: Option<&str>) {
        self.push_schema(SchemaRecord::new(
            Schema::DisjointWith {
                first: first.trim().to_string(),
                second: second.trim().to_string(),
            },
            annotation.map(str::to_string),
        ));
    }

    /// `{R(x,y), S(x,y)} |~ {}`
    pub fn register_disjoint_properties(
        &mut self,
        first: &str,
        second: &str,
        annotation: Option<&str>,
    ) {
        self.push_schema(SchemaRecord::new(
            Schema::DisjointProperties {
                first: first.trim().to_string(),
                second: second.trim().to_string(),
            },
            annotation.map(str::to_string),
        ));
    }

    /// `{C1(x), ..., Cn(x)} |~ {D(x)}`; needs at least two distinct concepts
    pub fn register_joint_commitment<I, S>(
        &mut self,
        antecedent: I,
        consequent: &str,
        annotation: Option<&str>,
    ) -> Result<(), BaseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let schema = Schema::joint_commitment(antecedent, consequent.trim())?;
        self.push_schema(SchemaRecord::new(schema, annotation.map(str::to_string)));
        Ok(())
    }
}

impl<P: SchemaProfile> MaterialBase for StructuredBase<P> {
    fn dialect(&self) -> Dialect {
        P::DIALECT
    }

    fn is_axiom(&self, sequent: &Sequent) -> bool {
        self.core.contains_axiom(sequent) || self.matches_schema(sequent)
    }
}
