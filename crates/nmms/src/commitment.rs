//! Commitment store: sourced assertions, schemas and ground rules that
//! compile into a structured material base
//!
//! Every schema carries the source that introduced it, so a whole source
//! can be retracted at once. The compiled base is memoized and rebuilt
//! after any change.

use crate::base::{BaseCore, Onto, Schema, SchemaProfile, StructuredBase};
use crate::error::BaseError;
use crate::syntax::Sequent;
use indexmap::IndexSet;
use std::collections::BTreeSet;
use std::fmt::Write;
use tracing::debug;

/// A schema and the source that committed to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commitment {
    pub source: String,
    pub schema: Schema,
}

#[derive(Debug, Clone, Default)]
pub struct CommitmentStore<P: SchemaProfile = Onto> {
    assertions: BTreeSet<String>,
    commitments: Vec<Commitment>,
    ground_rules: IndexSet<Sequent>,
    compiled: Option<StructuredBase<P>>,
}

impl<P: SchemaProfile> CommitmentStore<P> {
    pub fn new() -> Self {
        CommitmentStore {
            assertions: BTreeSet::new(),
            commitments: Vec::new(),
            ground_rules: IndexSet::new(),
            compiled: None,
        }
    }

    /// Add an atomic assertion
    pub fn add_assertion(&mut self, sentence: &str) -> Result<(), BaseError> {
        let atom = BaseCore::admit(P::DIALECT, sentence, "CommitmentStore::add_assertion")?;
        self.assertions.insert(atom.to_string());
        self.compiled = None;
        Ok(())
    }

    /// Add the concept assertion `concept(individual)`
    pub fn add_concept(&mut self, concept: &str, individual: &str) -> Result<(), BaseError> {
        self.add_assertion(&format!("{}({})", concept.trim(), individual.trim()))
    }

    /// Add the role assertion `role(subject,object)`
    pub fn add_role(&mut self, role: &str, subject: &str, object: &str) -> Result<(), BaseError> {
        self.add_assertion(&format!(
            "{}({},{})",
            role.trim(),
            subject.trim(),
            object.trim()
        ))
    }

    /// Record a schema on behalf of `source`
    pub fn commit(&mut self, source: &str, schema: Schema) -> Result<(), BaseError> {
        let kind = schema.kind();
        if !P::supports(kind) {
            return Err(BaseError::UnsupportedSchema {
                kind,
                dialect: P::DIALECT,
            });
        }
        schema.validate()?;
        debug!(source, pattern = %schema, "schema committed");
        self.commitments.push(Commitment {
            source: source.to_string(),
            schema,
        });
        self.compiled = None;
        Ok(())
    }

    pub fn commit_subclass(&mut self, source: &str, sub: &str, sup: &str) -> Result<(), BaseError> {
        self.commit(
            source,
            Schema::SubClassOf {
                sub: sub.trim().to_string(),
                sup: sup.trim().to_string(),
            },
        )
    }

    pub fn commit_range(
        &mut self,
        source: &str,
        role: &str,
        concept: &str,
    ) -> Result<(), BaseError> {
        self.commit(
            source,
            Schema::Range {
                role: role.trim().to_string(),
                concept: concept.trim().to_string(),
            },
        )
    }

    pub fn commit_domain(
        &mut self,
        source: &str,
        role: &str,
        concept: &str,
    ) -> Result<(), BaseError> {
        self.commit(
            source,
            Schema::Domain {
                role: role.trim().to_string(),
                concept: concept.trim().to_string(),
            },
        )
    }

    pub fn commit_subproperty(
        &mut self,
        source: &str,
        sub: &str,
        sup: &str,
    ) -> Result<(), BaseError> {
        self.commit(
            source,
            Schema::SubPropertyOf {
                sub: sub.trim().to_string(),
                sup: sup.trim().to_string(),
            },
        )
    }

    /// Record a ground defeasible inference; its sentences become assertions
    pub fn commit_defeasible_rule<A, C>(
        &mut self,
        source: &str,
        antecedent: A,
        consequent: C,
    ) -> Result<(), BaseError>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let (sequent, atoms) = BaseCore::admit_sequent(P::DIALECT, antecedent, consequent)?;
        self.assertions
            .extend(atoms.iter().map(ToString::to_string));
        debug!(source, rule = %sequent.display_with("|~"), "ground rule committed");
        self.ground_rules.insert(sequent);
        self.compiled = None;
        Ok(())
    }

    /// Drop every schema committed by `source`; returns how many were removed
    pub fn retract_schema(&mut self, source: &str) -> usize {
        let before = self.commitments.len();
        self.commitments.retain(|c| c.source != source);
        let removed = before - self.commitments.len();
        if removed > 0 {
            debug!(source, removed, "schemas retracted");
            self.compiled = None;
        }
        removed
    }

    pub fn assertions(&self) -> &BTreeSet<String> {
        &self.assertions
    }

    pub fn commitments(&self) -> &[Commitment] {
        &self.commitments
    }

    pub fn ground_rules(&self) -> &IndexSet<Sequent> {
        &self.ground_rules
    }

    /// The material base for the current commitments, rebuilt only after
    /// a change
    pub fn compile(&mut self) -> Result<&StructuredBase<P>, BaseError> {
        let base = match self.compiled.take() {
            Some(base) => base,
            None => self.build()?,
        };
        Ok(&*self.compiled.insert(base))
    }

    fn build(&self) -> Result<StructuredBase<P>, BaseError> {
        let mut base = StructuredBase::<P>::from_parts(
            &self.assertions,
            self.ground_rules.iter().cloned(),
        )?;
        for commitment in &self.commitments {
            base.register(commitment.schema.clone(), Some(commitment.source.clone()))?;
        }
        debug!(
            assertions = self.assertions.len(),
            schemas = self.commitments.len(),
            ground_rules = self.ground_rules.len(),
            "commitment store compiled"
        );
        Ok(base)
    }

    /// Multi-line summary of assertions, schemas and ground rules
    pub fn describe(&self) -> String {
        let mut out = String::from("Commitment store:\n");
        let _ = writeln!(out, "  Assertions: {}", self.assertions.len());
        for assertion in &self.assertions {
            let _ = writeln!(out, "    {}", assertion);
        }
        let _ = writeln!(out, "  Schemas: {}", self.commitments.len());
        for commitment in &self.commitments {
            let _ = writeln!(
                out,
                "    [{}] {}: {}",
                commitment.source,
                commitment.schema.kind(),
                commitment.schema
            );
        }
        if !self.ground_rules.is_empty() {
            let _ = writeln!(out, "  Ground rules: {}", self.ground_rules.len());
            for rule in &self.ground_rules {
                let _ = writeln!(out, "    {}", rule.display_with("|~"));
            }
        }
        out
    }
}

impl CommitmentStore<Onto> {
    pub fn commit_disjoint(
        &mut self,
        source: &str,
        first: &str,
        second: &str,
    ) -> Result<(), BaseError> {
        self.commit(
            source,
            Schema::DisjointWith {
                first: first.trim().to_string(),
                second: second.trim().to_string(),
            },
        )
    }

    pub fn commit_disjoint_properties(
        &mut self,
        source: &str,
        first: &str,
        second: &str,
    ) -> Result<(), BaseError> {
        self.commit(
            source,
            Schema::DisjointProperties {
                first: first.trim().to_string(),
                second: second.trim().to_string(),
            },
        )
    }

    pub fn commit_joint_commitment<I, S>(
        &mut self,
        source: &str,
        antecedent: I,
        consequent: &str,
    ) -> Result<(), BaseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let schema = Schema::joint_commitment(antecedent, consequent.trim())?;
        self.commit(source, schema)
    }
}
