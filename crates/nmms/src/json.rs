//! JSON file format for material bases
//!
//! ```json
//! {
//!   "language": ["Man(socrates)"],
//!   "consequences": [{"antecedent": ["Man(socrates)"], "consequent": ["Mortal(socrates)"]}],
//!   "annotations": {"Man(socrates)": "Socrates is a man"},
//!   "individuals": ["socrates"], "concepts": ["Man", "Mortal"], "roles": [],
//!   "onto_schemas": [{"type": "jointCommitment", "arg1": ["A", "B"], "arg2": "C"}]
//! }
//! ```
//!
//! Vocabulary lists and the schema list are only written by structured
//! bases. Schemas live under `rdfs_schemas` or `onto_schemas` depending
//! on the dialect; `annotation` is omitted when absent.

use crate::base::{
    MaterialBase, PropositionalBase, Schema, SchemaKind, SchemaProfile, SchemaRecord,
    StructuredBase,
};
use crate::error::BaseError;
use crate::syntax::Sequent;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// JSON representation of a stored consequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsequenceJson {
    pub antecedent: Vec<String>,
    pub consequent: Vec<String>,
}

impl ConsequenceJson {
    pub fn from_sequent(sequent: &Sequent) -> Self {
        ConsequenceJson {
            antecedent: sequent.antecedent.iter().cloned().collect(),
            consequent: sequent.consequent.iter().cloned().collect(),
        }
    }
}

/// First schema argument: a single name, or the concept list of a joint
/// commitment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaArg {
    Name(String),
    Names(Vec<String>),
}

/// JSON representation of a registered schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaJson {
    #[serde(rename = "type")]
    pub kind: String,
    pub arg1: SchemaArg,
    pub arg2: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl SchemaJson {
    pub fn from_record(record: &SchemaRecord) -> Self {
        let (arg1, arg2) = match &record.schema {
            Schema::SubClassOf { sub, sup } | Schema::SubPropertyOf { sub, sup } => {
                (SchemaArg::Name(sub.clone()), sup.clone())
            }
            Schema::Range { role, concept } | Schema::Domain { role, concept } => {
                (SchemaArg::Name(role.clone()), concept.clone())
            }
            Schema::DisjointWith { first, second }
            | Schema::DisjointProperties { first, second } => {
                (SchemaArg::Name(first.clone()), second.clone())
            }
            Schema::JointCommitment {
                antecedent,
                consequent,
            } => (
                SchemaArg::Names(antecedent.iter().cloned().collect()),
                consequent.clone(),
            ),
        };
        SchemaJson {
            kind: record.schema.kind().to_string(),
            arg1,
            arg2,
            annotation: record.annotation.clone(),
        }
    }

    pub fn into_record(self) -> Result<SchemaRecord, BaseError> {
        let kind: SchemaKind = self.kind.parse()?;
        let arg2 = self.arg2.trim().to_string();
        let schema = match (kind, self.arg1) {
            (SchemaKind::JointCommitment, SchemaArg::Names(names)) => {
                Schema::joint_commitment(names, arg2)?
            }
            // comma-separated concept list
            (SchemaKind::JointCommitment, SchemaArg::Name(names)) => {
                Schema::joint_commitment(names.split(','), arg2)?
            }
            (kind, SchemaArg::Names(_)) => {
                return Err(BaseError::MalformedSchema {
                    kind,
                    reason: "arg1 must be a single name".to_string(),
                })
            }
            (kind, SchemaArg::Name(arg1)) => Schema::binary(kind, arg1.trim(), &arg2)
                .ok_or_else(|| BaseError::MalformedSchema {
                    kind,
                    reason: "arg1 must be a list of concepts".to_string(),
                })?,
        };
        Ok(SchemaRecord::new(schema, self.annotation))
    }
}

/// A material base as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseJson {
    #[serde(default)]
    pub language: Vec<String>,
    #[serde(default)]
    pub consequences: Vec<ConsequenceJson>,
    #[serde(default)]
    pub annotations: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individuals: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concepts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rdfs_schemas: Option<Vec<SchemaJson>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onto_schemas: Option<Vec<SchemaJson>>,
}

impl BaseJson {
    fn schemas_mut(&mut self, key: &str) -> Option<&mut Option<Vec<SchemaJson>>> {
        match key {
            "rdfs_schemas" => Some(&mut self.rdfs_schemas),
            "onto_schemas" => Some(&mut self.onto_schemas),
            _ => None,
        }
    }

    fn take_all_schemas(&mut self) -> Vec<SchemaJson> {
        let mut schemas = self.rdfs_schemas.take().unwrap_or_default();
        schemas.extend(self.onto_schemas.take().unwrap_or_default());
        schemas
    }
}

/// A base that can be written to and restored from [`BaseJson`]
pub trait PersistentBase: MaterialBase + Sized {
    fn to_json(&self) -> BaseJson;

    fn from_json(doc: BaseJson) -> Result<Self, BaseError>;

    fn to_json_string(&self) -> Result<String, BaseError> {
        Ok(serde_json::to_string_pretty(&self.to_json())?)
    }

    fn from_json_str(text: &str) -> Result<Self, BaseError> {
        Self::from_json(serde_json::from_str(text)?)
    }

    fn to_file<Q: AsRef<Path>>(&self, path: Q) -> Result<(), BaseError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &self.to_json())?;
        writeln!(writer)?;
        writer.flush()?;
        info!(path = %path.display(), dialect = %self.dialect(), "base saved");
        Ok(())
    }

    fn from_file<Q: AsRef<Path>>(path: Q) -> Result<Self, BaseError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let doc: BaseJson = serde_json::from_reader(reader)?;
        let base = Self::from_json(doc)?;
        info!(path = %path.display(), dialect = %base.dialect(), "base loaded");
        Ok(base)
    }
}

fn consequences_to_json<'a>(
    consequences: impl IntoIterator<Item = &'a Sequent>,
) -> Vec<ConsequenceJson> {
    consequences
        .into_iter()
        .map(ConsequenceJson::from_sequent)
        .collect()
}

impl PersistentBase for PropositionalBase {
    fn to_json(&self) -> BaseJson {
        BaseJson {
            language: self.language().iter().cloned().collect(),
            consequences: consequences_to_json(self.consequences()),
            annotations: self.annotations().clone(),
            ..BaseJson::default()
        }
    }

    fn from_json(mut doc: BaseJson) -> Result<Self, BaseError> {
        if let Some(schema) = doc.take_all_schemas().into_iter().next() {
            return Err(BaseError::UnsupportedSchema {
                kind: schema.kind.parse()?,
                dialect: crate::parser::Dialect::Propositional,
            });
        }
        let mut base = PropositionalBase::new();
        for sentence in &doc.language {
            base.add_atom(sentence)?;
        }
        for consequence in &doc.consequences {
            base.add_consequence(&consequence.antecedent, &consequence.consequent)?;
        }
        for (sentence, note) in &doc.annotations {
            base.annotate(sentence, note);
        }
        Ok(base)
    }
}

impl<P: SchemaProfile> PersistentBase for StructuredBase<P> {
    fn to_json(&self) -> BaseJson {
        let mut doc = BaseJson {
            language: self.language().iter().cloned().collect(),
            consequences: consequences_to_json(self.consequences()),
            annotations: self.annotations().clone(),
            individuals: Some(self.individuals().iter().cloned().collect()),
            concepts: Some(self.concepts().iter().cloned().collect()),
            roles: Some(self.roles().iter().cloned().collect()),
            ..BaseJson::default()
        };
        if let Some(slot) = doc.schemas_mut(P::SCHEMA_KEY) {
            *slot = Some(self.schemas().iter().map(SchemaJson::from_record).collect());
        }
        doc
    }

    fn from_json(mut doc: BaseJson) -> Result<Self, BaseError> {
        let mut base = StructuredBase::<P>::new();
        for sentence in &doc.language {
            base.add_atom(sentence)?;
        }
        for consequence in &doc.consequences {
            base.add_consequence(&consequence.antecedent, &consequence.consequent)?;
        }
        for (sentence, note) in &doc.annotations {
            base.annotate(sentence, note);
        }
        let vocabulary = base.vocabulary_mut();
        vocabulary.individuals.extend(doc.individuals.take().unwrap_or_default());
        vocabulary.concepts.extend(doc.concepts.take().unwrap_or_default());
        vocabulary.roles.extend(doc.roles.take().unwrap_or_default());
        for schema in doc.take_all_schemas() {
            let record = schema.into_record()?;
            base.register(record.schema, record.annotation)?;
        }
        Ok(base)
    }
}
