//! Subcommand implementations and shared helpers

pub mod ask;
pub mod tell;

use anyhow::{Context, Result};
use nmms::{
    BaseError, Dialect, MaterialBase, OntoBase, PersistentBase, PropositionalBase, RdfsBase,
    Sequent, TellStatement,
};
use serde_json::Value;
use std::fmt::Display;
use std::fs;
use std::io::{self, BufRead, Read};
use std::path::Path;
use std::process::ExitCode;

/// Process outcome, mapped onto the exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Statement applied or sequent derivable
    Success,
    /// Bad input, unreadable base or failed statement
    Error,
    /// Sequent not derivable
    NotDerivable,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Error => 1,
            Status::NotDerivable => 2,
        }
    }

    /// Batch outcome: any error wins, then any underivable sequent
    pub fn merge(self, other: Status) -> Status {
        match (self, other) {
            (Status::Error, _) | (_, Status::Error) => Status::Error,
            (Status::NotDerivable, _) | (_, Status::NotDerivable) => Status::NotDerivable,
            _ => Status::Success,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

/// Output mode selected by `--json` / `--quiet`
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn error(&self, message: impl Display) {
        if self.json {
            println!("{}", serde_json::json!({ "error": message.to_string() }));
        } else if !self.quiet {
            eprintln!("Error: {}", message);
        }
    }

    pub fn emit(&self, value: &Value) {
        println!("{}", value);
    }

    /// Print human-readable text unless JSON or quiet output was requested
    pub fn say(&self, text: impl Display) {
        if !self.json && !self.quiet {
            println!("{}", text);
        }
    }
}

/// A base of whichever dialect was requested on the command line
#[derive(Debug, Clone)]
pub enum LoadedBase {
    Propositional(PropositionalBase),
    Rdfs(RdfsBase),
    Onto(OntoBase),
}

impl LoadedBase {
    pub fn empty(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Propositional => LoadedBase::Propositional(PropositionalBase::new()),
            Dialect::Rdfs => LoadedBase::Rdfs(RdfsBase::new()),
            Dialect::Onto => LoadedBase::Onto(OntoBase::new()),
        }
    }

    pub fn load(path: &Path, dialect: Dialect) -> Result<Self, BaseError> {
        Ok(match dialect {
            Dialect::Propositional => {
                LoadedBase::Propositional(PropositionalBase::from_file(path)?)
            }
            Dialect::Rdfs => LoadedBase::Rdfs(RdfsBase::from_file(path)?),
            Dialect::Onto => LoadedBase::Onto(OntoBase::from_file(path)?),
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), BaseError> {
        match self {
            LoadedBase::Propositional(base) => base.to_file(path),
            LoadedBase::Rdfs(base) => base.to_file(path),
            LoadedBase::Onto(base) => base.to_file(path),
        }
    }

    /// Apply a parsed `tell` statement
    pub fn apply(&mut self, statement: &TellStatement) -> Result<(), BaseError> {
        match statement {
            TellStatement::Atom {
                sentence,
                annotation,
            } => {
                self.add_atom(sentence)?;
                if let Some(note) = annotation {
                    self.annotate(sentence, note);
                }
                Ok(())
            }
            TellStatement::Consequence(sequent) => self.add_consequence(sequent),
            TellStatement::Schema { schema, annotation } => match self {
                LoadedBase::Propositional(_) => Err(BaseError::UnsupportedSchema {
                    kind: schema.kind(),
                    dialect: Dialect::Propositional,
                }),
                LoadedBase::Rdfs(base) => base.register(schema.clone(), annotation.clone()),
                LoadedBase::Onto(base) => base.register(schema.clone(), annotation.clone()),
            },
        }
    }

    fn add_atom(&mut self, sentence: &str) -> Result<(), BaseError> {
        match self {
            LoadedBase::Propositional(base) => base.add_atom(sentence),
            LoadedBase::Rdfs(base) => base.add_atom(sentence),
            LoadedBase::Onto(base) => base.add_atom(sentence),
        }
    }

    fn add_consequence(&mut self, sequent: &Sequent) -> Result<(), BaseError> {
        let (antecedent, consequent) = (&sequent.antecedent, &sequent.consequent);
        match self {
            LoadedBase::Propositional(base) => base.add_consequence(antecedent, consequent),
            LoadedBase::Rdfs(base) => base.add_consequence(antecedent, consequent),
            LoadedBase::Onto(base) => base.add_consequence(antecedent, consequent),
        }
    }

    fn annotate(&mut self, sentence: &str, note: &str) {
        match self {
            LoadedBase::Propositional(base) => base.annotate(sentence, note),
            LoadedBase::Rdfs(base) => base.annotate(sentence, note),
            LoadedBase::Onto(base) => base.annotate(sentence, note),
        }
    }
}

impl MaterialBase for LoadedBase {
    fn dialect(&self) -> Dialect {
        match self {
            LoadedBase::Propositional(base) => base.dialect(),
            LoadedBase::Rdfs(base) => base.dialect(),
            LoadedBase::Onto(base) => base.dialect(),
        }
    }

    fn is_axiom(&self, sequent: &Sequent) -> bool {
        match self {
            LoadedBase::Propositional(base) => base.is_axiom(sequent),
            LoadedBase::Rdfs(base) => base.is_axiom(sequent),
            LoadedBase::Onto(base) => base.is_axiom(sequent),
        }
    }
}

/// Non-blank, non-comment lines of FILE, or of stdin for `-`
pub fn read_batch(source: &str) -> Result<Vec<String>> {
    let text = if source == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read batch from stdin")?;
        text
    } else {
        fs::read_to_string(source).with_context(|| format!("failed to read batch file {}", source))?
    };
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// The positional argument, or one line of stdin for `-`
pub fn read_single(argument: Option<String>, what: &str) -> Result<String> {
    match argument.as_deref() {
        None => anyhow::bail!("no {} provided", what),
        Some("-") => {
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("failed to read from stdin")?;
            Ok(line.trim_end_matches(['\r', '\n']).to_string())
        }
        Some(text) => Ok(text.to_string()),
    }
}
