//! `nmms tell`: add atoms, consequences and schemas to a base file

use super::{read_batch, read_single, LoadedBase, Output, Status};
use anyhow::{Context, Result};
use nmms::{Dialect, NmmsError, TellStatement};
use serde_json::json;
use std::path::PathBuf;
use tracing::{debug, info};

pub fn run(
    path: PathBuf,
    create: bool,
    dialect: Dialect,
    batch: Option<String>,
    statement: Option<String>,
    output: &Output,
) -> Result<Status> {
    let mut base = if path.exists() {
        LoadedBase::load(&path, dialect)
            .with_context(|| format!("failed to load base {}", path.display()))?
    } else if create {
        info!(path = %path.display(), %dialect, "creating new base");
        LoadedBase::empty(dialect)
    } else {
        anyhow::bail!(
            "base file {} does not exist (use --create to create it)",
            path.display()
        );
    };

    let status = match batch {
        Some(source) => {
            let mut status = Status::Success;
            for (number, line) in read_batch(&source)?.iter().enumerate() {
                if let Err(err) = process(&mut base, line, output) {
                    output.error(format!("line {}: {}", number + 1, err));
                    status = status.merge(Status::Error);
                }
            }
            status
        }
        None => {
            let line = read_single(statement, "statement")?;
            process(&mut base, &line, output)?;
            Status::Success
        }
    };

    base.save(&path)
        .with_context(|| format!("failed to save base {}", path.display()))?;
    Ok(status)
}

fn process(base: &mut LoadedBase, line: &str, output: &Output) -> Result<(), NmmsError> {
    let statement = nmms::parse_tell(line)?;
    debug!(?statement, "applying statement");
    base.apply(&statement)?;

    match &statement {
        TellStatement::Atom {
            sentence,
            annotation,
        } => {
            if output.json {
                output.emit(&json!({
                    "action": "add_atom",
                    "sentence": sentence,
                    "annotation": annotation,
                }));
            } else {
                output.say(format!("Added atom: {}", sentence));
            }
        }
        TellStatement::Consequence(sequent) => {
            if output.json {
                output.emit(&json!({
                    "action": "add_consequence",
                    "antecedent": sequent.antecedent,
                    "consequent": sequent.consequent,
                }));
            } else {
                output.say(format!("Added consequence: {}", sequent.display_with("|~")));
            }
        }
        TellStatement::Schema { schema, annotation } => {
            if output.json {
                output.emit(&json!({
                    "action": "register_schema",
                    "schema": schema.kind().as_str(),
                    "pattern": schema.to_string(),
                    "annotation": annotation,
                }));
            } else {
                output.say(format!("Registered {} schema: {}", schema.kind(), schema));
            }
        }
    }
    Ok(())
}
