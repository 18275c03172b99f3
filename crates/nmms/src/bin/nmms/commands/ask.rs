//! `nmms ask`: decide sequents against a base file

use super::{read_batch, read_single, LoadedBase, Output, Status};
use anyhow::{Context, Result};
use nmms::{parse_sentence, Dialect, DerivationResult, MaterialBase, NmmsError, Reasoner, Sequent};
use serde_json::json;
use std::path::PathBuf;

pub fn run(
    path: PathBuf,
    dialect: Dialect,
    trace: bool,
    max_depth: usize,
    batch: Option<String>,
    sequent: Option<String>,
    output: &Output,
) -> Result<Status> {
    if !path.exists() {
        anyhow::bail!("base file {} does not exist", path.display());
    }
    let base = LoadedBase::load(&path, dialect)
        .with_context(|| format!("failed to load base {}", path.display()))?;
    let mut reasoner = Reasoner::with_max_depth(base, max_depth)?;

    match batch {
        Some(source) => {
            let mut status = Status::Success;
            for (number, line) in read_batch(&source)?.iter().enumerate() {
                match decide(&mut reasoner, line) {
                    Ok((sequent, result)) => {
                        report(&sequent, &result, trace, output);
                        status = status.merge(verdict(&result));
                    }
                    Err(err) => {
                        output.error(format!("line {}: {}", number + 1, err));
                        status = status.merge(Status::Error);
                    }
                }
            }
            Ok(status)
        }
        None => {
            let line = read_single(sequent, "sequent")?;
            let (sequent, result) = decide(&mut reasoner, &line)?;
            report(&sequent, &result, trace, output);
            Ok(verdict(&result))
        }
    }
}

fn decide<B: MaterialBase>(
    reasoner: &mut Reasoner<B>,
    line: &str,
) -> Result<(Sequent, DerivationResult), NmmsError> {
    let sequent = nmms::parse_sequent(line)?;
    let dialect = reasoner.base().dialect();
    for sentence in sequent.sentences() {
        parse_sentence(sentence, dialect)?;
    }
    let result = reasoner.derives(&sequent.antecedent, &sequent.consequent);
    Ok((sequent, result))
}

fn verdict(result: &DerivationResult) -> Status {
    if result.derivable {
        Status::Success
    } else {
        Status::NotDerivable
    }
}

fn report(sequent: &Sequent, result: &DerivationResult, trace: bool, output: &Output) {
    if output.json {
        let mut value = json!({
            "derivable": result.derivable,
            "antecedent": sequent.antecedent,
            "consequent": sequent.consequent,
            "depth_reached": result.depth_reached,
            "cache_hits": result.cache_hits,
            "depth_limited": result.depth_limited,
        });
        if trace {
            value["trace"] = json!(result.trace_lines());
        }
        output.emit(&value);
        return;
    }

    output.say(if result.derivable {
        "DERIVABLE"
    } else {
        "NOT DERIVABLE"
    });
    if trace {
        output.say("\nProof trace:");
        for line in result.trace_lines() {
            output.say(format!("  {}", line));
        }
        output.say(format!("\nDepth reached: {}", result.depth_reached));
        output.say(format!("Cache hits: {}", result.cache_hits));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nmms::{PersistentBase, PropositionalBase};
    use std::fs;
    use std::path::Path;
    use tempfile::{tempdir, TempDir};

    const NONE: [&str; 0] = [];
    const QUIET: Output = Output {
        json: false,
        quiet: true,
    };

    fn toy_base() -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("base.json");
        let mut base = PropositionalBase::new();
        base.add_consequence(["p"], ["q"]).unwrap();
        base.add_consequence(["s", "t"], NONE).unwrap();
        base.to_file(&path).unwrap();
        (dir, path)
    }

    fn ask(path: &Path, sequent: &str) -> Result<Status> {
        let sequent = Some(sequent.to_string());
        run(path.to_path_buf(), Dialect::Propositional, false, 25, None, sequent, &QUIET)
    }

    fn ask_batch(dir: &TempDir, path: &Path, lines: &str) -> Status {
        let batch = dir.path().join("queries.txt");
        fs::write(&batch, lines).unwrap();
        let source = Some(batch.display().to_string());
        run(path.to_path_buf(), Dialect::Propositional, true, 25, source, None, &QUIET).unwrap()
    }

    #[test]
    fn test_single_sequent_exit_status() {
        let (_dir, path) = toy_base();
        assert_eq!(ask(&path, "=> ~(s & t)").unwrap(), Status::Success);
        assert_eq!(ask(&path, "p, r => q").unwrap(), Status::NotDerivable);
        assert!(ask(&path, "p => q &").is_err());
        assert!(ask(&path, "p q").is_err());
    }

    #[test]
    fn test_batch_status_merges() {
        let (dir, path) = toy_base();
        assert_eq!(
            ask_batch(&dir, &path, "# detachment\n=> p -> q\n\np => q\n"),
            Status::Success
        );
        assert_eq!(
            ask_batch(&dir, &path, "p => q\np, r => q\n"),
            Status::NotDerivable
        );
        assert_eq!(
            ask_batch(&dir, &path, "p, r => q\np => q &\np => q\n"),
            Status::Error
        );
    }

    #[test]
    fn test_missing_base_and_bad_depth_are_errors() {
        let (dir, path) = toy_base();
        assert!(ask(&dir.path().join("absent.json"), "p => q").is_err());
        let sequent = Some("p => q".to_string());
        assert!(run(path, Dialect::Propositional, false, 0, None, sequent, &QUIET).is_err());
    }
}
