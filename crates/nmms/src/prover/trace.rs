//! Proof-search trace entries

use super::rules::Rule;
use crate::syntax::Sequent;
use serde::Serialize;
use std::fmt;

/// One step of a proof search, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// The base accepted the sequent as an axiom
    Axiom { sequent: Sequent },
    /// The result was taken from the memo cache
    CacheHit { sequent: Sequent, derivable: bool },
    /// The depth bound was reached; the branch counts as not derivable
    DepthLimit { sequent: Sequent },
    /// A rule was applied; its premises follow as deeper entries
    Rule {
        rule: Rule,
        principal: String,
        conclusion: Sequent,
        premises: Vec<Sequent>,
    },
    /// Only atoms remain and the sequent is not an axiom
    NoRule { sequent: Sequent },
    /// Not attempted because an earlier premise of the same rule failed
    Skipped { sequent: Sequent },
}

/// A trace event and the depth at which it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    pub depth: usize,
    #[serde(flatten)]
    pub event: TraceEvent,
}

impl TraceEntry {
    pub fn new(depth: usize, event: TraceEvent) -> Self {
        TraceEntry { depth, event }
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:indent$}", "", indent = self.depth * 2)?;
        match &self.event {
            TraceEvent::Axiom { sequent } => write!(f, "AXIOM: {}", sequent),
            TraceEvent::CacheHit { sequent, derivable } => {
                let verdict = if *derivable {
                    "derivable"
                } else {
                    "not derivable"
                };
                write!(f, "CACHED ({}): {}", verdict, sequent)
            }
            TraceEvent::DepthLimit { sequent } => write!(f, "DEPTH LIMIT: {}", sequent),
            TraceEvent::Rule {
                rule,
                principal,
                conclusion,
                premises,
            } => {
                write!(f, "{} on {}: {}", rule, principal, conclusion)?;
                for (i, premise) in premises.iter().enumerate() {
                    let sep = if i == 0 { "  <=  " } else { "  ;  " };
                    write!(f, "{}[{}]", sep, premise)?;
                }
                Ok(())
            }
            TraceEvent::NoRule { sequent } => write!(f, "NO RULE: {}", sequent),
            TraceEvent::Skipped { sequent } => write!(f, "SKIPPED: {}", sequent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_display_indents_by_depth() {
        let entry = TraceEntry::new(
            2,
            TraceEvent::Axiom {
                sequent: Sequent::new(["s", "t"], NONE),
            },
        );
        assert_eq!(entry.to_string(), "    AXIOM: s, t =>");
    }

    #[test]
    fn test_rule_display() {
        let entry = TraceEntry::new(
            0,
            TraceEvent::Rule {
                rule: Rule::ImpliesRight,
                principal: "p -> q".into(),
                conclusion: Sequent::new(NONE, ["p -> q"]),
                premises: vec![Sequent::new(["p"], ["q"])],
            },
        );
        assert_eq!(entry.to_string(), "R→ on p -> q: => p -> q  <=  [p => q]");
    }

    #[test]
    fn test_serialized_shape() {
        let entry = TraceEntry::new(
            1,
            TraceEvent::CacheHit {
                sequent: Sequent::new(["p"], ["q"]),
                derivable: true,
            },
        );
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["event"], "cache_hit");
        assert_eq!(value["depth"], 1);
        assert_eq!(value["sequent"]["antecedent"], serde_json::json!(["p"]));
    }
}
