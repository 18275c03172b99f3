//! The eight sequent rules
//!
//! Every rule removes its principal sentence and adds only that
//! sentence's immediate subsentences to the premises. Side sentences are
//! carried over unchanged, and no rule weakens or cuts.

use crate::error::Side;
use crate::syntax::{Sentence, Sequent};
use serde::Serialize;
use std::fmt;

/// A left or right introduction rule for one connective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rule {
    #[serde(rename = "L¬")]
    NotLeft,
    #[serde(rename = "R¬")]
    NotRight,
    #[serde(rename = "L∧")]
    AndLeft,
    #[serde(rename = "R∧")]
    AndRight,
    #[serde(rename = "L∨")]
    OrLeft,
    #[serde(rename = "R∨")]
    OrRight,
    #[serde(rename = "L→")]
    ImpliesLeft,
    #[serde(rename = "R→")]
    ImpliesRight,
}

impl Rule {
    pub fn name(self) -> &'static str {
        match self {
            Rule::NotLeft => "L¬",
            Rule::NotRight => "R¬",
            Rule::AndLeft => "L∧",
            Rule::AndRight => "R∧",
            Rule::OrLeft => "L∨",
            Rule::OrRight => "R∨",
            Rule::ImpliesLeft => "L→",
            Rule::ImpliesRight => "R→",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Apply the rule for `sentence`, the parsed form of `principal`, which
/// occurs on `side` of `conclusion`.
///
/// Returns `None` for atoms.
pub fn decompose(
    conclusion: &Sequent,
    side: Side,
    principal: &str,
    sentence: &Sentence,
) -> Option<(Rule, Vec<Sequent>)> {
    let mut gamma = conclusion.antecedent.clone();
    let mut delta = conclusion.consequent.clone();
    match side {
        Side::Left => gamma.remove(principal),
        Side::Right => delta.remove(principal),
    };

    let premise = |left: &[&Sentence], right: &[&Sentence]| -> Sequent {
        let mut antecedent = gamma.clone();
        let mut consequent = delta.clone();
        antecedent.extend(left.iter().map(|s| s.to_string()));
        consequent.extend(right.iter().map(|s| s.to_string()));
        Sequent::from_sets(antecedent, consequent)
    };

    let result = match (side, sentence) {
        (_, Sentence::Atom(_)) => return None,
        (Side::Left, Sentence::Not(a)) => (Rule::NotLeft, vec![premise(&[], &[a.as_ref()])]),
        (Side::Right, Sentence::Not(a)) => (Rule::NotRight, vec![premise(&[a.as_ref()], &[])]),
        (Side::Left, Sentence::And(a, b)) => {
            (Rule::AndLeft, vec![premise(&[a.as_ref(), b.as_ref()], &[])])
        }
        (Side::Right, Sentence::And(a, b)) => {
            (Rule::AndRight, vec![premise(&[], &[a.as_ref()]), premise(&[], &[b.as_ref()])])
        }
        (Side::Left, Sentence::Or(a, b)) => {
            (Rule::OrLeft, vec![premise(&[a.as_ref()], &[]), premise(&[b.as_ref()], &[])])
        }
        (Side::Right, Sentence::Or(a, b)) => {
            (Rule::OrRight, vec![premise(&[], &[a.as_ref(), b.as_ref()])])
        }
        (Side::Left, Sentence::Implies(a, b)) => {
            (Rule::ImpliesLeft, vec![premise(&[], &[a.as_ref()]), premise(&[b.as_ref()], &[])])
        }
        (Side::Right, Sentence::Implies(a, b)) => {
            (Rule::ImpliesRight, vec![premise(&[a.as_ref()], &[b.as_ref()])])
        }
    };
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_sentence, Dialect};

    const NONE: [&str; 0] = [];

    fn apply(conclusion: &Sequent, side: Side, principal: &str) -> (Rule, Vec<Sequent>) {
        let sentence = parse_sentence(principal, Dialect::Propositional).unwrap();
        decompose(conclusion, side, principal, &sentence).unwrap()
    }

    #[test]
    fn test_implies_left_keeps_context() {
        let conclusion = Sequent::new(["a", "a -> b"], ["c"]);
        let (rule, premises) = apply(&conclusion, Side::Left, "a -> b");
        assert_eq!(rule, Rule::ImpliesLeft);
        assert_eq!(
            premises,
            vec![
                Sequent::new(["a"], ["a", "c"]),
                Sequent::new(["a", "b"], ["c"]),
            ]
        );
    }

    #[test]
    fn test_implies_right() {
        let conclusion = Sequent::new(NONE, ["p -> q"]);
        let (rule, premises) = apply(&conclusion, Side::Right, "p -> q");
        assert_eq!(rule, Rule::ImpliesRight);
        assert_eq!(premises, vec![Sequent::new(["p"], ["q"])]);
    }

    #[test]
    fn test_negation_moves_sides() {
        let conclusion = Sequent::new(["~p"], ["q"]);
        let (rule, premises) = apply(&conclusion, Side::Left, "~p");
        assert_eq!(rule, Rule::NotLeft);
        assert_eq!(premises, vec![Sequent::new(NONE, ["p", "q"])]);

        let conclusion = Sequent::new(["q"], ["~p"]);
        let (rule, premises) = apply(&conclusion, Side::Right, "~p");
        assert_eq!(rule, Rule::NotRight);
        assert_eq!(premises, vec![Sequent::new(["p", "q"], NONE)]);
    }

    #[test]
    fn test_branching_rules() {
        let (rule, premises) = apply(&Sequent::new(NONE, ["p & q"]), Side::Right, "p & q");
        assert_eq!(rule, Rule::AndRight);
        assert_eq!(
            premises,
            vec![Sequent::new(NONE, ["p"]), Sequent::new(NONE, ["q"])]
        );

        let (rule, premises) = apply(&Sequent::new(["p | q"], ["r"]), Side::Left, "p | q");
        assert_eq!(rule, Rule::OrLeft);
        assert_eq!(
            premises,
            vec![Sequent::new(["p"], ["r"]), Sequent::new(["q"], ["r"])]
        );
    }

    #[test]
    fn test_single_premise_rules() {
        let (rule, premises) = apply(&Sequent::new(["p & q"], NONE), Side::Left, "p & q");
        assert_eq!(rule, Rule::AndLeft);
        assert_eq!(premises, vec![Sequent::new(["p", "q"], NONE)]);

        let (rule, premises) = apply(&Sequent::new(NONE, ["p | q"]), Side::Right, "p | q");
        assert_eq!(rule, Rule::OrRight);
        assert_eq!(premises, vec![Sequent::new(NONE, ["p", "q"])]);
    }

    #[test]
    fn test_subsentences_use_canonical_spelling() {
        let conclusion = Sequent::new(["(a & b) -> c"], NONE);
        let (_, premises) = apply(&conclusion, Side::Left, "(a & b) -> c");
        assert_eq!(premises[0], Sequent::new(NONE, ["a & b"]));
    }

    #[test]
    fn test_atoms_do_not_decompose() {
        let sentence = parse_sentence("p", Dialect::Propositional).unwrap();
        assert!(decompose(&Sequent::new(["p"], NONE), Side::Left, "p", &sentence).is_none());
    }
}
