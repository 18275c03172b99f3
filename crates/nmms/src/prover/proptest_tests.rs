//! Property-based tests for the proof search.

use super::Reasoner;
use crate::base::PropositionalBase;
use crate::parser::proptest_tests::arb_propositional_sentence;
use crate::syntax::{Atom, Sentence};
use proptest::prelude::*;

const ATOMS: [&str; 4] = ["p0", "p1", "p2", "p3"];

fn eval(sentence: &Sentence, valuation: u8) -> bool {
    match sentence {
        Sentence::Atom(Atom::Proposition { name }) => ATOMS
            .iter()
            .position(|a| a == name)
            .map_or(false, |i| valuation & (1 << i) != 0),
        Sentence::Atom(_) => false,
        Sentence::Not(a) => !eval(a, valuation),
        Sentence::And(a, b) => eval(a, valuation) && eval(b, valuation),
        Sentence::Or(a, b) => eval(a, valuation) || eval(b, valuation),
        Sentence::Implies(a, b) => !eval(a, valuation) || eval(b, valuation),
    }
}

/// Γ ⊨ Δ: every valuation making all of Γ true makes some of Δ true
fn classically_valid(antecedent: &[Sentence], consequent: &[Sentence]) -> bool {
    (0..16u8).all(|v| {
        !antecedent.iter().all(|s| eval(s, v)) || consequent.iter().any(|s| eval(s, v))
    })
}

fn strings(sentences: &[Sentence]) -> Vec<String> {
    sentences.iter().map(ToString::to_string).collect()
}

fn empty_base_reasoner() -> Reasoner<PropositionalBase> {
    Reasoner::with_max_depth(PropositionalBase::new(), 200).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Over the empty base, derivability coincides with classical validity
    #[test]
    fn empty_base_is_classical(
        antecedent in proptest::collection::vec(arb_propositional_sentence(2), 0..3),
        consequent in proptest::collection::vec(arb_propositional_sentence(2), 0..3),
    ) {
        let mut reasoner = empty_base_reasoner();
        let derivable = reasoner.query(strings(&antecedent), strings(&consequent));
        prop_assert_eq!(derivable, classically_valid(&antecedent, &consequent));
    }

    /// Excluded middle holds for every sentence
    #[test]
    fn excluded_middle(s in arb_propositional_sentence(3)) {
        let mut reasoner = empty_base_reasoner();
        let lem = Sentence::or(s.clone(), Sentence::not(s));
        prop_assert!(reasoner.query(Vec::<String>::new(), [lem.to_string()]));
    }

    /// A repeated query gives the same answer, now from the cache
    #[test]
    fn repeated_queries_agree(
        antecedent in proptest::collection::vec(arb_propositional_sentence(2), 0..3),
        consequent in proptest::collection::vec(arb_propositional_sentence(2), 0..3),
    ) {
        let mut reasoner = empty_base_reasoner();
        let first = reasoner.derives(strings(&antecedent), strings(&consequent));
        let second = reasoner.derives(strings(&antecedent), strings(&consequent));
        prop_assert_eq!(first.derivable, second.derivable);
        prop_assert_eq!(second.cache_hits, 1);
    }

    /// Any sequent sharing a sentence between its sides is derivable
    #[test]
    fn containment_is_derivable(
        shared in arb_propositional_sentence(3),
        extra in arb_propositional_sentence(2),
    ) {
        let mut reasoner = empty_base_reasoner();
        prop_assert!(reasoner.query(
            [shared.to_string(), extra.to_string()],
            [shared.to_string()]
        ));
    }
}
