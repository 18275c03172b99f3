//! Multi-succedent sequents over sentence strings

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A sequent `Γ ⇒ Δ` with finite sets of sentence strings on both sides.
///
/// Sentences are stored trimmed and kept in sorted order, so two sequents
/// over the same sets compare, hash and print identically. This is the key
/// of the reasoner's memo cache and the element type of a base's
/// consequence relation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Sequent {
    pub antecedent: BTreeSet<String>,
    pub consequent: BTreeSet<String>,
}

impl Sequent {
    pub fn new<A, C>(antecedent: A, consequent: C) -> Self
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        Sequent {
            antecedent: trimmed(antecedent),
            consequent: trimmed(consequent),
        }
    }

    pub fn from_sets(antecedent: BTreeSet<String>, consequent: BTreeSet<String>) -> Self {
        Sequent {
            antecedent,
            consequent,
        }
    }

    /// Γ ∩ Δ ≠ ∅
    pub fn is_containment(&self) -> bool {
        !self.antecedent.is_disjoint(&self.consequent)
    }

    /// All sentences on either side, antecedent first
    pub fn sentences(&self) -> impl Iterator<Item = &String> {
        self.antecedent.iter().chain(self.consequent.iter())
    }

    /// Render with a custom turnstile, e.g. `|~` for base consequences
    pub fn display_with<'a>(&'a self, turnstile: &'a str) -> SequentDisplay<'a> {
        SequentDisplay {
            sequent: self,
            turnstile,
        }
    }
}

fn trimmed<I>(sentences: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    sentences
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .collect()
}

/// Display wrapper for Sequent with a chosen turnstile
pub struct SequentDisplay<'a> {
    sequent: &'a Sequent,
    turnstile: &'a str,
}

impl<'a> fmt::Display for SequentDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_side(f, &self.sequent.antecedent)?;
        if self.sequent.antecedent.is_empty() {
            write!(f, "{}", self.turnstile)?;
        } else {
            write!(f, " {}", self.turnstile)?;
        }
        if !self.sequent.consequent.is_empty() {
            write!(f, " ")?;
            write_side(f, &self.sequent.consequent)?;
        }
        Ok(())
    }
}

fn write_side(f: &mut fmt::Formatter<'_>, side: &BTreeSet<String>) -> fmt::Result {
    for (i, sentence) in side.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", sentence)?;
    }
    Ok(())
}

impl fmt::Display for Sequent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_with("=>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_are_trimmed_and_deduplicated() {
        let s = Sequent::new([" p ", "p", "q"], ["r "]);
        assert_eq!(s.antecedent.len(), 2);
        assert!(s.antecedent.contains("p"));
        assert!(s.consequent.contains("r"));
        assert_eq!(s, Sequent::new(["q", "p"], ["r"]));
    }

    #[test]
    fn test_containment() {
        assert!(Sequent::new(["p", "q"], ["q"]).is_containment());
        assert!(!Sequent::new(["p"], ["q"]).is_containment());
        assert!(!Sequent::default().is_containment());
    }

    #[test]
    fn test_display() {
        let empty: [&str; 0] = [];
        assert_eq!(Sequent::new(["q", "p"], ["r"]).to_string(), "p, q => r");
        assert_eq!(Sequent::new(empty, ["r"]).to_string(), "=> r");
        assert_eq!(Sequent::new(["s", "t"], empty).to_string(), "s, t =>");
        assert_eq!(
            Sequent::new(["s", "t"], empty).display_with("|~").to_string(),
            "s, t |~"
        );
    }
}
