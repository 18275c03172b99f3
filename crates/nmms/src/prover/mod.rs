//! Reasoner: memoized, depth-bounded backward proof search.
//!
//! A sequent is derivable if it is an axiom of the material base, or if
//! the rule for some compound sentence in it has derivable premises. The
//! rules are invertible, so the search commits to the first compound
//! sentence it finds (antecedent before consequent, each side in sorted
//! order) and never backtracks over the choice.
//!
//! Results are memoized per reasoner. A branch cut off by the depth bound
//! counts as not derivable but is never cached, and neither is any result
//! that depended on such a cut.

pub mod rules;
pub mod trace;

#[cfg(test)]
mod proptest_tests;

pub use rules::Rule;
pub use trace::{TraceEntry, TraceEvent};

use crate::base::MaterialBase;
use crate::config::ReasonerConfig;
use crate::error::{ConfigError, Side};
use crate::parser;
use crate::syntax::{Sentence, Sequent};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Outcome of a single query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivationResult {
    pub derivable: bool,
    /// Every step of the search in the order it happened
    pub trace: Vec<TraceEntry>,
    /// Deepest level on the branch that decided the verdict: every
    /// premise of a proof, or the failing premise of a refutation. The
    /// query itself is level 0.
    pub depth_reached: usize,
    pub cache_hits: usize,
    /// Whether some branch was cut off by the depth bound
    pub depth_limited: bool,
}

impl DerivationResult {
    /// The trace rendered one line per entry
    pub fn trace_lines(&self) -> Vec<String> {
        self.trace.iter().map(ToString::to_string).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Proved,
    Refuted,
    /// Not derivable within the depth bound
    Exhausted,
}

impl Verdict {
    fn holds(self) -> bool {
        matches!(self, Verdict::Proved)
    }

    fn cacheable(self) -> Option<bool> {
        match self {
            Verdict::Proved => Some(true),
            Verdict::Refuted => Some(false),
            Verdict::Exhausted => None,
        }
    }
}

/// Per-query bookkeeping
#[derive(Debug, Default)]
struct Search {
    trace: Vec<TraceEntry>,
    cache_hits: usize,
    depth_limited: bool,
}

impl Search {
    fn record(&mut self, depth: usize, event: TraceEvent) {
        self.trace.push(TraceEntry::new(depth, event));
    }
}

/// Proof search over a material base.
///
/// The reasoner owns its base so the memo cache can never go stale: the
/// only way to mutate the base through a reasoner is [`Reasoner::base_mut`],
/// which clears the cache.
#[derive(Debug, Clone)]
pub struct Reasoner<B> {
    base: B,
    config: ReasonerConfig,
    cache: HashMap<Sequent, bool>,
    parsed: HashMap<String, Option<Sentence>>,
}

impl<B: MaterialBase> Reasoner<B> {
    pub fn new(base: B) -> Self {
        Self::with_config(base, ReasonerConfig::default())
    }

    pub fn with_config(base: B, config: ReasonerConfig) -> Self {
        Reasoner {
            base,
            config,
            cache: HashMap::new(),
            parsed: HashMap::new(),
        }
    }

    /// Fails unless `max_depth` is positive
    pub fn with_max_depth(base: B, max_depth: usize) -> Result<Self, ConfigError> {
        Ok(Self::with_config(base, ReasonerConfig::new(max_depth)?))
    }

    pub fn config(&self) -> &ReasonerConfig {
        &self.config
    }

    pub fn base(&self) -> &B {
        &self.base
    }

    /// Mutable access to the base; invalidates every memoized result
    pub fn base_mut(&mut self) -> &mut B {
        self.clear_cache();
        &mut self.base
    }

    pub fn into_base(self) -> B {
        self.base
    }

    /// Forget memoized verdicts and parsed sentences
    pub fn clear_cache(&mut self) {
        if !self.cache.is_empty() {
            debug!(entries = self.cache.len(), "memo cache cleared");
        }
        self.cache.clear();
        self.parsed.clear();
    }

    /// Number of memoized sequents
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Decide `antecedent ⇒ consequent` and return the full search record
    pub fn derives<A, C>(&mut self, antecedent: A, consequent: C) -> DerivationResult
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let dialect = self.base.dialect();
        let antecedent = canonical_side(antecedent, dialect);
        let consequent = canonical_side(consequent, dialect);
        self.derives_sequent(&Sequent::new(antecedent, consequent))
    }

    /// Decide a sequent whose sentences are already in canonical spelling
    pub fn derives_sequent(&mut self, sequent: &Sequent) -> DerivationResult {
        let mut search = Search::default();
        let (verdict, depth_reached) = self.prove(sequent.clone(), 0, &mut search);
        let result = DerivationResult {
            derivable: verdict.holds(),
            trace: search.trace,
            depth_reached,
            cache_hits: search.cache_hits,
            depth_limited: search.depth_limited,
        };
        debug!(
            sequent = %sequent,
            derivable = result.derivable,
            depth_reached = result.depth_reached,
            cache_hits = result.cache_hits,
            depth_limited = result.depth_limited,
            "query decided"
        );
        result
    }

    /// Whether `antecedent ⇒ consequent` is derivable
    pub fn query<A, C>(&mut self, antecedent: A, consequent: C) -> bool
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        self.derives(antecedent, consequent).derivable
    }

    /// Decide `sequent` at `depth`; also returns the deepest level on
    /// the branch that decided it
    fn prove(&mut self, sequent: Sequent, depth: usize, search: &mut Search) -> (Verdict, usize) {
        if let Some(&derivable) = self.cache.get(&sequent) {
            search.cache_hits += 1;
            search.record(depth, TraceEvent::CacheHit { sequent, derivable });
            let verdict = if derivable {
                Verdict::Proved
            } else {
                Verdict::Refuted
            };
            return (verdict, depth);
        }

        if self.base.is_axiom(&sequent) {
            search.record(
                depth,
                TraceEvent::Axiom {
                    sequent: sequent.clone(),
                },
            );
            self.cache.insert(sequent, true);
            return (Verdict::Proved, depth);
        }

        if depth >= self.config.max_depth {
            trace!(depth, sequent = %sequent, "depth limit reached");
            search.depth_limited = true;
            search.record(depth, TraceEvent::DepthLimit { sequent });
            return (Verdict::Exhausted, depth);
        }

        let Some((rule, principal, premises)) = self.apply_first_rule(&sequent) else {
            search.record(
                depth,
                TraceEvent::NoRule {
                    sequent: sequent.clone(),
                },
            );
            self.cache.insert(sequent, false);
            return (Verdict::Refuted, depth);
        };

        search.record(
            depth,
            TraceEvent::Rule {
                rule,
                principal,
                conclusion: sequent.clone(),
                premises: premises.clone(),
            },
        );

        let mut verdict = Verdict::Proved;
        let mut reached = depth;
        let mut premises = premises.into_iter();
        for premise in premises.by_ref() {
            let (sub, sub_reached) = self.prove(premise, depth + 1, search);
            if !sub.holds() {
                verdict = sub;
                reached = sub_reached;
                break;
            }
            reached = reached.max(sub_reached);
        }
        for skipped in premises {
            search.record(depth + 1, TraceEvent::Skipped { sequent: skipped });
        }

        if let Some(derivable) = verdict.cacheable() {
            self.cache.insert(sequent, derivable);
        }
        (verdict, reached)
    }

    /// Decompose the first compound sentence, antecedent before consequent
    fn apply_first_rule(&mut self, sequent: &Sequent) -> Option<(Rule, String, Vec<Sequent>)> {
        let candidates = sequent
            .antecedent
            .iter()
            .map(|s| (Side::Left, s))
            .chain(sequent.consequent.iter().map(|s| (Side::Right, s)));

        for (side, principal) in candidates {
            let Some(sentence) = self.parse(principal) else {
                continue;
            };
            if let Some((rule, premises)) = rules::decompose(sequent, side, principal, &sentence) {
                return Some((rule, principal.clone(), premises));
            }
        }
        None
    }

    /// The compound sentence spelled `text`, through the per-reasoner
    /// cache. `None` for sentences the base deems atomic and for
    /// unparseable strings, which are treated as opaque atoms.
    fn parse(&mut self, text: &str) -> Option<Sentence> {
        if let Some(parsed) = self.parsed.get(text) {
            return parsed.clone();
        }
        let parsed = if self.base.is_atomic(text) {
            None
        } else {
            let parsed = parser::parse_sentence(text, self.base.dialect()).ok();
            if parsed.is_none() {
                trace!(text, "unparseable sentence treated as atomic");
            }
            parsed
        };
        self.parsed.insert(text.to_string(), parsed.clone());
        parsed
    }
}

fn canonical_side<C>(side: C, dialect: parser::Dialect) -> Vec<String>
where
    C: IntoIterator,
    C::Item: AsRef<str>,
{
    side.into_iter()
        .map(|s| parser::canonicalize(s.as_ref(), dialect))
        .collect()
}
