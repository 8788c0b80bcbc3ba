//! Two-tier suggestion collection.
//!
//! A [`SuggestionService`] knows how to pull candidate completion terms for
//! a partial input form out of a [`TermReader`](crate::index::TermReader):
//! an exact tier first, then a non-exact (prefix/fuzzy) tier to fill the
//! remaining capacity. [`collect_suggestions`] drives the two tiers in
//! order and funnels both through the service's conversion step.

pub mod collector;
pub mod meaning;

use anyhow::Result;
use serde::Serialize;

pub use collector::collect_suggestions;
pub use meaning::{MeaningSuggestions, MEANING_FIELDS};

pub use crate::index::TermsAndMaxCount;

/// A candidate completion offered to the user, carrying the matched term as
/// its display gloss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexiconSuggestion {
    pub gloss: String,
}

impl LexiconSuggestion {
    pub fn new(gloss: impl Into<String>) -> Self {
        Self {
            gloss: gloss.into(),
        }
    }
}

/// Secondary ordering applied after collection, for suggestion kinds that
/// rank their candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionSort {
    /// Alphabetical by gloss.
    Gloss,
}

/// The capability set of one concrete suggestion kind.
///
/// Each kind (meaning, translation, ...) implements these five operations;
/// [`collect_suggestions`] composes them into a collection session.
pub trait SuggestionService {
    /// Tier 1: terms exactly matching `form`, capped at `max`.
    fn exact_terms(&self, form: &str, max: usize) -> Result<Vec<String>>;

    /// Tier 2: near-matches for `form`, run only when tier 1 under-fills.
    ///
    /// Updates `collector` with the returned terms and the running total so
    /// repeated calls in one session can report how many more candidates
    /// remain without re-scanning from zero.
    fn non_exact_terms(
        &self,
        collector: &mut TermsAndMaxCount,
        form: &str,
        already_retrieved: &[String],
        left_to_collect: usize,
    ) -> Result<Vec<String>>;

    /// Wrap raw terms into suggestion records, exact-tier terms first.
    ///
    /// Tolerates empty term lists and must not deduplicate across tiers: a
    /// term appearing in both tiers appears twice in the output.
    fn to_suggestions(&self, terms: &[String], extra_terms: &[String]) -> Vec<LexiconSuggestion>;

    /// The secondary sort for this kind, or `None` for sort-free kinds.
    fn sort(&self) -> Option<SuggestionSort>;

    /// A fresh collector for a session expecting `left_to_collect` more
    /// candidates.
    fn new_collector(&self, left_to_collect: usize) -> TermsAndMaxCount;
}
