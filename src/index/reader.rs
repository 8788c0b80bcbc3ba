use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Terms returned by a non-exact lookup, along with the running total of
/// candidates seen so far across a collection session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermsAndMaxCount {
    pub terms: Vec<String>,
    pub total_count: usize,
}

/// Read access to an indexed lexicon, as the suggestion collector consumes
/// it. I/O failures must propagate unchanged so callers can distinguish a
/// malformed query from an unavailable index.
pub trait TermReader {
    /// Terms exactly equal to `form` across `fields`, capped at `max`.
    /// Deduplicated; order is not significant at this tier.
    fn find_exact_terms(
        &self,
        form: &str,
        max: usize,
        fields: &[&str],
    ) -> Result<BTreeSet<String>>;

    /// Near-match (prefix/fuzzy) lookup across `fields`.
    ///
    /// `count_so_far` carries the running total from earlier calls in the
    /// same collection session; the returned total never decreases below it.
    /// When `include_counts` is false only the terms are reported and the
    /// total passes through untouched.
    fn find_terms_with_counts(
        &self,
        exact: bool,
        include_counts: bool,
        form: &str,
        count_so_far: usize,
        fields: &[&str],
    ) -> Result<TermsAndMaxCount>;
}

/// An in-memory lexicon: a map of field name to the terms indexed under it.
///
/// Stands in for a full entity index during suggestion collection and in the
/// CLI. Loadable from a JSON file of the shape
/// `{"gloss": ["love", ...], "translations": [...]}`.
#[derive(Debug, Default)]
pub struct LexiconReader {
    fields: FxHashMap<String, Vec<String>>,
}

impl LexiconReader {
    /// Load a lexicon from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open lexicon file {}", path.display()))?;
        let fields: FxHashMap<String, Vec<String>> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse lexicon file {}", path.display()))?;
        debug!(fields = fields.len(), "loaded lexicon");
        Ok(Self { fields })
    }

    /// Build a lexicon from (field, terms) pairs.
    pub fn from_entries<F, T>(entries: impl IntoIterator<Item = (F, Vec<T>)>) -> Self
    where
        F: Into<String>,
        T: Into<String>,
    {
        let fields = entries
            .into_iter()
            .map(|(field, terms)| {
                (
                    field.into(),
                    terms.into_iter().map(Into::into).collect::<Vec<_>>(),
                )
            })
            .collect();
        Self { fields }
    }

    fn terms_in(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl TermReader for LexiconReader {
    fn find_exact_terms(
        &self,
        form: &str,
        max: usize,
        fields: &[&str],
    ) -> Result<BTreeSet<String>> {
        let mut terms = BTreeSet::new();
        for field in fields {
            for term in self.terms_in(field) {
                if terms.len() >= max {
                    return Ok(terms);
                }
                if term.eq_ignore_ascii_case(form) {
                    terms.insert(term.clone());
                }
            }
        }
        Ok(terms)
    }

    fn find_terms_with_counts(
        &self,
        exact: bool,
        include_counts: bool,
        form: &str,
        count_so_far: usize,
        fields: &[&str],
    ) -> Result<TermsAndMaxCount> {
        let form_lower = form.to_lowercase();
        let mut terms = Vec::new();
        for field in fields {
            for term in self.terms_in(field) {
                let hit = if exact {
                    term.eq_ignore_ascii_case(form)
                } else {
                    term.to_lowercase().starts_with(&form_lower)
                };
                if hit && !terms.contains(term) {
                    terms.push(term.clone());
                }
            }
        }

        let total_count = if include_counts {
            count_so_far + terms.len()
        } else {
            count_so_far
        };
        Ok(TermsAndMaxCount { terms, total_count })
    }
}
