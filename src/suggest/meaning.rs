use anyhow::Result;

use crate::index::{TermReader, TermsAndMaxCount};
use crate::suggest::{LexiconSuggestion, SuggestionService, SuggestionSort};

/// The lexicon fields an ancient-meaning lookup searches.
pub const MEANING_FIELDS: &[&str] = &["gloss", "translations"];

/// Suggestions drawn from the glosses and translations of lexicon entries,
/// for "search by meaning" completion.
///
/// Deliberately sort-free: candidates keep their retrieval order rather than
/// being re-ranked by frequency like other suggestion kinds.
pub struct MeaningSuggestions<'a, R: TermReader> {
    definitions: &'a R,
}

impl<'a, R: TermReader> MeaningSuggestions<'a, R> {
    pub fn new(definitions: &'a R) -> Self {
        Self { definitions }
    }

    fn push_terms(terms: &[String], suggestions: &mut Vec<LexiconSuggestion>) {
        for term in terms {
            suggestions.push(LexiconSuggestion::new(term));
        }
    }
}

impl<R: TermReader> SuggestionService for MeaningSuggestions<'_, R> {
    fn exact_terms(&self, form: &str, max: usize) -> Result<Vec<String>> {
        let terms = self
            .definitions
            .find_exact_terms(form, max, MEANING_FIELDS)?;
        Ok(terms.into_iter().collect())
    }

    fn non_exact_terms(
        &self,
        collector: &mut TermsAndMaxCount,
        form: &str,
        _already_retrieved: &[String],
        _left_to_collect: usize,
    ) -> Result<Vec<String>> {
        let counts_and_results = self.definitions.find_terms_with_counts(
            false,
            true,
            form,
            collector.total_count,
            MEANING_FIELDS,
        )?;

        collector.total_count = counts_and_results.total_count;
        collector.terms = counts_and_results.terms.clone();
        Ok(counts_and_results.terms)
    }

    fn to_suggestions(&self, terms: &[String], extra_terms: &[String]) -> Vec<LexiconSuggestion> {
        let mut suggestions = Vec::with_capacity(terms.len() + extra_terms.len());
        Self::push_terms(terms, &mut suggestions);
        Self::push_terms(extra_terms, &mut suggestions);
        suggestions
    }

    fn sort(&self) -> Option<SuggestionSort> {
        // No sort on this one.
        None
    }

    fn new_collector(&self, left_to_collect: usize) -> TermsAndMaxCount {
        TermsAndMaxCount {
            terms: Vec::new(),
            total_count: left_to_collect,
        }
    }
}
