use anyhow::Result;
use tracing::debug;

use crate::suggest::{LexiconSuggestion, SuggestionService, SuggestionSort};

/// Collect up to `max` candidate completions for `form`.
///
/// Tier 1 (exact matches) runs first; tier 2 (non-exact) runs only when
/// tier 1 under-fills the requested count, and strictly after it, since the
/// collector's running total depends on tier 1 having completed. Both tiers
/// funnel through the service's conversion step, exact terms first, without
/// cross-tier deduplication.
pub fn collect_suggestions<S: SuggestionService + ?Sized>(
    service: &S,
    form: &str,
    max: usize,
) -> Result<Vec<LexiconSuggestion>> {
    let exact = service.exact_terms(form, max)?;
    debug!(form, count = exact.len(), "exact tier collected");

    let mut extra = Vec::new();
    if exact.len() < max {
        let left_to_collect = max - exact.len();
        let mut collector = service.new_collector(left_to_collect);
        extra = service.non_exact_terms(&mut collector, form, &exact, left_to_collect)?;
        debug!(
            form,
            count = extra.len(),
            total = collector.total_count,
            "non-exact tier collected"
        );
    }

    let mut suggestions = service.to_suggestions(&exact, &extra);
    if let Some(SuggestionSort::Gloss) = service.sort() {
        suggestions.sort_by(|a, b| a.gloss.cmp(&b.gloss));
    }
    Ok(suggestions)
}
