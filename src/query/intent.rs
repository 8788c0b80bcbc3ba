use serde::Serialize;

/// The kind of search a query resolves to.
///
/// Exactly one kind is assigned per successful parse. The original-language
/// kinds fan out by language (Greek/Hebrew) and morphology (exact form,
/// related words, similar forms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchKind {
    Text,
    Subject,
    OriginalMeaning,
    OriginalTranslatedAs,
    OriginalGreekExact,
    OriginalGreekRelated,
    OriginalGreekForms,
    OriginalHebrewExact,
    OriginalHebrewRelated,
    OriginalHebrewForms,
    TimelineDescription,
    TimelineReference,
}

impl SearchKind {
    /// Whether this kind searches the original-language lexicon.
    pub fn is_original(self) -> bool {
        matches!(
            self,
            SearchKind::OriginalMeaning
                | SearchKind::OriginalTranslatedAs
                | SearchKind::OriginalGreekExact
                | SearchKind::OriginalGreekRelated
                | SearchKind::OriginalGreekForms
                | SearchKind::OriginalHebrewExact
                | SearchKind::OriginalHebrewRelated
                | SearchKind::OriginalHebrewForms
        )
    }
}

/// A fully-parsed search request, ready for an index executor.
///
/// Built once per incoming query string and read-only to consumers, with one
/// sanctioned exception: [`SearchIntent::amend_query`] lets the caller swap
/// the query text for a rewritten form (e.g. a field-qualified boolean
/// expression) and records that the rewrite happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchIntent {
    kind: SearchKind,
    query: String,
    versions: Vec<String>,
    sub_range: Option<String>,
    main_range: Option<String>,
    original_filter: Option<Vec<String>>,
    amended: bool,
}

impl SearchIntent {
    pub(crate) fn new(
        kind: SearchKind,
        query: String,
        versions: Vec<String>,
        sub_range: Option<String>,
        main_range: Option<String>,
        original_filter: Option<Vec<String>>,
    ) -> Self {
        Self {
            kind,
            query,
            versions,
            sub_range,
            main_range,
            original_filter,
            amended: false,
        }
    }

    pub fn kind(&self) -> SearchKind {
        self.kind
    }

    /// The residual searchable text after all structural tokens are stripped.
    pub fn query_text(&self) -> &str {
        &self.query
    }

    /// The module/version codes the search runs against. Never empty.
    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    /// The `{...}` word-sense sub-filter, if one was given.
    pub fn sub_range(&self) -> Option<&str> {
        self.sub_range.as_deref()
    }

    /// The `+[...]` scripture range restriction, if one was given.
    pub fn main_range(&self) -> Option<&str> {
        self.main_range.as_deref()
    }

    /// Lexical entry identifiers from a `where original is (...)` clause.
    pub fn original_filter(&self) -> Option<&[String]> {
        self.original_filter.as_deref()
    }

    /// Whether the query text has been rewritten since construction.
    pub fn is_amended(&self) -> bool {
        self.amended
    }

    /// Replace the query text with a rewritten form.
    ///
    /// The only permitted post-construction mutation. Marks the intent as
    /// amended so downstream consumers know the text is already rewritten.
    pub fn amend_query(&mut self, query: impl Into<String>) {
        self.amended = true;
        self.query = query.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse;

    #[test]
    fn amending_marks_the_intent() {
        let mut intent = parse("t=love in (KJV)").unwrap();
        assert!(!intent.is_amended());

        intent.amend_query("text:love");
        assert!(intent.is_amended());
        assert_eq!(intent.query_text(), "text:love");
    }

    #[test]
    fn original_kinds_are_flagged() {
        assert!(SearchKind::OriginalGreekExact.is_original());
        assert!(SearchKind::OriginalMeaning.is_original());
        assert!(!SearchKind::Text.is_original());
        assert!(!SearchKind::TimelineReference.is_original());
    }

    #[test]
    fn kind_serializes_screaming_snake() {
        let json = serde_json::to_string(&SearchKind::OriginalHebrewForms).unwrap();
        assert_eq!(json, "\"ORIGINAL_HEBREW_FORMS\"");
    }
}
