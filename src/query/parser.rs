use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::query::error::ParseError;
use crate::query::intent::{SearchIntent, SearchKind};

/// Field name used when rewriting a subject search into a field-qualified
/// boolean expression. Part of the downstream index schema.
pub const HEADING_FIELD: &str = "heading";

const RELATED_WORDS: char = '~';
const SIMILAR_FORMS: char = '*';

/// Routes a recognized query prefix to its parsing algorithm.
#[derive(Debug, Clone, Copy)]
enum Route {
    Text,
    Subject,
    Original,
    TimelineDescription,
    TimelineReference,
}

/// Prefix dispatch table, evaluated in order; first match wins.
///
/// The bare `o` entry deliberately shadows nothing: `d=`/`dr=` start with a
/// different letter and the `=`-suffixed prefixes are checked verbatim.
const DISPATCH: &[(&str, Route)] = &[
    ("t=", Route::Text),
    ("s=", Route::Subject),
    ("o", Route::Original),
    ("d=", Route::TimelineDescription),
    ("dr=", Route::TimelineReference),
];

fn in_versions_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // The clause must sit at the end of the text; only range groups and
    // whitespace may trail it. The trailing groups are captured so they can
    // be handed back for sub-range/main-range extraction.
    RE.get_or_init(|| {
        Regex::new(r"(?i)in ?\(([^)]+)\)((?:\s*(?:\{[^}]*\}|\+\[[^\]]*\]))*)\s*$").unwrap()
    })
}

fn main_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\+\[([^\]]+)\]").unwrap())
}

fn sub_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([^}]+)\}").unwrap())
}

fn original_filter_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" where original is \(([^)]+)\)").unwrap())
}

/// Parse a raw query string into a [`SearchIntent`].
///
/// Pure and stateless per call: safe to invoke concurrently, every call
/// builds its own intent. Errors are classified caller-input faults; see
/// [`ParseError`].
pub fn parse(query: &str) -> Result<SearchIntent, ParseError> {
    if query.trim().is_empty() {
        return Err(ParseError::BlankQuery);
    }

    let mut builder = IntentBuilder::default();

    match DISPATCH.iter().find(|(prefix, _)| query.starts_with(prefix)) {
        Some((prefix, Route::Text)) => {
            builder.kind = Some(SearchKind::Text);
            builder.match_versions(&query[prefix.len()..])?;
        }
        Some((prefix, Route::Subject)) => {
            builder.parse_subject_search(&query[prefix.len()..])?;
        }
        Some((prefix, Route::Original)) => {
            builder.parse_original_search(&query[prefix.len()..])?;
        }
        Some((prefix, Route::TimelineDescription)) => {
            builder.kind = Some(SearchKind::TimelineDescription);
            builder.match_versions(&query[prefix.len()..])?;
        }
        Some((prefix, Route::TimelineReference)) => {
            builder.kind = Some(SearchKind::TimelineReference);
            builder.match_versions(&query[prefix.len()..])?;
        }
        None => {
            // Unrecognized prefix: default to a text search and hope for
            // the best.
            debug!(query, "no recognized search prefix, defaulting to text");
            builder.match_versions(query)?;
            builder.kind = Some(SearchKind::Text);
        }
    }

    builder.freeze()
}

/// Accumulates intent fields during parsing, then freezes into the immutable
/// [`SearchIntent`]. Local to [`parse`]; never escapes.
#[derive(Debug, Default)]
struct IntentBuilder {
    kind: Option<SearchKind>,
    query: String,
    versions: Vec<String>,
    sub_range: Option<String>,
    main_range: Option<String>,
    original_filter: Option<Vec<String>>,
}

impl IntentBuilder {
    fn freeze(self) -> Result<SearchIntent, ParseError> {
        if self.query.trim().is_empty() {
            return Err(ParseError::BlankQuery);
        }
        // Every route assigns a kind before reaching here; the unsupported
        // axis letters error out earlier.
        let kind = self.kind.ok_or(ParseError::BlankQuery)?;
        Ok(SearchIntent::new(
            kind,
            self.query,
            self.versions,
            self.sub_range,
            self.main_range,
            self.original_filter,
        ))
    }

    /// Locate the trailing `in (...)` clause and capture the version list.
    ///
    /// The query text becomes everything before the clause (dropping the
    /// single delimiter character immediately preceding it), with any range
    /// groups that trailed the clause re-appended so the later sub-range and
    /// main-range extractions can still find them.
    fn match_versions(&mut self, text: &str) -> Result<(), ParseError> {
        let captures =
            in_versions_re()
                .captures(text)
                .ok_or_else(|| ParseError::MissingVersions {
                    query: text.to_string(),
                })?;
        let clause = captures.get(0).expect("group 0 always present");
        let tail = captures.get(2).map(|m| m.as_str().trim()).unwrap_or("");

        let versions: Vec<String> = captures[1]
            .split([',', ' '])
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect();
        if versions.is_empty() {
            return Err(ParseError::MissingVersions {
                query: text.to_string(),
            });
        }
        self.versions = versions;

        let mut head = &text[..clause.start()];
        if let Some((idx, _)) = head.char_indices().next_back() {
            head = &head[..idx];
        }
        let head = head.trim();
        self.query = if tail.is_empty() {
            head.to_string()
        } else if head.is_empty() {
            tail.to_string()
        } else {
            format!("{head} {tail}")
        };
        Ok(())
    }

    /// Original-language search: `o<axis><specifier?><sep><remainder>`.
    ///
    /// The axis letter picks the language/mode; for Greek and Hebrew a `~`
    /// or `*` specifier narrows to related words or similar forms and
    /// consumes one extra character. One further separator character is
    /// consumed before the remainder is processed. Extraction order on the
    /// remainder is fixed: original filter, versions, sub-range, main-range.
    fn parse_original_search(&mut self, remainder: &str) -> Result<(), ParseError> {
        let remainder = remainder.trim_start();
        let mut chars = remainder.chars();
        let axis = chars.next().ok_or(ParseError::BlankQuery)?;
        let specifier = chars.next();
        let mut consumed = axis.len_utf8();

        match axis {
            'm' => self.kind = Some(SearchKind::OriginalMeaning),
            't' => self.kind = Some(SearchKind::OriginalTranslatedAs),
            'g' => match specifier {
                Some(RELATED_WORDS) => {
                    self.kind = Some(SearchKind::OriginalGreekRelated);
                    consumed += RELATED_WORDS.len_utf8();
                }
                Some(SIMILAR_FORMS) => {
                    self.kind = Some(SearchKind::OriginalGreekForms);
                    consumed += SIMILAR_FORMS.len_utf8();
                }
                _ => self.kind = Some(SearchKind::OriginalGreekExact),
            },
            'h' => match specifier {
                Some(RELATED_WORDS) => {
                    self.kind = Some(SearchKind::OriginalHebrewRelated);
                    consumed += RELATED_WORDS.len_utf8();
                }
                Some(SIMILAR_FORMS) => {
                    self.kind = Some(SearchKind::OriginalHebrewForms);
                    consumed += SIMILAR_FORMS.len_utf8();
                }
                _ => self.kind = Some(SearchKind::OriginalHebrewExact),
            },
            // 'f' historically fell through with no kind assigned; rejecting
            // it outright is the only behavior that never produces a
            // kind-less search.
            _ => {
                return Err(ParseError::UnsupportedOriginalSearch {
                    query: remainder.to_string(),
                });
            }
        }

        // One separator character sits between the prefix and the payload.
        let after_prefix = &remainder[consumed..];
        let payload = after_prefix
            .chars()
            .next()
            .map(|sep| &after_prefix[sep.len_utf8()..])
            .unwrap_or("");

        self.match_original_filter(payload);
        let filtered = std::mem::take(&mut self.query);
        self.match_versions(&filtered)?;
        self.sub_range = self.take_first_group(sub_range_re());
        self.main_range = self.take_first_group(main_range_re());
        Ok(())
    }

    /// Extract a `where original is (...)` clause, if present, into the
    /// original filter. The query text is left untouched when absent.
    fn match_original_filter(&mut self, text: &str) {
        self.query = text.to_string();
        if let Some(filter) = self.take_first_group(original_filter_re()) {
            let entries: Vec<String> = filter
                .split(',')
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string)
                .collect();
            if !entries.is_empty() {
                self.original_filter = Some(entries);
            }
        }
    }

    /// Subject search: extract versions, then rewrite the residual text as
    /// an AND-conjunction of heading-qualified terms.
    fn parse_subject_search(&mut self, remainder: &str) -> Result<(), ParseError> {
        self.match_versions(remainder)?;

        let mut subject_query = String::with_capacity(self.query.len() + 32);
        let mut keys = self.query.split_whitespace().peekable();
        while let Some(key) = keys.next() {
            subject_query.push_str(HEADING_FIELD);
            subject_query.push(':');
            subject_query.push_str(key);
            if keys.peek().is_some() {
                subject_query.push_str(" AND ");
            }
        }

        self.kind = Some(SearchKind::Subject);
        self.query = subject_query;
        Ok(())
    }

    /// Match `pattern` against the query text; on a hit, remove the whole
    /// match from the text and return the first capture group, trimmed.
    fn take_first_group(&mut self, pattern: &Regex) -> Option<String> {
        let captures = pattern.captures(&self.query)?;
        let whole = captures.get(0).expect("group 0 always present");
        let group = captures[1].trim().to_string();

        let mut stripped = String::with_capacity(self.query.len() - whole.len());
        stripped.push_str(&self.query[..whole.start()]);
        stripped.push_str(&self.query[whole.end()..]);
        self.query = stripped.trim().to_string();
        Some(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_search_with_versions() {
        let intent = parse("t=elijah the prophet in (KJV, ESV)").unwrap();
        assert_eq!(intent.kind(), SearchKind::Text);
        assert_eq!(intent.query_text(), "elijah the prophet");
        assert_eq!(intent.versions(), ["KJV", "ESV"]);
        assert!(intent.sub_range().is_none());
        assert!(intent.main_range().is_none());
        assert!(intent.original_filter().is_none());
    }

    #[test]
    fn version_clause_is_case_insensitive() {
        let intent = parse("t=grace IN (asv)").unwrap();
        assert_eq!(intent.query_text(), "grace");
        assert_eq!(intent.versions(), ["asv"]);
    }

    #[test]
    fn version_clause_without_space_before_parens() {
        let intent = parse("t=grace in(KJV)").unwrap();
        assert_eq!(intent.versions(), ["KJV"]);
    }

    #[test]
    fn version_list_splits_on_spaces_too() {
        let intent = parse("t=hope in (KJV ESV,  NIV)").unwrap();
        assert_eq!(intent.versions(), ["KJV", "ESV", "NIV"]);
    }

    #[test]
    fn unprefixed_query_defaults_to_text() {
        let intent = parse("faith hope love in (KJV)").unwrap();
        assert_eq!(intent.kind(), SearchKind::Text);
        assert_eq!(intent.query_text(), "faith hope love");
    }

    #[test]
    fn timeline_searches() {
        let d = parse("d=exile in (ESV)").unwrap();
        assert_eq!(d.kind(), SearchKind::TimelineDescription);
        assert_eq!(d.query_text(), "exile");

        let dr = parse("dr=Gen 1 in (ESV)").unwrap();
        assert_eq!(dr.kind(), SearchKind::TimelineReference);
        assert_eq!(dr.query_text(), "Gen 1");
    }

    #[test]
    fn subject_search_rewrites_to_heading_fields() {
        let intent = parse("s=love grace in (KJV)").unwrap();
        assert_eq!(intent.kind(), SearchKind::Subject);
        assert_eq!(intent.query_text(), "heading:love AND heading:grace");
        assert_eq!(intent.versions(), ["KJV"]);
        // The rewrite happens during parsing, not via amendment.
        assert!(!intent.is_amended());
    }

    #[test]
    fn subject_search_single_term_has_no_trailing_and() {
        let intent = parse("s=love in (KJV)").unwrap();
        assert_eq!(intent.query_text(), "heading:love");
    }

    #[test]
    fn original_greek_exact_with_all_clauses() {
        let intent =
            parse("o g text where original is (G123) in (KJV) {senseA} +[Gen-Rev]").unwrap();
        assert_eq!(intent.kind(), SearchKind::OriginalGreekExact);
        assert_eq!(intent.original_filter().unwrap(), ["G123"]);
        assert_eq!(intent.versions(), ["KJV"]);
        assert_eq!(intent.sub_range(), Some("senseA"));
        assert_eq!(intent.main_range(), Some("Gen-Rev"));
        assert_eq!(intent.query_text(), "text");
    }

    #[test]
    fn original_greek_related_consumes_specifier_and_separator() {
        let intent = parse("o g~text in (KJV)").unwrap();
        assert_eq!(intent.kind(), SearchKind::OriginalGreekRelated);
        // The ~ and the character after it are consumed before the
        // remainder is processed.
        assert_eq!(intent.query_text(), "ext");
    }

    #[test]
    fn original_greek_forms() {
        let intent = parse("og* agape in (SBLG)").unwrap();
        assert_eq!(intent.kind(), SearchKind::OriginalGreekForms);
        assert_eq!(intent.query_text(), "agape");
    }

    #[test]
    fn original_hebrew_variants() {
        assert_eq!(
            parse("oh chesed in (WLC)").unwrap().kind(),
            SearchKind::OriginalHebrewExact
        );
        assert_eq!(
            parse("oh~ chesed in (WLC)").unwrap().kind(),
            SearchKind::OriginalHebrewRelated
        );
        assert_eq!(
            parse("oh* chesed in (WLC)").unwrap().kind(),
            SearchKind::OriginalHebrewForms
        );
    }

    #[test]
    fn original_meaning_and_translated_as() {
        assert_eq!(
            parse("om covenant in (ESV)").unwrap().kind(),
            SearchKind::OriginalMeaning
        );
        assert_eq!(
            parse("ot servant in (ESV)").unwrap().kind(),
            SearchKind::OriginalTranslatedAs
        );
    }

    #[test]
    fn original_filter_splits_on_commas() {
        let intent = parse("og word where original is (G25, G26) in (KJV)").unwrap();
        assert_eq!(intent.original_filter().unwrap(), ["G25", "G26"]);
        assert_eq!(intent.query_text(), "word");
    }

    #[test]
    fn original_without_filter_leaves_filter_unset() {
        let intent = parse("og word in (KJV)").unwrap();
        assert!(intent.original_filter().is_none());
    }

    #[test]
    fn sub_range_extracted_before_main_range() {
        let intent = parse("og word in (KJV) {sense} +[Matt-John]").unwrap();
        assert_eq!(intent.sub_range(), Some("sense"));
        assert_eq!(intent.main_range(), Some("Matt-John"));
        assert_eq!(intent.query_text(), "word");
    }

    #[test]
    fn unsupported_axis_letter_fails() {
        for query in ["ox word in (KJV)", "oz word in (KJV)"] {
            assert!(matches!(
                parse(query),
                Err(ParseError::UnsupportedOriginalSearch { .. })
            ));
        }
    }

    #[test]
    fn reserved_f_axis_is_rejected() {
        // A kind-less search must never escape the parser.
        assert!(matches!(
            parse("of word in (KJV)"),
            Err(ParseError::UnsupportedOriginalSearch { .. })
        ));
    }

    #[test]
    fn missing_versions_fails() {
        assert!(matches!(
            parse("t=love"),
            Err(ParseError::MissingVersions { .. })
        ));
        assert!(matches!(
            parse("s=love grace"),
            Err(ParseError::MissingVersions { .. })
        ));
    }

    #[test]
    fn blank_input_fails() {
        assert_eq!(parse(""), Err(ParseError::BlankQuery));
        assert_eq!(parse("   "), Err(ParseError::BlankQuery));
    }

    #[test]
    fn blank_residual_text_fails() {
        // Everything is consumed by the version clause.
        assert_eq!(parse("t= in (KJV)"), Err(ParseError::BlankQuery));
    }

    #[test]
    fn parse_is_idempotent() {
        let query = "o g text where original is (G123) in (KJV) {senseA} +[Gen-Rev]";
        let first = parse(query).unwrap();
        let second = parse(query).unwrap();
        assert_eq!(first, second);
    }
}
