use thiserror::Error;

/// Errors raised while interpreting a query string.
///
/// All variants are deterministic caller-input faults: the same input always
/// fails the same way, so none of them is worth retrying. The messages name
/// the extraction step that failed so the caller can surface a correction
/// hint to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input, or the residual text after clause extraction, was blank.
    #[error("unable to search, as the query provided was blank")]
    BlankQuery,

    /// No trailing `in (...)` version clause could be located.
    #[error("unable to find a version list (\"in (...)\" clause) in query: {query}")]
    MissingVersions {
        /// The text that was scanned for the clause.
        query: String,
    },

    /// The letter after the `o` prefix named no known language axis.
    #[error("unsupported original-language search: o{query}")]
    UnsupportedOriginalSearch {
        /// The query remainder following the `o` prefix.
        query: String,
    },
}
