//! # scry - Scripture Search Query Interpreter
//!
//! scry turns a compact, operator-laden search query string (full-text,
//! subject/heading, original-language with morphological variants, sub-ranges
//! and scripture-range filters) into a typed [`query::SearchIntent`] that a
//! downstream index executor can consume. It also provides a two-tier
//! suggestion collector that aggregates exact and near-match lexicon terms
//! from an index reader.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`query`] - Query parsing: prefix dispatch, clause extraction, intents
//! - [`suggest`] - Two-tier suggestion collection (exact, then non-exact)
//! - [`index`] - The term-reader interface and an in-memory lexicon reader
//! - [`output`] - Terminal rendering of intents and suggestions
//!
//! ## Quick Start
//!
//! ```
//! use scry::query::{parse, SearchKind};
//!
//! let intent = parse("t=love of God in (KJV, ESV)").unwrap();
//! assert_eq!(intent.kind(), SearchKind::Text);
//! assert_eq!(intent.query_text(), "love of God");
//! assert_eq!(intent.versions(), ["KJV", "ESV"]);
//! ```
//!
//! ## Query syntax
//!
//! | Token                      | Meaning                                  |
//! |----------------------------|------------------------------------------|
//! | `t=`                       | full-text search                         |
//! | `s=`                       | subject (heading) search                 |
//! | `o<axis>`                  | original-language search (`m t g h`)     |
//! | `d=` / `dr=`               | timeline description / reference         |
//! | `in (A, B)`                | version list (required)                  |
//! | `{...}`                    | word-sense sub-range                     |
//! | `+[...]`                   | scripture main range                     |
//! | `where original is (...)`  | lexical entry filter                     |
//!
//! These literal tokens are a wire format shared with the calling layer and
//! are preserved exactly.

pub mod index;
pub mod output;
pub mod query;
pub mod suggest;
