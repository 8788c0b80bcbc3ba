//! End-to-end tests over the public API: query strings in, intents and
//! suggestions out, exercising the wire-format tokens exactly as the calling
//! layer sends them.

use scry::index::LexiconReader;
use scry::query::{parse, ParseError, SearchKind};
use scry::suggest::{collect_suggestions, MeaningSuggestions};

#[test]
fn full_text_round_trip() {
    let intent = parse("t=in the beginning in (KJV, ESV)").unwrap();
    assert_eq!(intent.kind(), SearchKind::Text);
    assert_eq!(intent.query_text(), "in the beginning");
    assert_eq!(intent.versions(), ["KJV", "ESV"]);
}

#[test]
fn original_search_with_every_clause() {
    let intent = parse("o g text where original is (G123) in (KJV) {senseA} +[Gen-Rev]").unwrap();
    assert_eq!(intent.kind(), SearchKind::OriginalGreekExact);
    assert_eq!(intent.query_text(), "text");
    assert_eq!(intent.versions(), ["KJV"]);
    assert_eq!(intent.original_filter().unwrap(), ["G123"]);
    assert_eq!(intent.sub_range(), Some("senseA"));
    assert_eq!(intent.main_range(), Some("Gen-Rev"));
}

#[test]
fn subject_search_produces_field_qualified_conjunction() {
    let intent = parse("s=love grace in (KJV)").unwrap();
    assert_eq!(intent.kind(), SearchKind::Subject);
    assert_eq!(intent.query_text(), "heading:love AND heading:grace");
}

#[test]
fn error_classification_is_stable() {
    assert!(matches!(parse("   "), Err(ParseError::BlankQuery)));
    assert!(matches!(
        parse("t=no versions here"),
        Err(ParseError::MissingVersions { .. })
    ));
    assert!(matches!(
        parse("oq word in (KJV)"),
        Err(ParseError::UnsupportedOriginalSearch { .. })
    ));
}

#[test]
fn intent_serializes_for_the_executor() {
    let intent = parse("t=love in (KJV)").unwrap();
    let json = serde_json::to_value(&intent).unwrap();
    assert_eq!(json["kind"], "TEXT");
    assert_eq!(json["query"], "love");
    assert_eq!(json["versions"][0], "KJV");
    assert_eq!(json["amended"], false);
}

#[test]
fn suggestions_from_a_lexicon() {
    let reader = LexiconReader::from_entries([
        ("gloss", vec!["mercy", "merciful", "mercy-seat"]),
        ("translations", vec!["compassion"]),
    ]);
    let service = MeaningSuggestions::new(&reader);

    let suggestions = collect_suggestions(&service, "mercy", 5).unwrap();
    let glosses: Vec<_> = suggestions.iter().map(|s| s.gloss.as_str()).collect();
    // Exact tier first, then prefix matches, duplicates preserved.
    assert_eq!(glosses, ["mercy", "mercy", "mercy-seat"]);
}

#[test]
fn suggestion_count_is_capped_by_exact_tier() {
    let reader = LexiconReader::from_entries([("gloss", vec!["word"]), ("translations", vec![])]);
    let service = MeaningSuggestions::new(&reader);

    let suggestions = collect_suggestions(&service, "word", 1).unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].gloss, "word");
}
