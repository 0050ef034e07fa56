use super::*;

// =============================================================
// WordColor
// =============================================================

#[test]
fn word_color_from_wire_accepts_known_values() {
    assert_eq!(WordColor::from_wire("red"), WordColor::Red);
    assert_eq!(WordColor::from_wire("amber"), WordColor::Amber);
    assert_eq!(WordColor::from_wire("green"), WordColor::Green);
    assert_eq!(WordColor::from_wire("gray"), WordColor::Gray);
}

#[test]
fn word_color_from_wire_is_case_and_whitespace_exact() {
    for raw in ["RED", " red ", "Amber", "  GREEN "] {
        assert_eq!(WordColor::from_wire(raw), WordColor::Gray, "value {raw:?}");
    }
}

#[test]
fn word_color_from_wire_unknown_is_gray() {
    assert_eq!(WordColor::from_wire("purple"), WordColor::Gray);
    assert_eq!(WordColor::from_wire(""), WordColor::Gray);
}

#[test]
fn word_color_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&WordColor::Amber).unwrap(), "\"amber\"");
    assert_eq!(serde_json::to_string(&WordColor::Gray).unwrap(), "\"gray\"");
}

#[test]
fn word_color_deserializes_unknown_as_gray() {
    let color: WordColor = serde_json::from_str("\"blue\"").unwrap();
    assert_eq!(color, WordColor::Gray);
}

#[test]
fn direct_and_field_decoding_agree() {
    for raw in ["red", "RED", " red ", "amber", "AMBER", "green", "gray", "teal"] {
        let direct: WordColor = serde_json::from_value(serde_json::json!(raw)).unwrap();
        let entry: VocabularyEntry = serde_json::from_value(serde_json::json!({"english": "cat", "color": raw})).unwrap();
        assert_eq!(direct, WordColor::from_wire(raw), "value {raw:?}");
        assert_eq!(entry.color, direct, "value {raw:?}");
    }
}

#[test]
fn manual_colors_exclude_gray() {
    assert!(!WordColor::MANUAL.contains(&WordColor::Gray));
    assert_eq!(WordColor::MANUAL.len(), 3);
}

// =============================================================
// ColorFilter
// =============================================================

#[test]
fn color_filter_all_has_no_query_value() {
    assert_eq!(ColorFilter::All.query_value(), None);
    assert_eq!(ColorFilter::All.select_value(), "all");
}

#[test]
fn color_filter_parses_select_values() {
    assert_eq!(ColorFilter::from_select_value("green"), ColorFilter::Only(WordColor::Green));
    assert_eq!(ColorFilter::from_select_value("gray"), ColorFilter::Only(WordColor::Gray));
    assert_eq!(ColorFilter::from_select_value("all"), ColorFilter::All);
    assert_eq!(ColorFilter::from_select_value("nonsense"), ColorFilter::All);
}

#[test]
fn color_filter_options_round_trip_through_select_value() {
    for option in ColorFilter::OPTIONS {
        assert_eq!(ColorFilter::from_select_value(option.select_value()), option);
    }
}

// =============================================================
// VocabularyEntry
// =============================================================

#[test]
fn vocabulary_entry_decodes_backend_row() {
    let entry: VocabularyEntry =
        serde_json::from_str(r#"{"english":"cat","french":"chat","color":"green"}"#).unwrap();
    assert_eq!(entry.english, "cat");
    assert_eq!(entry.color, WordColor::Green);
    assert_eq!(entry.french.as_deref(), Some("chat"));
}

#[test]
fn vocabulary_entry_missing_color_is_gray() {
    let entry: VocabularyEntry = serde_json::from_str(r#"{"english":"dog"}"#).unwrap();
    assert_eq!(entry.color, WordColor::Gray);
    assert_eq!(entry.french, None);
}

#[test]
fn vocabulary_entry_null_or_unknown_color_is_gray() {
    let null: VocabularyEntry = serde_json::from_str(r#"{"english":"sun","color":null}"#).unwrap();
    let odd: VocabularyEntry = serde_json::from_str(r#"{"english":"moon","color":"teal"}"#).unwrap();
    assert_eq!(null.color, WordColor::Gray);
    assert_eq!(odd.color, WordColor::Gray);
}

#[test]
fn word_list_preserves_backend_order() {
    let list: Vec<VocabularyEntry> = serde_json::from_str(
        r#"[{"english":"moon","color":"red"},{"english":"apple","color":"gray"},{"english":"book","color":"amber"}]"#,
    )
    .unwrap();
    let words: Vec<&str> = list.iter().map(|e| e.english.as_str()).collect();
    assert_eq!(words, ["moon", "apple", "book"]);
}

// =============================================================
// ColorCounts / check answer
// =============================================================

#[test]
fn color_counts_decode_and_lookup() {
    let counts: ColorCounts = serde_json::from_str(r#"{"green":3,"amber":1,"red":2,"gray":5}"#).unwrap();
    assert_eq!(counts.get(WordColor::Green), 3);
    assert_eq!(counts.get(WordColor::Amber), 1);
    assert_eq!(counts.get(WordColor::Red), 2);
    assert_eq!(counts.get(WordColor::Gray), 5);
}

#[test]
fn check_answer_response_without_answer() {
    let resp: CheckAnswerResponse = serde_json::from_str(r#"{"correct":true}"#).unwrap();
    assert!(resp.correct);
    assert_eq!(resp.correct_answer, None);
}

#[test]
fn update_color_request_serializes_wire_shape() {
    let body = serde_json::to_value(UpdateColorRequest { english: "cat", color: WordColor::Amber }).unwrap();
    assert_eq!(body, serde_json::json!({"english": "cat", "color": "amber"}));
}

#[test]
fn check_answer_request_serializes_wire_shape() {
    let body = serde_json::to_value(CheckAnswerRequest { english: "cat", french: "chat" }).unwrap();
    assert_eq!(body, serde_json::json!({"english": "cat", "french": "chat"}));
}
