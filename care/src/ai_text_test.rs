use super::*;

// =============================================================
// Suggestion text
// =============================================================

#[test]
fn object_string_decodes_to_structured_suggestion() {
    let text = SuggestionText::parse(r#"{"Plant Name":"Pothos","Diseases":["Leaf spot"]}"#);
    let suggestion = text.structured().expect("structured");
    assert_eq!(suggestion.plant_name.as_deref(), Some("Pothos"));
    assert_eq!(suggestion.diseases, vec!["Leaf spot".to_owned()]);
    assert!(suggestion.symptoms.is_empty());
}

#[test]
fn plain_string_passes_through_as_raw() {
    let text = SuggestionText::parse("Looks fine");
    assert_eq!(text, AiText::Raw("Looks fine".to_owned()));
}

#[test]
fn malformed_object_string_passes_through_as_raw() {
    let text = SuggestionText::parse("{invalid");
    assert_eq!(text.raw(), Some("{invalid"));
}

#[test]
fn misspelled_symptoms_key_is_the_one_read() {
    let text = SuggestionText::parse(r#"{"Sympotoms":["yellowing"],"Symptoms":["ignored"]}"#);
    assert_eq!(text.symptoms(), ["yellowing".to_owned()]);
}

#[test]
fn null_lists_decode_as_empty() {
    let text = SuggestionText::parse(r#"{"Plant Name":null,"Diseases":null,"Sympotoms":null}"#);
    let suggestion = text.structured().expect("structured");
    assert_eq!(suggestion, &Suggestion::default());
}

#[test]
fn wrong_list_type_degrades_to_raw() {
    let raw = r#"{"Diseases":"Leaf spot"}"#;
    assert_eq!(SuggestionText::parse(raw).raw(), Some(raw));
}

#[test]
fn leading_whitespace_before_brace_still_parses() {
    let text = SuggestionText::parse("  {\"Diseases\":[\"Rust\"]}");
    assert!(text.structured().is_some());
}

#[test]
fn array_string_is_not_object_shaped() {
    let text = SuggestionText::parse(r#"["a","b"]"#);
    assert_eq!(text.raw(), Some(r#"["a","b"]"#));
}

#[test]
fn field_holding_an_object_decodes_directly() {
    let value = serde_json::json!({ "Plant Name": "Fern", "Sympotoms": ["brown tips"] });
    let text = SuggestionText::from_value(value);
    assert_eq!(text.symptoms(), ["brown tips".to_owned()]);
}

#[test]
fn null_field_is_blank_raw() {
    let text = SuggestionText::from_value(Value::Null);
    assert!(text.is_blank());
}

#[test]
fn display_name_prefers_analysis_then_species_then_unknown() {
    let structured = SuggestionText::parse(r#"{"Plant Name":"Monstera"}"#);
    assert_eq!(structured.display_name(Some("Ficus")), "Monstera");

    let raw = SuggestionText::parse("no structure");
    assert_eq!(raw.display_name(Some("Ficus")), "Ficus");
    assert_eq!(raw.display_name(Some("  ")), "Unknown");
    assert_eq!(raw.display_name(None), "Unknown");
}

#[test]
fn deserializes_inside_a_struct_without_failing() {
    #[derive(Deserialize)]
    struct Holder {
        text: SuggestionText,
    }
    let holder: Holder = serde_json::from_str(r#"{"text":"{broken"}"#).expect("holder");
    assert_eq!(holder.text.raw(), Some("{broken"));
}

#[test]
fn serializes_back_to_string_form() {
    let raw = SuggestionText::Raw("hello".to_owned());
    assert_eq!(serde_json::to_value(&raw).expect("json"), Value::String("hello".to_owned()));

    let structured = SuggestionText::parse(r#"{"Diseases":["Rot"]}"#);
    let value = serde_json::to_value(&structured).expect("json");
    let encoded = value.as_str().expect("string");
    assert_eq!(SuggestionText::parse(encoded), structured);
}

// =============================================================
// Care tips
// =============================================================

#[test]
fn care_tips_object_lists_sections_in_order() {
    let text = CareTipsText::parse(r#"{"general":"Rotate weekly","water":"Twice a week","soil":" "}"#);
    let guide = text.guide();
    assert_eq!(
        guide.sections(),
        vec![("Watering", "Twice a week"), ("General Advice", "Rotate weekly")]
    );
}

#[test]
fn raw_care_tips_become_general_advice() {
    let text = CareTipsText::parse("Keep the soil moist.");
    assert_eq!(text.guide().sections(), vec![("General Advice", "Keep the soil moist.")]);
}

#[test]
fn care_tips_as_json_object_field() {
    let text = CareTipsText::from_value(serde_json::json!({ "sunlight": "Bright, indirect" }));
    assert_eq!(text.guide().sunlight.as_deref(), Some("Bright, indirect"));
}

#[test]
fn non_string_scalar_field_is_kept_as_text() {
    let text = CareTipsText::from_value(serde_json::json!(42));
    assert_eq!(text.raw(), Some("42"));
}
