use medkit_core::error::ValidationFailure;
use medkit_core::schema::{Field, FieldKind, Schema};
use medkit_core::validate::validate_output;
use serde_json::json;

fn interaction_output() -> Schema {
    Schema::new(vec![
        Field::string("interactionSummary"),
        Field::object_array(
            "interactions",
            vec![
                Field::string("drugA"),
                Field::string("drugB"),
                Field::enumeration("severity", &["Mild", "Moderate", "Severe"]),
                Field::string("description"),
            ],
        ),
    ])
}

fn lesion_output() -> Schema {
    Schema::new(vec![
        Field::string("assessment"),
        Field::boolean("isSuspicious"),
        Field::string("recommendation"),
        Field::number("confidenceScore").min(0.0).max(1.0),
        Field::array("differentials", FieldKind::String).optional(),
    ])
}

#[test]
fn severity_outside_enum_is_rejected() {
    let schema = Schema::new(vec![Field::enumeration("severity", &["Mild", "Moderate", "Severe"])]);
    let err = validate_output(&schema, &json!({"severity": "High"})).unwrap_err();
    assert_eq!(err, ValidationFailure::new("severity", "not in enum"));
}

#[test]
fn nested_enum_failure_reports_path() {
    let candidate = json!({
        "interactionSummary": "One interaction.",
        "interactions": [
            {"drugA": "Warfarin", "drugB": "Aspirin", "severity": "Severe", "description": "Bleeding"},
            {"drugA": "Warfarin", "drugB": "Ibuprofen", "severity": "High", "description": "Bleeding"},
        ],
    });
    let err = validate_output(&interaction_output(), &candidate).unwrap_err();
    assert_eq!(err, ValidationFailure::new("interactions[1].severity", "not in enum"));
}

#[test]
fn correct_candidate_is_returned_unchanged() {
    let candidate = json!({
        "interactionSummary": "Increased bleeding risk.",
        "interactions": [
            {"drugA": "Warfarin", "drugB": "Aspirin", "severity": "Severe", "description": "Additive anticoagulation"},
        ],
    });
    assert_eq!(validate_output(&interaction_output(), &candidate).unwrap(), candidate);

    let lesion = json!({
        "assessment": "Symmetric, uniform color.",
        "isSuspicious": false,
        "recommendation": "Monitor the lesion.",
        "confidenceScore": 0.35,
        "differentials": ["Benign nevus"],
    });
    assert_eq!(validate_output(&lesion_output(), &lesion).unwrap(), lesion);
}

#[test]
fn numeric_strings_are_coerced() {
    let candidate = json!({
        "assessment": "a",
        "isSuspicious": true,
        "recommendation": "r",
        "confidenceScore": "0.8",
    });
    let validated = validate_output(&lesion_output(), &candidate).unwrap();
    assert_eq!(validated["confidenceScore"], json!(0.8));

    let integer = json!({"count": "3"});
    let schema = Schema::new(vec![Field::number("count")]);
    assert_eq!(validate_output(&schema, &integer).unwrap(), json!({"count": 3}));
}

#[test]
fn non_numeric_strings_are_not_guessed() {
    let schema = Schema::new(vec![Field::number("confidenceScore")]);
    for bad in ["high", "0.8 ", "80%", "NaN", "inf", ""] {
        let err = validate_output(&schema, &json!({"confidenceScore": bad})).unwrap_err();
        assert_eq!(err, ValidationFailure::new("confidenceScore", "expected number"), "{bad:?}");
    }
}

#[test]
fn booleans_are_not_coerced() {
    let candidate = json!({
        "assessment": "a",
        "isSuspicious": "true",
        "recommendation": "r",
        "confidenceScore": 0.5,
    });
    let err = validate_output(&lesion_output(), &candidate).unwrap_err();
    assert_eq!(err, ValidationFailure::new("isSuspicious", "expected boolean"));
}

#[test]
fn numeric_range_is_enforced() {
    let candidate = json!({
        "assessment": "a",
        "isSuspicious": true,
        "recommendation": "r",
        "confidenceScore": 1.2,
    });
    let err = validate_output(&lesion_output(), &candidate).unwrap_err();
    assert_eq!(err, ValidationFailure::new("confidenceScore", "out of range"));
}

#[test]
fn missing_field_is_distinct_from_wrong_kind() {
    let err = validate_output(&interaction_output(), &json!({"interactions": []})).unwrap_err();
    assert_eq!(err, ValidationFailure::new("interactionSummary", "missing"));

    let err = validate_output(&interaction_output(), &json!({"interactionSummary": null, "interactions": []}))
        .unwrap_err();
    assert_eq!(err, ValidationFailure::new("interactionSummary", "missing"));

    let err = validate_output(&interaction_output(), &json!({"interactionSummary": "s", "interactions": {}}))
        .unwrap_err();
    assert_eq!(err, ValidationFailure::new("interactions", "expected array"));
}

#[test]
fn undeclared_keys_are_stripped() {
    let candidate = json!({
        "interactionSummary": "None found.",
        "interactions": [],
        "confidence": "high",
    });
    assert_eq!(
        validate_output(&interaction_output(), &candidate).unwrap(),
        json!({"interactionSummary": "None found.", "interactions": []})
    );
}

#[test]
fn non_object_candidate_is_rejected() {
    let err = validate_output(&interaction_output(), &json!("plain text answer")).unwrap_err();
    assert_eq!(err, ValidationFailure::new("$", "expected object"));
}
