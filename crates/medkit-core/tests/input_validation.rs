use medkit_core::error::InputError;
use medkit_core::schema::{Field, FieldKind, Schema};
use medkit_core::validate::{validate_input, InputValue};
use serde_json::json;

fn interaction_schema() -> Schema {
    Schema::new(vec![Field::array("drugs", FieldKind::String).min_length(2)])
}

fn lab_schema() -> Schema {
    Schema::new(vec![
        Field::enumeration("labType", &["CBC", "LFT", "KFT"]),
        Field::string("results").min_length(1),
        Field::string("notes").optional(),
    ])
}

#[test]
fn single_drug_fails_min_length() {
    let err = validate_input("drug-interaction-checker", &interaction_schema(), &json!({"drugs": ["Warfarin"]}))
        .unwrap_err();
    assert_eq!(err, InputError::new("drugs", "minLength:2"));
}

#[test]
fn two_drugs_pass_in_order() {
    let input = validate_input(
        "drug-interaction-checker",
        &interaction_schema(),
        &json!({"drugs": ["Warfarin", "Aspirin"]}),
    )
    .unwrap();
    assert_eq!(
        input.get("drugs"),
        Some(&InputValue::List(vec![
            InputValue::Text("Warfarin".into()),
            InputValue::Text("Aspirin".into()),
        ]))
    );
}

#[test]
fn missing_required_field_is_named() {
    let schema = lab_schema();
    let err = validate_input("lab", &schema, &json!({"labType": "CBC"})).unwrap_err();
    assert_eq!(err, InputError::new("results", "required"));

    let err = validate_input("lab", &schema, &json!({"results": "WBC: 12.5"})).unwrap_err();
    assert_eq!(err, InputError::new("labType", "required"));
}

#[test]
fn every_required_field_is_reported_when_it_alone_is_missing() {
    let schema = Schema::new(vec![
        Field::string("a"),
        Field::number("b"),
        Field::boolean("c"),
        Field::array("d", FieldKind::String),
        Field::string("e").optional(),
    ]);
    let complete = json!({"a": "x", "b": 1, "c": true, "d": []});

    for name in ["a", "b", "c", "d"] {
        let mut raw = complete.clone();
        raw.as_object_mut().unwrap().remove(name);
        let err = validate_input("t", &schema, &raw).unwrap_err();
        assert_eq!(err.field, name);
        assert_eq!(err.constraint, "required");
    }
}

#[test]
fn enum_must_match_exactly() {
    let err = validate_input("lab", &lab_schema(), &json!({"labType": "cbc", "results": "x"})).unwrap_err();
    assert_eq!(err, InputError::new("labType", "enum"));
}

#[test]
fn wrong_kind_names_expected_type() {
    let err = validate_input("lab", &lab_schema(), &json!({"labType": "CBC", "results": 42})).unwrap_err();
    assert_eq!(err, InputError::new("results", "type:string"));

    let err = validate_input("t", &interaction_schema(), &json!({"drugs": ["a", 2]})).unwrap_err();
    assert_eq!(err, InputError::new("drugs[1]", "type:string"));
}

#[test]
fn non_object_input_is_rejected_at_root() {
    let err = validate_input("t", &lab_schema(), &json!(["CBC"])).unwrap_err();
    assert_eq!(err, InputError::new("$", "type:object"));
}

#[test]
fn numeric_bounds() {
    let schema = Schema::new(vec![Field::number("weightKg").greater_than(0.0).max(500.0)]);

    let err = validate_input("t", &schema, &json!({"weightKg": 0})).unwrap_err();
    assert_eq!(err, InputError::new("weightKg", "gt:0"));

    let err = validate_input("t", &schema, &json!({"weightKg": 501})).unwrap_err();
    assert_eq!(err, InputError::new("weightKg", "max:500"));

    let ok = validate_input("t", &schema, &json!({"weightKg": 72.5})).unwrap();
    assert_eq!(ok.get("weightKg"), Some(&InputValue::Number(72.5)));
}

#[test]
fn unknown_fields_are_ignored_and_null_optional_is_absent() {
    let input = validate_input(
        "lab",
        &lab_schema(),
        &json!({"labType": "LFT", "results": "ALT: 80", "notes": null, "extra": 1}),
    )
    .unwrap();
    assert!(input.get("notes").is_none());
    assert!(input.get("extra").is_none());
    assert_eq!(input.fields().len(), 2);
}

#[test]
fn media_fields_decode_data_uris() {
    let schema = Schema::new(vec![Field::media("photoDataUri")]);

    let input = validate_input("t", &schema, &json!({"photoDataUri": "data:image/png;base64,iVBORw0KGgo="}))
        .unwrap();
    let Some(InputValue::Media(media)) = input.get("photoDataUri") else {
        panic!("expected media value");
    };
    assert_eq!(media.mime_type, "image/png");
    assert_eq!(media.bytes[..4], [0x89, b'P', b'N', b'G']);

    let err = validate_input("t", &schema, &json!({"photoDataUri": "not a uri"})).unwrap_err();
    assert_eq!(err, InputError::new("photoDataUri", "dataUri"));
}

#[test]
fn media_fields_accept_only_listed_types() {
    let schema = Schema::new(vec![Field::media("photoDataUri")]);
    for uri in [
        "data:image/heic;base64,AAAA",
        "data:application/pdf;base64,JVBERi0x",
        "data:image/tiff;base64,SUkqAA==",
    ] {
        let err = validate_input("t", &schema, &json!({"photoDataUri": uri})).unwrap_err();
        assert_eq!(err, InputError::new("photoDataUri", "mimeType"), "{uri}");
    }

    for uri in ["data:image/jpeg;base64,/9j/4AAQ", "data:IMAGE/WEBP;base64,UklGRg=="] {
        assert!(validate_input("t", &schema, &json!({"photoDataUri": uri})).is_ok(), "{uri}");
    }

    let pdf_only = Schema::new(vec![Field::media_of("report", &["application/pdf"])]);
    assert!(validate_input("t", &pdf_only, &json!({"report": "data:application/pdf;base64,JVBERi0x"})).is_ok());
    let err = validate_input("t", &pdf_only, &json!({"report": "data:image/png;base64,iVBORw0KGgo="})).unwrap_err();
    assert_eq!(err, InputError::new("report", "mimeType"));
}

#[test]
fn nested_object_paths() {
    let schema = Schema::new(vec![Field::object_array(
        "medications",
        vec![Field::string("name"), Field::number("doseMg").greater_than(0.0)],
    )]);
    let err = validate_input(
        "t",
        &schema,
        &json!({"medications": [{"name": "a", "doseMg": 5}, {"name": "b", "doseMg": -1}]}),
    )
    .unwrap_err();
    assert_eq!(err, InputError::new("medications[1].doseMg", "gt:0"));
}

#[test]
fn validation_is_deterministic() {
    let schema = lab_schema();
    let raw = json!({"labType": "KFT", "results": "Creatinine: 2.1"});
    assert_eq!(
        validate_input("lab", &schema, &raw).unwrap(),
        validate_input("lab", &schema, &raw).unwrap()
    );

    let bad = json!({"labType": "XYZ"});
    assert_eq!(
        validate_input("lab", &schema, &bad).unwrap_err(),
        validate_input("lab", &schema, &bad).unwrap_err()
    );
}
