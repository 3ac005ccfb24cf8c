use medkit_core::error::{ConfigurationError, RenderError};
use medkit_core::prompt::PromptSegment;
use medkit_core::schema::{Field, FieldKind, Schema};
use medkit_core::template::Template;
use medkit_core::validate::validate_input;
use serde_json::{json, Value};

const PNG_URI: &str = "data:image/png;base64,iVBORw0KGgo=";

fn render_text(tool: &str, source: &str, schema: &Schema, raw: Value) -> String {
    let template = Template::compile(tool, source, schema).unwrap();
    let input = validate_input(tool, schema, &raw).unwrap();
    template.render(&input).unwrap().text()
}

fn contraindication_schema() -> Schema {
    Schema::new(vec![
        Field::string("drugName"),
        Field::string("condition").optional(),
    ])
}

#[test]
fn absent_conditional_renders_nothing() {
    let text = render_text(
        "contraindication-finder",
        "Drug: {{drugName}}{{#if condition}} Condition: {{condition}}{{/if}}",
        &contraindication_schema(),
        json!({"drugName": "X"}),
    );
    assert_eq!(text, "Drug: X");
}

#[test]
fn present_conditional_renders_block() {
    let text = render_text(
        "contraindication-finder",
        "Drug: {{drugName}}{{#if condition}} Condition: {{condition}}{{/if}}",
        &contraindication_schema(),
        json!({"drugName": "X", "condition": "Asthma"}),
    );
    assert_eq!(text, "Drug: X Condition: Asthma");
}

#[test]
fn standalone_block_lines_leave_no_blank_line() {
    let source = "Drug: {{{drugName}}}\n  {{#if condition}}\n  Specific condition: {{{condition}}}\n  {{/if}}\n  Based on guidelines.";
    let schema = contraindication_schema();

    let absent = render_text("c", source, &schema, json!({"drugName": "Metformin"}));
    assert_eq!(absent, "Drug: Metformin\n  Based on guidelines.");
    assert!(!absent.contains("Specific condition"));

    let present = render_text(
        "c",
        source,
        &schema,
        json!({"drugName": "Metformin", "condition": "CKD stage 4"}),
    );
    assert_eq!(
        present,
        "Drug: Metformin\n  Specific condition: CKD stage 4\n  Based on guidelines."
    );
}

#[test]
fn empty_string_and_null_optional_are_falsy() {
    let schema = contraindication_schema();
    let source = "{{drugName}}{{#if condition}}!{{/if}}";
    assert_eq!(render_text("c", source, &schema, json!({"drugName": "A", "condition": ""})), "A");
    assert_eq!(render_text("c", source, &schema, json!({"drugName": "A", "condition": null})), "A");
}

#[test]
fn zero_is_falsy_in_conditionals() {
    let schema = Schema::new(vec![Field::number("n")]);
    let source = "A{{#if n}}[n={{n}}]{{/if}}";
    assert_eq!(render_text("t", source, &schema, json!({"n": 0})), "A");
    assert_eq!(render_text("t", source, &schema, json!({"n": 0.0})), "A");
    assert_eq!(render_text("t", source, &schema, json!({"n": 2})), "A[n=2]");
    assert_eq!(render_text("t", source, &schema, json!({"n": -1.5})), "A[n=-1.5]");
}

#[test]
fn each_block_repeats_in_array_order() {
    let schema = Schema::new(vec![Field::array("drugs", FieldKind::String)]);
    let source = "Drugs:\n  {{#each drugs}}\n  - {{{this}}}\n  {{/each}}\n  Done.";

    for n in 0..6 {
        let drugs: Vec<String> = (0..n).map(|i| format!("drug{i}")).collect();
        let text = render_text("d", source, &schema, json!({"drugs": drugs}));

        let bullets: Vec<&str> = text.lines().filter(|l| l.trim_start().starts_with("- ")).collect();
        assert_eq!(bullets.len(), n);
        for (i, line) in bullets.iter().enumerate() {
            assert_eq!(line.trim(), format!("- drug{i}"));
        }
        assert!(text.starts_with("Drugs:\n"));
        assert!(text.ends_with("  Done."));
    }
}

#[test]
fn each_block_over_objects() {
    let schema = Schema::new(vec![Field::object_array(
        "vitals",
        vec![Field::string("name"), Field::number("value"), Field::string("unit").optional()],
    )]);
    let source = "{{#each vitals}}{{this.name}}={{this.value}}{{#if this.unit}} {{this.unit}}{{/if}};{{/each}}";
    let text = render_text(
        "v",
        source,
        &schema,
        json!({"vitals": [{"name": "HR", "value": 88, "unit": "bpm"}, {"name": "SpO2", "value": 97.5}]}),
    );
    assert_eq!(text, "HR=88 bpm;SpO2=97.5;");
}

#[test]
fn media_reference_becomes_its_own_segment() {
    let schema = Schema::new(vec![
        Field::media("photoDataUri"),
        Field::string("clinicalContext").optional(),
    ]);
    let template = Template::compile(
        "x-ray-interpreter",
        "Analyze the image: {{media url=photoDataUri}}\nClinical Context: {{{clinicalContext}}}",
        &schema,
    )
    .unwrap();
    let input = validate_input("x-ray-interpreter", &schema, &json!({"photoDataUri": PNG_URI})).unwrap();
    let prompt = template.render(&input).unwrap();

    let segments = prompt.segments();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0], PromptSegment::Text("Analyze the image: ".into()));
    let PromptSegment::Media(media) = &segments[1] else {
        panic!("expected media segment");
    };
    assert_eq!(media.mime_type, "image/png");
    assert_eq!(segments[2], PromptSegment::Text("\nClinical Context: ".into()));
    assert!(!prompt.text().contains("base64"));
}

#[test]
fn rendering_is_deterministic() {
    let schema = contraindication_schema();
    let template = Template::compile("c", "{{drugName}} / {{condition}}", &schema).unwrap();
    let input = validate_input("c", &schema, &json!({"drugName": "A", "condition": "B"})).unwrap();
    assert_eq!(template.render(&input).unwrap(), template.render(&input).unwrap());
}

#[test]
fn undeclared_field_fails_at_compile() {
    let err = Template::compile("c", "Drug: {{drugName}} Dose: {{dose}}", &contraindication_schema()).unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::UndeclaredField {
            tool: "c".into(),
            field: "dose".into(),
        }
    );

    let err = Template::compile("c", "{{#if allergy}}x{{/if}}", &contraindication_schema()).unwrap_err();
    assert!(matches!(err, ConfigurationError::UndeclaredField { field, .. } if field == "allergy"));
}

#[test]
fn kind_misuse_fails_at_compile() {
    let schema = Schema::new(vec![
        Field::array("drugs", FieldKind::String),
        Field::string("name"),
        Field::media("photo"),
    ]);

    let err = Template::compile("t", "{{drugs}}", &schema).unwrap_err();
    assert!(matches!(err, ConfigurationError::KindMismatch { usage: "text", .. }));

    let err = Template::compile("t", "{{#each name}}x{{/each}}", &schema).unwrap_err();
    assert!(matches!(err, ConfigurationError::KindMismatch { usage: "a list", .. }));

    let err = Template::compile("t", "{{media url=name}}", &schema).unwrap_err();
    assert!(matches!(err, ConfigurationError::KindMismatch { usage: "media", .. }));

    let err = Template::compile("t", "{{photo}}", &schema).unwrap_err();
    assert!(matches!(err, ConfigurationError::KindMismatch { usage: "text", kind: "media", .. }));
}

#[test]
fn malformed_templates_fail_at_compile() {
    let schema = contraindication_schema();
    for source in [
        "{{drugName",
        "{{#if condition}}open",
        "{{/if}}",
        "{{#if condition}}x{{/each}}",
        "{{#unless condition}}x{{/unless}}",
        "{{this}}",
        "{{drug name}}",
    ] {
        let err = Template::compile("t", source, &schema).unwrap_err();
        assert!(matches!(err, ConfigurationError::Syntax { .. }), "{source}: {err:?}");
    }
}

#[test]
fn input_for_another_tool_is_refused() {
    let schema = contraindication_schema();
    let template = Template::compile("a", "{{drugName}}", &schema).unwrap();
    let input = validate_input("b", &schema, &json!({"drugName": "X"})).unwrap();
    assert_eq!(
        template.render(&input).unwrap_err(),
        RenderError::ContractMismatch {
            tool: "a".into(),
            validated_for: "b".into(),
        }
    );
}
