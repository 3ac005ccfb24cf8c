use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use medkit_core::generation::{FailureKind, Generation, GenerationOutcome, GenerativeBackend};
use medkit_core::models::usage::{TokenCount, TokenUsage};
use medkit_core::prompt::RenderedPrompt;
use medkit_core::schema::Schema;
use medkit_pipeline::{ErrorKind, Stage, ToolFacade};
use medkit_tools::build_registry;

const PNG_URI: &str = "data:image/png;base64,iVBORw0KGgo=";

/// Records every prompt it receives and answers with a canned outcome.
struct FakeBackend {
    outcome: GenerationOutcome,
    calls: Mutex<Vec<RenderedPrompt>>,
}

impl FakeBackend {
    fn answering(candidate: Value) -> Arc<Self> {
        Arc::new(Self {
            outcome: GenerationOutcome::Success(Generation {
                candidate,
                model_id: "fake-model".to_string(),
                usage: TokenUsage {
                    tokens: TokenCount {
                        input: 120,
                        output: 40,
                    },
                    cost_usd: 0.0,
                },
            }),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn failing(kind: FailureKind, message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: GenerationOutcome::failure(kind, message),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<RenderedPrompt> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeBackend for FakeBackend {
    async fn generate(&self, prompt: &RenderedPrompt, _output: &Schema) -> GenerationOutcome {
        self.calls.lock().unwrap().push(prompt.clone());
        self.outcome.clone()
    }
}

fn facade(backend: Arc<FakeBackend>) -> ToolFacade {
    ToolFacade::new(Arc::new(build_registry().unwrap()), backend)
}

fn interaction_answer() -> Value {
    json!({
        "interactionSummary": "Increased bleeding risk.",
        "interactions": [
            {"drugA": "Warfarin", "drugB": "Aspirin", "severity": "Severe", "description": "Additive anticoagulant effect."},
        ],
    })
}

#[tokio::test]
async fn successful_invocation_returns_validated_output() {
    let backend = FakeBackend::answering(interaction_answer());
    let facade = facade(backend.clone());

    let success = facade
        .invoke("drug-interaction-checker", &json!({"drugs": ["Warfarin", "Aspirin"]}))
        .await
        .unwrap();

    assert_eq!(success.tool, "drug-interaction-checker");
    assert_eq!(success.output, interaction_answer());
    assert_eq!(success.model_id, "fake-model");
    assert_eq!(success.usage.tokens.total(), 160);

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].text().contains("- Warfarin\n- Aspirin\n"));
}

#[tokio::test]
async fn input_error_stops_before_the_backend() {
    let backend = FakeBackend::answering(interaction_answer());
    let facade = facade(backend.clone());

    let failure = facade
        .invoke("drug-interaction-checker", &json!({"drugs": ["Warfarin"]}))
        .await
        .unwrap_err();

    assert_eq!(failure.stage, Stage::ValidatingInput);
    assert_eq!(failure.error_kind, ErrorKind::InputError);
    assert_eq!(failure.field.as_deref(), Some("drugs"));
    assert!(failure.message.contains("minLength:2"));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn unknown_tool_is_an_input_stage_failure() {
    let backend = FakeBackend::answering(json!({}));
    let facade = facade(backend.clone());

    let failure = facade.invoke("bmi-calculator", &json!({})).await.unwrap_err();
    assert_eq!(failure.stage, Stage::ValidatingInput);
    assert_eq!(failure.error_kind, ErrorKind::UnknownTool);
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn backend_unavailable_skips_output_validation() {
    let backend = FakeBackend::failing(FailureKind::BackendUnavailable, "connection refused");
    let facade = facade(backend.clone());

    let failure = facade
        .invoke("drug-interaction-checker", &json!({"drugs": ["Warfarin", "Aspirin"]}))
        .await
        .unwrap_err();

    assert_eq!(failure.stage, Stage::Invoking);
    assert_eq!(failure.error_kind, ErrorKind::BackendUnavailable);
    assert_eq!(failure.message, "connection refused");
    assert_eq!(backend.calls().len(), 1);
}

#[tokio::test]
async fn backend_failure_kinds_are_preserved() {
    for (kind, expected) in [
        (FailureKind::BackendRejected, ErrorKind::BackendRejected),
        (FailureKind::MalformedResponse, ErrorKind::MalformedResponse),
    ] {
        let facade = facade(FakeBackend::failing(kind, "nope"));
        let failure = facade
            .invoke("case-summary", &json!({"notes": "x".repeat(60)}))
            .await
            .unwrap_err();
        assert_eq!(failure.stage, Stage::Invoking);
        assert_eq!(failure.error_kind, expected);
    }
}

#[tokio::test]
async fn bad_answer_is_a_validation_failure() {
    let backend = FakeBackend::answering(json!({
        "interactionSummary": "One interaction.",
        "interactions": [
            {"drugA": "Warfarin", "drugB": "Aspirin", "severity": "High", "description": "Bleeding"},
        ],
    }));
    let facade = facade(backend);

    let failure = facade
        .invoke("drug-interaction-checker", &json!({"drugs": ["Warfarin", "Aspirin"]}))
        .await
        .unwrap_err();

    assert_eq!(failure.stage, Stage::ValidatingOutput);
    assert_eq!(failure.error_kind, ErrorKind::ValidationFailure);
    assert_eq!(failure.field.as_deref(), Some("interactions[0].severity"));
    assert!(failure.message.contains("not in enum"));
}

#[tokio::test]
async fn media_reaches_the_backend_as_a_segment() {
    let backend = FakeBackend::answering(json!({
        "assessment": "Symmetric lesion.",
        "isSuspicious": false,
        "recommendation": "Monitor the lesion.",
        "confidenceScore": "0.4",
    }));
    let facade = facade(backend.clone());

    let success = facade
        .invoke("skin-lesion-classifier", &json!({"photoDataUri": PNG_URI}))
        .await
        .unwrap();
    assert_eq!(success.output["confidenceScore"], json!(0.4));

    let calls = backend.calls();
    let media: Vec<_> = calls[0].media().collect();
    assert_eq!(media.len(), 1);
    assert_eq!(media[0].mime_type, "image/png");
}

#[tokio::test]
async fn unsupported_image_type_is_an_input_error() {
    let backend = FakeBackend::answering(json!({}));
    let facade = facade(backend.clone());

    for uri in ["data:image/heic;base64,AAAA", "data:application/pdf;base64,JVBERi0x"] {
        let failure = facade
            .invoke("skin-lesion-classifier", &json!({"photoDataUri": uri}))
            .await
            .unwrap_err();

        assert_eq!(failure.stage, Stage::ValidatingInput);
        assert_eq!(failure.error_kind, ErrorKind::InputError);
        assert_eq!(failure.field.as_deref(), Some("photoDataUri"));
        assert!(failure.message.contains("mimeType"), "{}", failure.message);
    }
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn failure_serializes_with_stage_and_kind() {
    let facade = facade(FakeBackend::failing(FailureKind::BackendUnavailable, "down"));
    let failure = facade
        .invoke("disease-summary", &json!({"disease": "Sarcoidosis"}))
        .await
        .unwrap_err();

    let body = serde_json::to_value(&failure).unwrap();
    assert_eq!(body["stage"], "Invoking");
    assert_eq!(body["error_kind"], "BackendUnavailable");
    assert!(body.get("field").is_none());
}

#[tokio::test]
async fn concurrent_invocations_are_independent() {
    let backend = FakeBackend::answering(interaction_answer());
    let facade = facade(backend.clone());

    let drugs = [["Warfarin", "Aspirin"], ["Metformin", "Contrast"], ["Lithium", "Ibuprofen"]];
    let handles: Vec<_> = drugs
        .iter()
        .map(|pair| {
            let facade = facade.clone();
            let input = json!({"drugs": pair});
            tokio::spawn(async move { facade.invoke("drug-interaction-checker", &input).await })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().invocation_id);
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
    assert_eq!(backend.calls().len(), 3);
}
