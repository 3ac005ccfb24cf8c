use medkit_core::schema::{Field, Schema};

use crate::Tool;

/// Preliminary diagnosis and likely causes from a free-text symptom list.
pub struct AiDiagnosisAssistant;

const TEMPLATE: &str = r#"You are an AI assistant that provides preliminary diagnoses based on symptoms provided by the user.

Symptoms: {{{symptoms}}}

Provide a preliminary diagnosis and the potential causes for these symptoms.

Disclaimer: This is not a medical diagnosis. Always consult a qualified healthcare provider."#;

impl Tool for AiDiagnosisAssistant {
    fn id(&self) -> &str {
        "ai-diagnosis-assistant"
    }

    fn name(&self) -> &str {
        "AI Diagnosis Assistant"
    }

    fn description(&self) -> &str {
        "Preliminary diagnosis and potential causes for a set of symptoms."
    }

    fn input_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("symptoms")
                .min_length(10)
                .describe("The symptoms the user is experiencing."),
        ])
    }

    fn output_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("diagnosis")
                .describe("A preliminary diagnosis based on the symptoms provided."),
            Field::string("potentialCauses")
                .describe("Potential causes for the symptoms provided."),
        ])
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
