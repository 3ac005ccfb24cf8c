use medkit_core::schema::Schema;

use crate::Tool;

use super::{imaging_input, imaging_report_output};

/// Preliminary chest and skeletal X-ray reading.
pub struct XRayInterpreter;

const TEMPLATE: &str = r#"You are an expert radiologist AI assistant. Your task is to provide a preliminary interpretation of an X-ray image.

Analyze the provided X-ray image: {{media url=photoDataUri}}
Clinical Context: {{{clinicalContext}}}

Provide a structured report with the following sections:
1. **Findings:** Systematically describe what you see (e.g., lungs, heart, bones, soft tissues). Be descriptive and objective.
2. **Impression:** Synthesize the findings into a primary conclusion.
3. **Differential Diagnoses:** List potential conditions that could explain the findings.

Disclaimer: This is an AI-generated interpretation for educational and informational purposes only. It is NOT a substitute for a diagnosis by a qualified radiologist and treating physician. Clinical correlation is required. DO NOT express high certainty. Always advise review by a human expert."#;

impl Tool for XRayInterpreter {
    fn id(&self) -> &str {
        "x-ray-interpreter"
    }

    fn name(&self) -> &str {
        "X-Ray Interpreter"
    }

    fn description(&self) -> &str {
        "Preliminary structured read of an X-ray image."
    }

    fn input_schema(&self) -> Schema {
        imaging_input("An X-ray image", "70M with cough and fever")
    }

    fn output_schema(&self) -> Schema {
        imaging_report_output("X-ray")
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
