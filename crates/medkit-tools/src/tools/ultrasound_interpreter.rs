use medkit_core::schema::Schema;

use crate::Tool;

use super::{imaging_input, imaging_report_output};

pub struct UltrasoundInterpreter;

const TEMPLATE: &str = r#"You are an expert radiologist AI assistant specializing in ultrasonography. Your task is to provide a preliminary interpretation of an ultrasound image.

Analyze the provided ultrasound image: {{media url=photoDataUri}}
Clinical Context: {{{clinicalContext}}}

Provide a structured report with the following sections:
1. **Findings:** Systematically describe what you see (e.g., organ echotexture, size, presence of fluid, masses, vascular flow if Doppler is implied). Be descriptive and objective.
2. **Impression:** Synthesize the findings into a primary conclusion.
3. **Differential Diagnoses:** List potential conditions that could explain the findings.

Disclaimer: This is an AI-generated interpretation for educational and informational purposes only. It is NOT a substitute for a diagnosis by a qualified radiologist and treating physician. Clinical correlation is required. DO NOT express high certainty. Always advise review by a human expert."#;

impl Tool for UltrasoundInterpreter {
    fn id(&self) -> &str {
        "ultrasound-interpreter"
    }

    fn name(&self) -> &str {
        "Ultrasound Interpreter"
    }

    fn description(&self) -> &str {
        "Preliminary structured read of an ultrasound image."
    }

    fn input_schema(&self) -> Schema {
        imaging_input("An ultrasound image", "34F with right upper quadrant pain.")
    }

    fn output_schema(&self) -> Schema {
        imaging_report_output("ultrasound image")
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
