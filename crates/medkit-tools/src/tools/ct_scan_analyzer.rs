use medkit_core::schema::Schema;

use crate::Tool;

use super::{imaging_input, imaging_report_output};

pub struct CtScanAnalyzer;

const TEMPLATE: &str = r#"You are an expert radiologist AI assistant specializing in computed tomography (CT). Your task is to provide a preliminary interpretation of a CT scan image.

Analyze the provided CT scan image: {{media url=photoDataUri}}
{{#if clinicalContext}}
Clinical Context: {{{clinicalContext}}}
{{/if}}

Provide a structured report with the following sections:
1. **Findings:** Systematically describe what you see (e.g., abnormalities in density, masses, hemorrhages, fractures). Be descriptive and objective.
2. **Impression:** Synthesize the findings into a primary conclusion.
3. **Differential Diagnoses:** List potential conditions that could explain the findings.

Disclaimer: This is an AI-generated interpretation for educational and informational purposes only. It is NOT a substitute for a diagnosis by a qualified radiologist and treating physician. Clinical correlation is required. DO NOT express high certainty. Always advise review by a human expert."#;

impl Tool for CtScanAnalyzer {
    fn id(&self) -> &str {
        "ct-scan-analyzer"
    }

    fn name(&self) -> &str {
        "CT Scan Analyzer"
    }

    fn description(&self) -> &str {
        "Preliminary structured read of a CT image."
    }

    fn input_schema(&self) -> Schema {
        imaging_input("A CT scan image", "55M with sudden onset severe headache.")
    }

    fn output_schema(&self) -> Schema {
        imaging_report_output("CT scan")
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
