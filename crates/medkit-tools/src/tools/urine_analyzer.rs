use medkit_core::schema::{Field, Schema};

use crate::Tool;

pub struct UrineAnalyzer;

const TEMPLATE: &str = r#"You are an expert clinical pathologist AI. Your task is to analyze the following urinalysis report.

For each parameter (e.g., color, clarity, pH, specific gravity, protein, glucose, ketones, blood, leukocytes, nitrites), provide the result, a finding (Normal, Abnormal, or Trace), and a brief interpretation.

Then, provide an overall summary of the findings and potential clinical implications.

Urinalysis Report Text:
---
{{{reportText}}}
---

Disclaimer: This is for educational purposes for healthcare professionals. All results must be correlated with clinical findings and patient history. This is not a substitute for clinical judgment."#;

impl Tool for UrineAnalyzer {
    fn id(&self) -> &str {
        "urine-analyzer"
    }

    fn name(&self) -> &str {
        "Urine Analyzer"
    }

    fn description(&self) -> &str {
        "Parameter-by-parameter interpretation of a urinalysis report."
    }

    fn input_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("reportText")
                .min_length(20)
                .describe("The full text of the urinalysis report."),
        ])
    }

    fn output_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("summary").describe("An overall summary of the urinalysis findings."),
            Field::object_array(
                "interpretation",
                vec![
                    Field::string("parameter")
                        .describe("The lab parameter (e.g., \"Color\", \"Protein\")."),
                    Field::string("value")
                        .describe("The reported value (e.g., \"Yellow\", \"Negative\")."),
                    Field::enumeration("finding", &["Normal", "Abnormal", "Trace"])
                        .describe("The finding for this parameter."),
                    Field::string("comment")
                        .describe("A brief interpretation for this specific parameter."),
                ],
            )
            .describe("A detailed breakdown of each parameter in the report."),
            Field::string("potentialImplications")
                .describe("Potential clinical implications based on the findings."),
        ])
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
