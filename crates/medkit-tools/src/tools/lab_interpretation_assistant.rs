use medkit_core::schema::{Field, FieldKind, Schema};

use crate::Tool;

/// Per-parameter reading of a CBC, LFT, or KFT panel.
pub struct LabInterpretationAssistant;

const TEMPLATE: &str = r#"You are an expert hematologist and clinical pathologist AI. Your task is to interpret a set of lab results.

The user has provided the following results for a {{labType}} panel:
{{{results}}}

Please analyze these results. For each parameter, provide the finding (Normal, High, Low, or Critical) and a brief comment.
Provide a summary of the overall picture and a list of potential differential diagnoses if abnormalities are present.

Disclaimer: This is for educational purposes for healthcare professionals. All results must be correlated with clinical findings. This is not a substitute for clinical judgment."#;

impl Tool for LabInterpretationAssistant {
    fn id(&self) -> &str {
        "lab-interpretation-assistant"
    }

    fn name(&self) -> &str {
        "Lab Interpretation Assistant"
    }

    fn description(&self) -> &str {
        "Interprets each parameter of a lab panel and suggests differentials."
    }

    fn input_schema(&self) -> Schema {
        Schema::new(vec![
            Field::enumeration("labType", &["CBC", "LFT", "KFT"]).describe("The lab panel."),
            Field::string("results").min_length(5).describe(
                "The lab results as a string of key-value pairs (e.g., \"WBC: 12.5, HGB: 10.2, PLT: 150\").",
            ),
        ])
    }

    fn output_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("summary").describe("A high-level summary of the findings."),
            Field::object_array(
                "interpretation",
                vec![
                    Field::string("parameter").describe("The lab parameter (e.g., \"WBC\")."),
                    Field::string("value").describe("The reported value."),
                    Field::enumeration("finding", &["Normal", "High", "Low", "Critical"])
                        .describe("The finding for this parameter."),
                    Field::string("comment")
                        .describe("A comment or interpretation for this specific parameter."),
                ],
            )
            .describe("A detailed breakdown of each parameter."),
            Field::array("differentials", FieldKind::String)
                .optional()
                .describe("A list of potential differential diagnoses based on the results."),
        ])
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
