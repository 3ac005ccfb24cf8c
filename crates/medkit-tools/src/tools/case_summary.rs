use medkit_core::schema::{Field, Schema};

use crate::Tool;

pub struct CaseSummary;

const TEMPLATE: &str = r#"You are an expert medical AI assistant. Your task is to take unstructured clinical notes and generate a clear, concise, and structured case summary. Use a standard format like SOAP (Subjective, Objective, Assessment, Plan) or a similar logical structure.

Clinical Notes:
---
{{{notes}}}
---

Generate a structured case summary based on the notes provided."#;

impl Tool for CaseSummary {
    fn id(&self) -> &str {
        "case-summary"
    }

    fn name(&self) -> &str {
        "Case Summary Generator"
    }

    fn description(&self) -> &str {
        "Turns unstructured clinical notes into a structured case summary."
    }

    fn input_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("notes")
                .min_length(50)
                .describe("The raw clinical notes or patient information."),
        ])
    }

    fn output_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("summary")
                .describe("A structured case summary in a standard format (e.g., SOAP or similar)."),
        ])
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
