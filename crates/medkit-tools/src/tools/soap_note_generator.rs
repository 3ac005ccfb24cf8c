use medkit_core::schema::{Field, Schema};

use crate::Tool;

pub struct SoapNoteGenerator;

const TEMPLATE: &str = r#"You are an expert medical AI assistant for generating SOAP notes. Given the Subjective and Objective information, generate the Assessment and Plan.

Subjective:
---
{{{subjective}}}
---

Objective:
---
{{{objective}}}
---

Generate a concise Assessment and a detailed, structured Plan."#;

impl Tool for SoapNoteGenerator {
    fn id(&self) -> &str {
        "soap-note-generator"
    }

    fn name(&self) -> &str {
        "SOAP Note Generator"
    }

    fn description(&self) -> &str {
        "Drafts the Assessment and Plan from Subjective and Objective notes."
    }

    fn input_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("subjective")
                .min_length(10)
                .describe("Subjective information from the patient."),
            Field::string("objective")
                .min_length(10)
                .describe("Objective findings (vitals, exam, lab results)."),
        ])
    }

    fn output_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("assessment")
                .describe("A concise assessment of the patient's condition."),
            Field::string("plan").describe("A structured plan for the patient."),
        ])
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
