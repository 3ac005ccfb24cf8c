use medkit_core::schema::{Field, Schema};

use crate::Tool;

/// Prioritized differential diagnosis list, most likely first.
pub struct DdxGenerator;

const TEMPLATE: &str = r#"You are an expert diagnostician AI. Your task is to generate a list of differential diagnoses based on a set of clinical findings.

Clinical Findings:
---
{{{findings}}}
---

Based on the findings, generate a prioritized list of differential diagnoses. For each diagnosis, provide a brief reasoning connecting it to the provided data. Present the most likely diagnosis first.

Disclaimer: This is for educational purposes for healthcare professionals. This is not a substitute for clinical judgment and patient evaluation."#;

impl Tool for DdxGenerator {
    fn id(&self) -> &str {
        "ddx-generator"
    }

    fn name(&self) -> &str {
        "DDx Generator"
    }

    fn description(&self) -> &str {
        "Ranked differential diagnoses with reasoning from clinical findings."
    }

    fn input_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("findings")
                .min_length(20)
                .describe("The clinical findings including symptoms, signs, history, and initial lab results."),
        ])
    }

    fn output_schema(&self) -> Schema {
        Schema::new(vec![
            Field::object_array(
                "differentials",
                vec![
                    Field::string("condition").describe("The name of the potential condition."),
                    Field::string("reasoning").describe(
                        "The reasoning for including this condition in the differential diagnosis, based on the provided findings.",
                    ),
                ],
            )
            .describe("A list of potential differential diagnoses, ordered from most likely to least likely."),
        ])
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
