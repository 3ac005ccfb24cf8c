use medkit_core::schema::{Field, Schema};

use crate::Tool;

/// Contraindications for a drug, optionally focused on one condition.
///
/// The condition block is dropped entirely when no condition is given.
pub struct ContraindicationFinder;

const TEMPLATE: &str = r#"You are an expert clinical pharmacologist AI. Your task is to identify and explain contraindications for a given medication.

Drug: {{{drugName}}}
{{#if condition}}
Specific condition to consider: {{{condition}}}
{{/if}}

Based on established clinical guidelines, please provide a list of contraindications for this drug. For each contraindication, specify its severity ('Absolute', 'Relative', 'Warning') and provide a brief explanation.{{#if condition}} Prioritize any contraindications related to the specific condition.{{/if}}

Disclaimer: This information is for educational purposes only and is not a substitute for professional medical advice. Always consult with a healthcare provider and refer to official drug monographs."#;

impl Tool for ContraindicationFinder {
    fn id(&self) -> &str {
        "contraindication-finder"
    }

    fn name(&self) -> &str {
        "Contraindication Finder"
    }

    fn description(&self) -> &str {
        "Lists contraindications for a drug with severity grading."
    }

    fn input_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("drugName")
                .min_length(2)
                .describe("The name of the drug to check."),
            Field::string("condition")
                .optional()
                .describe("An optional medical condition to check against the drug."),
        ])
    }

    fn output_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("drugName").describe("The name of the drug that was checked."),
            Field::object_array(
                "contraindications",
                vec![
                    Field::string("contraindication").describe("The specific contraindication."),
                    Field::string("explanation")
                        .describe("A brief explanation of why it is contraindicated."),
                    Field::enumeration("severity", &["Absolute", "Relative", "Warning"])
                        .describe("The severity of the contraindication."),
                ],
            )
            .describe("A list of found contraindications."),
        ])
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
