use medkit_core::schema::{Field, FieldKind, Schema};

use crate::Tool;

/// Pairwise interaction screen over a list of two or more drugs.
pub struct DrugInteractionChecker;

const TEMPLATE: &str = r#"You are an expert clinical pharmacologist AI. Your task is to check for potential interactions between a list of drugs.

The user has provided the following list of drugs:
{{#each drugs}}
- {{{this}}}
{{/each}}

Please analyze this list for any potential drug-drug interactions. For each interaction you find, describe it and classify its severity as 'Mild', 'Moderate', or 'Severe'.

Provide a clear summary of your findings.

Disclaimer: This information is for educational purposes only and is not a substitute for professional medical advice. Always consult with a healthcare provider."#;

impl Tool for DrugInteractionChecker {
    fn id(&self) -> &str {
        "drug-interaction-checker"
    }

    fn name(&self) -> &str {
        "Drug Interaction Checker"
    }

    fn description(&self) -> &str {
        "Checks a list of drugs for interactions and grades their severity."
    }

    fn input_schema(&self) -> Schema {
        Schema::new(vec![
            Field::array("drugs", FieldKind::String)
                .min_length(2)
                .describe("At least two drugs to check for interactions."),
        ])
    }

    fn output_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("interactionSummary")
                .describe("A summary of the potential interactions found."),
            Field::object_array(
                "interactions",
                vec![
                    Field::string("drugA"),
                    Field::string("drugB"),
                    Field::enumeration("severity", &["Mild", "Moderate", "Severe"]),
                    Field::string("description"),
                ],
            )
            .describe("A list of specific interactions."),
        ])
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
