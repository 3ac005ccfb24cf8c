use medkit_core::schema::{Field, Schema};

use crate::Tool;

/// Identifies a pill from a photo and whatever markings the user adds.
pub struct PillIdentifier;

const TEMPLATE: &str = r#"You are an expert pharmacist AI. Your task is to identify a pill based on the provided image and information.

Analyze the image and the following details to identify the medication.

- Imprint: {{{imprint}}}
- Color: {{{color}}}
- Shape: {{{shape}}}
- Photo: {{media url=photoDataUri}}

Provide the medication name, its strength, common uses, and any important warnings. If you cannot identify the pill with high confidence, state that clearly and advise consulting a pharmacist or doctor. DO NOT GUESS.

Disclaimer: Always confirm with a licensed healthcare professional before taking any medication."#;

impl Tool for PillIdentifier {
    fn id(&self) -> &str {
        "pill-identifier"
    }

    fn name(&self) -> &str {
        "Pill Identifier"
    }

    fn description(&self) -> &str {
        "Identifies a medication from a pill photo, imprint, color, and shape."
    }

    fn input_schema(&self) -> Schema {
        Schema::new(vec![
            Field::media("photoDataUri").describe(
                "A photo of the pill, as a data URI that must include a MIME type and use Base64 encoding. \
                 Expected format: 'data:<mimetype>;base64,<encoded_data>'.",
            ),
            Field::string("imprint")
                .optional()
                .describe("Any text or markings on the pill."),
            Field::string("color").optional().describe("The color of the pill."),
            Field::string("shape").optional().describe("The shape of the pill."),
        ])
    }

    fn output_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("medicationName").describe("The name of the medication."),
            Field::string("strength")
                .describe("The strength of the medication (e.g., 500mg)."),
            Field::string("commonUses").describe("Common uses for the medication."),
            Field::string("importantWarnings").describe("Important warnings or side effects."),
        ])
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
