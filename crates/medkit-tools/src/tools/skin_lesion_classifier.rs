use medkit_core::schema::{Field, Schema};

use crate::Tool;

/// ABCDE-style screen of a skin lesion photo with a bounded confidence.
pub struct SkinLesionClassifier;

const TEMPLATE: &str = r#"You are a specialized AI assistant for dermatology. Your task is to analyze an image of a skin lesion and provide a preliminary assessment.

Analyze the provided photo of the skin lesion: {{media url=photoDataUri}}

Based on visual characteristics (e.g., asymmetry, border, color, diameter, evolution - ABCDEs), provide:
1. A general assessment of the lesion.
2. A boolean flag indicating if it has any suspicious characteristics.
3. A confidence score for your assessment.
4. A clear recommendation for the user (e.g., "Monitor the lesion," "Consult a dermatologist for a professional evaluation").

Disclaimer: You are an AI assistant, not a medical professional. This is not a diagnosis. A definitive diagnosis can only be made by a qualified healthcare provider through a physical examination and, if necessary, a biopsy. Your analysis is for informational purposes only. Do not express high certainty. Always strongly recommend consulting a dermatologist."#;

impl Tool for SkinLesionClassifier {
    fn id(&self) -> &str {
        "skin-lesion-classifier"
    }

    fn name(&self) -> &str {
        "Skin Lesion Classifier"
    }

    fn description(&self) -> &str {
        "Preliminary assessment of a skin lesion photo."
    }

    fn input_schema(&self) -> Schema {
        Schema::new(vec![Field::media("photoDataUri").describe(
            "A photo of the skin lesion, as a data URI that must include a MIME type and use Base64 encoding. \
             Expected format: 'data:<mimetype>;base64,<encoded_data>'.",
        )])
    }

    fn output_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("assessment").describe("The AI's assessment of the lesion."),
            Field::boolean("isSuspicious")
                .describe("Whether the lesion shows suspicious characteristics."),
            Field::string("recommendation").describe("Recommended next steps for the user."),
            Field::number("confidenceScore")
                .min(0.0)
                .max(1.0)
                .describe("The model's confidence in its assessment (0 to 1)."),
        ])
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
