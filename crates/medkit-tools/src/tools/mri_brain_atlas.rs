use medkit_core::schema::{Field, Schema};

use crate::Tool;

/// Anatomical labelling of a brain MRI slice. Never diagnoses.
pub struct MriBrainAtlas;

const TEMPLATE: &str = r#"You are an expert neuroanatomist AI. Your task is to act as an interactive atlas for a brain MRI.

Analyze the provided brain MRI image: {{media url=photoDataUri}}

Identify the key anatomical structures visible in this specific slice (e.g., frontal lobe, cerebellum, ventricles, corpus callosum). For each structure you identify, provide a brief description of its primary function.

Provide a summary of the overall view (e.g., "This appears to be a sagittal view showing..."). Do not attempt to diagnose any pathology.

Disclaimer: This is an AI-generated atlas for educational and informational purposes only. It is NOT a substitute for a diagnosis by a qualified radiologist."#;

impl Tool for MriBrainAtlas {
    fn id(&self) -> &str {
        "mri-brain-atlas"
    }

    fn name(&self) -> &str {
        "MRI Brain Atlas"
    }

    fn description(&self) -> &str {
        "Identifies anatomical structures in a brain MRI image."
    }

    fn input_schema(&self) -> Schema {
        Schema::new(vec![Field::media("photoDataUri").describe(
            "An MRI image of a brain, as a data URI that must include a MIME type and use Base64 encoding. \
             Expected format: 'data:<mimetype>;base64,<encoded_data>'.",
        )])
    }

    fn output_schema(&self) -> Schema {
        Schema::new(vec![
            Field::object_array(
                "identifiedStructures",
                vec![
                    Field::string("structure")
                        .describe("The name of the identified anatomical structure."),
                    Field::string("description").describe(
                        "A brief description of the structure's function and significance.",
                    ),
                ],
            )
            .describe("A list of anatomical structures identified in the MRI image."),
            Field::string("summary")
                .describe("A high-level summary of the visible brain areas and their state."),
        ])
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
