pub mod ai_diagnosis_assistant;
pub mod antibiotic_guide;
pub mod case_simulation;
pub mod case_summary;
pub mod contraindication_finder;
pub mod ct_scan_analyzer;
pub mod ddx_generator;
pub mod disease_summary;
pub mod drug_interaction_checker;
pub mod lab_interpretation_assistant;
pub mod lab_report_analyzer;
pub mod mnemonic_generator;
pub mod mri_brain_atlas;
pub mod pill_identifier;
pub mod pregnancy_safety;
pub mod quiz_explanation;
pub mod report_explainer;
pub mod skin_lesion_classifier;
pub mod soap_note_generator;
pub mod ultrasound_interpreter;
pub mod urine_analyzer;
pub mod x_ray_interpreter;

use medkit_core::schema::{Field, FieldKind, Schema};

/// Findings / impression / differentials, shared by the radiology readers.
pub(crate) fn imaging_report_output(modality: &str) -> Schema {
    Schema::new(vec![
        Field::string("findings")
            .describe(&format!("A systematic description of the findings in the {modality}.")),
        Field::string("impression")
            .describe("The primary impression or conclusion from the findings."),
        Field::array("differentialDiagnoses", FieldKind::String)
            .describe("A list of possible differential diagnoses."),
    ])
}

/// A required image plus optional free-text clinical context.
pub(crate) fn imaging_input(image: &str, context_example: &str) -> Schema {
    Schema::new(vec![
        Field::media("photoDataUri").describe(&format!(
            "{image}, as a data URI that must include a MIME type and use Base64 encoding. \
             Expected format: 'data:<mimetype>;base64,<encoded_data>'."
        )),
        Field::string("clinicalContext").optional().describe(&format!(
            "Brief clinical history or question (e.g., \"{context_example}\")."
        )),
    ])
}
