use medkit_core::schema::{Field, FieldKind, Schema};

use crate::Tool;

/// First- and second-line antibiotic guidance for a named condition.
pub struct AntibioticGuide;

const TEMPLATE: &str = r#"You are an expert infectious disease pharmacist AI. Your task is to provide antibiotic treatment guidance for a specific medical condition.

The user has specified the following condition: {{{condition}}}

Based on current clinical guidelines, provide:
1. A brief summary of the condition.
2. First-line antibiotic recommendations.
3. Second-line antibiotic recommendations.
4. General dosing and duration information.
5. Important considerations (e.g., local resistance patterns, common side effects, key patient factors).

Disclaimer: This information is for educational purposes for medical professionals and is not a substitute for clinical judgment or local guidelines. Treatment decisions should be individualized."#;

impl Tool for AntibioticGuide {
    fn id(&self) -> &str {
        "antibiotic-guide"
    }

    fn name(&self) -> &str {
        "Antibiotic Guide"
    }

    fn description(&self) -> &str {
        "Guideline-based antibiotic choices, dosing, and considerations for a condition."
    }

    fn input_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("condition")
                .min_length(3)
                .describe("The medical condition requiring antibiotic treatment."),
        ])
    }

    fn output_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("conditionSummary").describe("A brief summary of the medical condition."),
            Field::array("firstLineAntibiotics", FieldKind::String)
                .describe("First-line antibiotic choices."),
            Field::array("secondLineAntibiotics", FieldKind::String)
                .describe("Second-line antibiotic choices for cases like resistance or allergies."),
            Field::string("dosingAndDuration").describe(
                "General guidance on dosing and duration for the recommended antibiotics.",
            ),
            Field::string("importantConsiderations").describe(
                "Important considerations, such as potential side effects, resistance patterns, or patient-specific factors.",
            ),
        ])
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
