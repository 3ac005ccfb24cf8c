use medkit_core::schema::{Field, FieldKind, Schema};

use crate::Tool;

/// Clinical vignette with a multiple-choice question, for teaching.
pub struct CaseSimulation;

const TEMPLATE: &str = r#"You are an expert medical educator AI. Your task is to create a challenging clinical case simulation for a medical student.

The user wants a case about: {{{topic}}}

Please generate:
1. A realistic and detailed clinical scenario.
2. A challenging multiple-choice question about the next best step in management or diagnosis.
3. Four or five plausible options.
4. The correct answer.
5. A comprehensive explanation of why the correct answer is right and why the distractors are wrong."#;

impl Tool for CaseSimulation {
    fn id(&self) -> &str {
        "case-simulation"
    }

    fn name(&self) -> &str {
        "Case Simulation"
    }

    fn description(&self) -> &str {
        "Generates a clinical scenario with a multiple-choice question and explanation."
    }

    fn input_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("topic")
                .min_length(3)
                .describe("The medical topic for the case simulation (e.g., \"Acute MI\", \"Diabetic Ketoacidosis\")."),
        ])
    }

    fn output_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("scenario").describe("A detailed clinical scenario presenting a patient case."),
            Field::string("question").describe("A multiple-choice question based on the scenario."),
            Field::array("options", FieldKind::String)
                .min_length(2)
                .describe("A list of 4-5 multiple-choice options."),
            Field::string("correctAnswer").describe("The correct answer from the options."),
            Field::string("explanation").describe(
                "A detailed explanation of why the correct answer is right and the others are wrong.",
            ),
        ])
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
