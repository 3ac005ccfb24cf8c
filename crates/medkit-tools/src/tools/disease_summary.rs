use medkit_core::schema::{Field, Schema};

use crate::Tool;

pub struct DiseaseSummary;

const TEMPLATE: &str = r#"You are an expert medical knowledge AI. Your task is to generate a structured, high-yield summary for a specific medical disease, suitable for a medical student.

The user has requested a summary for: {{{disease}}}

Please provide a summary including the following sections:
1. Overview
2. Pathophysiology
3. Signs and Symptoms
4. Diagnosis
5. Treatment

Ensure the information is accurate, concise, and up-to-date."#;

impl Tool for DiseaseSummary {
    fn id(&self) -> &str {
        "disease-summary"
    }

    fn name(&self) -> &str {
        "Disease Summary Builder"
    }

    fn description(&self) -> &str {
        "High-yield structured summary of a disease for study."
    }

    fn input_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("disease")
                .min_length(3)
                .describe("The name of the medical disease."),
        ])
    }

    fn output_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("diseaseName").describe("The name of the disease."),
            Field::string("overview").describe("A brief overview of the disease."),
            Field::string("pathophysiology").describe("The pathophysiology of the disease."),
            Field::string("signsAndSymptoms").describe("Common signs and symptoms."),
            Field::string("diagnosis").describe("How the disease is typically diagnosed."),
            Field::string("treatment").describe("Standard treatment approaches."),
        ])
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
