use medkit_core::schema::{Field, FieldKind, Schema};

use crate::Tool;

pub struct LabReportAnalyzer;

const TEMPLATE: &str = r#"You are an expert clinical pathologist AI with a specialization in identifying complex patterns in lab data.

Your task is to analyze the following comprehensive lab report. Look for interconnections between different results, identify trends or constellations of findings, and provide a high-level analysis.

Lab Report Text:
---
{{{reportText}}}
---

Please provide:
1. An overall assessment summarizing the key patterns.
2. A bulleted list of the most significant individual findings.
3. A summary of potential clinical implications and possible next steps (e.g., "Consider checking XYZ," "Findings are consistent with...").

Disclaimer: This is for educational purposes for healthcare professionals. All results must be correlated with clinical findings and patient history. This is not a substitute for clinical judgment."#;

impl Tool for LabReportAnalyzer {
    fn id(&self) -> &str {
        "lab-report-analyzer"
    }

    fn name(&self) -> &str {
        "Lab Report Analyzer"
    }

    fn description(&self) -> &str {
        "Finds patterns across a full lab report and suggests next steps."
    }

    fn input_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("reportText")
                .min_length(50)
                .describe("The full text of the lab report."),
        ])
    }

    fn output_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("overallAssessment").describe(
                "An overall assessment of the lab report, highlighting key patterns and abnormalities.",
            ),
            Field::array("significantFindings", FieldKind::String)
                .describe("A list of the most significant findings or abnormalities."),
            Field::string("potentialImplications").describe(
                "Potential clinical implications or suggestions for next steps based on the identified patterns.",
            ),
        ])
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
