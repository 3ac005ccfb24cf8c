use medkit_core::schema::{Field, FieldKind, Schema};

use crate::Tool;

/// Plain-language rewrite of a medical report for patients.
pub struct ReportExplainer;

const TEMPLATE: &str = r#"You are an expert medical communicator AI. Your task is to translate a complex medical report into simple, easy-to-understand language for a patient with no medical background. Avoid jargon and use analogies where helpful.

Medical Report Text:
---
{{{reportText}}}
---

Please provide:
1. **Main Summary:** A brief, high-level summary of what the report says.
2. **Key Findings:** A bulleted list of the most important findings and what they mean in simple terms.
3. **Glossary:** A list of any complex medical terms from the report with a very simple explanation for each.

Disclaimer: This is for educational purposes only and is not a substitute for discussion with your healthcare provider, who can provide context based on your full medical history."#;

impl Tool for ReportExplainer {
    fn id(&self) -> &str {
        "report-explainer"
    }

    fn name(&self) -> &str {
        "Medical Report Explainer"
    }

    fn description(&self) -> &str {
        "Explains a medical report in simple terms with a glossary."
    }

    fn input_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("reportText")
                .min_length(50)
                .describe("The full text of the medical report."),
        ])
    }

    fn output_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("mainSummary").describe(
                "A high-level summary of the report in simple, easy-to-understand language.",
            ),
            Field::array("keyFindings", FieldKind::String).describe(
                "A list of the most important findings from the report, explained simply.",
            ),
            Field::object_array(
                "glossary",
                vec![
                    Field::string("term").describe("The medical term."),
                    Field::string("explanation")
                        .describe("The explanation of the term in simple language."),
                ],
            )
            .describe("A glossary of complex medical terms found in the report."),
        ])
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
