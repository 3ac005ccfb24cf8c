use medkit_core::schema::{Field, Schema};

use crate::Tool;

/// Pregnancy category plus pregnancy and lactation safety summaries.
pub struct PregnancySafety;

const TEMPLATE: &str = r#"You are an expert clinical pharmacologist AI specializing in perinatal and lactation pharmacology. Your task is to provide a safety profile for a given drug.

The user has provided the following drug: {{{drugName}}}

Please provide the following information based on established guidelines (e.g., FDA pregnancy categories, recent studies):
1. **Pregnancy Category:** The FDA letter category (A, B, C, D, X). If not applicable or information is unavailable, use 'N/A'.
2. **Pregnancy Summary:** A concise summary of risks, teratogenic effects, and clinical considerations during pregnancy.
3. **Lactation Summary:** A concise summary regarding the drug's excretion into breast milk, potential effects on the nursing infant, and clinical recommendations.

Disclaimer: This information is for educational purposes only and is not a substitute for professional medical advice, diagnosis, or treatment. Always seek the advice of your physician or other qualified health provider with any questions you may have regarding a medical condition."#;

impl Tool for PregnancySafety {
    fn id(&self) -> &str {
        "pregnancy-safety"
    }

    fn name(&self) -> &str {
        "Pregnancy & Lactation Safety Checker"
    }

    fn description(&self) -> &str {
        "FDA pregnancy category with pregnancy and lactation safety notes for a drug."
    }

    fn input_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("drugName")
                .min_length(2)
                .describe("The name of the drug to check."),
        ])
    }

    fn output_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("drugName").describe("The name of the drug that was checked."),
            Field::enumeration("pregnancyCategory", &["A", "B", "C", "D", "X", "N/A"]).describe(
                "The FDA Pregnancy Category (A, B, C, D, X) or N/A if not applicable.",
            ),
            Field::string("pregnancySummary").describe(
                "A summary of the drug's safety profile during pregnancy, including known risks and clinical considerations.",
            ),
            Field::string("lactationSummary").describe(
                "A summary of the drug's safety profile during lactation, including excretion in breast milk and potential effects on the infant.",
            ),
        ])
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
