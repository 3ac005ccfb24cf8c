use medkit_core::schema::{Field, Schema};

use crate::Tool;

pub struct MnemonicGenerator;

const TEMPLATE: &str = r#"You are an expert medical educator AI, specialized in creating clever and memorable mnemonics to help students learn complex topics.

The user wants a mnemonic for the following topic: {{{topic}}}

Please generate 2-3 distinct and creative mnemonics for this topic. Each mnemonic should be easy to remember and accurately represent the medical information. For each one, provide the mnemonic itself and a clear explanation of what each part stands for."#;

impl Tool for MnemonicGenerator {
    fn id(&self) -> &str {
        "mnemonic-generator"
    }

    fn name(&self) -> &str {
        "Mnemonic Generator"
    }

    fn description(&self) -> &str {
        "Creates memorable mnemonics for a medical topic."
    }

    fn input_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("topic")
                .min_length(10)
                .describe("The medical topic or list of items to create a mnemonic for."),
        ])
    }

    fn output_schema(&self) -> Schema {
        Schema::new(vec![
            Field::object_array(
                "mnemonics",
                vec![
                    Field::string("mnemonic").describe("The generated mnemonic phrase or acronym."),
                    Field::string("explanation")
                        .describe("An explanation of what each part of the mnemonic stands for."),
                ],
            )
            .describe("A list of creative and memorable mnemonics."),
        ])
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
