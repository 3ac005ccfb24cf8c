use medkit_core::schema::{Field, Schema};

use crate::Tool;

pub struct QuizExplanation;

const TEMPLATE: &str = r#"You are an expert medical tutor AI. Your task is to provide a clear and educational explanation for a quiz question.

Question: "{{{question}}}"
Correct Answer: "{{{correctAnswer}}}"
The user selected: "{{{selectedAnswer}}}"

Please provide a detailed explanation. If the user was correct, reinforce the concept. If the user was incorrect, gently explain why their answer was wrong and why the correct answer is right. Keep the tone encouraging and educational."#;

impl Tool for QuizExplanation {
    fn id(&self) -> &str {
        "quiz-explanation"
    }

    fn name(&self) -> &str {
        "Quiz Explanation"
    }

    fn description(&self) -> &str {
        "Explains the answer to a quiz question, given what the user picked."
    }

    fn input_schema(&self) -> Schema {
        Schema::new(vec![
            Field::string("question").describe("The quiz question."),
            Field::string("correctAnswer").describe("The correct answer to the question."),
            Field::string("selectedAnswer").describe("The answer the user selected."),
        ])
    }

    fn output_schema(&self) -> Schema {
        Schema::new(vec![Field::string("explanation").describe(
            "A detailed explanation of why the correct answer is right and why the other options (if applicable) are wrong.",
        )])
    }

    fn template(&self) -> &str {
        TEMPLATE
    }
}
