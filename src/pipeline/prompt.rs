//! Prompt assembly for feedback requests

use crate::llm::{ChatMessage, LLMRequest};

const CLOSING_DIRECTIVE: &str = "Please provide feedback on the student's code.";

/// Builds the two-message request for one source file
///
/// The system message is the feedback instruction text, unmodified. The user
/// message holds the assignment description, the code and the lint output,
/// in that order, followed by the closing directive.
pub fn build_feedback_request(
    feedback_instructions: &str,
    assignment_description: &str,
    code: &str,
    lint_output: &str,
) -> LLMRequest {
    LLMRequest::new(vec![
        ChatMessage::system(feedback_instructions),
        ChatMessage::user(user_prompt(assignment_description, code, lint_output)),
    ])
}

fn user_prompt(assignment_description: &str, code: &str, lint_output: &str) -> String {
    format!(
        "## Assignment description\n\
         {assignment_description}\n\
         \n\
         ## Student's code\n\
         {code}\n\
         \n\
         ## Lint results\n\
         {lint_output}\n\
         \n\
         {closing}\n",
        closing = CLOSING_DIRECTIVE
    )
}
