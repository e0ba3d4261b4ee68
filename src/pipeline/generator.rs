use super::analyzer::AnalysisResult;
use super::prompt::build_feedback_request;
use super::PipelineError;
use crate::llm::{LLMClient, LLMResponse};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Turns lint output and a source file into narrative feedback via an LLM
pub struct FeedbackGenerator {
    client: Arc<dyn LLMClient>,
}

impl FeedbackGenerator {
    pub fn new(client: Arc<dyn LLMClient>) -> Self {
        Self { client }
    }

    pub fn backend_name(&self) -> &str {
        self.client.name()
    }

    pub fn backend_model_info(&self) -> Option<String> {
        self.client.model_info()
    }

    /// Reads `source`, sends one chat request and returns the model's response
    pub async fn generate(
        &self,
        analysis: &AnalysisResult,
        source: &Path,
        assignment_description: &str,
        feedback_instructions: &str,
    ) -> Result<LLMResponse, PipelineError> {
        let code = tokio::fs::read_to_string(source)
            .await
            .map_err(|e| PipelineError::ReadSource {
                path: source.to_path_buf(),
                source: e,
            })?;

        let request = build_feedback_request(
            feedback_instructions,
            assignment_description,
            &code,
            &analysis.output,
        );

        debug!(
            "Requesting feedback for {} from {}",
            source.display(),
            self.client.name()
        );
        let response = self.client.chat(request).await?;

        Ok(response)
    }
}

impl std::fmt::Debug for FeedbackGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackGenerator")
            .field("backend", &self.client.name())
            .finish()
    }
}
