//! lintscribe - batch feedback for student code submissions
//!
//! For every Python file in a submission directory, lintscribe runs a linter,
//! sends the lint output together with the assignment description and the
//! code to a language model, and stores the model's feedback as
//! `<file>_feedback.txt` in an output directory.
//!
//! # Example Usage
//!
//! ```no_run
//! use lintscribe::{CommandAnalyzer, ConfigPaths, FeedbackConfig, FeedbackPipeline, GenAIClient};
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FeedbackConfig::load(&ConfigPaths {
//!     code_dir: Some(PathBuf::from("submissions")),
//!     ..Default::default()
//! })?;
//!
//! let pipeline = FeedbackPipeline::new(
//!     config,
//!     Arc::new(CommandAnalyzer::new("pylint")),
//!     Arc::new(GenAIClient::new(std::env::var("OPENAI_API_KEY").ok(), None)),
//! );
//! let summary = pipeline.run().await?;
//! println!("{} report(s) written", summary.reports.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`pipeline`]: discovery, linting, prompt assembly, generation, reports
//! - [`llm`]: LLM client trait, GenAI client and mock
//! - [`config`]: pre-flight validation and environment settings
//! - [`progress`]: progress events, logging and spinner handlers
//! - [`cli`]: command-line arguments and handlers

pub mod cli;
pub mod config;
pub mod llm;
pub mod pipeline;
pub mod progress;
pub mod util;

pub use config::{ConfigError, ConfigPaths, FeedbackConfig, RuntimeSettings};
pub use llm::{BackendError, GenAIClient, LLMClient, MockLLMClient, MockResponse};
pub use pipeline::{
    AnalysisResult, AnalyzerError, CommandAnalyzer, FeedbackPipeline, FeedbackReport,
    PipelineError, RunSummary, StaticAnalyzer,
};
pub use util::{init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_lintscribe() {
        assert_eq!(NAME, "lintscribe");
    }
}
