use crate::llm::BackendError;
use std::path::PathBuf;
use thiserror::Error;

use super::analyzer::AnalyzerError;

/// First error of a run; it stops the batch
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to list source files in '{}'", .path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),

    #[error("Failed to read source file '{}'", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Feedback generation failed")]
    Generation(#[from] BackendError),

    #[error("Failed to write report '{}'", .path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
