//! Static analyzer adapter
//!
//! The linter's exit status carries no meaning for the pipeline. Whatever the
//! tool wrote becomes the [`AnalysisResult`], whether it reported violations
//! or crashed. Only a failure to start the process is an error.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Captured output of one linter invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    /// stdout followed by stderr
    pub output: String,
}

impl AnalysisResult {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Failed to launch static analyzer '{program}'")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

#[async_trait]
pub trait StaticAnalyzer: Send + Sync {
    async fn analyze(&self, path: &Path) -> Result<AnalysisResult, AnalyzerError>;

    fn name(&self) -> &str;
}

/// Runs an external program as `<program> <file>`
#[derive(Debug, Clone)]
pub struct CommandAnalyzer {
    program: String,
}

impl CommandAnalyzer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl StaticAnalyzer for CommandAnalyzer {
    async fn analyze(&self, path: &Path) -> Result<AnalysisResult, AnalyzerError> {
        debug!("Running {} on {}", self.program, path.display());

        let output = Command::new(&self.program)
            .arg(path)
            .output()
            .await
            .map_err(|source| AnalyzerError::Launch {
                program: self.program.clone(),
                source,
            })?;

        debug!(
            exit_code = ?output.status.code(),
            stdout_len = output.stdout.len(),
            stderr_len = output.stderr.len(),
            "{} finished",
            self.program
        );

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(AnalysisResult::new(text))
    }

    fn name(&self) -> &str {
        &self.program
    }
}
