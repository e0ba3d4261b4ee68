//! Configuration for a feedback run
//!
//! Two layers of configuration exist:
//!
//! - [`FeedbackConfig`]: the paths and texts for one run, built from the
//!   command-line paths by [`FeedbackConfig::load`] (the pre-flight check).
//! - [`RuntimeSettings`]: process-level settings read from environment
//!   variables with defaults.
//!
//! # Environment Variables
//!
//! - `LINTSCRIBE_LINTER`: static-analysis program - default: "pylint"
//! - `LINTSCRIBE_API_BASE_URL`: OpenAI-compatible endpoint - default: provider endpoint
//! - `LINTSCRIBE_LOG_LEVEL`: logging level - default: "info"
//! - `LINTSCRIBE_LOG_JSON`: JSON log output (true|false) - default: "false"
//! - `OPENAI_API_KEY`: model credential, read by the genai adapter convention

use crate::llm::api_key_env_name;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_OUTPUT_DIR: &str = "reports";
pub const DEFAULT_ASSIGNMENT_DESCRIPTION: &str = "assignment_description.txt";
pub const DEFAULT_FEEDBACK_INSTRUCTIONS: &str = "feedback_instructions.txt";
pub const DEFAULT_LINTER: &str = "pylint";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Pre-flight configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("--code-dir is required.")]
    MissingCodeDir,

    #[error("--code-dir '{}' does not exist.", .0.display())]
    CodeDirNotFound(PathBuf),

    #[error("--assignment-description '{}' does not exist.", .0.display())]
    AssignmentDescriptionNotFound(PathBuf),

    #[error("--feedback-instructions '{}' does not exist.", .0.display())]
    FeedbackInstructionsNotFound(PathBuf),

    #[error("Failed to create output directory '{}'", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read '{}'", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Paths as given on the command line, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub code_dir: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub assignment_description: PathBuf,
    pub feedback_instructions: PathBuf,
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self {
            code_dir: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            assignment_description: PathBuf::from(DEFAULT_ASSIGNMENT_DESCRIPTION),
            feedback_instructions: PathBuf::from(DEFAULT_FEEDBACK_INSTRUCTIONS),
        }
    }
}

/// Immutable inputs of one feedback run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackConfig {
    pub code_dir: PathBuf,
    pub output_dir: PathBuf,
    pub assignment_description: String,
    pub feedback_instructions: String,
}

impl FeedbackConfig {
    /// Validates the command-line paths and loads the two text inputs
    ///
    /// Checks run in a fixed order: code directory given, code directory
    /// exists, assignment description exists, feedback instructions exist.
    /// Only after all of them pass is the output directory created, so a
    /// failed pre-flight leaves the filesystem untouched.
    pub fn load(paths: &ConfigPaths) -> Result<Self, ConfigError> {
        let code_dir = paths.code_dir.clone().ok_or(ConfigError::MissingCodeDir)?;

        if !code_dir.exists() {
            return Err(ConfigError::CodeDirNotFound(code_dir));
        }
        if !paths.assignment_description.exists() {
            return Err(ConfigError::AssignmentDescriptionNotFound(
                paths.assignment_description.clone(),
            ));
        }
        if !paths.feedback_instructions.exists() {
            return Err(ConfigError::FeedbackInstructionsNotFound(
                paths.feedback_instructions.clone(),
            ));
        }

        if !paths.output_dir.exists() {
            debug!("Creating output directory: {}", paths.output_dir.display());
            fs::create_dir_all(&paths.output_dir).map_err(|source| {
                ConfigError::CreateOutputDir {
                    path: paths.output_dir.clone(),
                    source,
                }
            })?;
        }

        Ok(Self {
            code_dir,
            output_dir: paths.output_dir.clone(),
            assignment_description: read_text(&paths.assignment_description)?,
            feedback_instructions: read_text(&paths.feedback_instructions)?,
        })
    }
}

fn read_text(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Process-level settings loaded from environment variables
#[derive(Clone, PartialEq, Eq)]
pub struct RuntimeSettings {
    /// Static-analysis program invoked as `<linter> <file>`
    pub linter: String,

    /// Model service credential
    pub api_key: Option<String>,

    /// Override for the model service endpoint
    pub api_base_url: Option<String>,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit logs as JSON
    pub log_json: bool,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        let linter = env::var("LINTSCRIBE_LINTER")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LINTER.to_string());

        let api_key = env::var(api_key_env_name())
            .ok()
            .filter(|v| !v.is_empty());

        let api_base_url = env::var("LINTSCRIBE_API_BASE_URL")
            .ok()
            .filter(|v| !v.is_empty());

        let log_level = env::var("LINTSCRIBE_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let log_json = env::var("LINTSCRIBE_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            linter,
            api_key,
            api_base_url,
            log_level,
            log_json,
        }
    }
}

impl std::fmt::Debug for RuntimeSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeSettings")
            .field("linter", &self.linter)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("api_base_url", &self.api_base_url)
            .field("log_level", &self.log_level)
            .field("log_json", &self.log_json)
            .finish()
    }
}
