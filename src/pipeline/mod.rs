//! Per-file feedback pipeline
//!
//! discover → lint → prompt → model call → persist, one file at a time.

pub mod analyzer;
pub mod discovery;
mod error;
pub mod generator;
pub mod orchestrator;
pub mod prompt;
pub mod report;

pub use analyzer::{AnalysisResult, AnalyzerError, CommandAnalyzer, StaticAnalyzer};
pub use discovery::{discover_source_files, SOURCE_EXTENSION};
pub use error::PipelineError;
pub use generator::FeedbackGenerator;
pub use orchestrator::{FeedbackPipeline, RunSummary};
pub use prompt::build_feedback_request;
pub use report::{report_path, write_report, FeedbackReport};
