//! Feedback report persistence

use super::PipelineError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const REPORT_SUFFIX: &str = "_feedback.txt";

/// Location of a written report and the file it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackReport {
    pub source: PathBuf,
    pub path: PathBuf,
}

/// `<output_dir>/<source file name>_feedback.txt`, keeping the source extension
pub fn report_path(output_dir: &Path, source: &Path) -> PathBuf {
    let mut name: OsString = source
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(REPORT_SUFFIX);
    output_dir.join(name)
}

/// Writes `feedback` verbatim, replacing any earlier report for `source`
pub async fn write_report(
    feedback: &str,
    source: &Path,
    output_dir: &Path,
) -> Result<FeedbackReport, PipelineError> {
    let path = report_path(output_dir, source);

    tokio::fs::write(&path, feedback)
        .await
        .map_err(|e| PipelineError::WriteReport {
            path: path.clone(),
            source: e,
        })?;

    Ok(FeedbackReport {
        source: source.to_path_buf(),
        path,
    })
}
