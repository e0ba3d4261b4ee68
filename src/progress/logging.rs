//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, info, warn};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { code_dir, total } => {
                info!(code_dir = %code_dir.display(), files = total, "Starting feedback run");
            }
            ProgressEvent::FileStarted { path, index, total } => {
                info!(
                    file = %path.display(),
                    progress = format!("{}/{}", index, total),
                    "Processing file"
                );
            }
            ProgressEvent::LintComplete { path, output_len } => {
                debug!(file = %path.display(), output_len, "Lint complete");
            }
            ProgressEvent::FeedbackReceived {
                path,
                response_time,
            } => {
                debug!(
                    file = %path.display(),
                    response_time_ms = response_time.as_millis(),
                    "Feedback received"
                );
            }
            ProgressEvent::ReportWritten { source, report } => {
                info!(
                    file = %source.display(),
                    report = %report.display(),
                    "Report written"
                );
            }
            ProgressEvent::Completed { files, total_time } => {
                info!(
                    files,
                    total_time_ms = total_time.as_millis(),
                    "Feedback run complete"
                );
            }
            ProgressEvent::Failed { error } => {
                warn!(error = %error, "Feedback run failed");
            }
        }
    }
}
