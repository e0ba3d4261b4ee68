//! Progress handler trait and events

use std::path::PathBuf;
use std::time::Duration;

/// Events emitted while a batch is processed
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Discovery finished and the batch is about to start
    Started { code_dir: PathBuf, total: usize },

    /// Processing of one source file started
    FileStarted {
        path: PathBuf,
        index: usize,
        total: usize,
    },

    /// The linter finished for the current file
    LintComplete { path: PathBuf, output_len: usize },

    /// The model answered for the current file
    FeedbackReceived {
        path: PathBuf,
        response_time: Duration,
    },

    /// The report for the current file is on disk
    ReportWritten { source: PathBuf, report: PathBuf },

    /// All files were processed
    Completed { files: usize, total_time: Duration },

    /// The batch stopped on an error
    Failed { error: String },
}

/// Trait for handling progress events during a run
pub trait ProgressHandler: Send + Sync {
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_progress(&self, _event: &ProgressEvent) {}
}

/// Forwards every event to each wrapped handler in order
#[derive(Default)]
pub struct CompositeHandler {
    handlers: Vec<Box<dyn ProgressHandler>>,
}

impl CompositeHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, handler: impl ProgressHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl ProgressHandler for CompositeHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        for handler in &self.handlers {
            handler.on_progress(event);
        }
    }
}
