//! Terminal spinner shown while a file is being processed

use super::{ProgressEvent, ProgressHandler};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Shows `Processing file <path>...` next to a spinner for the file in flight
#[derive(Default)]
pub struct SpinnerHandler {
    current: Mutex<Option<ProgressBar>>,
}

impl SpinnerHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self, message: String) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(message);
        bar.enable_steady_tick(TICK_INTERVAL);

        if let Ok(mut current) = self.current.lock() {
            if let Some(previous) = current.replace(bar) {
                previous.finish_and_clear();
            }
        }
    }

    fn finish(&self, abandon: bool) {
        if let Ok(mut current) = self.current.lock() {
            if let Some(bar) = current.take() {
                if abandon {
                    bar.abandon();
                } else {
                    bar.finish_and_clear();
                }
            }
        }
    }

    fn is_spinning(&self) -> bool {
        self.current
            .lock()
            .map(|current| current.is_some())
            .unwrap_or(false)
    }
}

impl ProgressHandler for SpinnerHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::FileStarted { path, .. } => {
                self.start(format!("Processing file {}...", path.display()));
            }
            ProgressEvent::ReportWritten { .. } | ProgressEvent::Completed { .. } => {
                self.finish(false);
            }
            ProgressEvent::Failed { .. } => self.finish(true),
            _ => {}
        }
    }
}
