use super::analyzer::StaticAnalyzer;
use super::discovery::{discover_source_files, SOURCE_EXTENSION};
use super::generator::FeedbackGenerator;
use super::report::{write_report, FeedbackReport};
use super::PipelineError;
use crate::config::FeedbackConfig;
use crate::llm::LLMClient;
use crate::progress::{NoOpHandler, ProgressEvent, ProgressHandler};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of source files found in the code directory
    pub discovered: usize,
    /// Reports in the order they were written
    pub reports: Vec<FeedbackReport>,
    pub total_time: Duration,
}

/// Drives discovery, linting, generation and report writing for one run
///
/// Files are processed one after another. The first error ends the run;
/// reports written before it stay on disk.
pub struct FeedbackPipeline {
    config: FeedbackConfig,
    analyzer: Arc<dyn StaticAnalyzer>,
    generator: FeedbackGenerator,
    progress: Arc<dyn ProgressHandler>,
}

impl FeedbackPipeline {
    pub fn new(
        config: FeedbackConfig,
        analyzer: Arc<dyn StaticAnalyzer>,
        client: Arc<dyn LLMClient>,
    ) -> Self {
        Self {
            config,
            analyzer,
            generator: FeedbackGenerator::new(client),
            progress: Arc::new(NoOpHandler),
        }
    }

    pub fn with_progress(mut self, handler: Arc<dyn ProgressHandler>) -> Self {
        self.progress = handler;
        self
    }

    pub fn config(&self) -> &FeedbackConfig {
        &self.config
    }

    pub fn generator(&self) -> &FeedbackGenerator {
        &self.generator
    }

    pub async fn run(&self) -> Result<RunSummary, PipelineError> {
        let result = self.run_inner().await;
        if let Err(e) = &result {
            self.progress.on_progress(&ProgressEvent::Failed {
                error: e.to_string(),
            });
        }
        result
    }

    async fn run_inner(&self) -> Result<RunSummary, PipelineError> {
        let start = Instant::now();
        let files = discover_source_files(&self.config.code_dir, SOURCE_EXTENSION)?;
        let total = files.len();

        self.progress.on_progress(&ProgressEvent::Started {
            code_dir: self.config.code_dir.clone(),
            total,
        });

        let mut reports = Vec::with_capacity(total);
        for (index, file) in files.iter().enumerate() {
            self.progress.on_progress(&ProgressEvent::FileStarted {
                path: file.clone(),
                index: index + 1,
                total,
            });

            reports.push(self.process_file(file).await?);
        }

        let total_time = start.elapsed();
        info!(
            "Wrote {} report(s) to {}",
            reports.len(),
            self.config.output_dir.display()
        );
        self.progress.on_progress(&ProgressEvent::Completed {
            files: reports.len(),
            total_time,
        });

        Ok(RunSummary {
            discovered: total,
            reports,
            total_time,
        })
    }

    /// Runs lint, generation and report writing for a single source file
    pub async fn process_file(&self, file: &Path) -> Result<FeedbackReport, PipelineError> {
        let analysis = self.analyzer.analyze(file).await?;
        self.progress.on_progress(&ProgressEvent::LintComplete {
            path: file.to_path_buf(),
            output_len: analysis.output.len(),
        });

        let response = self
            .generator
            .generate(
                &analysis,
                file,
                &self.config.assignment_description,
                &self.config.feedback_instructions,
            )
            .await?;
        self.progress.on_progress(&ProgressEvent::FeedbackReceived {
            path: file.to_path_buf(),
            response_time: response.response_time,
        });

        let report = write_report(&response.content, file, &self.config.output_dir).await?;
        debug!("Report for {} at {}", file.display(), report.path.display());
        self.progress.on_progress(&ProgressEvent::ReportWritten {
            source: report.source.clone(),
            report: report.path.clone(),
        });

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{BackendError, MockLLMClient, MockResponse};
    use crate::pipeline::{AnalysisResult, AnalyzerError};
    use async_trait::async_trait;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    struct StubAnalyzer {
        output: String,
        calls: Mutex<Vec<std::path::PathBuf>>,
    }

    impl StubAnalyzer {
        fn new(output: &str) -> Self {
            Self {
                output: output.to_string(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl StaticAnalyzer for StubAnalyzer {
        async fn analyze(&self, path: &Path) -> Result<AnalysisResult, AnalyzerError> {
            self.calls.lock().unwrap().push(path.to_path_buf());
            Ok(AnalysisResult::new(self.output.clone()))
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    #[derive(Default)]
    struct RecordingHandler {
        events: Mutex<Vec<String>>,
    }

    impl ProgressHandler for RecordingHandler {
        fn on_progress(&self, event: &ProgressEvent) {
            let name = format!("{:?}", event);
            let name = name.split([' ', '{']).next().unwrap_or_default().to_string();
            self.events.lock().unwrap().push(name);
        }
    }

    fn setup(files: &[&str]) -> (TempDir, FeedbackConfig) {
        let dir = TempDir::new().unwrap();
        let code_dir = dir.path().join("code");
        let output_dir = dir.path().join("reports");
        fs::create_dir(&code_dir).unwrap();
        fs::create_dir(&output_dir).unwrap();
        for name in files {
            fs::write(code_dir.join(name), format!("# {}\n", name)).unwrap();
        }

        let config = FeedbackConfig {
            code_dir,
            output_dir,
            assignment_description: "D".to_string(),
            feedback_instructions: "I".to_string(),
        };
        (dir, config)
    }

    #[tokio::test]
    async fn test_run_writes_one_report_per_source_file() {
        let (_dir, config) = setup(&["a.py", "b.py", "notes.txt"]);
        let analyzer = Arc::new(StubAnalyzer::new(""));
        let client = Arc::new(MockLLMClient::always("Looks good."));
        let pipeline = FeedbackPipeline::new(config.clone(), analyzer.clone(), client.clone());

        let summary = pipeline.run().await.unwrap();

        assert_eq!(summary.discovered, 2);
        assert_eq!(summary.reports.len(), 2);
        assert_eq!(analyzer.calls.lock().unwrap().len(), 2);
        assert_eq!(client.requests().len(), 2);
        for name in ["a.py_feedback.txt", "b.py_feedback.txt"] {
            let content = fs::read_to_string(config.output_dir.join(name)).unwrap();
            assert_eq!(content, "Looks good.");
        }
        assert!(!config.output_dir.join("notes.txt_feedback.txt").exists());
    }

    #[tokio::test]
    async fn test_first_error_stops_the_batch() {
        let (_dir, config) = setup(&["a.py", "b.py", "c.py"]);
        let client = Arc::new(MockLLMClient::new());
        client.add_responses(vec![
            MockResponse::text("first"),
            MockResponse::error(BackendError::ApiError {
                message: "service unavailable".to_string(),
                status_code: Some(503),
            }),
            MockResponse::text("never used"),
        ]);
        let pipeline =
            FeedbackPipeline::new(config.clone(), Arc::new(StubAnalyzer::new("")), client.clone());

        let err = pipeline.run().await.unwrap_err();

        assert!(matches!(err, PipelineError::Generation(_)));
        assert_eq!(client.remaining_responses(), 1);
        let written: Vec<_> = fs::read_dir(&config.output_dir).unwrap().collect();
        assert_eq!(written.len(), 1);
    }

    #[tokio::test]
    async fn test_progress_events_in_order() {
        let (_dir, config) = setup(&["a.py"]);
        let handler = Arc::new(RecordingHandler::default());
        let pipeline = FeedbackPipeline::new(
            config,
            Arc::new(StubAnalyzer::new("lint")),
            Arc::new(MockLLMClient::always("ok")),
        )
        .with_progress(handler.clone());

        pipeline.run().await.unwrap();

        let events = handler.events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                "Started",
                "FileStarted",
                "LintComplete",
                "FeedbackReceived",
                "ReportWritten",
                "Completed"
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_emits_failed_event() {
        let (_dir, config) = setup(&["a.py"]);
        let handler = Arc::new(RecordingHandler::default());
        let pipeline = FeedbackPipeline::new(
            config,
            Arc::new(StubAnalyzer::new("")),
            Arc::new(MockLLMClient::new()),
        )
        .with_progress(handler.clone());

        assert!(pipeline.run().await.is_err());

        let events = handler.events.lock().unwrap().clone();
        assert_eq!(events.last().map(String::as_str), Some("Failed"));
    }

    #[tokio::test]
    async fn test_empty_code_dir_completes() {
        let (_dir, config) = setup(&[]);
        let client = Arc::new(MockLLMClient::new());
        let pipeline =
            FeedbackPipeline::new(config.clone(), Arc::new(StubAnalyzer::new("")), client.clone());

        let summary = pipeline.run().await.unwrap();

        assert_eq!(summary.discovered, 0);
        assert!(summary.reports.is_empty());
        assert!(client.requests().is_empty());
        assert_eq!(fs::read_dir(&config.output_dir).unwrap().count(), 0);
    }
}
