use super::commands::CliArgs;
use crate::config::{FeedbackConfig, RuntimeSettings};
use crate::llm::{GenAIClient, LLMClient};
use crate::pipeline::{CommandAnalyzer, FeedbackPipeline, StaticAnalyzer};
use crate::progress::{CompositeHandler, LoggingHandler, ProgressHandler, SpinnerHandler};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Exit code for pre-flight failures and failed runs
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_SUCCESS: i32 = 0;

/// Runs the pipeline with the real linter and model client
pub async fn handle_run(args: &CliArgs, settings: &RuntimeSettings) -> i32 {
    let analyzer: Arc<dyn StaticAnalyzer> = Arc::new(CommandAnalyzer::new(&settings.linter));
    let client: Arc<dyn LLMClient> = Arc::new(GenAIClient::new(
        settings.api_key.clone(),
        settings.api_base_url.clone(),
    ));

    let interactive = atty::is(atty::Stream::Stderr);
    let mut progress = CompositeHandler::new().with(LoggingHandler);
    if interactive && !args.quiet {
        progress = progress.with(SpinnerHandler::new());
    }

    run_with(args, analyzer, client, Arc::new(progress)).await
}

/// Pre-flight validation followed by a pipeline run over injected collaborators
pub async fn run_with(
    args: &CliArgs,
    analyzer: Arc<dyn StaticAnalyzer>,
    client: Arc<dyn LLMClient>,
    progress: Arc<dyn ProgressHandler>,
) -> i32 {
    let config = match FeedbackConfig::load(&args.config_paths()) {
        Ok(config) => config,
        Err(e) => {
            debug!("Pre-flight check failed: {:?}", e);
            eprintln!("Error: {:#}", anyhow::Error::new(e));
            return EXIT_FAILURE;
        }
    };

    info!(
        "Using linter '{}' and backend {} ({})",
        analyzer.name(),
        client.name(),
        client.model_info().unwrap_or_else(|| "default".to_string())
    );

    let pipeline = FeedbackPipeline::new(config, analyzer, client).with_progress(progress);

    match pipeline.run().await {
        Ok(summary) => {
            debug!(
                "Processed {} of {} file(s) in {}ms",
                summary.reports.len(),
                summary.discovered,
                summary.total_time.as_millis()
            );
            EXIT_SUCCESS
        }
        Err(e) => {
            let chain = anyhow::Error::new(e);
            error!("Feedback run failed: {:#}", chain);
            eprintln!("Error: {:#}", chain);
            EXIT_FAILURE
        }
    }
}
