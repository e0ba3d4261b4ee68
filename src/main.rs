use lintscribe::cli::{handle_run, CliArgs};
use lintscribe::config::RuntimeSettings;
use lintscribe::util::{init_logging, LoggingConfig};
use lintscribe::{NAME, VERSION};

use clap::Parser;
use std::process;
use tracing::debug;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    let settings = RuntimeSettings::default();

    init_logging(LoggingConfig::for_cli(
        args.log_level.as_deref(),
        args.verbose,
        args.quiet,
        &settings,
    ));

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);
    debug!("Settings: {:?}", settings);

    let exit_code = handle_run(&args, &settings).await;

    process::exit(exit_code);
}
