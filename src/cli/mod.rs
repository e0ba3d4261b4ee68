pub mod commands;
pub mod handlers;

pub use commands::CliArgs;
pub use handlers::{handle_run, run_with, EXIT_FAILURE, EXIT_SUCCESS};
