use crate::config::{
    ConfigPaths, DEFAULT_ASSIGNMENT_DESCRIPTION, DEFAULT_FEEDBACK_INSTRUCTIONS, DEFAULT_OUTPUT_DIR,
};
use clap::Parser;
use std::path::PathBuf;

/// Give students feedback on their Python assignments
#[derive(Parser, Debug, Clone)]
#[command(
    name = "lintscribe",
    about = "Give students feedback on their Python assignments",
    version,
    long_about = "lintscribe runs a linter over every .py file in a submission directory, \
                  asks a language model for feedback using the assignment description and \
                  the lint results, and writes one <file>_feedback.txt report per submission.\n\n\
                  Examples:\n  \
                  lintscribe --code-dir submissions\n  \
                  lintscribe --code-dir submissions --output-dir out \\\n    \
                  --assignment-description task.txt --feedback-instructions tone.txt"
)]
pub struct CliArgs {
    // Optional at the clap level so a missing value exits through pre-flight with code 1
    #[arg(
        long,
        value_name = "PATH",
        help = "The path to the directory containing the Python files"
    )]
    pub code_dir: Option<PathBuf>,

    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "The path to the directory to write the feedback to"
    )]
    pub output_dir: PathBuf,

    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_ASSIGNMENT_DESCRIPTION,
        help = "The path to the file containing the assignment description"
    )]
    pub assignment_description: PathBuf,

    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_FEEDBACK_INSTRUCTIONS,
        help = "The path to the file containing the feedback instructions"
    )]
    pub feedback_instructions: PathBuf,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output and the spinner"
    )]
    pub quiet: bool,
}

impl CliArgs {
    pub fn config_paths(&self) -> ConfigPaths {
        ConfigPaths {
            code_dir: self.code_dir.clone(),
            output_dir: self.output_dir.clone(),
            assignment_description: self.assignment_description.clone(),
            feedback_instructions: self.feedback_instructions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["lintscribe"]);

        assert!(args.code_dir.is_none());
        assert_eq!(args.output_dir, PathBuf::from("reports"));
        assert_eq!(
            args.assignment_description,
            PathBuf::from("assignment_description.txt")
        );
        assert_eq!(
            args.feedback_instructions,
            PathBuf::from("feedback_instructions.txt")
        );
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(args.log_level.is_none());
    }

    #[test]
    fn test_all_paths() {
        let args = CliArgs::parse_from([
            "lintscribe",
            "--code-dir",
            "submissions",
            "--output-dir",
            "out",
            "--assignment-description",
            "task.txt",
            "--feedback-instructions",
            "tone.txt",
        ]);

        let paths = args.config_paths();
        assert_eq!(paths.code_dir, Some(PathBuf::from("submissions")));
        assert_eq!(paths.output_dir, PathBuf::from("out"));
        assert_eq!(paths.assignment_description, PathBuf::from("task.txt"));
        assert_eq!(paths.feedback_instructions, PathBuf::from("tone.txt"));
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        let result = CliArgs::try_parse_from(["lintscribe", "-v", "-q"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_level_flag() {
        let args = CliArgs::parse_from(["lintscribe", "--log-level", "debug"]);
        assert_eq!(args.log_level, Some("debug".to_string()));
    }
}
