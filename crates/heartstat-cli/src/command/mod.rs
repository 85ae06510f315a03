use clap::Parser;
use tracing_subscriber::EnvFilter;

use self::analyze::AnalyzeArg;

mod analyze;

/// Explore a heart-disease dataset: diagnostics, charts and a moment report
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(flatten)]
    analyze: AnalyzeArg,
    /// Log debug messages to stderr
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);
    analyze::run(&args.analyze)
}

/// Logs go to stderr so that stdout carries only the diagnostics and the report.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("heartstat={level},heartstat_dataset={level}"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_defaults() {
        let args = CommandArgs::try_parse_from(["heartstat"]).unwrap();
        assert!(!args.verbose);
        assert_eq!(args.analyze, AnalyzeArg::default());
    }

    #[test]
    fn test_explicit_arguments() {
        let args = CommandArgs::try_parse_from([
            "heartstat",
            "data/cleveland.csv",
            "--output-dir",
            "out",
            "--column",
            "chol",
            "-v",
        ])
        .unwrap();

        assert!(args.verbose);
        assert_eq!(args.analyze.input, PathBuf::from("data/cleveland.csv"));
        assert_eq!(args.analyze.output_dir, PathBuf::from("out"));
        assert_eq!(args.analyze.column, "chol");
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory as _;
        CommandArgs::command().debug_assert();
    }
}
