use crate::commands::{run_report, run_score, run_template, ReportArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use glowpath::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "glowpath",
    about = "Score GlowPath questionnaires and render student assessment reports",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an assessment input file and print the result as JSON
    Score(ScoreArgs),
    /// Render the Markdown report for an assessment input file
    Report(ReportArgs),
    /// Print a sample assessment input to fill in
    Template,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Report(args) => run_report(args),
        Command::Template => run_template(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn bare_invocation_defaults_to_serve() {
        let cli = Cli::try_parse_from(["glowpath"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn report_accepts_input_and_output_paths() {
        let cli = Cli::try_parse_from([
            "glowpath",
            "report",
            "--input",
            "student.json",
            "--output",
            "report.md",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Report(args)) => {
                assert_eq!(args.input.to_string_lossy(), "student.json");
                assert_eq!(args.output, Some(PathBuf::from("report.md")));
            }
            other => panic!("expected report command, got {other:?}"),
        }
    }

    #[test]
    fn score_requires_input() {
        assert!(Cli::try_parse_from(["glowpath", "score"]).is_err());
    }
}
