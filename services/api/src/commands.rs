use crate::infra::{load_input, sample_input};
use clap::Args;
use glowpath::assessment::{compute_assessment, ReportGenerator, SystemClock};
use glowpath::config::AppConfig;
use glowpath::error::AppError;
use glowpath::telemetry;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Assessment input JSON ({"student": {...}, "answers": {"1": 4, ...}})
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print single-line JSON instead of pretty output
    #[arg(long)]
    pub(crate) compact: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Assessment input JSON ({"student": {...}, "answers": {"1": 4, ...}})
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Write the Markdown report to this file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let input = load_input(&args.input)?;
    let result = compute_assessment(&input)?;

    let rendered = if args.compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let input = load_input(&args.input)?;
    let result = compute_assessment(&input)?;
    let report = ReportGenerator::with_config(SystemClock, &config.report).render(&result);

    match args.output {
        Some(path) => {
            fs::write(&path, &report)?;
            info!(path = %path.display(), student = %result.student.name, "report written");
        }
        None => print!("{report}"),
    }
    Ok(())
}

pub(crate) fn run_template() -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(&sample_input())?);
    Ok(())
}
